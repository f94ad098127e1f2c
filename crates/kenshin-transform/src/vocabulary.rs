//! Closed vocabularies mapping source tokens to destination codes.

use kenshin_model::{ConvertError, Converted};

/// What a vocabulary emits when a token is not in its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Echo the raw token.
    Raw,
    /// Emit an empty value.
    Empty,
}

/// One destination code and every source spelling that maps to it.
#[derive(Debug, Clone, Copy)]
pub struct Term {
    pub code: &'static str,
    pub tokens: &'static [&'static str],
}

/// A closed token-to-code table for one clinical field category.
///
/// The empty token is always accepted and maps to the empty code.
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    pub name: &'static str,
    pub terms: &'static [Term],
    pub fallback: Fallback,
}

impl Vocabulary {
    pub fn lookup(&self, token: &str) -> Option<&'static str> {
        if token.is_empty() {
            return Some("");
        }
        self.terms
            .iter()
            .find(|term| term.tokens.contains(&token))
            .map(|term| term.code)
    }

    /// Convert `raw`, reporting unknown tokens against `field`.
    pub fn convert(&self, field: &'static str, raw: &str) -> Converted<String> {
        match self.lookup(raw) {
            Some(code) => Converted::ok(code.to_string()),
            None => {
                let fallback = match self.fallback {
                    Fallback::Raw => raw.to_string(),
                    Fallback::Empty => String::new(),
                };
                Converted::with_issue(fallback, ConvertError::unrecognized(field, raw))
            }
        }
    }
}
