use crate::error::ConvertError;
use crate::fields;

/// Number of meaningful positions in a source record.
pub const SOURCE_WIDTH: usize = 488;

/// A named position in the source record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    pub index: usize,
    /// Clinical name of the column, used in error messages.
    pub label: &'static str,
}

impl Field {
    pub const fn new(index: usize, label: &'static str) -> Self {
        Self { index, label }
    }
}

/// One decoded source row.
///
/// Rows shorter than [`SOURCE_WIDTH`] are padded with empty fields so every
/// named [`Field`] resolves; [`SourceRecord::shortfall`] reports the
/// padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRecord {
    fields: Vec<String>,
    original_len: usize,
}

impl SourceRecord {
    pub fn new(mut fields: Vec<String>) -> Self {
        let original_len = fields.len();
        if fields.len() < SOURCE_WIDTH {
            fields.resize(SOURCE_WIDTH, String::new());
        }
        Self {
            fields,
            original_len,
        }
    }

    pub fn get(&self, field: Field) -> &str {
        self.at(field.index)
    }

    pub fn at(&self, index: usize) -> &str {
        self.fields.get(index).map_or("", String::as_str)
    }

    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// A [`ConvertError::ShortRecord`] when the row had to be padded.
    pub fn shortfall(&self) -> Option<ConvertError> {
        (self.original_len < SOURCE_WIDTH).then_some(ConvertError::ShortRecord {
            found: self.original_len,
            expected: SOURCE_WIDTH,
        })
    }

    /// `"<receipt number> <name>"`, used to tag issues for manual triage.
    pub fn identifier(&self) -> String {
        format!(
            "{} {}",
            self.get(fields::RECEIPT_NUMBER),
            self.get(fields::NAME_KANJI)
        )
    }
}

impl FromIterator<String> for SourceRecord {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rows_are_padded_and_flagged() {
        let record = SourceRecord::new(vec!["04019001".to_string(); 10]);
        assert_eq!(record.original_len(), 10);
        assert_eq!(record.at(400), "");
        assert_eq!(
            record.shortfall(),
            Some(ConvertError::ShortRecord {
                found: 10,
                expected: SOURCE_WIDTH
            })
        );
    }

    #[test]
    fn full_rows_keep_extra_fields() {
        let record: SourceRecord = (0..SOURCE_WIDTH + 2).map(|i| i.to_string()).collect();
        assert!(record.shortfall().is_none());
        assert_eq!(record.at(SOURCE_WIDTH + 1), (SOURCE_WIDTH + 1).to_string());
        assert_eq!(record.identifier(), "20 7");
    }
}
