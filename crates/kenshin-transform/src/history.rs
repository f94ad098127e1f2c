//! Medical history: treatment and history flags, disease name lists and
//! the specific-checkup history text.

use crate::text::{join, join_all};

/// One medical-history entry as read from the source record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HistoryEntry<'a> {
    pub disease: &'a str,
    pub age: &'a str,
    pub outcome: &'a str,
}

/// Outcomes meaning the condition is still being treated.
pub const UNDER_TREATMENT: [&str; 2] = ["内服治療中", "管理中"];

impl HistoryEntry<'_> {
    pub fn is_under_treatment(&self) -> bool {
        UNDER_TREATMENT.contains(&self.outcome)
    }

    fn is_recorded(&self) -> bool {
        !self.disease.is_empty()
    }

    /// `<disease> <age>才 <outcome>`, skipping missing parts.
    pub fn describe(&self) -> String {
        if !self.is_recorded() {
            return String::new();
        }
        let age = if self.age.is_empty() {
            String::new()
        } else {
            format!("{}才", self.age)
        };
        join_all([self.disease, age.as_str(), self.outcome])
    }
}

/// Diseases split into those under treatment and past history.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistorySummary {
    pub treatment: String,
    pub history: String,
}

impl HistorySummary {
    pub fn treatment_flag(&self) -> &'static str {
        if self.treatment.is_empty() { "" } else { "1" }
    }

    pub fn history_flag(&self) -> &'static str {
        if self.history.is_empty() { "" } else { "1" }
    }
}

pub fn summarize(entries: &[HistoryEntry<'_>]) -> HistorySummary {
    let mut summary = HistorySummary::default();
    for entry in entries.iter().filter(|entry| entry.is_recorded()) {
        let names = if entry.is_under_treatment() {
            &mut summary.treatment
        } else {
            &mut summary.history
        };
        *names = join(names, entry.disease);
    }
    summary
}

/// Every recorded entry described and space-joined.
pub fn history_text(entries: &[HistoryEntry<'_>]) -> String {
    join_all(entries.iter().map(HistoryEntry::describe))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry<'a>(disease: &'a str, age: &'a str, outcome: &'a str) -> HistoryEntry<'a> {
        HistoryEntry {
            disease,
            age,
            outcome,
        }
    }

    #[test]
    fn diseases_split_by_outcome() {
        let entries = [
            entry("高血圧", "45", "内服治療中"),
            entry("", "", "管理中"),
            entry("胃潰瘍", "30", "治癒"),
            entry("糖尿病", "", "管理中"),
        ];
        let summary = summarize(&entries);
        assert_eq!(summary.treatment, "高血圧 糖尿病");
        assert_eq!(summary.history, "胃潰瘍");
        assert_eq!(summary.treatment_flag(), "1");
        assert_eq!(summary.history_flag(), "1");
    }

    #[test]
    fn empty_history_has_no_flags() {
        let summary = summarize(&[HistoryEntry::default(); 3]);
        assert_eq!(summary.treatment_flag(), "");
        assert_eq!(summary.history_flag(), "");
    }

    #[test]
    fn description_skips_missing_parts() {
        assert_eq!(entry("高血圧", "45", "内服治療中").describe(), "高血圧 45才 内服治療中");
        assert_eq!(entry("胃潰瘍", "", "治癒").describe(), "胃潰瘍 治癒");
        assert_eq!(entry("", "45", "治癒").describe(), "");
        assert_eq!(
            history_text(&[entry("A", "1", ""), entry("", "", ""), entry("B", "", "")]),
            "A 1才 B"
        );
    }
}
