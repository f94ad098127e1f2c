use kenshin_model::{Field, Profile, SourceRecord, fields};

/// Everything a column rule may read while one row is being built.
#[derive(Debug, Clone, Copy)]
pub struct RowContext<'a> {
    pub record: &'a SourceRecord,
    pub profile: &'a Profile,
    /// Run date, already formatted.
    pub run_date: &'a str,
    /// Patient age, when the source value is a whole number.
    pub age: Option<u32>,
}

impl<'a> RowContext<'a> {
    pub fn get(&self, field: Field) -> &'a str {
        self.record.get(field)
    }

    pub fn get_all<const N: usize>(&self, fields: [Field; N]) -> [&'a str; N] {
        fields.map(|field| self.record.get(field))
    }

    /// Whether the record belongs to the organization exempt from the
    /// office, insurance and personal-ID checks.
    pub fn is_exempt(&self) -> bool {
        self.profile.is_exempt(self.get(fields::ORGANIZATION_CODE))
    }
}
