//! Shared domain types for converting checkup records.
//!
//! - [`Grade`] with its two orderings ([`SEVERITY_RANK`], [`BUCKET_ORDER`])
//! - [`ConvertError`] and the [`Converted`] outcome type
//! - [`IssueSink`] for routing per-field problems
//! - [`SourceRecord`] and the named [`fields`] catalogue
//! - [`Profile`], the destination organization's literals

pub mod error;
pub mod fields;
pub mod grade;
pub mod issue;
pub mod outcome;
pub mod profile;
pub mod record;

pub use error::{ConvertError, ErrorKind, ProfileError};
pub use grade::{BUCKET_ORDER, Grade, SEVERITY_RANK};
pub use issue::{IssueCollector, IssueSink, RecordIssue};
pub use outcome::Converted;
pub use profile::Profile;
pub use record::{Field, SOURCE_WIDTH, SourceRecord};
