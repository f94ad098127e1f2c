//! Field-level conversions for checkup records.
//!
//! Every converter is a pure function from source text to destination text.
//! Converters that can fail return a [`Converted`](kenshin_model::Converted):
//! a usable fallback value plus the problem that forced it. Only the
//! overall-comment aggregation ([`aggregate`]) discards its partial work on
//! failure.

pub mod aggregate;
pub mod clinical;
pub mod course;
pub mod date;
pub mod history;
pub mod judgement;
pub mod numeric;
pub mod severity;
pub mod tables;
pub mod text;
pub mod vocabulary;
pub mod width;

pub use aggregate::{OVERALL_COMMENT_LIMIT, aggregate_comments, overall_comment};
pub use course::{Destination, classify, convert_course};
pub use judgement::{Judgement, judgement, worse_judgement};
pub use severity::{Measurement, authoritative_measurement, pick_worse};
pub use text::{join, join_all, legacy_byte_cost, limit_legacy_bytes};
pub use vocabulary::{Fallback, Vocabulary};
