//! Destination record layout.
//!
//! [`COLUMNS`] declares every output column once, with its header title
//! and the [`Rule`] that fills it; [`RowBuilder`] walks that list for each
//! source record and routes per-field problems to an
//! [`IssueSink`](kenshin_model::IssueSink).

pub mod builder;
pub mod column;
pub mod columns;
pub mod context;
pub mod derive;

pub use builder::{RowBuilder, build_row, header};
pub use column::{Check, Column, Rule, Setting};
pub use columns::{COLUMN_COUNT, COLUMNS};
pub use context::RowContext;
