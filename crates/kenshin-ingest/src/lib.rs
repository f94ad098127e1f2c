//! File I/O for checkup conversion.
//!
//! # Features
//!
//! - **Source Reading**: Shift_JIS, tab-delimited, title row discarded
//! - **Destination Writing**: Shift_JIS, comma-delimited, CRLF line endings
//! - **Issue Log**: append-only, timestamped, one line per field problem

mod error;
mod issue_log;
mod reader;
mod writer;

// === Error Types ===
pub use error::{IngestError, Result};

// === Source Reading ===
pub use reader::{SourceFile, parse_source, read_source};

// === Destination Writing ===
pub use writer::{DestinationWriter, encode_shift_jis};

// === Issue Log ===
pub use issue_log::{Clock, IssueLog};
