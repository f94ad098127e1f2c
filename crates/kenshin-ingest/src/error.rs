//! Error types for reading and writing checkup files.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a conversion run.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or open a file for writing.
    #[error("failed to create file {path}: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Decoding and Parsing Errors ===
    /// Bytes that are not valid Shift_JIS.
    #[error("{path} is not valid Shift_JIS")]
    Decode { path: PathBuf },

    /// Failed to parse a delimited row.
    #[error("failed to parse {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to serialize a delimited row.
    #[error("failed to write row to {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
