//! Error types for xmltract.
//!
//! All extraction-time errors are source-local: each carries the name of the
//! input source it belongs to, so the driver can decide whether a single
//! failure aborts the whole batch or is logged and skipped.

use thiserror::Error;

/// Main error type for the xmltract library.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Unknown input encoding label.
    #[error("Unknown encoding label: '{0}'. Expected a WHATWG label (e.g., UTF-8, ISO-8859-1)")]
    InvalidEncoding(String),

    /// An input source could not be opened or read.
    #[error("Cannot read '{source_name}': {source}")]
    Source {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// The pull parser reported malformed input mid-stream.
    #[error("XML parsing failed in '{source_name}' at byte {position}: {source}")]
    StreamParse {
        source_name: String,
        position: u64,
        #[source]
        source: quick_xml::Error,
    },

    /// Tree construction failed on malformed input.
    #[error("XML parsing failed in '{source_name}': {source}")]
    TreeParse {
        source_name: String,
        #[source]
        source: roxmltree::Error,
    },

    /// Writing to the output sink failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Summary failure after processing a batch with `--keep-going`.
    #[error("{failed} of {total} input(s) failed")]
    SourcesFailed { failed: usize, total: usize },
}

/// Result type alias for xmltract operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
