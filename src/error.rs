//! Error handling types and utilities.

use std::path::PathBuf;

/// A specialized Result type for kwhub operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` methods throughout the codebase.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when loading the document corpus fails.
///
/// Either variant is fatal for the search subsystem: without a corpus there
/// is nothing to index. Individual malformed records are not errors; they
/// are skipped during load.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    /// Corpus file not found or unreadable at the expected path.
    #[error("corpus not found at {path}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The corpus file exists but is not a valid JSON record array.
    #[error("failed to parse corpus at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
