//! Keyword search over the document corpus.
//!
//! Tokenization, field-weighted inverted indexing, and ranked query
//! execution. The index is built once from the static corpus and is
//! read-only for the rest of the session.

// Module declarations
pub(crate) mod index;
pub(crate) mod query;
pub(crate) mod scoring;
pub(crate) mod tokenize;

// Public re-exports (used via lib.rs)
pub use index::SearchIndex;
pub use query::{Hit, search};
pub use scoring::{
    DEFAULT_LIBRARY_WEIGHT, DEFAULT_MAX_RESULTS, DEFAULT_MIN_QUERY_LEN, DEFAULT_NAME_WEIGHT,
    DEFAULT_PREFIX_FACTOR, SearchConfig,
};

// Internal re-exports
pub(crate) use tokenize::normalize_query;
