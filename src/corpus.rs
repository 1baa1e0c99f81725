//! The document corpus: an ordered, immutable set of documentation entries.

use crate::error::CorpusError;
use serde::Deserialize;
use std::path::Path;

/// Identifier of a corpus record: its insertion index.
///
/// Ids are dense and stable for the lifetime of the session, so posting
/// lists and tie-breaks can rely on them reflecting corpus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocId(pub usize);

/// A single documentation entry as emitted by the doc generator.
///
/// `url` is opaque to the search layer; `name` and `library` are the
/// searchable fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DocumentRecord {
    pub url: String,
    pub name: String,
    pub library: String,
}

impl DocumentRecord {
    /// A record with a missing or blank field can neither be indexed nor
    /// rendered usefully, so it is rejected at load time.
    fn is_valid(&self) -> bool {
        !self.url.trim().is_empty()
            && !self.name.trim().is_empty()
            && !self.library.trim().is_empty()
    }
}

/// Raw JSON shape, with every field optional so one malformed entry does
/// not fail the whole file.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    library: Option<String>,
}

/// The complete, static set of documentation entries available to search.
///
/// Built once at startup and never mutated afterwards; every other
/// component holds it behind a shared reference.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    records: Vec<DocumentRecord>,
}

impl Corpus {
    /// Build a corpus from already-materialized records, skipping any
    /// with missing fields.
    pub fn from_records(records: impl IntoIterator<Item = DocumentRecord>) -> Self {
        let records = records
            .into_iter()
            .filter(|record| {
                if record.is_valid() {
                    true
                } else {
                    tracing::warn!("Skipping malformed corpus record: {:?}", record);
                    false
                }
            })
            .collect();
        Self { records }
    }

    /// Load the corpus from a JSON array of `{url, name, library}` objects,
    /// the shape the doc generator embeds in its index page.
    ///
    /// A missing or unparseable file is a hard startup failure; individual
    /// malformed entries are skipped with a warning instead.
    pub fn load(path: &Path) -> Result<Self, CorpusError> {
        let text = std::fs::read_to_string(path).map_err(|source| CorpusError::NotFound {
            path: path.to_path_buf(),
            source,
        })?;

        let raw: Vec<RawRecord> =
            serde_json::from_str(&text).map_err(|source| CorpusError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let total = raw.len();
        let corpus = Self::from_records(raw.into_iter().filter_map(|entry| {
            match (entry.url, entry.name, entry.library) {
                (Some(url), Some(name), Some(library)) => {
                    Some(DocumentRecord { url, name, library })
                }
                incomplete => {
                    tracing::warn!("Skipping corpus entry with missing fields: {:?}", incomplete);
                    None
                }
            }
        }));

        tracing::info!(
            "Loaded corpus from {}: {} records ({} skipped)",
            path.display(),
            corpus.len(),
            total - corpus.len()
        );

        Ok(corpus)
    }

    /// Resolve an identifier back to its record.
    pub fn get(&self, id: DocId) -> Option<&DocumentRecord> {
        self.records.get(id.0)
    }

    /// Iterate records in corpus order with their identifiers.
    pub fn iter(&self) -> impl Iterator<Item = (DocId, &DocumentRecord)> {
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| (DocId(i), record))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
