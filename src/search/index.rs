//! Field-weighted inverted index over the document corpus.

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::corpus::{Corpus, DocId};

use super::scoring::SearchConfig;
use super::tokenize::tokenize;

/// A searchable inverted index: token → postings.
///
/// Built synchronously once, before any query is accepted, and read-only
/// afterwards. It is a pure function of the corpus and config: rebuilding
/// from the same inputs yields equivalent query results. The `BTreeMap`
/// keeps tokens ordered so prefix matching is a bounded range scan.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    /// Map from token to (document id, accumulated field weight) pairs,
    /// sorted by document id ascending.
    postings: BTreeMap<String, Vec<(DocId, f32)>>,
    doc_count: usize,
    config: SearchConfig,
}

impl SearchIndex {
    /// Builds the index from the full corpus.
    ///
    /// Tokens from `name` carry `config.name_weight`, tokens from `library`
    /// carry `config.library_weight`; a token appearing in both fields of
    /// one record accumulates both. An empty corpus produces a valid index
    /// on which every query yields zero results.
    pub fn build(corpus: &Corpus, config: SearchConfig) -> Self {
        let start = std::time::Instant::now();

        let mut builder = PostingsBuilder::default();
        for (id, record) in corpus.iter() {
            builder.add_terms(&record.name, id, config.name_weight);
            builder.add_terms(&record.library, id, config.library_weight);
        }
        let postings = builder.finalize();

        let index = Self {
            postings,
            doc_count: corpus.len(),
            config,
        };

        tracing::info!(
            "Built search index: {} unique tokens, {} documents in {:?}",
            index.token_count(),
            index.document_count(),
            start.elapsed()
        );

        index
    }

    /// Postings for an exact token, if indexed.
    pub(crate) fn exact(&self, token: &str) -> Option<&[(DocId, f32)]> {
        self.postings.get(token).map(Vec::as_slice)
    }

    /// Postings for every indexed token that strictly extends `token`.
    ///
    /// Exact matches are excluded so the caller can weight the two cases
    /// differently.
    pub(crate) fn prefix<'a>(
        &'a self,
        token: &'a str,
    ) -> impl Iterator<Item = &'a [(DocId, f32)]> + 'a {
        self.postings
            .range(token.to_string()..)
            .take_while(move |(term, _)| term.starts_with(token))
            .filter(move |(term, _)| term.as_str() != token)
            .map(|(_, postings)| postings.as_slice())
    }

    pub(crate) fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of unique tokens in the index.
    pub fn token_count(&self) -> usize {
        self.postings.len()
    }

    /// Number of documents the index was built from.
    pub fn document_count(&self) -> usize {
        self.doc_count
    }
}

/// Accumulates per-(token, document) weights before the postings are frozen.
#[derive(Default)]
struct PostingsBuilder {
    weights: AHashMap<(String, DocId), f32>,
}

impl PostingsBuilder {
    /// Tokenizes one field and adds `weight` per occurrence, so a token
    /// repeated within a field counts once per occurrence.
    fn add_terms(&mut self, text: &str, id: DocId, weight: f32) {
        for token in tokenize(text) {
            *self.weights.entry((token, id)).or_insert(0.0) += weight;
        }
    }

    /// Groups accumulated weights into per-token posting lists sorted by
    /// document id.
    fn finalize(self) -> BTreeMap<String, Vec<(DocId, f32)>> {
        let mut postings: BTreeMap<String, Vec<(DocId, f32)>> = BTreeMap::new();
        for ((token, id), weight) in self.weights {
            postings.entry(token).or_default().push((id, weight));
        }
        for list in postings.values_mut() {
            list.sort_by_key(|(id, _)| *id);
        }
        postings
    }
}
