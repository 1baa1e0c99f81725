//! Query execution: normalization, token matching, and ranking.

use ahash::AHashMap;

use crate::corpus::DocId;

use super::index::SearchIndex;
use super::scoring::rank_order;
use super::tokenize::{normalize_query, tokenize};

/// One ranked query hit. The score has no absolute meaning; it exists only
/// to order hits within a single result list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub doc: DocId,
    pub score: f32,
}

/// Runs a free-text query against the index and returns hits ranked by
/// descending relevance, ties broken by corpus insertion order.
///
/// The query is tokenized with the same rule as indexed text; a document
/// scores when any query token matches any of its indexed tokens exactly or
/// as a prefix, with prefix expansions discounted by the configured factor.
/// No input is malformed: a punctuation-only query simply matches nothing.
///
/// Callers enforce the minimum-length gate before invoking this; the engine
/// itself answers any query it is given.
pub fn search(index: &SearchIndex, raw_query: &str) -> Vec<Hit> {
    let query = normalize_query(raw_query);
    let tokens = tokenize(&query);
    if tokens.is_empty() {
        return vec![];
    }

    let prefix_factor = index.config().prefix_factor;
    let mut combined: AHashMap<DocId, f32> = AHashMap::new();

    for token in &tokens {
        if let Some(postings) = index.exact(token) {
            for &(doc, weight) in postings {
                *combined.entry(doc).or_insert(0.0) += weight;
            }
        }
        for postings in index.prefix(token) {
            for &(doc, weight) in postings {
                *combined.entry(doc).or_insert(0.0) += weight * prefix_factor;
            }
        }
    }

    let mut ranked: Vec<(DocId, f32)> = combined.into_iter().collect();
    ranked.sort_by(rank_order);

    tracing::debug!("Query {:?}: {} hits", query, ranked.len());

    ranked
        .into_iter()
        .map(|(doc, score)| Hit { doc, score })
        .collect()
}
