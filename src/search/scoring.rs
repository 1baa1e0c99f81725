//! Relevance weighting and ranking policy.
//!
//! The weights and limits here are UX policy inherited from the hub page,
//! not properties of the index; they are grouped into [`SearchConfig`] so a
//! host can tune them without touching the engine.

use crate::corpus::DocId;

/// Weight of a token match in the `name` field.
///
/// Users search primarily by keyword name; the library label only
/// disambiguates, hence the 10× gap.
pub const DEFAULT_NAME_WEIGHT: f32 = 10.0;

/// Weight of a token match in the `library` field.
pub const DEFAULT_LIBRARY_WEIGHT: f32 = 1.0;

/// Score multiplier for prefix (as opposed to exact) token matches, so an
/// exact hit always outranks a prefix expansion of the same term.
pub const DEFAULT_PREFIX_FACTOR: f32 = 0.5;

/// Maximum number of rendered results, bounding render cost regardless of
/// corpus size or query breadth.
pub const DEFAULT_MAX_RESULTS: usize = 100;

/// Queries shorter than this never reach the engine; the controller shows
/// the navigation view instead.
pub const DEFAULT_MIN_QUERY_LEN: usize = 2;

/// Search policy knobs.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub name_weight: f32,
    pub library_weight: f32,
    pub prefix_factor: f32,
    pub max_results: usize,
    pub min_query_len: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            name_weight: DEFAULT_NAME_WEIGHT,
            library_weight: DEFAULT_LIBRARY_WEIGHT,
            prefix_factor: DEFAULT_PREFIX_FACTOR,
            max_results: DEFAULT_MAX_RESULTS,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
        }
    }
}

/// Orders ranked hits: descending score, then ascending document id.
///
/// The id tie-break pins equal-score documents to corpus insertion order,
/// which makes every query fully deterministic.
pub(crate) fn rank_order(a: &(DocId, f32), b: &(DocId, f32)) -> std::cmp::Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}
