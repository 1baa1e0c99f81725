//! Turns ranked hits into the bounded display list shown to the user.

use std::fmt::Write;

use crate::corpus::Corpus;
use crate::search::{Hit, SearchConfig};

/// Name of the secondary frame that result links open in, so activating a
/// result never replaces the search page itself.
pub const DOC_FRAME: &str = "doc-frame";

/// One displayable result, resolved back to its corpus record.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    pub name: String,
    pub library: String,
    pub url: String,
    pub score: f32,
}

/// The rendered result list: either ranked entries or an explicit
/// "no results" placeholder. The placeholder is a UI state, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedResults {
    Hits(Vec<ResultEntry>),
    NoResults,
}

impl RenderedResults {
    /// Number of real result entries (zero for the placeholder).
    pub fn len(&self) -> usize {
        match self {
            Self::Hits(entries) => entries.len(),
            Self::NoResults => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Emits the list as `<li>` items for the results container.
    ///
    /// Entry text is escaped; links target the named secondary frame. The
    /// empty case emits a single placeholder item rather than nothing.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        match self {
            Self::NoResults => {
                html.push_str("<li class=\"no-results\">No results found</li>\n");
            }
            Self::Hits(entries) => {
                for entry in entries {
                    // write! to a String cannot fail
                    let _ = writeln!(
                        html,
                        "<li><a href=\"{}\" target=\"{}\">{}</a> <span class=\"library\">{}</span></li>",
                        escape_html(&entry.url),
                        DOC_FRAME,
                        escape_html(&entry.name),
                        escape_html(&entry.library),
                    );
                }
            }
        }
        html
    }
}

/// Resolves ranked hits against the corpus, truncated to
/// `config.max_results` entries with rank order preserved.
///
/// A hit whose id has no corpus record indicates an index/corpus desync;
/// that entry is dropped with a warning rather than failing the render.
pub fn render_results(corpus: &Corpus, hits: &[Hit], config: &SearchConfig) -> RenderedResults {
    let entries: Vec<ResultEntry> = hits
        .iter()
        .take(config.max_results)
        .filter_map(|hit| {
            let Some(record) = corpus.get(hit.doc) else {
                tracing::warn!("Dropping unresolvable result {:?}", hit.doc);
                return None;
            };
            Some(ResultEntry {
                name: record.name.clone(),
                library: record.library.clone(),
                url: record.url.clone(),
                score: hit.score,
            })
        })
        .collect();

    if entries.is_empty() {
        RenderedResults::NoResults
    } else {
        RenderedResults::Hits(entries)
    }
}

/// Escapes text for safe interpolation into HTML element bodies and
/// double-quoted attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
