//! The input controller: a two-state machine driving search from keystrokes.
//!
//! Every value change on the search field is fed through [`SearchController::on_input`].
//! Queries below the minimum length never reach the engine; everything else
//! re-runs the full query against the static index. There is no debouncing
//! and no incremental diffing: each qualifying keystroke is an independent,
//! idempotent query.

use crate::corpus::Corpus;
use crate::render::{RenderedResults, render_results};
use crate::search::{SearchConfig, SearchIndex, normalize_query, search};

/// Which of the two mutually exclusive containers is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Default navigation tree is showing.
    Idle,
    /// Search results are showing.
    Searching,
}

/// What the host page should display after an input event.
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    /// Show the navigation container, hide results.
    Navigation,
    /// Show the results container with this list, hide navigation.
    Results(RenderedResults),
}

/// Owns the corpus, its index, and the search policy for one session.
///
/// The corpus and index are built once at construction and are read-only
/// afterwards; the controller's only mutable state is which view is up.
#[derive(Debug)]
pub struct SearchController {
    corpus: Corpus,
    index: SearchIndex,
    config: SearchConfig,
    state: ViewState,
}

impl SearchController {
    /// Builds the index synchronously; no query is accepted before this
    /// returns. Initial state is `Idle`.
    pub fn new(corpus: Corpus, config: SearchConfig) -> Self {
        let index = SearchIndex::build(&corpus, config);
        Self {
            corpus,
            index,
            config,
            state: ViewState::Idle,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Handles one value change of the search field.
    ///
    /// A normalized query shorter than `min_query_len` short-circuits to
    /// the navigation view without invoking the engine; anything else runs
    /// the full query-and-render path.
    pub fn on_input(&mut self, raw: &str) -> View {
        if normalize_query(raw).chars().count() < self.config.min_query_len {
            self.state = ViewState::Idle;
            return View::Navigation;
        }

        self.state = ViewState::Searching;
        let hits = search(&self.index, raw);
        View::Results(render_results(&self.corpus, &hits, &self.config))
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}
