mod common;

use assert2::check;
use common::{broad_corpus, sample_corpus, widget_corpus};
use kwhub::corpus::DocId;
use kwhub::render::{RenderedResults, render_results};
use kwhub::search::{SearchConfig, SearchIndex, search};

// --- Ranking and weighting ---

/// Test: a query equal to a record's name ranks it ahead of records that
/// only match on their library field.
#[test]
fn name_match_ranks_ahead_of_library_match() {
    let corpus = widget_corpus();
    let index = SearchIndex::build(&corpus, SearchConfig::default());

    let hits = search(&index, "widget");
    check!(hits.len() == 2, "both records should match: {:?}", hits);
    check!(hits[0].doc == DocId(0), "name match should rank first");
    check!(hits[1].doc == DocId(1));
}

/// Test: an exact full-name query ranks the record at the top across a
/// realistic corpus.
#[test]
fn exact_name_query_ranks_record_first() {
    let corpus = sample_corpus();
    let index = SearchIndex::build(&corpus, SearchConfig::default());

    let hits = search(&index, "open browser");
    check!(!hits.is_empty());
    check!(corpus.get(hits[0].doc).unwrap().name == "Open Browser");
}

/// Test: library tokens still match, just with lower weight.
#[test]
fn library_only_match_is_found() {
    let corpus = sample_corpus();
    let index = SearchIndex::build(&corpus, SearchConfig::default());

    let hits = search(&index, "seleniumlibrary");
    check!(hits.len() == 2);
}

// --- Determinism ---

/// Test: identical (corpus, query) pairs yield identical ordered output.
#[test]
fn search_is_deterministic() {
    let corpus = sample_corpus();
    let index = SearchIndex::build(&corpus, SearchConfig::default());

    for query in ["log", "browser", "should be equal", "zz"] {
        check!(search(&index, query) == search(&index, query));
    }
}

/// Test: rebuilding the index from the same corpus and re-running the same
/// query sequence yields the same rendered output.
#[test]
fn rebuild_and_replay_is_idempotent() {
    let config = SearchConfig::default();
    let queries = ["log", "login", "browser", "zzzzz"];

    let corpus_a = sample_corpus();
    let index_a = SearchIndex::build(&corpus_a, config);
    let corpus_b = sample_corpus();
    let index_b = SearchIndex::build(&corpus_b, config);

    for query in queries {
        let rendered_a = render_results(&corpus_a, &search(&index_a, query), &config);
        let rendered_b = render_results(&corpus_b, &search(&index_b, query), &config);
        check!(rendered_a == rendered_b, "query {:?} diverged", query);
    }
}

// --- Truncation and the empty case ---

/// Test: a broad query over >100 matching documents renders exactly 100
/// entries, preserving rank order.
#[test]
fn broad_query_truncates_to_limit() {
    let config = SearchConfig::default();
    let corpus = broad_corpus(150);
    let index = SearchIndex::build(&corpus, config);

    let hits = search(&index, "keyword");
    check!(hits.len() == 150);

    let rendered = render_results(&corpus, &hits, &config);
    check!(rendered.len() == 100);

    let RenderedResults::Hits(entries) = rendered else {
        panic!("expected hits");
    };
    check!(entries.first().unwrap().url == "/kw0");
    check!(entries.last().unwrap().url == "/kw99");
}

/// Test: the rendered list never exceeds the hit count.
#[test]
fn render_length_is_bounded_by_hits() {
    let config = SearchConfig::default();
    let corpus = sample_corpus();
    let index = SearchIndex::build(&corpus, config);

    let hits = search(&index, "log");
    let rendered = render_results(&corpus, &hits, &config);
    check!(rendered.len() <= hits.len().min(config.max_results));
}

/// Test: a query matching nothing renders the explicit placeholder.
#[test]
fn unmatched_query_renders_placeholder() {
    let config = SearchConfig::default();
    let corpus = sample_corpus();
    let index = SearchIndex::build(&corpus, config);

    let rendered = render_results(&corpus, &search(&index, "zzzzz"), &config);
    check!(rendered == RenderedResults::NoResults);
}

/// Test: an empty corpus yields a valid index where every query misses.
#[test]
fn empty_corpus_always_misses() {
    let corpus = kwhub::corpus::Corpus::default();
    let index = SearchIndex::build(&corpus, SearchConfig::default());

    check!(search(&index, "anything").is_empty());
    check!(search(&index, "log").is_empty());
}
