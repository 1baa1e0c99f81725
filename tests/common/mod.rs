//! Shared corpus fixtures for integration tests.
#![allow(dead_code)]

use kwhub::corpus::{Corpus, DocumentRecord};

pub fn record(url: &str, name: &str, library: &str) -> DocumentRecord {
    DocumentRecord {
        url: url.to_string(),
        name: name.to_string(),
        library: library.to_string(),
    }
}

/// A small corpus shaped like real generated keyword docs: a couple of
/// libraries plus a path-named resource file.
pub fn sample_corpus() -> Corpus {
    Corpus::from_records([
        record("BuiltIn.html#Log", "Log", "BuiltIn"),
        record("BuiltIn.html#Log%20Many", "Log Many", "BuiltIn"),
        record("BuiltIn.html#Should%20Be%20Equal", "Should Be Equal", "BuiltIn"),
        record("SeleniumLibrary.html#Open%20Browser", "Open Browser", "SeleniumLibrary"),
        record("SeleniumLibrary.html#Close%20Browser", "Close Browser", "SeleniumLibrary"),
        record(
            "resources/pages/login.html#Login%20User",
            "Login User",
            "pages/login.resource",
        ),
    ])
}

/// The two-record corpus from the weighting scenario: one name match, one
/// library-only match for the query "widget".
pub fn widget_corpus() -> Corpus {
    Corpus::from_records([
        record("/a", "Widget", "Core"),
        record("/b", "Gadget", "Widgets"),
    ])
}

/// A corpus where a single broad query matches more documents than the
/// render limit.
pub fn broad_corpus(size: usize) -> Corpus {
    Corpus::from_records(
        (0..size).map(|i| record(&format!("/kw{i}"), &format!("Keyword {i}"), "Big")),
    )
}
