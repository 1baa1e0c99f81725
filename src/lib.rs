pub mod cli;
pub mod controller;
pub mod corpus;
pub mod error;
pub mod nav;
pub mod render;
pub mod search;
pub mod trace;

pub use controller::{SearchController, View, ViewState};
pub use corpus::{Corpus, DocId, DocumentRecord};
pub use nav::NavTree;
pub use render::{RenderedResults, ResultEntry, render_results};
pub use search::{Hit, SearchConfig, SearchIndex, search};
