use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "kwhub")]
#[command(about = "Search and browse statically generated keyword documentation", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one ranked query against the corpus.
    Search {
        /// Path to the corpus JSON file emitted by the doc generator.
        corpus: PathBuf,
        query: String,
        #[arg(short = 'n', long, default_value = "100")]
        limit: usize,
        /// Emit the results container markup instead of plain text.
        #[arg(long)]
        html: bool,
    },
    /// Print the library navigation tree.
    Tree {
        /// Path to the corpus JSON file emitted by the doc generator.
        corpus: PathBuf,
        /// Emit the navigation container markup instead of plain text.
        #[arg(long)]
        html: bool,
    },
    /// Replay keystroke states read from stdin, one query per line,
    /// printing the resulting view after each.
    Type {
        /// Path to the corpus JSON file emitted by the doc generator.
        corpus: PathBuf,
    },
}

impl Commands {
    /// The corpus path every subcommand starts from.
    pub fn corpus(&self) -> &PathBuf {
        match self {
            Self::Search { corpus, .. } | Self::Tree { corpus, .. } | Self::Type { corpus } => {
                corpus
            }
        }
    }
}
