use anyhow::Context;
use clap::Parser;

use kwhub::cli::{Cli, Commands};
use kwhub::controller::{SearchController, View};
use kwhub::corpus::Corpus;
use kwhub::nav::{NavNode, NavTree};
use kwhub::render::{RenderedResults, render_results};
use kwhub::search::{SearchConfig, SearchIndex, search};

fn main() -> kwhub::error::Result<()> {
    kwhub::trace::init();
    let cli = Cli::parse();

    // Without the corpus there is nothing to search or browse.
    let corpus =
        Corpus::load(cli.command.corpus()).context("search unavailable: corpus failed to load")?;

    match cli.command {
        Commands::Search {
            query, limit, html, ..
        } => {
            let config = SearchConfig {
                max_results: limit,
                ..SearchConfig::default()
            };
            let index = SearchIndex::build(&corpus, config);
            let results = render_results(&corpus, &search(&index, &query), &config);

            if html {
                print!("{}", results.to_html());
            } else {
                print_results(&results);
            }
        }
        Commands::Tree { html, .. } => {
            let tree = NavTree::build(&corpus);
            if html {
                print!("{}", tree.to_html());
            } else {
                for node in tree.roots() {
                    print_node(node, 0);
                }
            }
        }
        Commands::Type { .. } => {
            let mut controller = SearchController::new(corpus, SearchConfig::default());
            for line in std::io::stdin().lines() {
                let line = line.context("failed to read keystroke input")?;
                match controller.on_input(&line) {
                    View::Navigation => println!("[navigation]"),
                    View::Results(results) => {
                        println!("[results: {}]", results.len());
                        print_results(&results);
                    }
                }
            }
        }
    }

    Ok(())
}

fn print_results(results: &RenderedResults) {
    match results {
        RenderedResults::NoResults => println!("No results found"),
        RenderedResults::Hits(entries) => {
            for entry in entries {
                println!("{}  [{}]  {}", entry.name, entry.library, entry.url);
            }
        }
    }
}

fn print_node(node: &NavNode, depth: usize) {
    let indent = "  ".repeat(depth);
    match node {
        NavNode::Folder { name, children } => {
            println!("{indent}{name}/");
            for child in children {
                print_node(child, depth + 1);
            }
        }
        NavNode::Library { name, entries } => {
            println!("{indent}{name}");
            for entry in entries {
                println!("{indent}  {}  {}", entry.name, entry.url);
            }
        }
    }
}
