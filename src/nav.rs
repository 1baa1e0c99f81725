//! Hierarchical navigation over the corpus, grouped by owning library.
//!
//! This is the browsing counterpart to search: the same records, arranged
//! as a collapsible tree. Building the tree is handled here; the
//! click-to-toggle behavior belongs to the host page.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::corpus::Corpus;
use crate::render::{DOC_FRAME, escape_html};

/// A leaf entry: one keyword link inside a library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub name: String,
    pub url: String,
}

/// One node of the navigation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavNode {
    /// An intermediate directory level, from `/`-separated library names
    /// (resource files keep their relative path as the library label).
    Folder { name: String, children: Vec<NavNode> },
    /// A library with its keyword entries in corpus order.
    Library { name: String, entries: Vec<NavEntry> },
}

/// The full navigation tree: folders and libraries sorted by name,
/// entries within a library in corpus order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavTree {
    roots: Vec<NavNode>,
}

/// Intermediate accumulator; BTreeMaps give the sorted sibling order.
#[derive(Default)]
struct Level {
    folders: BTreeMap<String, Level>,
    libraries: BTreeMap<String, Vec<NavEntry>>,
}

impl Level {
    fn into_nodes(self) -> Vec<NavNode> {
        let mut nodes: Vec<NavNode> = self
            .folders
            .into_iter()
            .map(|(name, level)| NavNode::Folder {
                name,
                children: level.into_nodes(),
            })
            .collect();
        nodes.extend(
            self.libraries
                .into_iter()
                .map(|(name, entries)| NavNode::Library { name, entries }),
        );
        nodes
    }
}

impl NavTree {
    /// Groups the corpus by library label, nesting `/`-separated labels
    /// into folder levels.
    pub fn build(corpus: &Corpus) -> Self {
        let mut root = Level::default();

        for (_, record) in corpus.iter() {
            let normalized = record.library.replace('\\', "/");
            let mut parts: Vec<&str> = normalized
                .split('/')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect();

            let Some(library) = parts.pop().map(str::to_string) else {
                continue;
            };

            let mut level = &mut root;
            for part in parts {
                level = level.folders.entry(part.to_string()).or_default();
            }
            level
                .libraries
                .entry(library)
                .or_default()
                .push(NavEntry {
                    name: record.name.clone(),
                    url: record.url.clone(),
                });
        }

        Self {
            roots: root.into_nodes(),
        }
    }

    pub fn roots(&self) -> &[NavNode] {
        &self.roots
    }

    /// Emits the tree as nested lists with the collapsible-tree classes the
    /// host page toggles (`caret` on expandable labels, `nested` on their
    /// sublists).
    pub fn to_html(&self) -> String {
        let mut html = String::from("<ul class=\"nav-tree\">\n");
        for node in &self.roots {
            write_node(&mut html, node);
        }
        html.push_str("</ul>\n");
        html
    }
}

fn write_node(html: &mut String, node: &NavNode) {
    match node {
        NavNode::Folder { name, children } => {
            // write! to a String cannot fail
            let _ = writeln!(html, "<li><span class=\"caret\">{}</span>", escape_html(name));
            html.push_str("<ul class=\"nested\">\n");
            for child in children {
                write_node(html, child);
            }
            html.push_str("</ul></li>\n");
        }
        NavNode::Library { name, entries } => {
            let _ = writeln!(html, "<li><span class=\"caret\">{}</span>", escape_html(name));
            html.push_str("<ul class=\"nested\">\n");
            for entry in entries {
                let _ = writeln!(
                    html,
                    "<li><a href=\"{}\" target=\"{}\">{}</a></li>",
                    escape_html(&entry.url),
                    DOC_FRAME,
                    escape_html(&entry.name),
                );
            }
            html.push_str("</ul></li>\n");
        }
    }
}
