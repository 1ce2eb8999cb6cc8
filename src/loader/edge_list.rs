use crate::graph::{Graph, Link};
use crate::loader::error::LoadError;
use once_cell::sync::Lazy;
use petgraph::dot::{Config as DotConfig, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

// Node names are any non-blank text; a second arrow makes the line invalid.
static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\S+?)\s*->\s*(\S+?)$").expect("link pattern is valid"));

/// A collection of string-named links read from disk.
///
/// Supported formats, chosen by file extension:
/// - `.json`: `{"links": [{"source": "A", "target": "B"}]}`
/// - `.yml` / `.yaml`: the same document in YAML
/// - `.txt`: one `A -> B` per line, blank lines and `#` comments ignored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeList {
    #[serde(default)]
    pub links: Vec<Link<String>>,
}

impl EdgeList {
    pub fn new(links: Vec<Link<String>>) -> Self {
        Self { links }
    }

    /// Load an edge list, picking the parser from the file extension
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        debug!("Loading edge list from: {:?}", path);

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        let parse: fn(&str) -> Result<Self, LoadError> = match extension.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yml") | Some("yaml") => Self::from_yaml_str,
            Some("txt") => Self::from_text_str,
            _ => return Err(LoadError::UnsupportedFormat(path.to_path_buf())),
        };

        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let edge_list = parse(&content)?;
        info!("Loaded {} links from {:?}", edge_list.links.len(), path);
        Ok(edge_list)
    }

    pub fn from_json_str(content: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, LoadError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_text_str(content: &str) -> Result<Self, LoadError> {
        let mut links = Vec::new();

        for (index, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let invalid = || LoadError::InvalidLine {
                line: index + 1,
                content: raw.to_string(),
            };
            let captures = LINK_PATTERN.captures(line).ok_or_else(invalid)?;
            let (source, target) = (&captures[1], &captures[2]);
            if source.contains("->") || target.contains("->") {
                return Err(invalid());
            }
            links.push(Link::new(source.to_string(), target.to_string()));
        }

        Ok(Self { links })
    }

    /// Borrow the links as a graph
    pub fn graph(&self) -> Graph<'_, Link<String>> {
        Graph::new(&self.links)
    }

    /// Distinct node names in order of first appearance
    pub fn nodes(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut nodes = Vec::new();
        for link in &self.links {
            for node in [link.source(), link.target()] {
                if seen.insert(node.as_str()) {
                    nodes.push(node.as_str());
                }
            }
        }
        nodes
    }

    /// Build a petgraph graph plus a name -> index map, in one pass over the links
    pub fn to_digraph(&self) -> (DiGraph<String, ()>, HashMap<String, NodeIndex>) {
        let mut graph = DiGraph::new();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();

        for link in &self.links {
            let from_idx = *node_map
                .entry(link.source().clone())
                .or_insert_with(|| graph.add_node(link.source().clone()));
            let to_idx = *node_map
                .entry(link.target().clone())
                .or_insert_with(|| graph.add_node(link.target().clone()));
            graph.add_edge(from_idx, to_idx, ());
        }

        debug!("Built digraph with {} nodes and {} edges", graph.node_count(), graph.edge_count());
        (graph, node_map)
    }

    /// Render the links in Graphviz DOT format
    pub fn to_dot(&self) -> String {
        let (graph, _) = self.to_digraph();
        format!("{:?}", Dot::with_config(&graph, &[DotConfig::EdgeNoLabel]))
    }
}
