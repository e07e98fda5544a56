//! In-memory graph model
//!
//! A single mutable structure built once per invocation and discarded after
//! serialization. Node identity is a normalized string id; insertion is an
//! idempotent upsert and edges are deduplicated on their ordered endpoint
//! pair.

use std::collections::{HashMap, HashSet};
use std::fmt;

use petgraph::graph::{DiGraph, NodeIndex};

use super::color::RgbColor;

/// Stable node identifier: the owning object's name with all
/// non-alphanumeric characters stripped. The human-readable label is kept
/// separately on the node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn from_name(name: &str) -> Self {
        Self(name.chars().filter(|c| c.is_alphanumeric()).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Styling role of a node, resolved once at graph-build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeStyle {
    /// A build target: rendered as a box
    Target,
    /// A resolved spec: filled with its root package color
    Spec { fill: RgbColor },
    /// A dependency reference: outlined in its root package color
    Dependency { color: RgbColor },
}

/// A node in the graph model.
#[derive(Debug, Clone)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
    pub style: NodeStyle,
}

/// Style attributes for an edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeStyle {
    /// Optional edge label (e.g. a version requirement string)
    pub label: Option<String>,
    /// Optional Graphviz color list (e.g. `"gray"` or `"black:#AABBCC"`)
    pub color: Option<String>,
    /// Whether the edge constrains node ranking during layout
    pub constraint: bool,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            label: None,
            color: None,
            constraint: true,
        }
    }
}

/// A named grouping of nodes sharing a source repository identity.
#[derive(Debug, Clone)]
pub struct Cluster {
    pub key: String,
    members: Vec<NodeIndex>,
}

impl Cluster {
    pub fn members(&self) -> &[NodeIndex] {
        &self.members
    }
}

/// The deduplicated, clustered graph built from one resolved view.
#[derive(Debug, Default)]
pub struct GraphModel {
    graph: DiGraph<GraphNode, EdgeStyle>,
    indices: HashMap<NodeId, NodeIndex>,
    seen_edges: HashSet<(NodeIndex, NodeIndex)>,
    clusters: Vec<Cluster>,
    cluster_keys: HashMap<String, usize>,
}

impl GraphModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or reuse the node whose name normalizes to the same identifier.
    ///
    /// First write wins: re-inserting an existing node never overwrites its
    /// originally-assigned label or style.
    pub fn upsert_node(&mut self, name: &str, label: &str, style: NodeStyle) -> NodeIndex {
        let id = NodeId::from_name(name);
        if let Some(&idx) = self.indices.get(&id) {
            return idx;
        }

        let idx = self.graph.add_node(GraphNode {
            id: id.clone(),
            label: label.to_string(),
            style,
        });
        self.indices.insert(id, idx);
        idx
    }

    /// Add an edge between two existing nodes.
    ///
    /// Edges are deduplicated purely on the ordered (source, target) pair:
    /// a second edge between the same endpoints is silently dropped even if
    /// its label differs. Returns whether the edge was actually inserted.
    pub fn add_edge(&mut self, source: NodeIndex, target: NodeIndex, style: EdgeStyle) -> bool {
        if !self.seen_edges.insert((source, target)) {
            return false;
        }
        self.graph.add_edge(source, target, style);
        true
    }

    /// Place a node into the cluster for the given key, creating the cluster
    /// on first use. Membership is idempotent.
    pub fn add_to_cluster(&mut self, key: &str, node: NodeIndex) {
        let position = *self.cluster_keys.entry(key.to_string()).or_insert_with(|| {
            self.clusters.push(Cluster {
                key: key.to_string(),
                members: Vec::new(),
            });
            self.clusters.len() - 1
        });

        let members = &mut self.clusters[position].members;
        if !members.contains(&node) {
            members.push(node);
        }
    }

    pub fn node_index(&self, id: &NodeId) -> Option<NodeIndex> {
        self.indices.get(id).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &GraphNode {
        &self.graph[idx]
    }

    pub fn graph(&self) -> &DiGraph<GraphNode, EdgeStyle> {
        &self.graph
    }

    /// Clusters in first-creation order.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
