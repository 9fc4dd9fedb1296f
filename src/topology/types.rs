//! Topology data model.
//!
//! This file contains the node/edge types and the validated `Topology`
//! container that every analysis function operates on. A topology is an
//! immutable snapshot: analyses never mutate it, they derive reduced
//! copies via [`Topology::apply_removals`].

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

/// Role of a node in the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// The unique sink that every storage server must reach
    ApplicationServer,
    /// A source node requiring a path to the application server;
    /// never usable as a transit hop for another storage server
    StorageServer,
    /// Intermediate node, the only kind considered for node-fault enumeration
    Router,
}

/// A single network node: identifier plus role tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub role: NodeRole,
}

impl Node {
    pub fn new(id: impl Into<String>, role: NodeRole) -> Self {
        Self { id: id.into(), role }
    }

    pub fn is_router(&self) -> bool {
        self.role == NodeRole::Router
    }
}

/// An undirected link between two nodes.
///
/// Equality ignores endpoint order, so `Edge::new("A", "B")` matches
/// `Edge::new("B", "A")` in removal requests and duplicate checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    pub a: String,
    pub b: String,
}

impl Edge {
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self { a: a.into(), b: b.into() }
    }

    /// True if this edge joins the two given nodes, in either order
    pub fn connects(&self, x: &str, y: &str) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// True if the given node is one of this edge's endpoints
    pub fn touches(&self, node: &str) -> bool {
        self.a == node || self.b == node
    }

    /// Canonical (sorted) endpoint pair, used for duplicate detection
    fn key(&self) -> (&str, &str) {
        if self.a <= self.b {
            (&self.a, &self.b)
        } else {
            (&self.b, &self.a)
        }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.connects(&other.a, &other.b)
    }
}

impl Eq for Edge {}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// Topology validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Duplicate node id: {0}")]
    DuplicateNode(String),
    #[error("More than one application server: {0} and {1}")]
    MultipleApplicationServers(String, String),
    #[error("Edge ({0}, {1}) references unknown node {2}")]
    UnknownEndpoint(String, String, String),
    #[error("Self-loop on node {0}")]
    SelfLoop(String),
    #[error("Duplicate edge ({0}, {1})")]
    DuplicateEdge(String, String),
}

/// A validated network topology.
///
/// Nodes and edges keep their insertion order; that order drives the
/// deterministic combination enumeration in the fault-tolerance search.
/// The adjacency view is derived on demand rather than stored, so it can
/// never drift from the edge list.
#[derive(Debug, Clone)]
pub struct Topology {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
    edges: Vec<Edge>,
}

impl Topology {
    /// Build a topology from node and edge lists, validating structure.
    ///
    /// Rejected: duplicate node ids, more than one application server,
    /// edges with unknown endpoints, self-loops, duplicate edges. A
    /// topology with zero application servers is accepted (one can be
    /// struck by a pre-analysis removal) but logged as a warning, since
    /// connectivity can then never hold while storage servers exist.
    pub fn build(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, ValidationError> {
        let mut index: HashMap<String, usize> = HashMap::with_capacity(nodes.len());
        let mut app_server: Option<&str> = None;

        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), i).is_some() {
                return Err(ValidationError::DuplicateNode(node.id.clone()));
            }
            if node.role == NodeRole::ApplicationServer {
                if let Some(first) = app_server {
                    return Err(ValidationError::MultipleApplicationServers(
                        first.to_string(),
                        node.id.clone(),
                    ));
                }
                app_server = Some(&node.id);
            }
        }

        if app_server.is_none() {
            log::warn!(
                "Topology has no application server; connectivity will fail while storage servers exist"
            );
        }

        let mut seen: HashSet<(String, String)> = HashSet::with_capacity(edges.len());
        for edge in &edges {
            if edge.a == edge.b {
                return Err(ValidationError::SelfLoop(edge.a.clone()));
            }
            for endpoint in [&edge.a, &edge.b] {
                if !index.contains_key(endpoint.as_str()) {
                    return Err(ValidationError::UnknownEndpoint(
                        edge.a.clone(),
                        edge.b.clone(),
                        endpoint.to_string(),
                    ));
                }
            }
            let (x, y) = edge.key();
            if !seen.insert((x.to_string(), y.to_string())) {
                return Err(ValidationError::DuplicateEdge(edge.a.clone(), edge.b.clone()));
            }
        }

        Ok(Self { nodes, index, edges })
    }

    /// Internal constructor for reduced copies; inputs are already valid
    fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (n.id.clone(), i))
            .collect();
        Self { nodes, index, edges }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn contains_edge(&self, a: &str, b: &str) -> bool {
        self.edges.iter().any(|e| e.connects(a, b))
    }

    /// The application server, if one is present
    pub fn application_server(&self) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| n.role == NodeRole::ApplicationServer)
    }

    /// Storage server ids in insertion order
    pub fn storage_servers(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.role == NodeRole::StorageServer)
            .map(|n| n.id.as_str())
            .collect()
    }

    /// Router ids in insertion order
    pub fn routers(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.is_router())
            .map(|n| n.id.as_str())
            .collect()
    }

    /// Derive the adjacency view (node id -> neighbor ids)
    pub fn adjacency(&self) -> HashMap<&str, Vec<&str>> {
        let mut adjacency: HashMap<&str, Vec<&str>> = self
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), Vec::new()))
            .collect();
        for edge in &self.edges {
            adjacency.get_mut(edge.a.as_str()).unwrap().push(edge.b.as_str());
            adjacency.get_mut(edge.b.as_str()).unwrap().push(edge.a.as_str());
        }
        adjacency
    }

    /// Produce a new topology with the given nodes and edges removed.
    ///
    /// Removing a node also removes every edge incident to it. Unknown
    /// node ids and absent edges are silently ignored ("remove if
    /// present"); the receiver is never mutated.
    pub fn apply_removals(&self, nodes: &[String], edges: &[Edge]) -> Topology {
        let removed: HashSet<&str> = nodes.iter().map(|s| s.as_str()).collect();

        let kept_nodes: Vec<Node> = self
            .nodes
            .iter()
            .filter(|n| !removed.contains(n.id.as_str()))
            .cloned()
            .collect();

        let kept_edges: Vec<Edge> = self
            .edges
            .iter()
            .filter(|e| !removed.contains(e.a.as_str()) && !removed.contains(e.b.as_str()))
            .filter(|e| !edges.contains(*e))
            .cloned()
            .collect();

        Topology::from_parts(kept_nodes, kept_edges)
    }
}
