//! Topology file loading.
//!
//! Topologies are described in YAML: a node list with role tags, an edge
//! list, and an optional `remove` section naming nodes/edges to strike
//! before any analysis runs (the manual-failure workflow).
//!
//! ```yaml
//! nodes:
//!   - id: AS
//!     role: application_server
//!   - id: SS1
//!     role: storage_server
//!   - id: R1
//!     role: router
//! edges:
//!   - [SS1, R1]
//!   - [R1, AS]
//! remove:
//!   nodes: [R1]
//! ```

use std::fs::File;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use log::{info, warn};
use serde::Deserialize;

use super::types::{Edge, Node, Topology};

/// On-disk topology description
#[derive(Debug, Deserialize)]
pub struct TopologyFile {
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<(String, String)>,
    #[serde(default)]
    pub remove: Option<RemovalSpec>,
}

/// Nodes and edges to strike before analysis
#[derive(Debug, Default, Clone, Deserialize)]
pub struct RemovalSpec {
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<(String, String)>,
}

impl RemovalSpec {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn edge_list(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .map(|(a, b)| Edge::new(a.clone(), b.clone()))
            .collect()
    }
}

/// A topology loaded from disk plus its optional pre-analysis removals
#[derive(Debug)]
pub struct LoadedTopology {
    pub topology: Topology,
    pub pre_removals: RemovalSpec,
}

/// Load and validate a topology from a YAML file
pub fn load_topology(path: &Path) -> Result<LoadedTopology> {
    info!("Loading topology from: {:?}", path);

    let file = File::open(path)
        .wrap_err_with(|| format!("Failed to open topology file '{}'", path.display()))?;

    let parsed: TopologyFile = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse topology file '{}'", path.display()))?;

    let edges = parsed
        .edges
        .into_iter()
        .map(|(a, b)| Edge::new(a, b))
        .collect();

    let topology = Topology::build(parsed.nodes, edges)
        .wrap_err_with(|| format!("Invalid topology in '{}'", path.display()))?;

    info!(
        "Loaded topology: {} nodes, {} edges",
        topology.node_count(),
        topology.edge_count()
    );

    Ok(LoadedTopology {
        topology,
        pre_removals: parsed.remove.unwrap_or_default(),
    })
}

/// Apply a pre-analysis removal request, returning the reduced topology.
///
/// Unknown nodes and absent edges are tolerated as no-ops but logged, so
/// a typo in a removal request is visible without failing the run.
pub fn apply_pre_removals(topology: &Topology, removals: &RemovalSpec) -> Topology {
    for node in &removals.nodes {
        if !topology.contains_node(node) {
            warn!("Removal request names unknown node '{}'; ignoring", node);
        }
    }
    for (a, b) in &removals.edges {
        if !topology.contains_edge(a, b) {
            warn!("Removal request names absent edge ({}, {}); ignoring", a, b);
        }
    }

    let reduced = topology.apply_removals(&removals.nodes, &removals.edge_list());
    info!(
        "Applied removals: {} -> {} nodes, {} -> {} edges",
        topology.node_count(),
        reduced.node_count(),
        topology.edge_count(),
        reduced.edge_count()
    );
    reduced
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const REFERENCE_YAML: &str = r#"
nodes:
  - id: AS
    role: application_server
  - id: SS1
    role: storage_server
  - id: R1
    role: router
edges:
  - [SS1, R1]
  - [R1, AS]
"#;

    #[test]
    fn test_load_topology() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", REFERENCE_YAML).unwrap();

        let loaded = load_topology(temp_file.path()).unwrap();
        assert_eq!(loaded.topology.node_count(), 3);
        assert_eq!(loaded.topology.edge_count(), 2);
        assert!(loaded.pre_removals.is_empty());
    }

    #[test]
    fn test_load_topology_with_remove_section() {
        let yaml = format!("{}remove:\n  nodes: [R1]\n  edges:\n    - [SS1, R1]\n", REFERENCE_YAML);
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        let loaded = load_topology(temp_file.path()).unwrap();
        assert_eq!(loaded.pre_removals.nodes, vec!["R1"]);
        assert_eq!(loaded.pre_removals.edges.len(), 1);

        let reduced = apply_pre_removals(&loaded.topology, &loaded.pre_removals);
        assert_eq!(reduced.node_count(), 2);
        assert_eq!(reduced.edge_count(), 0);
    }

    #[test]
    fn test_load_topology_rejects_unknown_role() {
        let yaml = "nodes:\n  - id: X\n    role: mainframe\nedges: []\n";
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        assert!(load_topology(temp_file.path()).is_err());
    }

    #[test]
    fn test_load_topology_rejects_bad_edge() {
        let yaml = "nodes:\n  - id: R1\n    role: router\nedges:\n  - [R1, R9]\n";
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", yaml).unwrap();

        assert!(load_topology(temp_file.path()).is_err());
    }

    #[test]
    fn test_pre_removal_of_unknown_node_is_noop() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", REFERENCE_YAML).unwrap();

        let loaded = load_topology(temp_file.path()).unwrap();
        let removals = RemovalSpec {
            nodes: vec!["R9".to_string()],
            edges: vec![],
        };
        let reduced = apply_pre_removals(&loaded.topology, &removals);
        assert_eq!(reduced.node_count(), 3);
    }
}
