//! Network topology data model and loading.

pub mod loader;
pub mod types;

pub use loader::{apply_pre_removals, load_topology, LoadedTopology, RemovalSpec};
pub use types::{Edge, Node, NodeRole, Topology, ValidationError};
