//! Shared fixtures for analysis tests.

use crate::topology::{Edge, Node, NodeRole, Topology};

/// The reference topology used throughout the test suite:
/// one application server, four storage servers, five routers.
///
/// ```text
/// SS1 - R1 - R2 - R5 - AS
/// SS2 - R1, SS2 - R2
/// SS3 - R2, SS3 - R3 - R4 - R5
/// SS4 - R4
/// ```
pub fn reference_topology() -> Topology {
    Topology::build(
        vec![
            Node::new("AS", NodeRole::ApplicationServer),
            Node::new("SS1", NodeRole::StorageServer),
            Node::new("SS2", NodeRole::StorageServer),
            Node::new("SS3", NodeRole::StorageServer),
            Node::new("SS4", NodeRole::StorageServer),
            Node::new("R1", NodeRole::Router),
            Node::new("R2", NodeRole::Router),
            Node::new("R3", NodeRole::Router),
            Node::new("R4", NodeRole::Router),
            Node::new("R5", NodeRole::Router),
        ],
        vec![
            Edge::new("SS1", "R1"),
            Edge::new("R1", "R2"),
            Edge::new("R2", "R5"),
            Edge::new("R5", "AS"),
            Edge::new("SS2", "R1"),
            Edge::new("SS2", "R2"),
            Edge::new("SS3", "R2"),
            Edge::new("SS3", "R3"),
            Edge::new("R3", "R4"),
            Edge::new("R4", "R5"),
            Edge::new("SS4", "R4"),
        ],
    )
    .unwrap()
}

/// A chain topology with no tolerance at all: SS1 - R1 - AS.
/// Removing the single router, or any single edge, disconnects SS1.
pub fn chain_topology() -> Topology {
    Topology::build(
        vec![
            Node::new("AS", NodeRole::ApplicationServer),
            Node::new("SS1", NodeRole::StorageServer),
            Node::new("R1", NodeRole::Router),
        ],
        vec![Edge::new("SS1", "R1"), Edge::new("R1", "AS")],
    )
    .unwrap()
}
