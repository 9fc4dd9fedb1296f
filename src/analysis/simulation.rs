//! Failure simulation.
//!
//! Answers "would the topology stay connected if these nodes and edges
//! failed?" by building a reduced copy and delegating to the
//! connectivity check. The input topology is never mutated, so every
//! simulation in an enumeration runs against the same baseline.

use crate::topology::{Edge, Topology};

use super::connectivity::check_connectivity;

/// Simulate the simultaneous failure of the given nodes and edges.
///
/// Unknown nodes and absent edges are ignored ("remove if present").
/// With empty removal sets this is exactly `check_connectivity`.
pub fn simulate_failures(topology: &Topology, failed_nodes: &[String], failed_edges: &[Edge]) -> bool {
    let reduced = topology.apply_removals(failed_nodes, failed_edges);
    check_connectivity(&reduced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::reference_topology;

    #[test]
    fn test_empty_simulation_equals_connectivity_check() {
        let topology = reference_topology();
        assert_eq!(
            simulate_failures(&topology, &[], &[]),
            check_connectivity(&topology)
        );
    }

    #[test]
    fn test_removing_sole_path_router_disconnects() {
        let topology = reference_topology();
        // R1 is SS1's only neighbor
        assert!(!simulate_failures(&topology, &["R1".to_string()], &[]));
    }

    #[test]
    fn test_removing_redundant_router_survives() {
        let topology = reference_topology();
        // SS3 still reaches AS via R2 -> R5 when R3 fails
        assert!(simulate_failures(&topology, &["R3".to_string()], &[]));
    }

    #[test]
    fn test_removing_sole_storage_edge_disconnects() {
        let topology = reference_topology();
        // (R4, SS4) is SS4's only edge, in either endpoint order
        assert!(!simulate_failures(&topology, &[], &[Edge::new("R4", "SS4")]));
    }

    #[test]
    fn test_combined_node_and_edge_failures() {
        let topology = reference_topology();
        // R3 alone survives, but R3 plus the SS2-R2 edge forces SS2
        // through R1 -> R2 -> R5, which still works
        assert!(simulate_failures(
            &topology,
            &["R3".to_string()],
            &[Edge::new("SS2", "R2")],
        ));
        // Whereas also cutting R1-R2 leaves SS1 stranded at R1
        assert!(!simulate_failures(
            &topology,
            &["R3".to_string()],
            &[Edge::new("SS2", "R2"), Edge::new("R1", "R2")],
        ));
    }

    #[test]
    fn test_simulation_does_not_mutate_input() {
        let topology = reference_topology();
        simulate_failures(&topology, &["R1".to_string()], &[Edge::new("R5", "AS")]);
        assert_eq!(topology.node_count(), 10);
        assert_eq!(topology.edge_count(), 11);
        assert!(check_connectivity(&topology));
    }
}
