//! Combinatorial fault-tolerance search.
//!
//! For routers (and separately for edges), enumerate failure
//! combinations by ascending size and record the first size at which at
//! least one combination leaves the topology connected. The scan stops
//! at that first successful level; larger sizes are never explored.
//! That early-stop rule is a pinned behavioral contract, not an
//! optimization to be replaced with a min-cut computation.
//!
//! The search is exact and worst-case exponential. Combinations within
//! one level are independent, so each level is tested in parallel with
//! an early exit on the first survivor; levels themselves are processed
//! strictly in ascending order. Parallelism can change which witness
//! combination is found first, never the reported counts.

use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;

use crate::topology::{Edge, Topology};

use super::report::FaultToleranceReport;
use super::simulation::simulate_failures;

/// Run the node and edge fault-tolerance searches over a topology.
///
/// Node candidates are routers only; edge candidates are all edges,
/// including those touching the application and storage servers. Both
/// candidate lists keep topology insertion order, and combinations are
/// enumerated lexicographically over that order, so repeated runs scan
/// identically.
pub fn analyze_fault_tolerance(topology: &Topology) -> FaultToleranceReport {
    let routers: Vec<String> = topology
        .routers()
        .into_iter()
        .map(str::to_string)
        .collect();
    info!(
        "Analyzing fault tolerance: {} router candidates, {} edge candidates",
        routers.len(),
        topology.edge_count()
    );

    let max_node_failures = max_tolerated_node_failures(topology, &routers);
    let max_edge_failures = max_tolerated_edge_failures(topology);

    FaultToleranceReport {
        max_node_failures: max_node_failures.unwrap_or(0),
        max_edge_failures: max_edge_failures.unwrap_or(0),
        min_nodes_required: topology.node_count() - max_node_failures.unwrap_or(0),
        min_edges_required: topology.edge_count() - max_edge_failures.unwrap_or(0),
        node_tolerance_found: max_node_failures.is_some(),
        edge_tolerance_found: max_edge_failures.is_some(),
    }
}

/// Smallest k for which some size-k router failure set survives,
/// or None when every level up to the router count fails entirely
fn max_tolerated_node_failures(topology: &Topology, routers: &[String]) -> Option<usize> {
    for k in 1..=routers.len() {
        let combinations: Vec<Vec<String>> =
            routers.iter().cloned().combinations(k).collect();
        debug!("Testing {} node combinations of size {}", combinations.len(), k);

        let survivor_exists = combinations
            .par_iter()
            .any(|subset| simulate_failures(topology, subset, &[]));

        if survivor_exists {
            info!("Found surviving node failure set of size {}", k);
            return Some(k);
        }
    }
    None
}

/// Edge-side counterpart of `max_tolerated_node_failures`
fn max_tolerated_edge_failures(topology: &Topology) -> Option<usize> {
    let edges: Vec<Edge> = topology.edges().to_vec();
    for k in 1..=edges.len() {
        let combinations: Vec<Vec<Edge>> =
            edges.iter().cloned().combinations(k).collect();
        debug!("Testing {} edge combinations of size {}", combinations.len(), k);

        let survivor_exists = combinations
            .par_iter()
            .any(|subset| simulate_failures(topology, &[], subset));

        if survivor_exists {
            info!("Found surviving edge failure set of size {}", k);
            return Some(k);
        }
    }
    None
}
