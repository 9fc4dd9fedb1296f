//! Critical-element discovery.
//!
//! A critical element is a single point of failure: one router or one
//! edge whose sole removal breaks connectivity. Every candidate is
//! tested independently against the original topology; findings never
//! compound.

use log::info;

use crate::topology::Topology;

use super::report::CriticalReport;
use super::simulation::simulate_failures;

/// Find every critical router and every critical edge.
///
/// Application and storage servers are never node candidates; all edges
/// are edge candidates. Results keep topology insertion order.
pub fn find_critical_elements(topology: &Topology) -> CriticalReport {
    let critical_nodes: Vec<String> = topology
        .routers()
        .into_iter()
        .filter(|router| !simulate_failures(topology, &[router.to_string()], &[]))
        .map(str::to_string)
        .collect();

    let critical_edges = topology
        .edges()
        .iter()
        .filter(|edge| !simulate_failures(topology, &[], std::slice::from_ref(*edge)))
        .cloned()
        .collect::<Vec<_>>();

    info!(
        "Found {} critical nodes, {} critical edges",
        critical_nodes.len(),
        critical_edges.len()
    );

    CriticalReport {
        critical_nodes,
        critical_edges,
    }
}
