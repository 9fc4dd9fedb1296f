//! Domain-specific connectivity check.
//!
//! A topology counts as connected when every storage server can reach
//! the application server without routing through another storage
//! server. Storage servers are endpoints only, never transit hops.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::topology::{NodeRole, Topology};

/// Check whether every storage server reaches the application server.
///
/// Pure function: the topology is read, never modified. With no storage
/// servers the check is vacuously true; with storage servers but no
/// application server (for example after it was removed) it is false.
pub fn check_connectivity(topology: &Topology) -> bool {
    let storage_servers = topology.storage_servers();
    if storage_servers.is_empty() {
        return true;
    }

    let destination = match topology.application_server() {
        Some(node) => node.id.as_str(),
        None => return false,
    };

    let adjacency = topology.adjacency();
    storage_servers
        .iter()
        .all(|&origin| reaches(topology, &adjacency, origin, destination))
}

/// BFS from one storage server, refusing to step through other storage
/// servers on the way to the destination.
fn reaches(
    topology: &Topology,
    adjacency: &HashMap<&str, Vec<&str>>,
    origin: &str,
    destination: &str,
) -> bool {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    queue.push_back(origin);
    visited.insert(origin);

    while let Some(current) = queue.pop_front() {
        if current == destination {
            return true;
        }
        let Some(neighbors) = adjacency.get(current) else {
            continue;
        };
        for &neighbor in neighbors {
            if visited.contains(neighbor) {
                continue;
            }
            let transit_blocked = topology
                .node(neighbor)
                .map(|n| n.role == NodeRole::StorageServer)
                .unwrap_or(true);
            if transit_blocked {
                continue;
            }
            visited.insert(neighbor);
            queue.push_back(neighbor);
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::test_support::reference_topology;
    use crate::topology::{Edge, Node, Topology};

    fn build(nodes: Vec<Node>, edges: Vec<Edge>) -> Topology {
        Topology::build(nodes, edges).unwrap()
    }

    #[test]
    fn test_reference_topology_is_connected() {
        assert!(check_connectivity(&reference_topology()));
    }

    #[test]
    fn test_storage_server_cannot_be_transit_hop() {
        // SS2's only route to AS passes through SS1, which is not allowed
        let topology = build(
            vec![
                Node::new("AS", NodeRole::ApplicationServer),
                Node::new("SS1", NodeRole::StorageServer),
                Node::new("SS2", NodeRole::StorageServer),
            ],
            vec![Edge::new("AS", "SS1"), Edge::new("SS1", "SS2")],
        );
        assert!(!check_connectivity(&topology));
    }

    #[test]
    fn test_direct_edge_to_application_server_counts() {
        let topology = build(
            vec![
                Node::new("AS", NodeRole::ApplicationServer),
                Node::new("SS1", NodeRole::StorageServer),
            ],
            vec![Edge::new("SS1", "AS")],
        );
        assert!(check_connectivity(&topology));
    }

    #[test]
    fn test_no_storage_servers_is_vacuously_connected() {
        let topology = build(
            vec![
                Node::new("AS", NodeRole::ApplicationServer),
                Node::new("R1", NodeRole::Router),
            ],
            vec![Edge::new("R1", "AS")],
        );
        assert!(check_connectivity(&topology));
    }

    #[test]
    fn test_missing_application_server_is_disconnected() {
        let topology = build(
            vec![
                Node::new("SS1", NodeRole::StorageServer),
                Node::new("R1", NodeRole::Router),
            ],
            vec![Edge::new("SS1", "R1")],
        );
        assert!(!check_connectivity(&topology));
    }

    #[test]
    fn test_isolated_storage_server_is_disconnected() {
        let topology = build(
            vec![
                Node::new("AS", NodeRole::ApplicationServer),
                Node::new("SS1", NodeRole::StorageServer),
                Node::new("SS2", NodeRole::StorageServer),
                Node::new("R1", NodeRole::Router),
            ],
            vec![Edge::new("SS1", "R1"), Edge::new("R1", "AS")],
        );
        // SS2 has no edges at all
        assert!(!check_connectivity(&topology));
    }
}
