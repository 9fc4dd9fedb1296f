//! # Netfault - Fault-tolerance analyzer for small network topologies
//!
//! This library analyzes how many simultaneous failures a network of one
//! application server, multiple storage servers, and interconnecting
//! routers can absorb while every storage server still reaches the
//! application server.
//!
//! ## Overview
//!
//! A topology is a set of role-tagged nodes (application server, storage
//! server, router) joined by undirected links. The engine answers four
//! questions about it:
//!
//! - the maximum number of routers that can fail simultaneously,
//! - the maximum number of links that can fail simultaneously,
//! - the minimum nodes/edges required (the complements of the above),
//! - which individual nodes and edges are critical single points of failure.
//!
//! Connectivity is domain-specific: a storage server may not route
//! through another storage server on its way to the application server.
//!
//! The fault-tolerance search is exact brute force. Failure combinations
//! are enumerated by ascending size and the scan stops at the first size
//! where some combination survives; this favors exactness and
//! reproducibility over scalability, so topologies should stay small
//! (tens of nodes and edges).
//!
//! ## Architecture
//!
//! - `topology`: validated topology data model and YAML loading
//! - `analysis`: connectivity check, failure simulation, fault-tolerance
//!   search, critical-element discovery, and report generation
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use netfault::analysis::{analyze_fault_tolerance, check_connectivity, find_critical_elements};
//! use netfault::topology::load_topology;
//!
//! let loaded = load_topology(std::path::Path::new("topology.yaml"))?;
//! if check_connectivity(&loaded.topology) {
//!     let tolerance = analyze_fault_tolerance(&loaded.topology);
//!     let critical = find_critical_elements(&loaded.topology);
//!     println!("max node failures: {}", tolerance.max_node_failures);
//!     println!("critical nodes: {:?}", critical.critical_nodes);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Error Handling
//!
//! Topology construction reports structured `ValidationError`s; all
//! I/O-facing functions return `color_eyre::Result` with context. An
//! analysis run never fails mid-search: a topology with no tolerable
//! failure size is a valid outcome reported as zero with an explicit
//! flag, not an error.

pub mod analysis;
pub mod topology;
