//! Fault-tolerance and connectivity analysis for network topologies.
//!
//! This module is the analysis engine: connectivity checking, failure
//! simulation, the combinatorial fault-tolerance search, and
//! critical-element discovery, plus the report types they produce.

pub mod connectivity;
pub mod critical;
pub mod fault_tolerance;
pub mod report;
pub mod simulation;

#[cfg(test)]
pub(crate) mod test_support;

pub use connectivity::check_connectivity;
pub use critical::find_critical_elements;
pub use fault_tolerance::analyze_fault_tolerance;
pub use report::{
    format_text_report, generate_json_report, generate_text_report, AnalysisReport,
    CriticalReport, FaultToleranceReport,
};
pub use simulation::simulate_failures;
