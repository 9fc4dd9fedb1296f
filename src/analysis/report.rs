//! Report structures and rendering.
//!
//! Analysis results are plain serializable records; JSON output goes
//! through serde_json and the text report mirrors the layout the tool
//! prints to the terminal.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::topology::Edge;

/// Result of the combinatorial fault-tolerance search.
///
/// The complement identities hold unconditionally:
/// `min_nodes_required + max_node_failures == total_nodes` and
/// `min_edges_required + max_edge_failures == total_edges`. When no
/// failure set of any size survives, the corresponding maximum is 0 and
/// the `*_tolerance_found` flag is false.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultToleranceReport {
    pub max_node_failures: usize,
    pub max_edge_failures: usize,
    pub min_nodes_required: usize,
    pub min_edges_required: usize,
    pub node_tolerance_found: bool,
    pub edge_tolerance_found: bool,
}

/// Single points of failure: elements whose sole removal breaks
/// connectivity. Order follows topology insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriticalReport {
    pub critical_nodes: Vec<String>,
    pub critical_edges: Vec<Edge>,
}

/// Combined analysis output for one topology
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fault_tolerance: Option<FaultToleranceReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub critical: Option<CriticalReport>,
}

/// Write the report as pretty-printed JSON
pub fn generate_json_report(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialize report to JSON")?;

    fs::write(output_path, json)
        .with_context(|| format!("Failed to write JSON report to {}", output_path.display()))?;

    log::info!("JSON report written to {}", output_path.display());
    Ok(())
}

/// Render the human-readable text report
pub fn format_text_report(report: &AnalysisReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("=".repeat(60));
    lines.push("              NETWORK FAULT-TOLERANCE ANALYSIS".to_string());
    lines.push("=".repeat(60));
    lines.push(String::new());

    lines.push(format!("Nodes: {}", report.total_nodes));
    lines.push(format!("Edges: {}", report.total_edges));
    lines.push(format!("Connection status: {}", report.connected));
    lines.push(String::new());

    if let Some(ref ft) = report.fault_tolerance {
        lines.push("Fault Tolerance".to_string());
        lines.push("-".repeat(60));
        if ft.node_tolerance_found {
            lines.push(format!("Maximum nodes that can fail: {}", ft.max_node_failures));
        } else {
            lines.push("Maximum nodes that can fail: 0 (no tolerable node failure)".to_string());
        }
        if ft.edge_tolerance_found {
            lines.push(format!("Maximum edges that can fail: {}", ft.max_edge_failures));
        } else {
            lines.push("Maximum edges that can fail: 0 (no tolerable edge failure)".to_string());
        }
        lines.push(format!("Minimum nodes required: {}", ft.min_nodes_required));
        lines.push(format!("Minimum edges required: {}", ft.min_edges_required));
        lines.push(String::new());
    }

    if let Some(ref critical) = report.critical {
        lines.push("Critical Elements".to_string());
        lines.push("-".repeat(60));
        if critical.critical_nodes.is_empty() {
            lines.push("Critical nodes: none".to_string());
        } else {
            lines.push(format!("Critical nodes: {}", critical.critical_nodes.join(", ")));
        }
        if critical.critical_edges.is_empty() {
            lines.push("Critical edges: none".to_string());
        } else {
            let rendered: Vec<String> = critical
                .critical_edges
                .iter()
                .map(|e| e.to_string())
                .collect();
            lines.push(format!("Critical edges: {}", rendered.join(", ")));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Write the human-readable text report to a file
pub fn generate_text_report(report: &AnalysisReport, output_path: &Path) -> Result<()> {
    fs::write(output_path, format_text_report(report))
        .with_context(|| format!("Failed to write text report to {}", output_path.display()))?;

    log::info!("Text report written to {}", output_path.display());
    Ok(())
}
