use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};
use env_logger::Env;
use log::{info, warn};
use std::path::PathBuf;

use netfault::analysis::{
    analyze_fault_tolerance, check_connectivity, find_critical_elements, format_text_report,
    generate_json_report, generate_text_report, AnalysisReport,
};
use netfault::topology::{apply_pre_removals, load_topology, Edge, RemovalSpec, Topology};

/// Fault-tolerance analyzer for application/storage server network topologies
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the topology YAML file
    #[arg(short, long)]
    topology: PathBuf,

    /// Nodes to remove before analysis (comma separated ids)
    #[arg(long, value_delimiter = ',')]
    remove_nodes: Vec<String>,

    /// Edges to remove before analysis (comma separated "a-b" pairs)
    #[arg(long, value_delimiter = ',')]
    remove_edges: Vec<String>,

    /// Also write the results as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Also write the text report to this path
    #[arg(long)]
    text: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check whether every storage server reaches the application server
    Check,
    /// Compute maximum tolerable node/edge failures and minimum requirements
    Tolerance,
    /// List critical nodes and edges (single points of failure)
    Critical,
    /// Full analysis: connectivity, then tolerance and critical elements
    Report,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting netfault analyzer");
    info!("Topology file: {:?}", args.topology);

    let loaded = load_topology(&args.topology)?;
    let mut topology = loaded.topology;

    // File-level removals first, then CLI flags
    if !loaded.pre_removals.is_empty() {
        topology = apply_pre_removals(&topology, &loaded.pre_removals);
    }
    let cli_removals = RemovalSpec {
        nodes: args.remove_nodes.clone(),
        edges: args
            .remove_edges
            .iter()
            .map(|spec| parse_edge_spec(spec).map(|e| (e.a, e.b)))
            .collect::<Result<Vec<_>>>()?,
    };
    if !cli_removals.is_empty() {
        topology = apply_pre_removals(&topology, &cli_removals);
    }

    let report = run_command(&args.command, &topology);

    println!("{}", format_text_report(&report));

    if let Some(json_path) = &args.json {
        generate_json_report(&report, json_path)?;
    }
    if let Some(text_path) = &args.text {
        generate_text_report(&report, text_path)?;
    }

    info!("Analysis completed");
    Ok(())
}

/// Execute the selected subcommand against the (possibly reduced) topology
fn run_command(command: &Command, topology: &Topology) -> AnalysisReport {
    let connected = check_connectivity(topology);
    info!("Connection status: {}", connected);

    let mut report = AnalysisReport {
        total_nodes: topology.node_count(),
        total_edges: topology.edge_count(),
        connected,
        fault_tolerance: None,
        critical: None,
    };

    match command {
        Command::Check => {}
        Command::Tolerance => {
            report.fault_tolerance = Some(analyze_fault_tolerance(topology));
        }
        Command::Critical => {
            report.critical = Some(find_critical_elements(topology));
        }
        Command::Report => {
            // The deeper analyses only make sense on a connected topology
            if connected {
                report.fault_tolerance = Some(analyze_fault_tolerance(topology));
                report.critical = Some(find_critical_elements(topology));
            } else {
                warn!("Topology is disconnected; skipping tolerance and critical analysis");
            }
        }
    }

    report
}

/// Parse an "a-b" edge specification from the command line
fn parse_edge_spec(spec: &str) -> Result<Edge> {
    let mut parts = spec.splitn(2, '-');
    match (parts.next(), parts.next()) {
        (Some(a), Some(b)) if !a.is_empty() && !b.is_empty() => Ok(Edge::new(a, b)),
        _ => Err(eyre!("Invalid edge specification '{}'; expected 'a-b'", spec)),
    }
}
