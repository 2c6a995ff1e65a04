use clap::{Parser, Subcommand};
use ohm_core::NodeId;
use ohm_graph::Network;
use ohm_project::{CompiledNetwork, FallbackDef, NetworkDef};
use ohm_reduce::{ReductionStats, Resistance, reduce};
use ohm_solver::{Fallback, Method, SolveOptions, equivalent_resistance};
use std::path::{Path, PathBuf};
use tracing::debug;

mod error;

use error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "ohm")]
#[command(about = "ohmic - equivalent resistance of resistor networks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate network file syntax and structure
    Validate {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
    },
    /// Compute the equivalent resistance between two nodes
    Solve {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        #[command(flatten)]
        terminals: TerminalArgs,
        /// Report non-series-parallel networks instead of solving them by nodal analysis
        #[arg(long)]
        no_fallback: bool,
    },
    /// Run series/parallel reduction only and show what is left
    Reduce {
        /// Path to the network YAML/JSON file
        network_path: PathBuf,
        #[command(flatten)]
        terminals: TerminalArgs,
    },
}

#[derive(clap::Args)]
struct TerminalArgs {
    /// First terminal (overrides the file)
    #[arg(long)]
    from: Option<String>,
    /// Second terminal (overrides the file)
    #[arg(long)]
    to: Option<String>,
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { network_path } => cmd_validate(&network_path),
        Commands::Solve {
            network_path,
            terminals,
            no_fallback,
        } => cmd_solve(&network_path, &terminals, no_fallback),
        Commands::Reduce {
            network_path,
            terminals,
        } => cmd_reduce(&network_path, &terminals),
    }
}

fn cmd_validate(network_path: &Path) -> CliResult<()> {
    println!("Validating network: {}", network_path.display());
    let def = ohm_project::load(network_path)?;
    let compiled = ohm_project::compile(&def)?;
    println!("✓ Network is valid");
    println!(
        "  {} nodes, {} resistors",
        compiled.network.node_count(),
        compiled.network.edge_count()
    );
    Ok(())
}

fn cmd_solve(network_path: &Path, args: &TerminalArgs, no_fallback: bool) -> CliResult<()> {
    let (def, compiled) = load_network(network_path)?;
    let (s, t) = pick_terminals(&compiled, args)?;

    let fallback = if no_fallback || def.solver.fallback == FallbackDef::Disabled {
        Fallback::Disabled
    } else {
        Fallback::Nodal
    };
    let options = SolveOptions { fallback };

    let net = &compiled.network;
    println!(
        "Solving {} between {} and {}",
        def.name,
        label(net, s),
        label(net, t)
    );
    let solution = equivalent_resistance(net, s, t, &options)?;

    println!("✓ R_eq = {}", format_resistance(solution.resistance));
    let method = match solution.method {
        Method::SeriesParallel => "series/parallel reduction",
        Method::Nodal => "nodal analysis (network is not series-parallel)",
    };
    println!("  Method: {}", method);
    print_stats(&solution.stats);
    Ok(())
}

fn cmd_reduce(network_path: &Path, args: &TerminalArgs) -> CliResult<()> {
    let (_def, compiled) = load_network(network_path)?;
    let (s, t) = pick_terminals(&compiled, args)?;

    let reduction = reduce(&compiled.network, s, t)?;
    print_stats(&reduction.stats);

    if reduction.is_collapsed() {
        let resistance = reduction.resistance()?;
        println!("✓ Collapsed: R_eq = {}", format_resistance(resistance));
        return Ok(());
    }

    let residual = &reduction.network;
    println!(
        "✗ Not series-parallel: {} nodes and {} edges remain",
        residual.node_count(),
        residual.edge_count()
    );
    for edge in residual.edges() {
        println!(
            "  {} -- {}  {:>12.6} Ω  {}",
            label(residual, edge.a),
            label(residual, edge.b),
            edge.resistance,
            edge.label.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn load_network(path: &Path) -> CliResult<(NetworkDef, CompiledNetwork)> {
    let def = ohm_project::load(path)?;
    let compiled = ohm_project::compile(&def)?;
    debug!(
        name = %def.name,
        nodes = compiled.network.node_count(),
        edges = compiled.network.edge_count(),
        "loaded network"
    );
    Ok((def, compiled))
}

fn pick_terminals(compiled: &CompiledNetwork, args: &TerminalArgs) -> CliResult<(NodeId, NodeId)> {
    let net = &compiled.network;
    let lookup = |name: &str| {
        net.find_node(name)
            .ok_or_else(|| CliError::UnknownNode(name.to_string()))
    };
    let declared = compiled.terminals;
    let s = match (&args.from, declared) {
        (Some(name), _) => lookup(name)?,
        (None, Some((s, _))) => s,
        (None, None) => return Err(CliError::MissingTerminals),
    };
    let t = match (&args.to, declared) {
        (Some(name), _) => lookup(name)?,
        (None, Some((_, t))) => t,
        (None, None) => return Err(CliError::MissingTerminals),
    };
    Ok((s, t))
}

fn label(net: &Network, n: NodeId) -> &str {
    net.node_label(n).unwrap_or("?")
}

fn format_resistance(r: Resistance) -> String {
    match r {
        Resistance::Finite(ohms) => format!("{:.6} Ω", ohms),
        Resistance::Infinite => "∞ (terminals are not connected)".to_string(),
    }
}

fn print_stats(stats: &ReductionStats) {
    println!(
        "  Rewrites: {} ({} series, {} parallel, {} self-loops, {} dead ends)",
        stats.steps, stats.series, stats.parallel, stats.self_loops, stats.dead_ends
    );
    println!("  Unreachable nodes dropped: {}", stats.unreachable);
}
