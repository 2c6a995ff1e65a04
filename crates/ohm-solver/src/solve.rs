//! High-level query interface.

use ohm_core::{NodeId, Real};
use ohm_graph::{Network, from_edge_list};
use ohm_reduce::{ReduceError, ReductionStats, Resistance, reduce};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::error::{SolverError, SolverResult};
use crate::nodal::nodal_resistance;

/// What to do when series/parallel reduction gets stuck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Fallback {
    /// Solve the original network by nodal analysis.
    #[default]
    Nodal,
    /// Return [`ReduceError::NonSeriesParallelResidual`] to the caller.
    Disabled,
}

/// Query options.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveOptions {
    pub fallback: Fallback,
}

impl SolveOptions {
    /// Options that never fall back to nodal analysis.
    pub fn reduction_only() -> Self {
        Self {
            fallback: Fallback::Disabled,
        }
    }
}

/// Which method produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    SeriesParallel,
    Nodal,
}

/// Result of one query.
#[derive(Debug, Clone)]
pub struct Solution {
    pub resistance: Resistance,
    pub method: Method,
    /// Rewrites applied before the answer (or the fallback) was reached.
    pub stats: ReductionStats,
}

/// Equivalent resistance between `s` and `t`.
///
/// This function:
/// 1. Validates the terminals
/// 2. Reduces a clone of the network by series/parallel rewrites
/// 3. Reads the answer off the fixpoint graph
/// 4. If the graph did not collapse, solves the original network by nodal
///    analysis, or reports the residual when the fallback is disabled
///
/// `network` is never modified.
pub fn equivalent_resistance(
    network: &Network,
    s: NodeId,
    t: NodeId,
    options: &SolveOptions,
) -> SolverResult<Solution> {
    let reduction = reduce(network, s, t)?;
    let stats = reduction.stats;

    match reduction.resistance() {
        Ok(resistance) => Ok(Solution {
            resistance,
            method: Method::SeriesParallel,
            stats,
        }),
        Err(ReduceError::NonSeriesParallelResidual { nodes, edges, .. })
            if options.fallback == Fallback::Nodal =>
        {
            info!(nodes, edges, "network is not series-parallel; using nodal analysis");
            let resistance = nodal_resistance(network, s, t)?;
            Ok(Solution {
                resistance,
                method: Method::Nodal,
                stats,
            })
        }
        Err(err) => Err(err.into()),
    }
}

/// Build a network from `(a, b, ohms)` triples and query it by node label.
pub fn solve_edge_list<S: AsRef<str>>(
    edges: &[(S, S, Real)],
    s: &str,
    t: &str,
    options: &SolveOptions,
) -> SolverResult<Solution> {
    let network = from_edge_list(edges)?;
    let lookup = |label: &str| {
        network.find_node(label).ok_or_else(|| SolverError::UnknownLabel {
            label: label.to_string(),
        })
    };
    let (s, t) = (lookup(s)?, lookup(t)?);
    equivalent_resistance(&network, s, t, options)
}

/// Run independent queries against one network in parallel.
///
/// Each query reduces its own clone, so results match running them one by
/// one, in input order.
pub fn solve_many(
    network: &Network,
    pairs: &[(NodeId, NodeId)],
    options: &SolveOptions,
) -> Vec<SolverResult<Solution>> {
    debug!(queries = pairs.len(), "solving batch");
    pairs
        .par_iter()
        .map(|&(s, t)| equivalent_resistance(network, s, t, options))
        .collect()
}
