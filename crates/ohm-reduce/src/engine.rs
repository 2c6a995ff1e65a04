//! Worklist-driven reduction to a fixpoint.

use std::collections::VecDeque;

use ohm_core::NodeId;
use ohm_graph::{Network, check_terminals};
use tracing::{debug, trace};

use crate::error::ReduceResult;
use crate::extract::{Resistance, extract};
use crate::rules::{Rewrite, apply, find_rewrite};
use crate::schedule::{Fifo, Schedule};

/// Counts of what a reduction run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReductionStats {
    /// Total rewrites applied.
    pub steps: usize,
    pub series: usize,
    pub parallel: usize,
    pub self_loops: usize,
    pub dead_ends: usize,
    /// Nodes dropped up front because they are not connected to `s`.
    pub unreachable: usize,
}

impl ReductionStats {
    fn record(&mut self, rewrite: &Rewrite) {
        self.steps += 1;
        match rewrite {
            Rewrite::DropSelfLoop { .. } => self.self_loops += 1,
            Rewrite::MergeParallel { .. } => self.parallel += 1,
            Rewrite::PruneDeadEnd { .. } => self.dead_ends += 1,
            Rewrite::FuseSeries { .. } => self.series += 1,
        }
    }
}

/// A network at its series/parallel fixpoint.
#[derive(Debug, Clone)]
pub struct Reduction {
    pub network: Network,
    pub s: NodeId,
    pub t: NodeId,
    pub stats: ReductionStats,
}

impl Reduction {
    /// True if only the two terminals are left.
    pub fn is_collapsed(&self) -> bool {
        self.network.node_count() == 2
    }

    /// Read the equivalent resistance off the fixpoint graph.
    pub fn resistance(self) -> ReduceResult<Resistance> {
        extract(self.network, self.s, self.t)
    }
}

/// Reduce a clone of `network` with the default (FIFO) worklist order.
pub fn reduce(network: &Network, s: NodeId, t: NodeId) -> ReduceResult<Reduction> {
    reduce_with(network, s, t, &mut Fifo)
}

/// Reduce a clone of `network`, letting `schedule` order the worklist.
///
/// The caller's network is never modified.
pub fn reduce_with<S>(
    network: &Network,
    s: NodeId,
    t: NodeId,
    schedule: &mut S,
) -> ReduceResult<Reduction>
where
    S: Schedule + ?Sized,
{
    check_terminals(network, s, t)?;
    let mut engine = Engine::new(network.clone(), s, t);
    engine.run(schedule)?;
    Ok(Reduction {
        network: engine.network,
        s,
        t,
        stats: engine.stats,
    })
}

/// Reduce and extract in one call, with no fallback.
pub fn equivalent_resistance(network: &Network, s: NodeId, t: NodeId) -> ReduceResult<Resistance> {
    reduce(network, s, t)?.resistance()
}

struct Engine {
    network: Network,
    terminals: [NodeId; 2],
    worklist: VecDeque<NodeId>,
    queued: Vec<bool>,
    stats: ReductionStats,
}

impl Engine {
    fn new(network: Network, s: NodeId, t: NodeId) -> Self {
        let queued = vec![false; network.node_capacity()];
        Self {
            network,
            terminals: [s, t],
            worklist: VecDeque::new(),
            queued,
            stats: ReductionStats::default(),
        }
    }

    fn run<S>(&mut self, schedule: &mut S) -> ReduceResult<()>
    where
        S: Schedule + ?Sized,
    {
        let start_nodes = self.network.node_count();
        let start_edges = self.network.edge_count();
        debug!(
            nodes = start_nodes,
            edges = start_edges,
            "starting series-parallel reduction"
        );

        if !self.prune_unreachable()? {
            debug!("terminals are disconnected");
            return Ok(());
        }

        let seeds: Vec<NodeId> = self.network.node_ids().collect();
        for n in seeds {
            self.push(n);
        }

        while let Some(v) = self.pop(schedule) {
            let Some(rewrite) = find_rewrite(&self.network, v, self.terminals) else {
                continue;
            };
            trace!(?rewrite, "apply");
            let touched = apply(&mut self.network, rewrite)?;
            self.stats.record(&rewrite);
            for n in touched {
                self.push(n);
            }
            // The inspected node may offer further rewrites.
            self.push(v);
        }

        debug_assert!(self.stats.steps <= start_nodes + start_edges);
        debug!(
            steps = self.stats.steps,
            series = self.stats.series,
            parallel = self.stats.parallel,
            nodes = self.network.node_count(),
            edges = self.network.edge_count(),
            "reduction reached fixpoint"
        );
        Ok(())
    }

    /// Drop every node outside the component of `s`.
    ///
    /// Returns `false` if `t` is outside it; the network is then left as the
    /// two bare terminals.
    fn prune_unreachable(&mut self) -> ReduceResult<bool> {
        let [s, t] = self.terminals;
        let seen = self.network.reachable_from(s);
        let connected = seen[t.slot()];

        let doomed: Vec<NodeId> = self
            .network
            .node_ids()
            .filter(|&n| n != s && n != t && (!connected || !seen[n.slot()]))
            .collect();
        for n in doomed {
            self.network.remove_node(n)?;
            self.stats.unreachable += 1;
        }

        if !connected {
            // Only self-loops can remain on either terminal.
            for terminal in [s, t] {
                for e in self.network.edges_between(terminal, terminal) {
                    self.network.remove_edge(e)?;
                }
            }
        }
        Ok(connected)
    }

    fn push(&mut self, n: NodeId) {
        if !self.network.contains_node(n) || self.queued[n.slot()] {
            return;
        }
        self.queued[n.slot()] = true;
        self.worklist.push_back(n);
    }

    fn pop<S>(&mut self, schedule: &mut S) -> Option<NodeId>
    where
        S: Schedule + ?Sized,
    {
        loop {
            if self.worklist.is_empty() {
                return None;
            }
            let at = schedule.pick(self.worklist.len()).min(self.worklist.len() - 1);
            let n = self.worklist.remove(at)?;
            self.queued[n.slot()] = false;
            if self.network.contains_node(n) {
                return Some(n);
            }
        }
    }
}
