//! Local rewrite rules.
//!
//! Each rule removes at least one node or one edge, so repeated application
//! terminates after at most `nodes + edges` steps.

use std::collections::HashSet;

use ohm_core::{EdgeId, NodeId, OhmError, checked_series, parallel};
use ohm_graph::Network;

use crate::error::ReduceResult;

/// One applicable rewrite, found by inspecting a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rewrite {
    /// Discard a self-loop.
    DropSelfLoop { edge: EdgeId },
    /// Merge all edges between `a` and `b` into their harmonic combination.
    MergeParallel { a: NodeId, b: NodeId },
    /// Remove a non-terminal node with no path through it.
    PruneDeadEnd { node: NodeId },
    /// Replace a degree-2 non-terminal node and its two edges with one edge.
    FuseSeries { node: NodeId },
}

/// Find a rewrite applicable at `v`, if any.
///
/// Terminals are never removed; they only take part in self-loop and
/// parallel rewrites.
pub fn find_rewrite(network: &Network, v: NodeId, terminals: [NodeId; 2]) -> Option<Rewrite> {
    if !network.contains_node(v) {
        return None;
    }
    let incident = network.incident_edges(v);

    let mut seen = HashSet::with_capacity(incident.len());
    for &e in incident {
        let edge = network.edge(e)?;
        if edge.is_self_loop() {
            return Some(Rewrite::DropSelfLoop { edge: e });
        }
        let other = edge.other(v)?;
        if !seen.insert(other) {
            return Some(Rewrite::MergeParallel { a: v, b: other });
        }
    }

    if terminals.contains(&v) {
        return None;
    }
    // No self-loops and no parallel pairs here, so a degree-2 node has two
    // distinct neighbours.
    match incident.len() {
        0 | 1 => Some(Rewrite::PruneDeadEnd { node: v }),
        2 => Some(Rewrite::FuseSeries { node: v }),
        _ => None,
    }
}

/// Apply `rewrite` and return the surviving nodes whose neighbourhood changed.
///
/// A series sum that overflows is an error; the network is left untouched.
pub(crate) fn apply(network: &mut Network, rewrite: Rewrite) -> ReduceResult<Vec<NodeId>> {
    match rewrite {
        Rewrite::DropSelfLoop { edge } => {
            let removed = network.remove_edge(edge)?;
            Ok(vec![removed.a])
        }
        Rewrite::MergeParallel { a, b } => {
            let group = network.edges_between(a, b);
            let members: Vec<_> = group.iter().filter_map(|&e| network.edge(e)).collect();
            let r = parallel(members.iter().map(|e| e.resistance));
            let label = compose_label(members.iter().map(|e| e.label.as_deref()), "|");
            network.replace_edges_labeled(a, b, r, label)?;
            Ok(vec![a, b])
        }
        Rewrite::PruneDeadEnd { node } => {
            let neighbors = network.neighbors(node);
            network.remove_node(node)?;
            Ok(neighbors)
        }
        Rewrite::FuseSeries { node } => {
            let incident = network.incident_edges(node).to_vec();
            let mut ends = Vec::with_capacity(2);
            let mut members = Vec::with_capacity(2);
            for &e in &incident {
                let edge = network.require_edge(e)?;
                ends.extend(edge.other(node));
                members.push((edge.resistance, edge.label.clone()));
            }
            let [u, w] = ends[..] else {
                return Err(OhmError::Invariant {
                    what: format!("series fusion at {node} needs two edges, found {}", ends.len()),
                }
                .into());
            };
            let r = checked_series(members.iter().map(|(r, _)| *r))?;
            let label = compose_label(members.iter().map(|(_, l)| l.as_deref()), "+");
            network.remove_node(node)?;
            match label {
                Some(label) => network.add_labeled_edge(u, w, r, label)?,
                None => network.add_edge(u, w, r)?,
            };
            Ok(vec![u, w])
        }
    }
}

/// `(R1+R2)` style label when every member is labelled.
fn compose_label<'a, I>(labels: I, op: &str) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let parts: Option<Vec<&str>> = labels.into_iter().collect();
    parts.map(|p| format!("({})", p.join(op)))
}
