//! Reading the result off a fixpoint graph.

use std::fmt;

use ohm_core::{NodeId, Real, parallel};
use ohm_graph::{GraphError, Network};

use crate::error::{ReduceError, ReduceResult};

/// Equivalent resistance between two terminals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resistance {
    /// Finite, non-negative ohms. Zero means the terminals are shorted.
    Finite(Real),
    /// No conducting path joins the terminals.
    Infinite,
}

impl Resistance {
    /// Value in ohms, with `Infinite` mapped to `f64::INFINITY`.
    pub fn ohms(self) -> Real {
        match self {
            Resistance::Finite(r) => r,
            Resistance::Infinite => Real::INFINITY,
        }
    }

    pub fn is_infinite(self) -> bool {
        matches!(self, Resistance::Infinite)
    }
}

impl fmt::Display for Resistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resistance::Finite(r) => write!(f, "{} Ω", r),
            Resistance::Infinite => write!(f, "∞ Ω"),
        }
    }
}

/// Extract the resistance between `s` and `t` from a reduced network.
///
/// Anything beyond the two terminals means the rules got stuck, and the
/// network is handed back inside [`ReduceError::NonSeriesParallelResidual`].
pub fn extract(network: Network, s: NodeId, t: NodeId) -> ReduceResult<Resistance> {
    for node in [s, t] {
        if !network.contains_node(node) {
            return Err(GraphError::UnknownTerminal { node }.into());
        }
    }
    if network.node_count() != 2 {
        return Err(ReduceError::residual(network));
    }

    let joining = network.edges_between(s, t);
    if joining.is_empty() {
        return Ok(Resistance::Infinite);
    }
    // One edge at a true fixpoint; a stray parallel group is still exact.
    let r = parallel(
        joining
            .iter()
            .filter_map(|&e| network.edge(e))
            .map(|e| e.resistance),
    );
    Ok(Resistance::Finite(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (Network, NodeId, NodeId) {
        let mut net = Network::new();
        let s = net.add_node("s");
        let t = net.add_node("t");
        (net, s, t)
    }

    #[test]
    fn single_edge() {
        let (mut net, s, t) = pair();
        net.add_edge(s, t, 42.0).unwrap();
        assert_eq!(extract(net, s, t).unwrap(), Resistance::Finite(42.0));
    }

    #[test]
    fn short_wins() {
        let (mut net, s, t) = pair();
        net.add_edge(s, t, 42.0).unwrap();
        net.add_edge(t, s, 0.0).unwrap();
        assert_eq!(extract(net, s, t).unwrap(), Resistance::Finite(0.0));
    }

    #[test]
    fn no_edge_is_infinite() {
        let (net, s, t) = pair();
        let r = extract(net, s, t).unwrap();
        assert!(r.is_infinite());
        assert_eq!(r.ohms(), Real::INFINITY);
        assert_eq!(r.to_string(), "∞ Ω");
    }

    #[test]
    fn extra_nodes_are_residual() {
        let (mut net, s, t) = pair();
        let m = net.add_node("m");
        net.add_edge(s, m, 1.0).unwrap();
        net.add_edge(m, t, 1.0).unwrap();
        let err = extract(net, s, t).unwrap_err();
        assert!(matches!(
            err,
            ReduceError::NonSeriesParallelResidual { nodes: 3, edges: 2, .. }
        ));
    }
}
