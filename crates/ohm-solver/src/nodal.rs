//! Nodal analysis on the conductance Laplacian.
//!
//! Works for any topology, bridges included. A unit current is injected at
//! `s` and drawn at `t`; with `t` grounded the Laplacian loses its constant
//! null space and `L' x = e_s` has a unique solution whose `x_s` is the
//! effective resistance. Ideal shorts are contracted first because their
//! conductance is infinite.

use nalgebra::{DMatrix, DVector};
use ohm_core::{NodeId, OhmError, ensure_finite};
use ohm_graph::{IndexMap, Network, check_terminals};
use ohm_reduce::Resistance;
use tracing::debug;

use crate::error::SolverResult;

/// Effective resistance between `s` and `t` by a dense LU solve.
pub fn nodal_resistance(network: &Network, s: NodeId, t: NodeId) -> SolverResult<Resistance> {
    check_terminals(network, s, t)?;

    let shorts = Shorts::from_network(network);
    let (rs, rt) = (shorts.root(s), shorts.root(t));
    if rs == rt {
        return Ok(Resistance::Finite(0.0));
    }

    let reachable = network.reachable_from(s);
    if !reachable[t.slot()] {
        return Ok(Resistance::Infinite);
    }

    // One row per shorted group in the component of `s`, ground excluded.
    let index = IndexMap::from_filter(network, |n| {
        reachable[n.slot()] && shorts.root(n) == n && n != rt
    });
    let l = grounded_laplacian(network, &index, &shorts, &reachable);
    let si = index.node_idx(rs)?;

    let mut current = DVector::<f64>::zeros(index.node_count());
    current[si] = 1.0;

    debug!(size = index.node_count(), "solving grounded Laplacian");
    let x = l.lu().solve(&current).ok_or_else(|| OhmError::Invariant {
        what: "grounded Laplacian is singular".to_string(),
    })?;

    let r = ensure_finite(x[si], "equivalent resistance")?;
    // Round-off can leave a tiny negative value for near-shorted terminals.
    Ok(Resistance::Finite(r.max(0.0)))
}

/// Assemble the Laplacian over `index`, dropping the grounded group's row
/// and column.
fn grounded_laplacian(
    network: &Network,
    index: &IndexMap,
    shorts: &Shorts,
    reachable: &[bool],
) -> DMatrix<f64> {
    let n = index.node_count();
    let mut l = DMatrix::zeros(n, n);
    for edge in network.edges() {
        if edge.resistance == 0.0 || !reachable[edge.a.slot()] {
            continue;
        }
        let (a, b) = (shorts.root(edge.a), shorts.root(edge.b));
        if a == b {
            continue;
        }
        let g = edge.resistance.recip();
        let (i, j) = (index.get(a), index.get(b));
        if let Some(i) = i {
            l[(i, i)] += g;
        }
        if let Some(j) = j {
            l[(j, j)] += g;
        }
        if let (Some(i), Some(j)) = (i, j) {
            l[(i, j)] -= g;
            l[(j, i)] -= g;
        }
    }
    l
}

/// Union-find over node slots joined by zero-resistance edges.
struct Shorts {
    parent: Vec<usize>,
}

impl Shorts {
    fn from_network(network: &Network) -> Self {
        let mut shorts = Self {
            parent: (0..network.node_capacity()).collect(),
        };
        for edge in network.edges() {
            if edge.resistance == 0.0 {
                shorts.union(edge.a.slot(), edge.b.slot());
            }
        }
        shorts
    }

    fn find(&self, mut i: usize) -> usize {
        while self.parent[i] != i {
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            // Lower slot wins so roots are deterministic.
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi] = lo;
        }
    }

    fn root(&self, n: NodeId) -> NodeId {
        NodeId::from_index(self.find(n.slot()) as u32)
    }
}
