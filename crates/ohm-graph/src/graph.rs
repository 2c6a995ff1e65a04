//! Core multigraph data structures.

use std::collections::VecDeque;

use ohm_core::{EdgeId, NodeId, Real, ensure_resistance};

use crate::error::{GraphError, GraphResult};

/// A junction in the resistor network.
///
/// Nodes are minimal: an ID, a label for human reference, and the list of
/// incident edges. A self-loop appears twice in `incident`, once per endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub(crate) incident: Vec<EdgeId>,
}

/// A resistor between two nodes. Endpoints are unordered.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub id: EdgeId,
    pub a: NodeId,
    pub b: NodeId,
    /// Resistance in ohms, finite and `>= 0`.
    pub resistance: Real,
    pub label: Option<String>,
}

impl Edge {
    /// True if both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool {
        self.a == self.b
    }

    /// True if the edge joins `u` and `v` in either orientation.
    pub fn joins(&self, u: NodeId, v: NodeId) -> bool {
        (self.a == u && self.b == v) || (self.a == v && self.b == u)
    }

    /// The endpoint opposite `n`, or `None` if `n` is not an endpoint.
    pub fn other(&self, n: NodeId) -> Option<NodeId> {
        if self.a == n {
            Some(self.b)
        } else if self.b == n {
            Some(self.a)
        } else {
            None
        }
    }
}

/// A mutable multigraph of resistors.
///
/// Nodes and edges live in arenas addressed by their IDs. Removal leaves a
/// vacant slot so IDs handed out earlier never alias a different object.
/// Cloning is the only way to get an independent working copy.
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub(crate) nodes: Vec<Option<Node>>,
    pub(crate) edges: Vec<Option<Edge>>,
    live_nodes: usize,
    live_edges: usize,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node and return its ID.
    pub fn add_node(&mut self, label: impl Into<String>) -> NodeId {
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.nodes.push(Some(Node {
            id,
            label: label.into(),
            incident: Vec::new(),
        }));
        self.live_nodes += 1;
        id
    }

    /// Add a resistor between `u` and `v`.
    ///
    /// Parallel edges and self-loops are allowed. The resistance must be
    /// finite and non-negative.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, resistance: Real) -> GraphResult<EdgeId> {
        self.insert_edge(u, v, resistance, None)
    }

    /// Same as [`Network::add_edge`] with a label for diagnostics.
    pub fn add_labeled_edge(
        &mut self,
        u: NodeId,
        v: NodeId,
        resistance: Real,
        label: impl Into<String>,
    ) -> GraphResult<EdgeId> {
        self.insert_edge(u, v, resistance, Some(label.into()))
    }

    fn insert_edge(
        &mut self,
        u: NodeId,
        v: NodeId,
        resistance: Real,
        label: Option<String>,
    ) -> GraphResult<EdgeId> {
        let resistance = ensure_resistance(resistance).map_err(|source| {
            GraphError::InvalidResistance {
                a: u,
                b: v,
                value: resistance,
                source,
            }
        })?;
        self.require_node(u)?;
        self.require_node(v)?;

        let id = EdgeId::from_index(self.edges.len() as u32);
        self.edges.push(Some(Edge {
            id,
            a: u,
            b: v,
            resistance,
            label,
        }));
        self.live_edges += 1;

        // Self-loops register twice on the same node.
        self.node_mut(u)?.incident.push(id);
        self.node_mut(v)?.incident.push(id);
        Ok(id)
    }

    /// Remove a single edge.
    pub fn remove_edge(&mut self, id: EdgeId) -> GraphResult<Edge> {
        let edge = self
            .edges
            .get_mut(id.slot())
            .and_then(Option::take)
            .ok_or(GraphError::UnknownEdge { edge: id })?;
        self.live_edges -= 1;
        for end in [edge.a, edge.b] {
            if let Some(Some(node)) = self.nodes.get_mut(end.slot()) {
                node.incident.retain(|&e| e != id);
            }
        }
        Ok(edge)
    }

    /// Remove a node together with every incident edge.
    pub fn remove_node(&mut self, id: NodeId) -> GraphResult<Node> {
        let incident = self.require_node(id)?.incident.clone();
        for e in incident {
            // Self-loops are listed twice; the second removal finds a vacant slot.
            if self.edge(e).is_some() {
                self.remove_edge(e)?;
            }
        }
        let node = self
            .nodes
            .get_mut(id.slot())
            .and_then(Option::take)
            .ok_or(GraphError::UnknownNode { node: id })?;
        self.live_nodes -= 1;
        Ok(node)
    }

    /// Replace every edge between `u` and `v` with one edge of `resistance`.
    ///
    /// The resistance is validated before anything is removed, so on error
    /// the network is left unchanged.
    pub fn replace_edges(&mut self, u: NodeId, v: NodeId, resistance: Real) -> GraphResult<EdgeId> {
        self.replace_edges_labeled(u, v, resistance, None)
    }

    /// Same as [`Network::replace_edges`], labelling the replacement edge.
    pub fn replace_edges_labeled(
        &mut self,
        u: NodeId,
        v: NodeId,
        resistance: Real,
        label: Option<String>,
    ) -> GraphResult<EdgeId> {
        ensure_resistance(resistance).map_err(|source| GraphError::InvalidResistance {
            a: u,
            b: v,
            value: resistance,
            source,
        })?;
        self.require_node(u)?;
        self.require_node(v)?;
        for e in self.edges_between(u, v) {
            self.remove_edge(e)?;
        }
        self.insert_edge(u, v, resistance, label)
    }

    /// Number of edge endpoints at `n`. Self-loops count twice.
    pub fn degree(&self, n: NodeId) -> usize {
        self.node(n).map_or(0, |node| node.incident.len())
    }

    /// All edges directly joining `u` and `v`, duplicates included.
    ///
    /// With `u == v` this lists each self-loop at `u` once.
    pub fn edges_between(&self, u: NodeId, v: NodeId) -> Vec<EdgeId> {
        let Some(node) = self.node(u) else {
            return Vec::new();
        };
        let mut out: Vec<EdgeId> = node
            .incident
            .iter()
            .copied()
            .filter(|&e| self.edge(e).is_some_and(|edge| edge.joins(u, v)))
            .collect();
        if u == v {
            out.dedup();
        }
        out
    }

    /// Get a live node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.slot()).and_then(Option::as_ref)
    }

    /// Get a live edge by ID.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.slot()).and_then(Option::as_ref)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn node_label(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.label.as_str())
    }

    /// First live node carrying `label`.
    pub fn find_node(&self, label: &str) -> Option<NodeId> {
        self.nodes().find(|n| n.label == label).map(|n| n.id)
    }

    /// Number of live nodes.
    pub fn node_count(&self) -> usize {
        self.live_nodes
    }

    /// Number of live edges.
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    /// Upper bound on node slot indices, live or vacant.
    pub fn node_capacity(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().flatten()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes().map(|n| n.id)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().flatten()
    }

    /// Edge IDs incident to `n`; a self-loop appears twice.
    pub fn incident_edges(&self, n: NodeId) -> &[EdgeId] {
        match self.node(n) {
            Some(node) => &node.incident,
            None => &[],
        }
    }

    /// The endpoint of `e` opposite `n`.
    pub fn other_end(&self, e: EdgeId, n: NodeId) -> Option<NodeId> {
        self.edge(e).and_then(|edge| edge.other(n))
    }

    /// Distinct neighbours of `n`, excluding `n` itself, in incidence order.
    pub fn neighbors(&self, n: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        for &e in self.incident_edges(n) {
            if let Some(m) = self.other_end(e, n) {
                if m != n && !out.contains(&m) {
                    out.push(m);
                }
            }
        }
        out
    }

    /// Reachability from `start`, indexed by node slot.
    ///
    /// Vacant slots and unreachable nodes are `false`.
    pub fn reachable_from(&self, start: NodeId) -> Vec<bool> {
        let mut seen = vec![false; self.nodes.len()];
        if !self.contains_node(start) {
            return seen;
        }
        let mut queue = VecDeque::from([start]);
        seen[start.slot()] = true;
        while let Some(n) = queue.pop_front() {
            for &e in self.incident_edges(n) {
                if let Some(m) = self.other_end(e, n) {
                    if !seen[m.slot()] {
                        seen[m.slot()] = true;
                        queue.push_back(m);
                    }
                }
            }
        }
        seen
    }

    /// Like [`Network::node`], but a missing node is an error.
    pub fn require_node(&self, id: NodeId) -> GraphResult<&Node> {
        self.node(id).ok_or(GraphError::UnknownNode { node: id })
    }

    /// Like [`Network::edge`], but a missing edge is an error.
    pub fn require_edge(&self, id: EdgeId) -> GraphResult<&Edge> {
        self.edge(id).ok_or(GraphError::UnknownEdge { edge: id })
    }

    fn node_mut(&mut self, id: NodeId) -> GraphResult<&mut Node> {
        self.nodes
            .get_mut(id.slot())
            .and_then(Option::as_mut)
            .ok_or(GraphError::UnknownNode { node: id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> (Network, NodeId, NodeId) {
        let mut net = Network::new();
        let a = net.add_node("A");
        let b = net.add_node("B");
        (net, a, b)
    }

    #[test]
    fn multi_edges_are_distinct() {
        let (mut net, a, b) = pair();
        let e1 = net.add_edge(a, b, 6.0).unwrap();
        let e2 = net.add_edge(b, a, 3.0).unwrap();
        assert_ne!(e1, e2);
        assert_eq!(net.edges_between(a, b), vec![e1, e2]);
        assert_eq!(net.edges_between(b, a).len(), 2);
        assert_eq!(net.degree(a), 2);
        assert_eq!(net.neighbors(a), vec![b]);
    }

    #[test]
    fn self_loop_counts_twice() {
        let (mut net, a, b) = pair();
        let lp = net.add_edge(a, a, 1.0).unwrap();
        net.add_edge(a, b, 1.0).unwrap();
        assert_eq!(net.degree(a), 3);
        assert_eq!(net.edges_between(a, a), vec![lp]);
        assert_eq!(net.neighbors(a), vec![b]);

        net.remove_edge(lp).unwrap();
        assert_eq!(net.degree(a), 1);
        assert_eq!(net.edge_count(), 1);
    }

    #[test]
    fn rejects_bad_resistance() {
        let (mut net, a, b) = pair();
        for bad in [-1.0, Real::NAN, Real::INFINITY] {
            let err = net.add_edge(a, b, bad).unwrap_err();
            assert!(matches!(err, GraphError::InvalidResistance { .. }));
        }
        assert_eq!(net.edge_count(), 0);
        assert_eq!(net.degree(a), 0);
        assert!(net.add_edge(a, b, 0.0).is_ok());
    }

    #[test]
    fn rejects_unknown_endpoint() {
        let (mut net, a, _) = pair();
        let ghost = NodeId::from_index(99);
        assert!(matches!(
            net.add_edge(a, ghost, 1.0),
            Err(GraphError::UnknownNode { .. })
        ));
    }

    #[test]
    fn remove_node_drops_incident_edges() {
        let (mut net, a, b) = pair();
        let c = net.add_node("C");
        net.add_edge(a, b, 1.0).unwrap();
        net.add_edge(b, c, 1.0).unwrap();
        net.add_edge(b, b, 1.0).unwrap();
        net.remove_node(b).unwrap();

        assert_eq!(net.node_count(), 2);
        assert_eq!(net.edge_count(), 0);
        assert_eq!(net.degree(a), 0);
        assert_eq!(net.degree(c), 0);
        assert!(!net.contains_node(b));
        assert!(net.remove_node(b).is_err());
    }

    #[test]
    fn replace_edges_collapses_group() {
        let (mut net, a, b) = pair();
        net.add_edge(a, b, 2.0).unwrap();
        net.add_edge(a, b, 3.0).unwrap();
        let e = net.replace_edges(b, a, 1.2).unwrap();
        assert_eq!(net.edges_between(a, b), vec![e]);
        assert_eq!(net.edge(e).unwrap().resistance, 1.2);
        assert_eq!(net.degree(a), 1);
    }

    #[test]
    fn replace_edges_is_atomic_on_error() {
        let (mut net, a, b) = pair();
        net.add_edge(a, b, 2.0).unwrap();
        net.add_edge(a, b, 3.0).unwrap();
        assert!(net.replace_edges(a, b, -5.0).is_err());
        assert_eq!(net.edges_between(a, b).len(), 2);
    }

    #[test]
    fn ids_are_not_reused() {
        let (mut net, a, b) = pair();
        let e1 = net.add_edge(a, b, 1.0).unwrap();
        net.remove_edge(e1).unwrap();
        let e2 = net.add_edge(a, b, 1.0).unwrap();
        assert_ne!(e1, e2);
        assert!(net.edge(e1).is_none());
    }

    #[test]
    fn reachability() {
        let (mut net, a, b) = pair();
        let c = net.add_node("C");
        let d = net.add_node("D");
        net.add_edge(a, b, 1.0).unwrap();
        net.add_edge(c, d, 1.0).unwrap();
        let seen = net.reachable_from(a);
        assert!(seen[a.slot()] && seen[b.slot()]);
        assert!(!seen[c.slot()] && !seen[d.slot()]);
    }

    #[test]
    fn clone_is_independent() {
        let (mut net, a, b) = pair();
        net.add_edge(a, b, 1.0).unwrap();
        let mut work = net.clone();
        work.remove_node(a).unwrap();
        assert_eq!(net.node_count(), 2);
        assert_eq!(net.edge_count(), 1);
        assert_eq!(work.node_count(), 1);
    }
}
