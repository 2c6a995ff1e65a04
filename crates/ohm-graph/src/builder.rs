//! Incremental network builder keyed by node labels.

use std::collections::HashMap;

use ohm_core::{EdgeId, NodeId, Real};

use crate::error::GraphResult;
use crate::graph::Network;

/// Builder for constructing a network from labelled resistors.
///
/// Node labels are interned: the first mention of a label creates the node,
/// later mentions reuse it. Each resistor is validated as it is added, so a
/// bad value aborts construction at the offending entry.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    network: Network,
    by_label: HashMap<String, NodeId>,
}

impl NetworkBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or create the node named `label`.
    pub fn node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.by_label.get(label) {
            return id;
        }
        let id = self.network.add_node(label);
        self.by_label.insert(label.to_string(), id);
        id
    }

    /// Add a resistor between two labelled nodes.
    pub fn resistor(&mut self, a: &str, b: &str, ohms: Real) -> GraphResult<EdgeId> {
        let u = self.node(a);
        let v = self.node(b);
        self.network.add_edge(u, v, ohms)
    }

    /// Add a named resistor (e.g. `R1`) between two labelled nodes.
    pub fn named_resistor(
        &mut self,
        name: impl Into<String>,
        a: &str,
        b: &str,
        ohms: Real,
    ) -> GraphResult<EdgeId> {
        let u = self.node(a);
        let v = self.node(b);
        self.network.add_labeled_edge(u, v, ohms, name)
    }

    /// Look up a node created earlier.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.by_label.get(label).copied()
    }

    /// Finish building and return the network.
    pub fn build(self) -> Network {
        self.network
    }
}

/// Build a network from `(a, b, ohms)` triples in one call.
pub fn from_edge_list<S: AsRef<str>>(edges: &[(S, S, Real)]) -> GraphResult<Network> {
    let mut builder = NetworkBuilder::new();
    for (a, b, ohms) in edges {
        builder.resistor(a.as_ref(), b.as_ref(), *ohms)?;
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphError;

    #[test]
    fn builder_interns_labels() {
        let mut builder = NetworkBuilder::new();
        builder.resistor("A", "B", 1.0).unwrap();
        builder.resistor("B", "C", 2.0).unwrap();
        builder.resistor("C", "A", 3.0).unwrap();

        let a = builder.node_id("A").unwrap();
        let net = builder.build();
        assert_eq!(net.node_count(), 3);
        assert_eq!(net.edge_count(), 3);
        assert_eq!(net.find_node("A"), Some(a));
        assert_eq!(net.degree(a), 2);
    }

    #[test]
    fn named_resistor_keeps_label() {
        let mut builder = NetworkBuilder::new();
        let e = builder.named_resistor("R7", "in", "out", 470.0).unwrap();
        let net = builder.build();
        assert_eq!(net.edge(e).unwrap().label.as_deref(), Some("R7"));
    }

    #[test]
    fn edge_list_stops_at_bad_value() {
        let err = from_edge_list(&[("A", "B", 1.0), ("B", "C", -4.0)]).unwrap_err();
        assert!(matches!(err, GraphError::InvalidResistance { value, .. } if value == -4.0));
    }
}
