//! Dense indexing for matrix assembly.
//!
//! Arena slots may be vacant after removals; solvers need contiguous
//! `0..N` row indices instead.

use ohm_core::NodeId;

use crate::error::{GraphError, GraphResult};
use crate::graph::Network;

/// Bidirectional map between live node IDs and contiguous indices.
#[derive(Debug, Clone)]
pub struct IndexMap {
    /// Contiguous list of node IDs (index -> NodeId).
    node_ids: Vec<NodeId>,

    /// Reverse lookup sized to the network's slot capacity.
    node_to_idx: Vec<Option<usize>>,
}

impl IndexMap {
    /// Index every live node of the network.
    pub fn from_network(network: &Network) -> Self {
        Self::from_filter(network, |_| true)
    }

    /// Index the live nodes accepted by `keep`, in slot order.
    pub fn from_filter<F>(network: &Network, mut keep: F) -> Self
    where
        F: FnMut(NodeId) -> bool,
    {
        let node_ids: Vec<NodeId> = network.node_ids().filter(|&n| keep(n)).collect();
        let mut node_to_idx = vec![None; network.node_capacity()];
        for (i, &id) in node_ids.iter().enumerate() {
            node_to_idx[id.slot()] = Some(i);
        }
        Self {
            node_ids,
            node_to_idx,
        }
    }

    /// Number of indexed nodes.
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Contiguous index for a node, or `None` if it was not indexed.
    pub fn get(&self, id: NodeId) -> Option<usize> {
        self.node_to_idx.get(id.slot()).copied().flatten()
    }

    /// Contiguous index for a node ID.
    pub fn node_idx(&self, id: NodeId) -> GraphResult<usize> {
        self.get(id).ok_or(GraphError::IdNotFound { what: "NodeId" })
    }

    /// All indexed node IDs in index order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_ids
    }
}
