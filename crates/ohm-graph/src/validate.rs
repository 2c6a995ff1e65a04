//! Query validation.

use ohm_core::NodeId;

use crate::error::{GraphError, GraphResult};
use crate::graph::Network;

/// Check that `s` and `t` are distinct live nodes of `network`.
pub fn check_terminals(network: &Network, s: NodeId, t: NodeId) -> GraphResult<()> {
    for node in [s, t] {
        if !network.contains_node(node) {
            return Err(GraphError::UnknownTerminal { node });
        }
    }
    if s == t {
        return Err(GraphError::IdenticalTerminals { node: s });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_checks() {
        let mut net = Network::new();
        let a = net.add_node("A");
        let b = net.add_node("B");
        assert!(check_terminals(&net, a, b).is_ok());
        assert_eq!(
            check_terminals(&net, a, a),
            Err(GraphError::IdenticalTerminals { node: a })
        );

        let ghost = NodeId::from_index(7);
        assert_eq!(
            check_terminals(&net, a, ghost),
            Err(GraphError::UnknownTerminal { node: ghost })
        );

        net.remove_node(b).unwrap();
        assert!(matches!(
            check_terminals(&net, a, b),
            Err(GraphError::UnknownTerminal { .. })
        ));
    }
}
