//! Turning a validated definition into a network.

use ohm_core::NodeId;
use ohm_graph::{Network, NetworkBuilder};

use crate::schema::NetworkDef;
use crate::{ProjectError, ProjectResult};

/// A network built from a file, with its declared terminals resolved.
#[derive(Debug, Clone)]
pub struct CompiledNetwork {
    pub network: Network,
    pub terminals: Option<(NodeId, NodeId)>,
}

pub fn compile(def: &NetworkDef) -> ProjectResult<CompiledNetwork> {
    let mut builder = NetworkBuilder::new();
    for resistor in &def.resistors {
        builder.named_resistor(resistor.id.as_str(), &resistor.a, &resistor.b, resistor.ohms)?;
    }

    let terminals = match &def.terminals {
        Some(t) => Some((resolve(&builder, &t.from)?, resolve(&builder, &t.to)?)),
        None => None,
    };

    Ok(CompiledNetwork {
        network: builder.build(),
        terminals,
    })
}

fn resolve(builder: &NetworkBuilder, label: &str) -> ProjectResult<NodeId> {
    builder.node_id(label).ok_or_else(|| ProjectError::UnknownNode {
        label: label.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ResistorDef, SolverDef, TerminalsDef};

    #[test]
    fn compiles_labels_and_terminals() {
        let def = NetworkDef {
            version: 1,
            name: "pair".to_string(),
            resistors: vec![
                ResistorDef {
                    id: "R1".to_string(),
                    a: "in".to_string(),
                    b: "out".to_string(),
                    ohms: 6.0,
                },
                ResistorDef {
                    id: "R2".to_string(),
                    a: "out".to_string(),
                    b: "in".to_string(),
                    ohms: 3.0,
                },
            ],
            terminals: Some(TerminalsDef {
                from: "in".to_string(),
                to: "out".to_string(),
            }),
            solver: SolverDef::default(),
        };
        let compiled = compile(&def).unwrap();
        let (s, t) = compiled.terminals.unwrap();
        assert_eq!(compiled.network.node_label(s), Some("in"));
        assert_eq!(compiled.network.node_label(t), Some("out"));
        assert_eq!(compiled.network.edges_between(s, t).len(), 2);
        let labels: Vec<_> = compiled
            .network
            .edges()
            .map(|e| e.label.as_deref().unwrap())
            .collect();
        assert_eq!(labels, vec!["R1", "R2"]);
    }
}
