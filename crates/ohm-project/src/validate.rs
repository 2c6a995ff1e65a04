//! Network file validation logic.

use crate::schema::NetworkDef;
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_network(def: &NetworkDef) -> Result<(), ValidationError> {
    if def.version == 0 || def.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: def.version,
        });
    }

    let mut resistor_ids = HashSet::new();
    let mut node_names = HashSet::new();
    for resistor in &def.resistors {
        if resistor.id.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "resistor.id".to_string(),
                value: format!("{:?}", resistor.id),
                reason: "must not be empty".to_string(),
            });
        }
        if !resistor_ids.insert(resistor.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: resistor.id.clone(),
                context: "resistors".to_string(),
            });
        }
        for end in [&resistor.a, &resistor.b] {
            if end.trim().is_empty() {
                return Err(ValidationError::InvalidValue {
                    field: format!("resistor {} node", resistor.id),
                    value: format!("{:?}", end),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        if let Err(err) = ohm_core::ensure_resistance(resistor.ohms) {
            return Err(ValidationError::InvalidValue {
                field: format!("resistor {} ohms", resistor.id),
                value: resistor.ohms.to_string(),
                reason: err.to_string(),
            });
        }
        node_names.insert(resistor.a.as_str());
        node_names.insert(resistor.b.as_str());
    }

    if let Some(terminals) = &def.terminals {
        for name in [&terminals.from, &terminals.to] {
            if !node_names.contains(name.as_str()) {
                return Err(ValidationError::MissingReference {
                    id: name.clone(),
                    context: "terminals".to_string(),
                });
            }
        }
        if terminals.from == terminals.to {
            return Err(ValidationError::InvalidValue {
                field: "terminals".to_string(),
                value: terminals.from.clone(),
                reason: "from and to must differ".to_string(),
            });
        }
    }

    Ok(())
}
