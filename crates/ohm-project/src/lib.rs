//! ohm-project: network file format and validation.
//!
//! Networks are described in YAML or JSON:
//!
//! ```yaml
//! version: 1
//! name: divider
//! resistors:
//!   - { id: R1, a: in, b: mid, ohms: 1000.0 }
//!   - { id: R2, a: mid, b: gnd, ohms: 2200.0 }
//! terminals: { from: in, to: gnd }
//! solver: { fallback: nodal }
//! ```

pub mod compile;
pub mod schema;
pub mod validate;

pub use compile::{CompiledNetwork, compile};
pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, validate_network};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Graph error: {0}")]
    Graph(#[from] ohm_graph::GraphError),

    #[error("Unknown node: {label}")]
    UnknownNode { label: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn from_yaml_str(content: &str) -> ProjectResult<NetworkDef> {
    let def: NetworkDef = serde_yaml::from_str(content)?;
    validate_network(&def)?;
    Ok(def)
}

pub fn save_yaml(path: &std::path::Path, def: &NetworkDef) -> ProjectResult<()> {
    validate_network(def)?;
    let content = serde_yaml::to_string(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<NetworkDef> {
    let content = std::fs::read_to_string(path)?;
    let def: NetworkDef = serde_json::from_str(&content)?;
    validate_network(&def)?;
    Ok(def)
}

pub fn save_json(path: &std::path::Path, def: &NetworkDef) -> ProjectResult<()> {
    validate_network(def)?;
    let content = serde_json::to_string_pretty(def)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` is JSON, anything else YAML.
pub fn load(path: &std::path::Path) -> ProjectResult<NetworkDef> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}
