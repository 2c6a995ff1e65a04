use ohm_project::schema::*;
use ohm_project::{
    ProjectError, compile, from_yaml_str, load, load_json, load_yaml, save_json, save_yaml,
    validate_network,
};

fn wheatstone() -> NetworkDef {
    let resistor = |id: &str, a: &str, b: &str, ohms: f64| ResistorDef {
        id: id.to_string(),
        a: a.to_string(),
        b: b.to_string(),
        ohms,
    };
    NetworkDef {
        version: 1,
        name: "Wheatstone".to_string(),
        resistors: vec![
            resistor("R1", "A", "B", 100.0),
            resistor("R2", "B", "C", 200.0),
            resistor("R3", "A", "D", 300.0),
            resistor("R4", "D", "C", 400.0),
            resistor("R5", "B", "D", 500.0),
        ],
        terminals: Some(TerminalsDef {
            from: "A".to_string(),
            to: "C".to_string(),
        }),
        solver: SolverDef {
            fallback: FallbackDef::Disabled,
        },
    }
}

#[test]
fn roundtrip_yaml() {
    let def = wheatstone();
    validate_network(&def).unwrap();

    let path = std::env::temp_dir().join("ohm_project_roundtrip.yaml");
    save_yaml(&path, &def).unwrap();
    let loaded = load_yaml(&path).unwrap();
    assert_eq!(def, loaded);

    let by_ext = load(&path).unwrap();
    assert_eq!(def, by_ext);
}

#[test]
fn roundtrip_json() {
    let def = wheatstone();
    let path = std::env::temp_dir().join("ohm_project_roundtrip.json");
    save_json(&path, &def).unwrap();
    assert_eq!(def, load_json(&path).unwrap());
    assert_eq!(def, load(&path).unwrap());
}

#[test]
fn minimal_yaml_uses_defaults() {
    let def = from_yaml_str(
        r#"
version: 1
name: pair
resistors:
  - { id: R1, a: A, b: B, ohms: 6.0 }
  - { id: R2, a: A, b: B, ohms: 3.0 }
"#,
    )
    .unwrap();
    assert_eq!(def.terminals, None);
    assert_eq!(def.solver.fallback, FallbackDef::Nodal);

    let compiled = compile(&def).unwrap();
    assert_eq!(compiled.network.node_count(), 2);
    assert_eq!(compiled.network.edge_count(), 2);
    assert!(compiled.terminals.is_none());
}

#[test]
fn invalid_yaml_value_is_rejected() {
    let err = from_yaml_str(
        r#"
version: 1
name: bad
resistors:
  - { id: R1, a: A, b: B, ohms: -3.0 }
"#,
    )
    .unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
}

#[test]
fn malformed_yaml_is_a_parse_error() {
    let err = from_yaml_str("version: [").unwrap_err();
    assert!(matches!(err, ProjectError::Yaml(_)));
}

#[test]
fn bundled_networks_load() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../networks");
    for name in ["wheatstone.yaml", "ladder.yaml"] {
        let def = load(&dir.join(name)).unwrap();
        let compiled = compile(&def).unwrap();
        assert!(compiled.terminals.is_some(), "{name} declares terminals");
    }
}
