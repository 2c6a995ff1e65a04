//! Integration tests for ohm-graph.

use ohm_graph::{GraphError, IndexMap, Network, NetworkBuilder, check_terminals, from_edge_list};

#[test]
fn build_bridge_network() {
    // A-B, B-C, A-D, D-C, B-D
    let net = from_edge_list(&[
        ("A", "B", 1.0),
        ("B", "C", 2.0),
        ("A", "D", 3.0),
        ("D", "C", 4.0),
        ("B", "D", 5.0),
    ])
    .unwrap();

    assert_eq!(net.node_count(), 4);
    assert_eq!(net.edge_count(), 5);

    let b = net.find_node("B").unwrap();
    let d = net.find_node("D").unwrap();
    assert_eq!(net.degree(b), 3);
    assert_eq!(net.degree(d), 3);
    assert_eq!(net.edges_between(b, d).len(), 1);

    let mut neighbors: Vec<&str> = net
        .neighbors(b)
        .into_iter()
        .map(|n| net.node_label(n).unwrap())
        .collect();
    neighbors.sort();
    assert_eq!(neighbors, vec!["A", "C", "D"]);
}

#[test]
fn edge_endpoints_are_unordered() {
    let mut net = Network::new();
    let a = net.add_node("A");
    let b = net.add_node("B");
    let e = net.add_edge(b, a, 10.0).unwrap();

    let edge = net.edge(e).unwrap();
    assert!(edge.joins(a, b));
    assert!(edge.joins(b, a));
    assert_eq!(net.other_end(e, a), Some(b));
    assert_eq!(net.other_end(e, b), Some(a));
}

#[test]
fn series_chain_rewrite_by_hand() {
    // A -1- M -2- B, then fuse M away the way the reduction engine would.
    let mut builder = NetworkBuilder::new();
    builder.resistor("A", "M", 1.0).unwrap();
    builder.resistor("M", "B", 2.0).unwrap();
    let mut net = builder.build();

    let a = net.find_node("A").unwrap();
    let m = net.find_node("M").unwrap();
    let b = net.find_node("B").unwrap();
    let total: f64 = net
        .incident_edges(m)
        .iter()
        .map(|&e| net.edge(e).unwrap().resistance)
        .sum();
    net.remove_node(m).unwrap();
    net.add_edge(a, b, total).unwrap();

    assert_eq!(net.node_count(), 2);
    let edges = net.edges_between(a, b);
    assert_eq!(edges.len(), 1);
    assert_eq!(net.edge(edges[0]).unwrap().resistance, 3.0);
}

#[test]
fn index_map_tracks_removals() {
    let mut net = from_edge_list(&[("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0)]).unwrap();
    let b = net.find_node("B").unwrap();
    net.remove_node(b).unwrap();

    let idx = IndexMap::from_network(&net);
    assert_eq!(idx.node_count(), 3);
    for (i, &id) in idx.node_ids().iter().enumerate() {
        assert_eq!(idx.node_idx(id).unwrap(), i);
        assert_ne!(id, b);
    }
}

#[test]
fn terminals_must_exist_and_differ() {
    let net = from_edge_list(&[("A", "B", 1.0)]).unwrap();
    let a = net.find_node("A").unwrap();
    let b = net.find_node("B").unwrap();

    assert!(check_terminals(&net, a, b).is_ok());
    assert!(matches!(
        check_terminals(&net, b, b),
        Err(GraphError::IdenticalTerminals { .. })
    ));
}
