use petgraph::algo::is_isomorphic;

use slash_graphs::graph::families;
use slash_graphs::io::{load_json, parse_adjacency_matrix, save_json};
use slash_graphs::prelude::*;
use slash_graphs::to_petgraph;

fn d1() -> Graph {
    Graph::from_rows(vec![
        vec![0, 1, 1, 0],
        vec![1, 0, 0, 1],
        vec![1, 0, 0, 1],
        vec![0, 1, 1, 0],
    ])
    .unwrap()
}

#[test]
fn test_diamond_counts() {
    assert_eq!(slash_vertex_count(4, 4, 4, 4).unwrap(), 12);
    assert_eq!(slash_power_vertex_count(4, 4, 2).unwrap(), 12);

    let d2 = slash_power(&d1(), 2).unwrap();
    assert_eq!(d2.num_vertices(), 12);
    assert_eq!(d2.num_edges(), 16);
}

#[test]
fn test_diamond_square_matrix() {
    let d2 = slash_into(&d1(), &d1()).unwrap();

    // Blocks in edge order: (0,1) -> [0,4,5,1], (0,2) -> [0,6,7,2],
    // (1,3) -> [1,8,9,3], (2,3) -> [2,10,11,3]
    let expected = Graph::from_edges(
        12,
        &[
            (0, 4), (0, 5), (4, 1), (5, 1),
            (0, 6), (0, 7), (6, 2), (7, 2),
            (1, 8), (1, 9), (8, 3), (9, 3),
            (2, 10), (2, 11), (10, 3), (11, 3),
        ],
    )
    .unwrap();

    assert_eq!(d2, expected);
}

#[test]
fn test_single_vertex_h_is_rejected() {
    let result = slash_into(&d1(), &Graph::empty(1));
    assert!(matches!(result, Err(SlashError::InvalidArgument(_))));
}

#[test]
fn test_power_zero_is_rejected() {
    assert!(matches!(
        slash_power(&d1(), 0),
        Err(SlashError::InvalidArgument(_))
    ));
}

#[test]
fn test_nested_diamonds_via_powers() {
    let d = families::diamond();
    let counts: Vec<(usize, usize)> = SlashPowers::new(&d)
        .take(4)
        .map(|g| g.map(|g| (g.num_vertices(), g.num_edges())))
        .collect::<Result<_>>()
        .unwrap();

    assert_eq!(counts, vec![(4, 4), (12, 16), (44, 64), (172, 256)]);
}

#[test]
fn test_orientation_gives_isomorphic_single_splice() {
    let h = Graph::from_edges(5, &[(0, 1), (0, 2), (1, 2), (2, 3), (3, 4)]).unwrap();
    let g = families::edge();
    let composer = SlashComposer::default();

    let forward = composer
        .slash_into_with_orientation(&g, &h, Orientation::Forward)
        .unwrap();
    let reversed = composer
        .slash_into_with_orientation(&g, &h, Orientation::Reversed)
        .unwrap();

    assert_ne!(forward, reversed);
    assert!(is_isomorphic(&to_petgraph(&forward), &to_petgraph(&reversed)));
    assert!(is_isomorphic(&to_petgraph(&forward), &to_petgraph(&h)));
}

#[test]
fn test_capped_composer_from_json_config() {
    let config =
        SlashConfig::from_json_str(r#"{"max_vertices": 50, "warn_fraction": 0.5}"#).unwrap();
    let composer = SlashComposer::new(config).unwrap();
    let d = families::diamond();

    assert_eq!(composer.slash_power(&d, 3).unwrap().num_vertices(), 44);
    assert!(matches!(
        composer.slash_power(&d, 4),
        Err(SlashError::VertexLimitExceeded { requested: 172, limit: 50 })
    ));
}

#[test]
fn test_text_matrix_to_power() {
    let square = parse_adjacency_matrix("[[0,1,0,1],[1,0,1,0],[0,1,0,1],[1,0,1,0]]").unwrap();
    let power = slash_power(&square, 2).unwrap();
    assert_eq!(power.num_vertices(), 4 + 4 * 2);
    assert_eq!(power.num_edges(), 16);
}

#[test]
fn test_json_graph_file() {
    let graph = families::nested_diamond(2).unwrap();
    let path = std::env::temp_dir().join("slash_graphs_scenario_graph.json");

    save_json(&graph, &path).unwrap();
    let loaded: Graph = load_json(&path).unwrap();
    assert_eq!(loaded, graph);

    // Clean up
    std::fs::remove_file(&path).ok();
}
