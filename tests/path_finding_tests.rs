use ordered_float::OrderedFloat;
use sssp_engine::graph::generators::grid_2d;
use sssp_engine::graph::{AdjacencyGraph, Graph, MutableGraph};
use sssp_engine::{Dijkstra, ShortestPathAlgorithm};

#[test]
fn test_path_through_grid() {
    let graph = grid_2d(10, 10).unwrap();

    let source = 0; // top-left corner
    let target = 99; // bottom-right corner

    let result = Dijkstra::new()
        .compute_shortest_paths(&graph, &source)
        .unwrap();
    assert_eq!(result.distance(&target), Some(OrderedFloat(18.0)));

    let path = result.path_to(&target).expect("target is reachable");
    assert_eq!(path[0], source, "path should start at source");
    assert_eq!(path[path.len() - 1], target, "path should end at target");

    // Every step must follow an existing arc, and the steps must sum to the
    // reported distance
    let mut total = OrderedFloat(0.0);
    for window in path.windows(2) {
        let weight = graph
            .arc_weight(&window[0], &window[1])
            .expect("path should only use existing arcs");
        total = total + weight;
    }
    assert_eq!(Some(total), result.distance(&target));
}

#[test]
fn test_path_around_removed_column() {
    let width = 10;
    let height = 10;
    let mut graph = grid_2d(width, height).unwrap();

    // Cut column 5 except for the bottom row, forcing a detour
    for y in 0..height - 1 {
        let obstacle = y * width + 5;
        for v in 0..graph.vertex_count() {
            graph.remove_arc(&v, &obstacle);
            graph.remove_arc(&obstacle, &v);
        }
    }

    let source = 0;
    let target = 9;

    let result = Dijkstra::new()
        .compute_shortest_paths(&graph, &source)
        .unwrap();
    let path = result.path_to(&target).expect("detour should exist");

    assert_eq!(path[0], source);
    assert_eq!(path[path.len() - 1], target);
    for window in path.windows(2) {
        assert!(
            graph.has_arc(&window[0], &window[1]),
            "path should only use existing arcs"
        );
        let col = window[1] % width;
        let row = window[1] / width;
        assert!(
            col != 5 || row == height - 1,
            "path may only cross the cut column on the bottom row"
        );
    }

    // Straight line would be 9; the detour through the bottom row costs more
    let direct = OrderedFloat(9.0);
    assert!(result.distance(&target).unwrap() > direct);
}

#[test]
fn test_path_to_source_is_trivial() {
    let graph = grid_2d(3, 3).unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, &4).unwrap();

    assert_eq!(result.path_to(&4), Some(vec![4]));
}

#[test]
fn test_no_path_to_disconnected_vertex() {
    let mut graph: AdjacencyGraph<&str, u32> = AdjacencyGraph::new();
    for v in ["a", "b", "island"] {
        graph.add_vertex(v);
    }
    graph.add_edge("a", "b", 1).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, &"a").unwrap();

    assert_eq!(result.path_to(&"island"), None);
    assert_eq!(result.path_to(&"b"), Some(vec!["a", "b"]));
}

#[test]
fn test_path_follows_cheapest_route() {
    let mut graph: AdjacencyGraph<&str, u32> = AdjacencyGraph::new();
    for v in ["A", "B", "C", "D"] {
        graph.add_vertex(v);
    }
    // Direct A-D is more expensive than the A-C-B-D chain
    graph.add_edge("A", "D", 10).unwrap();
    graph.add_edge("A", "C", 1).unwrap();
    graph.add_edge("C", "B", 2).unwrap();
    graph.add_edge("B", "D", 1).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, &"A").unwrap();

    assert_eq!(result.distance(&"D"), Some(4));
    assert_eq!(result.path_to(&"D"), Some(vec!["A", "C", "B", "D"]));
}
