use indexed_paths::{
    graphs::graph_functions::degree_sum, utility::random_graph, Color, Error, Graph,
    TraversalOrder, UndirectedGraph,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn letters(elements: &[&'static str]) -> UndirectedGraph<&'static str> {
    let mut graph = UndirectedGraph::new();
    for element in elements {
        graph.insert_vertex(*element).unwrap();
    }
    graph
}

#[test]
fn neighbors_are_symmetric() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut graph = random_graph(&mut rng, 30, 0, 1);
    let mut pairs = Vec::new();

    while pairs.len() < 40 {
        let a = rng.gen_range(0..30u32);
        let b = rng.gen_range(0..30u32);
        if a != b && !graph.are_neighbors(&a, &b).unwrap() {
            graph.connect(&a, &b, rng.gen_range(1..10)).unwrap();
            pairs.push((a, b));
        }
    }

    for &(a, b) in pairs.iter() {
        assert!(graph.are_neighbors(&a, &b).unwrap());
        assert!(graph.are_neighbors(&b, &a).unwrap());
        assert_eq!(graph.get_weight(&a, &b).unwrap(), graph.get_weight(&b, &a).unwrap());
    }
    assert_eq!(degree_sum(&graph), 2 * graph.number_of_edges());

    for &(a, b) in pairs.iter() {
        let before = graph.number_of_edges();
        graph.disconnect(&a, &b).unwrap();
        assert!(!graph.are_neighbors(&a, &b).unwrap());
        assert!(!graph.are_neighbors(&b, &a).unwrap());
        assert_eq!(graph.number_of_edges(), before - 1);
        assert_eq!(degree_sum(&graph), 2 * graph.number_of_edges());
    }
}

#[test]
fn error_families() {
    let mut graph = letters(&["a", "b", "c"]);
    graph.connect_default(&"a", &"b").unwrap();

    assert!(graph.connect(&"a", &"x", 1).unwrap_err().is_not_found());
    assert!(graph.disconnect(&"x", &"a").unwrap_err().is_not_found());
    assert!(graph.degree_of(&"x").unwrap_err().is_not_found());
    assert!(graph.connect(&"b", &"a", 1).unwrap_err().is_invalid_argument());
    assert!(graph.connect(&"c", &"c", 1).unwrap_err().is_invalid_argument());
    assert!(graph.connect(&"a", &"c", 0).unwrap_err().is_invalid_argument());
    assert!(matches!(
        graph.disconnect(&"a", &"c"),
        Err(Error::NotConnected(..))
    ));
    assert!(graph.insert_vertex("a").unwrap_err().is_invalid_argument());

    assert_eq!(graph.number_of_edges(), 1);
    assert_eq!(graph.degree_of(&"a").unwrap(), 1);
    assert_eq!(graph.degree_of(&"c").unwrap(), 0);
}

#[test]
fn traverse_visits_reachable_vertices_once() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut graph = random_graph(&mut rng, 40, 70, 5);
    for vertex in 40..45 {
        graph.insert_vertex(vertex).unwrap();
    }
    graph.connect_default(&40, &41).unwrap();

    for order in [TraversalOrder::Bfs, TraversalOrder::Dfs] {
        let mut visited = vec![0; 45];
        graph
            .traverse(&0, order, |vertex| {
                assert_eq!(vertex.color(), Color::Visited);
                visited[*vertex.get() as usize] += 1;
            })
            .unwrap();

        assert!(visited[..40].iter().all(|&count| count == 1));
        assert!(visited[40..].iter().all(|&count| count == 0));

        graph.for_each_vertex(|vertex| assert_eq!(vertex.color(), Color::Neutral));
    }
}

#[test]
fn traverse_exposes_frontier_colors() {
    let mut graph = letters(&["a", "b", "c", "d"]);
    graph.connect_default(&"a", &"b").unwrap();
    graph.connect_default(&"b", &"c").unwrap();

    let mut seen = Vec::new();
    graph
        .bfs(&"a", |vertex| {
            let neighbor_colors: Vec<_> = vertex
                .neighbors()
                .map(|(neighbor, _)| (*neighbor.get(), neighbor.color()))
                .collect();
            seen.push((*vertex.get(), neighbor_colors));
        })
        .unwrap();

    assert_eq!(
        seen,
        vec![
            ("a", vec![("b", Color::Unvisited)]),
            ("b", vec![("a", Color::Visited), ("c", Color::Unvisited)]),
            ("c", vec![("b", Color::Visited)]),
        ]
    );
    assert_eq!(graph.vertex(&"d").unwrap().color(), Color::Neutral);
}

#[test]
fn traverse_from_unknown_origin() {
    let graph = letters(&["a"]);
    let mut calls = 0;
    let result = graph.dfs(&"z", |_| calls += 1);
    assert!(matches!(result, Err(Error::VertexNotFound)));
    assert_eq!(calls, 0);
}

#[test]
fn connectivity_follows_edges() {
    let mut graph = letters(&["a", "b", "c"]);
    assert!(!graph.is_connected());

    graph.connect_default(&"a", &"b").unwrap();
    graph.connect_default(&"b", &"c").unwrap();
    assert!(graph.is_connected());

    graph.disconnect(&"a", &"b").unwrap();
    assert!(!graph.is_connected());

    graph.remove_vertex(&"a").unwrap();
    assert!(graph.is_connected());
    assert_eq!(graph.number_of_edges(), 1);
}

#[test]
fn clear_empties_graph() {
    let mut graph = letters(&["a", "b"]);
    graph.connect_default(&"a", &"b").unwrap();
    graph.clear();

    assert!(graph.is_empty());
    assert_eq!(graph.number_of_edges(), 0);
    assert!(!graph.contains(&"a"));
    assert!(graph.is_connected());
}
