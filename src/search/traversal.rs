use std::collections::VecDeque;

use log::debug;

use super::search_data::SearchData;
use crate::{
    error::Result,
    graphs::{
        check_vertex,
        vertex::{Color, TraversalOrder},
        Graph, VertexId,
    },
};

/// Visits every vertex reachable from `origin` exactly once.
///
/// A vertex is colored visited when it is discovered and handed to `visit`
/// when it leaves the frontier, together with the colors of all vertices at
/// that moment. The frontier is a queue for BFS and a stack for DFS.
pub fn traverse<F>(
    graph: &dyn Graph,
    origin: VertexId,
    order: TraversalOrder,
    mut visit: F,
) -> Result<()>
where
    F: FnMut(VertexId, &[Color]),
{
    check_vertex(graph, origin)?;

    let mut data = SearchData::new(graph);
    let mut frontier = VecDeque::new();
    data.set_color(origin, Color::Visited);
    frontier.push_back(origin);

    let mut number_of_visited = 0;
    while let Some(tail) = match order {
        TraversalOrder::Bfs => frontier.pop_front(),
        TraversalOrder::Dfs => frontier.pop_back(),
    } {
        visit(tail, data.colors());
        number_of_visited += 1;

        for edge in graph.edges(tail) {
            if data.color(edge.head) == Color::Unvisited {
                data.set_color(edge.head, Color::Visited);
                frontier.push_back(edge.head);
            }
        }
    }
    debug!(
        "{:?} from {} visited {} vertices",
        order, origin, number_of_visited
    );

    Ok(())
}

/// True iff a single traversal from any vertex reaches all of them.
pub fn is_connected(graph: &dyn Graph) -> bool {
    if graph.number_of_vertices() == 0 {
        return true;
    }

    let mut number_of_visited = 0;
    traverse(graph, 0, TraversalOrder::Dfs, |_, _| number_of_visited += 1).is_ok()
        && number_of_visited == graph.number_of_vertices()
}

#[cfg(test)]
mod tests {
    use super::{is_connected, traverse};
    use crate::{
        error::Error,
        graphs::{
            undirected_graph::UndirectedGraph,
            vertex::{Color, TraversalOrder},
        },
    };

    // 0 - 1 - 3
    //  \
    //   2      4
    fn forked_graph() -> UndirectedGraph<u32> {
        let mut graph = UndirectedGraph::new();
        for vertex in 0..5 {
            graph.insert_vertex(vertex).unwrap();
        }
        graph.connect_default(&0, &1).unwrap();
        graph.connect_default(&0, &2).unwrap();
        graph.connect_default(&1, &3).unwrap();
        graph
    }

    #[test]
    fn bfs_visits_layer_by_layer() {
        let graph = forked_graph();
        let mut order = Vec::new();
        traverse(&graph, 0, TraversalOrder::Bfs, |vertex, _| order.push(vertex)).unwrap();
        assert_eq!(order, vec![0, 1, 2, 3]);
    }

    #[test]
    fn dfs_follows_the_stack() {
        let graph = forked_graph();
        let mut order = Vec::new();
        traverse(&graph, 0, TraversalOrder::Dfs, |vertex, _| order.push(vertex)).unwrap();
        assert_eq!(order, vec![0, 2, 1, 3]);
    }

    #[test]
    fn visited_vertices_are_colored() {
        let graph = forked_graph();
        traverse(&graph, 3, TraversalOrder::Bfs, |vertex, colors| {
            assert_eq!(colors[vertex as usize], Color::Visited);
            assert_eq!(colors[4], Color::Unvisited);
        })
        .unwrap();
    }

    #[test]
    fn unknown_origin() {
        let graph = forked_graph();
        let result = traverse(&graph, 9, TraversalOrder::Dfs, |_, _| {});
        assert!(matches!(result, Err(Error::VertexNotFound)));
    }

    #[test]
    fn connectivity() {
        let mut graph = forked_graph();
        assert!(!is_connected(&graph));

        graph.connect_default(&3, &4).unwrap();
        assert!(is_connected(&graph));

        assert!(is_connected(&UndirectedGraph::<u32>::new()));
    }
}
