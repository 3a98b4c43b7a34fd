use super::{edge::WeightedEdge, Graph};
use crate::search::{Distance, Path};

/// Check if a path is a valid walk through `graph` whose edge weights add up
/// to the reported distance.
pub fn validate_path(graph: &dyn Graph, path: &Path) -> Result<(), String> {
    if path.vertices.is_empty() {
        if path.distance.is_reached() {
            return Err("path is empty but has a finite distance".to_string());
        }
        return Ok(());
    }

    // check if there is an edge between consecutive path vertices.
    let mut distance = Distance::ZERO;
    for pair in path.vertices.windows(2) {
        let (tail, head) = (pair[0], pair[1]);
        match graph.edges(tail).find(|edge| edge.head == head) {
            Some(edge) => distance = distance + edge.weight,
            None => return Err(format!("no edge between {} and {} found", tail, head)),
        }
    }

    if distance != path.distance {
        return Err(format!(
            "wrong path weight, edges add up to {} but path reports {}",
            distance, path.distance
        ));
    }

    Ok(())
}

/// Every undirected edge once, with `tail < head`.
pub fn all_edges(graph: &dyn Graph) -> Vec<WeightedEdge> {
    graph
        .vertices()
        .flat_map(|vertex| graph.edges(vertex).filter(|edge| edge.tail < edge.head))
        .collect()
}

pub fn degree_vec(graph: &dyn Graph) -> Vec<u32> {
    graph
        .vertices()
        .map(|vertex| graph.edges(vertex).len() as u32)
        .collect()
}

/// Sum of all degrees. Twice the number of edges for a consistent graph.
pub fn degree_sum(graph: &dyn Graph) -> u32 {
    degree_vec(graph).iter().sum()
}

#[cfg(test)]
mod tests {
    use super::{all_edges, degree_sum, validate_path};
    use crate::{
        graphs::{edge::WeightedEdge, undirected_graph::UndirectedGraph, Graph},
        search::{Distance, Path},
    };

    fn triangle() -> UndirectedGraph<u32> {
        UndirectedGraph::from_edges(
            vec![0, 1, 2],
            &[
                WeightedEdge::new(0, 1, 2),
                WeightedEdge::new(1, 2, 3),
                WeightedEdge::new(2, 0, 7),
            ],
        )
        .unwrap()
    }

    #[test]
    fn edges_are_counted_once() {
        let graph = triangle();
        assert_eq!(all_edges(&graph).len(), 3);
        assert_eq!(degree_sum(&graph), 2 * graph.number_of_edges());
    }

    #[test]
    fn validates_paths() {
        let graph = triangle();
        let good = Path {
            vertices: vec![0, 1, 2],
            distance: Distance::Finite(5),
        };
        assert!(validate_path(&graph, &good).is_ok());

        let wrong_weight = Path {
            vertices: vec![0, 1, 2],
            distance: Distance::Finite(4),
        };
        assert!(validate_path(&graph, &wrong_weight).is_err());

        assert!(validate_path(&graph, &Path::unreachable()).is_ok());
    }
}
