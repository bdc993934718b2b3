use crate::graph::Graph;

/// Generates a grid graph with the specified number of rows and columns.
///
/// Node `r * cols + c` sits at row `r`, column `c`. Every edge has weight 1.
pub fn generate_grid_graph(rows: usize, cols: usize) -> Graph<u32> {
    assert!(rows > 1 && cols > 1); // we want a bridgeless graph
    let mut graph = Graph::new();
    let id = |r: usize, c: usize| (r * cols + c) as u32;

    for r in 0..rows {
        for c in 0..cols {
            graph.add_node(id(r, c)).unwrap();
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            if r + 1 < rows {
                graph.add_edge(&id(r, c), &id(r + 1, c), Some(1.0)).unwrap();
            }
            if c + 1 < cols {
                graph.add_edge(&id(r, c), &id(r, c + 1), Some(1.0)).unwrap();
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_grid() {
        let g = generate_grid_graph(2, 2);
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.weight(&0, &2), Some(1.0));
        assert_eq!(g.weight(&0, &3), None);
    }
}
