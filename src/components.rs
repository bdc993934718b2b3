use crate::error::TreeError;
use fixedbitset::FixedBitSet;
use petgraph::graph::{NodeIndex, UnGraph};

/// Connected components of a graph.
///
/// Ids are dense, `0..count`, assigned in the order components are discovered
/// when scanning nodes by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    pub count: usize,
    /// Maps node index to component id.
    pub component_of: Vec<usize>,
}

impl Components {
    /// Node indices of every component, each in discovery order.
    pub fn members(&self) -> Vec<Vec<NodeIndex>> {
        let mut members = vec![Vec::new(); self.count];
        for (node, &id) in self.component_of.iter().enumerate() {
            members[id].push(NodeIndex::new(node));
        }
        members
    }
}

/// Labels connected components with an iterative DFS. O(V + E).
pub fn connected_components<N, E>(graph: &UnGraph<N, E>) -> Components {
    let graph_size = graph.node_count();
    let mut visited = FixedBitSet::with_capacity(graph_size);
    let mut component_of = vec![usize::MAX; graph_size];
    let mut stack = Vec::new();
    let mut count = 0;

    for root in graph.node_indices() {
        if visited.put(root.index()) {
            continue;
        }
        stack.push(root);
        while let Some(u) = stack.pop() {
            component_of[u.index()] = count;
            for v in graph.neighbors(u) {
                if !visited.put(v.index()) {
                    stack.push(v);
                }
            }
        }
        count += 1;
    }

    Components {
        count,
        component_of,
    }
}

/// Checks that `graph` is a tree: connected with exactly `n - 1` edges.
///
/// Graphs with 0 or 1 nodes and no edges pass.
pub fn ensure_tree<N, E>(graph: &UnGraph<N, E>) -> Result<(), TreeError> {
    let nodes = graph.node_count();
    let edges = graph.edge_count();
    let components = connected_components(graph).count;
    if edges + 1 == nodes.max(1) && components <= 1 {
        Ok(())
    } else {
        Err(TreeError::NotATree {
            nodes,
            edges,
            components,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: u32, edges: &[(u32, u32)]) -> UnGraph<u32, ()> {
        let mut g = UnGraph::new_undirected();
        for i in 0..n {
            g.add_node(i);
        }
        for &(u, v) in edges {
            g.add_edge(NodeIndex::new(u as usize), NodeIndex::new(v as usize), ());
        }
        g
    }

    #[test]
    fn test_components_discovery_order() {
        let g = graph(6, &[(4, 5), (0, 2), (1, 3)]);
        let c = connected_components(&g);
        assert_eq!(c.count, 3);
        assert_eq!(c.component_of, vec![0, 1, 0, 1, 2, 2]);
        assert_eq!(
            c.members(),
            vec![
                vec![NodeIndex::new(0), NodeIndex::new(2)],
                vec![NodeIndex::new(1), NodeIndex::new(3)],
                vec![NodeIndex::new(4), NodeIndex::new(5)],
            ]
        );
    }

    #[test]
    fn test_empty_graph_has_no_components() {
        let c = connected_components(&graph(0, &[]));
        assert_eq!(c.count, 0);
        assert!(c.component_of.is_empty());
    }

    #[test]
    fn test_ensure_tree() {
        assert!(ensure_tree(&graph(0, &[])).is_ok());
        assert!(ensure_tree(&graph(1, &[])).is_ok());
        assert!(ensure_tree(&graph(3, &[(0, 1), (1, 2)])).is_ok());
        assert_eq!(
            ensure_tree(&graph(3, &[(0, 1), (1, 2), (2, 0)])),
            Err(TreeError::NotATree {
                nodes: 3,
                edges: 3,
                components: 1
            })
        );
        assert_eq!(
            ensure_tree(&graph(4, &[(0, 1), (2, 3)])),
            Err(TreeError::NotATree {
                nodes: 4,
                edges: 2,
                components: 2
            })
        );
        // right edge count, but a cycle plus an isolated node
        assert!(ensure_tree(&graph(4, &[(0, 1), (1, 2), (2, 0)])).is_err());
        assert!(ensure_tree(&graph(1, &[(0, 0)])).is_err());
    }
}
