use crate::error::{GraphError, Result, describe};
use crate::types::{Edge, Label, WeightedGraph, ordered_pair};
use hashbrown::HashMap;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::trace;

/// Static, weighted, undirected simple graph with labelled nodes.
///
/// Invariants kept by every constructor:
/// - labels are unique,
/// - no self-loops and no parallel edges,
/// - every weight is a number (missing or NaN weights become 0).
///
/// Node order is insertion order. Traversals in this crate start from nodes in
/// that order, so two graphs built the same way are decomposed the same way.
#[derive(Debug, Clone)]
pub struct Graph<L: Label> {
    graph: WeightedGraph<L>,
    index: HashMap<L, NodeIndex>,
}

impl<L: Label> Default for Graph<L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Missing and NaN weights count as 0, and `-0.0` is stored as `0.0`.
pub fn normalize_weight(weight: Option<f64>) -> f64 {
    match weight {
        // adding +0.0 turns -0.0 into +0.0 so radix sorts see equal keys
        Some(w) if !w.is_nan() => w + 0.0,
        _ => 0.0,
    }
}

impl<L: Label> Graph<L> {
    pub fn new() -> Self {
        Self {
            graph: WeightedGraph::default(),
            index: HashMap::new(),
        }
    }

    /// Adds a node. Labels must be unique.
    pub fn add_node(&mut self, label: L) -> Result<NodeIndex> {
        if self.index.contains_key(&label) {
            return Err(GraphError::DuplicateLabel {
                label: describe(&label),
            });
        }
        let idx = self.graph.add_node(label.clone());
        self.index.insert(label, idx);
        Ok(idx)
    }

    /// Adds an edge between two existing nodes.
    ///
    /// `None` and NaN weights are stored as 0.
    pub fn add_edge(&mut self, a: &L, b: &L, weight: Option<f64>) -> Result<EdgeIndex> {
        let u = self.index_of(a)?;
        let v = self.index_of(b)?;
        if u == v {
            return Err(GraphError::SelfLoop { label: describe(a) });
        }
        if self.graph.find_edge(u, v).is_some() {
            return Err(GraphError::ParallelEdge {
                source_label: describe(a),
                target_label: describe(b),
            });
        }
        Ok(self.graph.add_edge(u, v, normalize_weight(weight)))
    }

    /// Builds a graph from an edge list. Endpoints are added as nodes on first sight.
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (L, L, Option<f64>)>,
    {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            for label in [&a, &b] {
                if !graph.contains_node(label) {
                    graph.add_node(label.clone())?;
                }
            }
            graph.add_edge(&a, &b, weight)?;
        }
        Ok(graph)
    }

    /// Builds a graph from a square, symmetric adjacency table.
    ///
    /// - the diagonal is ignored,
    /// - `Some(0.0)` means "no edge",
    /// - `None` and `Some(NaN)` mean an edge with a missing weight, stored as 0,
    /// - any other value is the weight of the edge.
    pub fn from_adjacency(labels: Vec<L>, rows: &[Vec<Option<f64>>]) -> Result<Self> {
        let n = labels.len();
        if rows.len() != n {
            return Err(GraphError::RowCount {
                expected: n,
                found: rows.len(),
            });
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(GraphError::NotSquare {
                expected: n,
                row,
                found: cells.len(),
            });
        }

        let mut graph = Self::new();
        for label in &labels {
            graph.add_node(label.clone())?;
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let forward = cell_weight(rows[i][j]);
                let backward = cell_weight(rows[j][i]);
                if forward != backward {
                    return Err(GraphError::Asymmetric {
                        row_label: describe(&labels[i]),
                        column_label: describe(&labels[j]),
                    });
                }
                if let Some(weight) = forward {
                    graph.add_edge(&labels[i], &labels[j], Some(weight))?;
                }
            }
        }

        trace!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "loaded adjacency table"
        );
        Ok(graph)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Node labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &L> {
        self.graph.node_indices().map(|n| &self.graph[n])
    }

    pub fn contains_node(&self, label: &L) -> bool {
        self.index.contains_key(label)
    }

    pub fn index_of(&self, label: &L) -> Result<NodeIndex> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode {
                label: describe(label),
            })
    }

    pub fn label_of(&self, node: NodeIndex) -> Option<&L> {
        self.graph.node_weight(node)
    }

    /// Weight of the edge between `a` and `b`, if there is one.
    pub fn weight(&self, a: &L, b: &L) -> Option<f64> {
        let u = self.index.get(a)?;
        let v = self.index.get(b)?;
        self.graph
            .find_edge(*u, *v)
            .and_then(|e| self.graph.edge_weight(e).copied())
    }

    /// Neighbours of `label` together with the connecting edge weight.
    pub fn neighbors(&self, label: &L) -> Result<impl Iterator<Item = (&L, f64)>> {
        let u = self.index_of(label)?;
        Ok(self.graph.edges(u).map(move |e| {
            let v = if e.source() == u { e.target() } else { e.source() };
            (&self.graph[v], *e.weight())
        }))
    }

    /// All edges, normalized so that `source <= target`.
    pub fn edges(&self) -> impl Iterator<Item = Edge<L>> + '_ {
        self.graph.edge_references().map(|e| {
            Edge::new(
                self.graph[e.source()].clone(),
                self.graph[e.target()].clone(),
                *e.weight(),
            )
        })
    }

    /// Label pair of an edge index, smaller label first.
    pub fn edge_key(&self, edge: EdgeIndex) -> Option<(L, L)> {
        let (u, v) = self.graph.edge_endpoints(edge)?;
        Some(ordered_pair(self.graph[u].clone(), self.graph[v].clone()))
    }

    /// Removes the edge between `a` and `b` and returns its weight.
    ///
    /// Node indices stay valid; edge indices may be reused by petgraph.
    pub fn remove_edge(&mut self, a: &L, b: &L) -> Result<f64> {
        let u = self.index_of(a)?;
        let v = self.index_of(b)?;
        self.graph
            .find_edge(u, v)
            .and_then(|e| self.graph.remove_edge(e))
            .ok_or_else(|| GraphError::UnknownEdge {
                source_label: describe(a),
                target_label: describe(b),
            })
    }

    /// Copy of the graph without the given edges. The original is left untouched.
    pub fn without_edges<'a, I>(&self, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a (L, L)>,
        L: 'a,
    {
        let mut reduced = self.clone();
        for (a, b) in edges {
            reduced.remove_edge(a, b)?;
        }
        Ok(reduced)
    }

    /// The underlying petgraph graph, for read-only algorithms.
    pub fn as_petgraph(&self) -> &WeightedGraph<L> {
        &self.graph
    }
}

/// Edge weight encoded by an adjacency cell, `None` when the cell means "no edge".
fn cell_weight(cell: Option<f64>) -> Option<f64> {
    match cell {
        Some(w) if w == 0.0 => None,
        other => Some(normalize_weight(other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> Graph<&'static str> {
        Graph::from_edges([
            ("A", "B", Some(1.0)),
            ("B", "C", None),
            ("C", "D", Some(f64::NAN)),
        ])
        .unwrap()
    }

    #[test]
    fn test_missing_weights_become_zero() {
        let g = path();
        assert_eq!(g.node_count(), 4);
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.weight(&"A", &"B"), Some(1.0));
        assert_eq!(g.weight(&"B", &"C"), Some(0.0));
        assert_eq!(g.weight(&"D", &"C"), Some(0.0));
        assert_eq!(g.weight(&"A", &"C"), None);
    }

    #[test]
    fn test_negative_zero_is_stored_as_zero() {
        let g = Graph::from_edges([(0, 1, Some(-0.0)), (1, 2, Some(-1.5))]).unwrap();
        let w = g.weight(&0, &1).unwrap();
        assert_eq!(w, 0.0);
        assert!(w.is_sign_positive());
        assert_eq!(g.weight(&1, &2), Some(-1.5));
    }

    #[test]
    fn test_labels_in_insertion_order() {
        let g = path();
        assert_eq!(g.labels().copied().collect::<Vec<_>>(), vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_rejects_malformed_input() {
        let mut g = path();
        assert_eq!(
            g.add_node("A"),
            Err(GraphError::DuplicateLabel {
                label: "\"A\"".to_string()
            })
        );
        assert!(matches!(
            g.add_edge(&"A", &"A", None),
            Err(GraphError::SelfLoop { .. })
        ));
        assert!(matches!(
            g.add_edge(&"B", &"A", Some(3.0)),
            Err(GraphError::ParallelEdge { .. })
        ));
        assert!(matches!(
            g.add_edge(&"A", &"Z", None),
            Err(GraphError::UnknownNode { .. })
        ));
    }

    #[test]
    fn test_neighbors() {
        let g = path();
        let mut n: Vec<_> = g.neighbors(&"B").unwrap().collect();
        n.sort_by(|a, b| a.0.cmp(b.0));
        assert_eq!(n, vec![(&"A", 1.0), (&"C", 0.0)]);
        assert!(g.neighbors(&"Q").is_err());
    }

    #[test]
    fn test_without_edges_keeps_original() {
        let g = path();
        let reduced = g.without_edges(&[("B", "C")]).unwrap();
        assert_eq!(reduced.edge_count(), 2);
        assert_eq!(reduced.weight(&"B", &"C"), None);
        assert_eq!(g.edge_count(), 3);
        assert!(matches!(
            g.without_edges(&[("A", "D")]),
            Err(GraphError::UnknownEdge { .. })
        ));
    }

    #[test]
    fn test_from_adjacency() {
        let rows = vec![
            vec![Some(5.0), Some(2.0), Some(0.0)],
            vec![Some(2.0), None, None],
            vec![Some(0.0), None, Some(0.0)],
        ];
        let g = Graph::from_adjacency(vec!['x', 'y', 'z'], &rows).unwrap();
        assert_eq!(g.edge_count(), 2);
        assert_eq!(g.weight(&'x', &'y'), Some(2.0));
        assert_eq!(g.weight(&'y', &'z'), Some(0.0));
        assert_eq!(g.weight(&'x', &'z'), None);
    }

    #[test]
    fn test_from_adjacency_rejects_bad_tables() {
        let asymmetric = vec![vec![None, Some(1.0)], vec![Some(2.0), None]];
        assert!(matches!(
            Graph::from_adjacency(vec![0, 1], &asymmetric),
            Err(GraphError::Asymmetric { .. })
        ));

        let ragged = vec![vec![None, Some(1.0)], vec![Some(1.0)]];
        assert_eq!(
            Graph::from_adjacency(vec![0, 1], &ragged).unwrap_err(),
            GraphError::NotSquare {
                expected: 2,
                row: 1,
                found: 1
            }
        );

        let square = vec![vec![None, Some(1.0)], vec![Some(1.0), None]];
        assert!(matches!(
            Graph::from_adjacency(vec![0, 0], &square),
            Err(GraphError::DuplicateLabel { .. })
        ));
    }

    #[test]
    fn test_nan_and_missing_cells_are_symmetric() {
        let rows = vec![vec![None, Some(f64::NAN)], vec![None, None]];
        let g = Graph::from_adjacency(vec![1, 2], &rows).unwrap();
        assert_eq!(g.weight(&1, &2), Some(0.0));
    }
}
