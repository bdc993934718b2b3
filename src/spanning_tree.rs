use crate::components::connected_components;
use crate::graph::Graph;
use crate::types::{Edge, Label, WeightedGraph};
use fixedbitset::FixedBitSet;
use petgraph::graph::{EdgeIndex, NodeIndex};
use petgraph::unionfind::UnionFind;
use petgraph::visit::EdgeRef;
use radsort::sort_by_key;
use tracing::{debug, instrument, trace};

/// Minimum spanning forest: one minimum spanning tree per connected component.
#[derive(Debug, Clone)]
pub struct SpanningForest<L: Label> {
    /// Chosen edges in the order Kruskal accepted them.
    pub edges: Vec<Edge<L>>,
    pub total_weight: f64,
    /// All nodes of the input and only the chosen edges. Node indices match the input.
    pub forest: WeightedGraph<L>,
}

impl<L: Label> SpanningForest<L> {
    /// Number of trees, isolated nodes included.
    pub fn tree_count(&self) -> usize {
        connected_components(&self.forest).count
    }

    /// Splits the forest into one tree per connected component, in discovery order.
    ///
    /// Encoders expect a single tree, so this is what they should be fed.
    pub fn trees(&self) -> Vec<WeightedGraph<L>> {
        let components = connected_components(&self.forest);
        let mut trees = vec![WeightedGraph::default(); components.count];
        let mut local = vec![NodeIndex::end(); self.forest.node_count()];

        for node in self.forest.node_indices() {
            let c = components.component_of[node.index()];
            local[node.index()] = trees[c].add_node(self.forest[node].clone());
        }
        for e in self.forest.edge_references() {
            let c = components.component_of[e.source().index()];
            trees[c].add_edge(local[e.source().index()], local[e.target().index()], *e.weight());
        }
        trees
    }
}

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// Edges are tried by ascending weight; equal weights are ordered by the
/// (smaller label, larger label) pair of their endpoints, so the result is the same
/// on every run. Disconnected input gives a forest, not an error.
///
/// O(E log E).
#[instrument(skip_all, fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn minimum_spanning_forest<L: Label>(graph: &Graph<L>) -> SpanningForest<L> {
    let g = graph.as_petgraph();

    let mut candidates: Vec<(EdgeIndex, NodeIndex, NodeIndex, f64)> = g
        .edge_references()
        .map(|e| {
            let (a, b) = (e.source(), e.target());
            let (a, b) = if g[a] <= g[b] { (a, b) } else { (b, a) };
            (e.id(), a, b, *e.weight())
        })
        .collect();
    // radsort is stable: label order survives as the tie-break of the weight sort
    candidates.sort_by(|x, y| g[x.1].cmp(&g[y.1]).then_with(|| g[x.2].cmp(&g[y.2])));
    sort_by_key(&mut candidates, |c| c.3);

    let mut sets = UnionFind::<usize>::new(g.node_count());
    let mut chosen = FixedBitSet::with_capacity(g.edge_count());
    let mut edges = Vec::with_capacity(g.node_count().saturating_sub(1));
    let mut total_weight = 0.0;

    for (id, a, b, weight) in candidates {
        if !sets.union(a.index(), b.index()) {
            trace!(edge = id.index(), "would close a cycle");
            continue;
        }
        chosen.insert(id.index());
        edges.push(Edge::new(g[a].clone(), g[b].clone(), weight));
        total_weight += weight;
    }

    let forest = g.filter_map(
        |_, label| Some(label.clone()),
        |e, weight| chosen.contains(e.index()).then_some(*weight),
    );

    debug!(edges = edges.len(), total_weight, "spanning forest built");

    SpanningForest {
        edges,
        total_weight,
        forest,
    }
}
