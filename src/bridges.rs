use crate::graph::Graph;
use crate::types::{Label, WeightedGraph};
use fixedbitset::FixedBitSet;
use petgraph::Undirected;
use petgraph::graph::{EdgeIndex, Edges, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::BTreeSet;
use tracing::{debug, instrument, trace};

/// Returns every bridge of the graph as an ordered label pair (smaller label first).
///
/// A bridge is an edge whose removal disconnects its endpoints. The graph may be
/// disconnected, every component is searched.
///
/// Runs in O(V + E) with an explicit stack, so deep graphs do not grow the call stack.
#[instrument(skip_all, fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn find_bridges<L: Label>(graph: &Graph<L>) -> BTreeSet<(L, L)> {
    let bridges: BTreeSet<(L, L)> = find_bridge_edges(graph.as_petgraph())
        .into_iter()
        .filter_map(|e| graph.edge_key(e))
        .collect();
    debug!(bridges = bridges.len(), "bridge search finished");
    bridges
}

/// Same as [`find_bridges`], but on petgraph indices.
///
/// Bridges are returned in the order the DFS closes them.
pub fn find_bridge_edges<L>(graph: &WeightedGraph<L>) -> Vec<EdgeIndex> {
    let mut search = BridgeSearch::new(graph.node_count());
    for root in graph.node_indices() {
        if !search.visited.contains(root.index()) {
            search.run(graph, root);
        }
    }
    search.bridges
}

/// DFS state of one bridge search: discovery times, low-links and the bridges found.
#[derive(Debug)]
struct BridgeSearch {
    visited: FixedBitSet,
    disc: Vec<usize>,
    low: Vec<usize>,
    time: usize,
    bridges: Vec<EdgeIndex>,
}

/// One node on the explicit DFS stack.
///
/// The parent is remembered by edge, not by node, so a second edge to the
/// parent would still count as a back edge.
struct Frame<'a> {
    node: NodeIndex,
    parent_edge: Option<EdgeIndex>,
    edges: Edges<'a, f64, Undirected>,
}

impl BridgeSearch {
    fn new(graph_size: usize) -> Self {
        Self {
            visited: FixedBitSet::with_capacity(graph_size),
            disc: vec![usize::MAX; graph_size],
            low: vec![usize::MAX; graph_size],
            time: 0,
            bridges: Vec::new(),
        }
    }

    fn discover(&mut self, u: NodeIndex) {
        self.visited.insert(u.index());
        self.disc[u.index()] = self.time;
        self.low[u.index()] = self.time;
        self.time += 1;
    }

    fn run<L>(&mut self, graph: &WeightedGraph<L>, root: NodeIndex) {
        self.discover(root);
        let mut stack = vec![Frame {
            node: root,
            parent_edge: None,
            edges: graph.edges(root),
        }];

        while let Some(frame) = stack.last_mut() {
            let u = frame.node;
            let parent_edge = frame.parent_edge;

            match frame.edges.next() {
                Some(edge) if Some(edge.id()) == parent_edge => {}
                Some(edge) => {
                    let v = if edge.source() == u { edge.target() } else { edge.source() };
                    if !self.visited.contains(v.index()) {
                        self.discover(v);
                        stack.push(Frame {
                            node: v,
                            parent_edge: Some(edge.id()),
                            edges: graph.edges(v),
                        });
                    } else {
                        // back edge
                        self.low[u.index()] = self.low[u.index()].min(self.disc[v.index()]);
                    }
                }
                None => {
                    stack.pop();
                    let (Some(edge), Some(parent)) = (parent_edge, stack.last()) else {
                        continue;
                    };
                    let p = parent.node.index();
                    self.low[p] = self.low[p].min(self.low[u.index()]);
                    if self.low[u.index()] > self.disc[p] {
                        trace!(edge = edge.index(), "bridge");
                        self.bridges.push(edge);
                    }
                }
            }
        }
    }
}
