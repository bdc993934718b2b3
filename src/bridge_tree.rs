use crate::components::connected_components;
use crate::error::Result;
use crate::graph::Graph;
use crate::types::{BridgeTreeGraph, Label};
use petgraph::graph::NodeIndex;
use std::collections::BTreeSet;
use tracing::{debug, instrument, trace};

/// Graph contracted along its bridges.
///
/// Every 2-edge-connected component becomes one node of `tree`; every bridge
/// becomes one edge between the components of its endpoints.
#[derive(Debug, Clone)]
pub struct BridgeTree<L: Label> {
    /// Members of each 2-edge-connected component, in original node order.
    /// Component ids are dense and follow discovery order.
    pub components: Vec<Vec<L>>,
    /// Component id of every node, indexed like the original graph's nodes.
    pub component_of: Vec<usize>,
    /// Tree (forest if the input is disconnected) over component ids.
    /// Node `i` carries weight `i`.
    pub tree: BridgeTreeGraph,
}

impl<L: Label> BridgeTree<L> {
    /// Component id of a node label.
    pub fn component_of_label(&self, graph: &Graph<L>, label: &L) -> Result<usize> {
        Ok(self.component_of[graph.index_of(label)?.index()])
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Tree edges as ordered pairs of component ids.
    pub fn tree_edges(&self) -> BTreeSet<(usize, usize)> {
        self.tree
            .edge_indices()
            .filter_map(|e| self.tree.edge_endpoints(e))
            .map(|(a, b)| {
                let (a, b) = (self.tree[a], self.tree[b]);
                (a.min(b), a.max(b))
            })
            .collect()
    }
}

/// Contracts `graph` along `bridges` into its bridge tree.
///
/// Bridges are removed from a copy of the graph, the connected components of
/// what is left are the 2-edge-connected components. Several bridges between the
/// same two components collapse into one tree edge.
///
/// Fails if a pair in `bridges` is not an edge of `graph`.
#[instrument(skip_all, fields(nodes = graph.node_count(), bridges = bridges.len()))]
pub fn contract<L: Label>(graph: &Graph<L>, bridges: &BTreeSet<(L, L)>) -> Result<BridgeTree<L>> {
    let reduced = graph.without_edges(bridges)?;
    let components = connected_components(reduced.as_petgraph());

    let members = components
        .members()
        .into_iter()
        .map(|nodes| nodes.into_iter().map(|n| reduced.as_petgraph()[n].clone()).collect())
        .collect();

    let mut tree = BridgeTreeGraph::with_capacity(components.count, bridges.len());
    for id in 0..components.count {
        tree.add_node(id);
    }

    for (u, v) in bridges {
        let cu = components.component_of[graph.index_of(u)?.index()];
        let cv = components.component_of[graph.index_of(v)?.index()];
        if cu == cv {
            // not a real bridge, both ends stayed connected
            trace!(?u, ?v, component = cu, "edge inside a component");
            continue;
        }
        tree.update_edge(NodeIndex::new(cu), NodeIndex::new(cv), ());
    }

    debug!(
        components = components.count,
        tree_edges = tree.edge_count(),
        "bridge tree built"
    );

    Ok(BridgeTree {
        components: members,
        component_of: components.component_of,
        tree,
    })
}
