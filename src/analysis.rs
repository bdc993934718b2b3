use crate::bridge_tree::{BridgeTree, contract};
use crate::bridges::find_bridges;
use crate::error::{GraphError, TreeError};
use crate::graph::Graph;
use crate::spanning_tree::{SpanningForest, minimum_spanning_forest};
use crate::tree_code::{bracket_code, prufer_code};
use crate::types::Label;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::{info, instrument};

/// Codes of one tree of the spanning forest.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeCodes<L> {
    /// Labels of the tree, in original node order.
    pub nodes: Vec<L>,
    pub prufer: Vec<L>,
    pub bracket: String,
}

/// Everything the pipeline derives from one graph. Formatting is up to the caller.
#[derive(Debug, Clone)]
pub struct Analysis<L: Label> {
    pub bridges: BTreeSet<(L, L)>,
    pub bridge_tree: BridgeTree<L>,
    pub spanning_forest: SpanningForest<L>,
    /// One entry per tree of the spanning forest, in discovery order.
    pub codes: Vec<TreeCodes<L>>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AnalysisError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Tree(#[from] TreeError),
}

/// Runs the whole decomposition once:
/// bridges, bridge tree, minimum spanning forest, and the Prufer and bracket
/// codes of every tree in that forest.
#[instrument(skip_all, fields(nodes = graph.node_count(), edges = graph.edge_count()))]
pub fn analyze<L: Label>(graph: &Graph<L>) -> Result<Analysis<L>, AnalysisError> {
    let bridges = find_bridges(graph);
    let bridge_tree = contract(graph, &bridges)?;
    let spanning_forest = minimum_spanning_forest(graph);

    let codes = spanning_forest
        .trees()
        .iter()
        .map(|tree| {
            Ok(TreeCodes {
                nodes: tree.node_weights().cloned().collect(),
                prufer: prufer_code(tree)?,
                bracket: bracket_code(tree)?,
            })
        })
        .collect::<Result<Vec<_>, TreeError>>()?;

    info!(
        bridges = bridges.len(),
        components = bridge_tree.component_count(),
        trees = codes.len(),
        total_weight = spanning_forest.total_weight,
        "analysis finished"
    );

    Ok(Analysis {
        bridges,
        bridge_tree,
        spanning_forest,
        codes,
    })
}
