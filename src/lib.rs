//! # bridge_trees
//!
//! Decomposition of static, weighted, undirected graphs along their bridges,
//! minimum spanning forests, and two canonical codes of trees.
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).
//!
//! - [`find_bridges`] finds every bridge with one linear-time low-link DFS,
//! - [`contract`] turns the 2-edge-connected components into a bridge tree,
//! - [`minimum_spanning_forest`] runs Kruskal with label-ordered tie-breaks,
//! - [`prufer_code`] and [`bracket_code`] encode a single tree.
//!
//! Every traversal uses an explicit stack and every tie is broken by node
//! label, so results are reproducible and deep graphs are safe.
//!
//! ```
//! use bridge_trees::{Graph, bracket_code, find_bridges, minimum_spanning_forest, prufer_code};
//!
//! let graph = Graph::from_edges([("A", "B", None), ("B", "C", None), ("C", "D", None)]).unwrap();
//! assert_eq!(find_bridges(&graph).len(), 3);
//!
//! let forest = minimum_spanning_forest(&graph);
//! let trees = forest.trees();
//! let tree = &trees[0];
//! assert_eq!(prufer_code(tree).unwrap(), vec!["B", "C"]);
//! assert_eq!(bracket_code(tree).unwrap(), "111000");
//! ```

pub mod analysis;
pub mod bridge_tree;
pub mod bridges;
pub mod components;
pub mod error;
pub mod graph;
pub mod input;
pub mod spanning_tree;
pub mod tree_code;
pub mod types;

#[cfg(test)]
mod testing;

pub use analysis::{Analysis, AnalysisError, TreeCodes, analyze};
pub use bridge_tree::{BridgeTree, contract};
pub use bridges::find_bridges;
pub use error::{GraphError, TreeError};
pub use graph::Graph;
pub use input::{from_file, from_str};
pub use spanning_tree::{SpanningForest, minimum_spanning_forest};
pub use tree_code::{bracket_code, decode_prufer, prufer_code};
pub use types::{BridgeTreeGraph, Edge, Label, WeightedGraph};
