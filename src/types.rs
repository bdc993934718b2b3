use std::fmt::Debug;
use std::hash::Hash;

/// Anything that can name a node.
///
/// Labels must be totally ordered: every tie-break in this crate
/// (Prufer leaf choice, bracket code root and child order, MST edge order)
/// is decided by label order.
pub trait Label: Ord + Clone + Hash + Debug {}

impl<T: Ord + Clone + Hash + Debug> Label for T {}

/// Wrapper for petgraph's weighted undirected graph type.
pub type WeightedGraph<L> = petgraph::graph::UnGraph<L, f64>;

/// Tree of 2-edge-connected components. Node weight is the component id.
pub type BridgeTreeGraph = petgraph::graph::UnGraph<usize, ()>;

/// An undirected, weighted edge between two labelled nodes.
///
/// Edges produced by this crate are normalized so that `source <= target`.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge<L> {
    pub source: L,
    pub target: L,
    pub weight: f64,
}

impl<L: Label> Edge<L> {
    /// Creates an edge with endpoints ordered by label.
    pub fn new(a: L, b: L, weight: f64) -> Self {
        if a <= b {
            Self { source: a, target: b, weight }
        } else {
            Self { source: b, target: a, weight }
        }
    }

    /// Endpoints as an ordered pair, the key used in bridge sets.
    pub fn key(&self) -> (L, L) {
        (self.source.clone(), self.target.clone())
    }
}

/// Orders a pair of labels so that the smaller one comes first.
pub fn ordered_pair<L: Ord>(a: L, b: L) -> (L, L) {
    if a <= b { (a, b) } else { (b, a) }
}
