//! Error types returned by graph construction and tree encoding.

use thiserror::Error;

/// Malformed graph input. Raised at construction time, never repaired.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// The same label was given to two nodes.
    #[error("duplicate node label {label}")]
    DuplicateLabel { label: String },
    /// An edge joins a node to itself.
    #[error("self-loop on node {label}")]
    SelfLoop { label: String },
    /// A second edge between an already connected pair.
    #[error("parallel edge between {source_label} and {target_label}")]
    ParallelEdge {
        source_label: String,
        target_label: String,
    },
    /// A label that is not a node of the graph.
    #[error("unknown node {label}")]
    UnknownNode { label: String },
    /// A pair of labels that is not an edge of the graph.
    #[error("no edge between {source_label} and {target_label}")]
    UnknownEdge {
        source_label: String,
        target_label: String,
    },
    /// Adjacency table has a different number of rows than labels.
    #[error("adjacency table has {found} rows for {expected} labels")]
    RowCount { expected: usize, found: usize },
    /// A row of the adjacency table has the wrong length.
    #[error("adjacency table is not square: expected {expected} entries, row {row} has {found}")]
    NotSquare {
        expected: usize,
        row: usize,
        found: usize,
    },
    /// Weight at (row, column) differs from the weight at (column, row).
    #[error("adjacency table is not symmetric between {row_label} and {column_label}")]
    Asymmetric {
        row_label: String,
        column_label: String,
    },
    /// The input file could not be opened or read.
    #[error("cannot read {path}: {message}")]
    Io { path: String, message: String },
    /// Text input could not be read as an adjacency table.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },
}

/// An encoder was called on something that is not a tree.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// The input has a cycle or is disconnected.
    #[error("not a tree: {nodes} nodes, {edges} edges, {components} connected components")]
    NotATree {
        nodes: usize,
        edges: usize,
        components: usize,
    },
    /// Prufer sequence that does not fit the given node labels.
    #[error("invalid Prufer sequence: {reason}")]
    InvalidPrufer { reason: String },
}

pub type Result<T, E = GraphError> = std::result::Result<T, E>;

pub(crate) fn describe<L: std::fmt::Debug>(label: &L) -> String {
    format!("{label:?}")
}
