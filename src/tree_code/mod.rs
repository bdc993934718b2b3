//! Canonical encodings of a single tree.
//!
//! Both encoders accept any petgraph undirected graph whose node weights are
//! ordered labels, so they work on spanning trees and bridge trees alike.
//! Inputs that are not trees are rejected with [`TreeError::NotATree`](crate::error::TreeError).

pub mod bracket;
pub mod prufer;

pub use bracket::bracket_code;
pub use prufer::{decode_prufer, prufer_code};
