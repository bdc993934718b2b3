use crate::components::ensure_tree;
use crate::error::TreeError;
use fixedbitset::FixedBitSet;
use petgraph::graph::{NodeIndex, UnGraph};
use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};
use tracing::{debug, instrument};

/// Prufer sequence of a labelled tree.
///
/// Repeatedly removes the leaf with the smallest label and records its neighbour,
/// until two nodes remain. The result has `n - 2` labels; trees with fewer than
/// two nodes give an empty sequence.
///
/// O(n log n).
#[instrument(skip_all, fields(nodes = tree.node_count()))]
pub fn prufer_code<N: Ord + Clone, E>(tree: &UnGraph<N, E>) -> Result<Vec<N>, TreeError> {
    ensure_tree(tree)?;
    let n = tree.node_count();
    if n < 2 {
        return Ok(Vec::new());
    }

    let mut degree: Vec<usize> = tree.node_indices().map(|u| tree.neighbors(u).count()).collect();
    let mut removed = FixedBitSet::with_capacity(n);
    let mut leaves: BinaryHeap<Reverse<(&N, NodeIndex)>> = tree
        .node_indices()
        .filter(|u| degree[u.index()] == 1)
        .map(|u| Reverse((&tree[u], u)))
        .collect();

    let mut code = Vec::with_capacity(n - 2);
    while code.len() < n - 2 {
        let Some(Reverse((_, leaf))) = leaves.pop() else {
            break;
        };
        removed.insert(leaf.index());
        let Some(parent) = tree.neighbors(leaf).find(|v| !removed.contains(v.index())) else {
            break;
        };
        code.push(tree[parent].clone());
        degree[parent.index()] -= 1;
        if degree[parent.index()] == 1 {
            leaves.push(Reverse((&tree[parent], parent)));
        }
    }

    debug!(length = code.len(), "prufer code");
    Ok(code)
}

/// Rebuilds the edges of a tree from its Prufer sequence.
///
/// `labels` are all node labels of the tree (any order, no duplicates) and
/// `code` must have `labels.len() - 2` entries, each one of `labels`.
/// Edges are returned as (smaller, larger) label pairs in the order they are rebuilt.
pub fn decode_prufer<N: Ord + Clone>(code: &[N], labels: &[N]) -> Result<Vec<(N, N)>, TreeError> {
    let n = labels.len();
    if n < 2 {
        return if code.is_empty() {
            Ok(Vec::new())
        } else {
            Err(TreeError::InvalidPrufer {
                reason: format!("{} labels cannot carry a code of length {}", n, code.len()),
            })
        };
    }
    if code.len() != n - 2 {
        return Err(TreeError::InvalidPrufer {
            reason: format!("expected length {}, got {}", n - 2, code.len()),
        });
    }

    let mut degree: BTreeMap<&N, usize> = BTreeMap::new();
    for label in labels {
        if degree.insert(label, 1).is_some() {
            return Err(TreeError::InvalidPrufer {
                reason: "duplicate label".to_string(),
            });
        }
    }
    for label in code {
        match degree.get_mut(label) {
            Some(d) => *d += 1,
            None => {
                return Err(TreeError::InvalidPrufer {
                    reason: "code mentions an unknown label".to_string(),
                });
            }
        }
    }

    let mut leaves: BinaryHeap<Reverse<&N>> = degree
        .iter()
        .filter(|(_, d)| **d == 1)
        .map(|(label, _)| Reverse(*label))
        .collect();

    let mut edges = Vec::with_capacity(n - 1);
    for label in code {
        let Some(Reverse(leaf)) = leaves.pop() else {
            break;
        };
        edges.push(ordered(leaf, label));
        if let Some(d) = degree.get_mut(leaf) {
            *d = 0;
        }
        if let Some(d) = degree.get_mut(label) {
            *d -= 1;
            if *d == 1 {
                leaves.push(Reverse(label));
            }
        }
    }

    let mut last = degree.iter().filter(|(_, d)| **d == 1).map(|(label, _)| *label);
    if let (Some(a), Some(b)) = (last.next(), last.next()) {
        edges.push(ordered(a, b));
    }
    Ok(edges)
}

fn ordered<N: Ord + Clone>(a: &N, b: &N) -> (N, N) {
    if a <= b {
        (a.clone(), b.clone())
    } else {
        (b.clone(), a.clone())
    }
}
