use crate::components::ensure_tree;
use crate::error::TreeError;
use petgraph::graph::{NodeIndex, UnGraph};
use tracing::{debug, instrument};

/// DFS bracket ("binary") code of a tree.
///
/// The root is the node with the smallest label and children are visited in
/// ascending label order. Every step down to a child writes `1`, every return
/// from it writes `0`, so an `n`-node tree gives a balanced string of length
/// `2 * (n - 1)`. Trees with fewer than two nodes give an empty string.
///
/// The code depends on the root and child order, so it is only comparable
/// between trees encoded with this same rule.
#[instrument(skip_all, fields(nodes = tree.node_count()))]
pub fn bracket_code<N: Ord, E>(tree: &UnGraph<N, E>) -> Result<String, TreeError> {
    ensure_tree(tree)?;
    let Some(root) = tree.node_indices().min_by(|a, b| tree[*a].cmp(&tree[*b])) else {
        return Ok(String::new());
    };

    let mut code = String::with_capacity(2 * tree.edge_count());
    // (node, its children in reverse label order so the smallest is popped first)
    let mut stack: Vec<(NodeIndex, Vec<NodeIndex>)> = vec![(root, children(tree, root, None))];

    while let Some((node, pending)) = stack.last_mut() {
        let node = *node;
        match pending.pop() {
            Some(child) => {
                code.push('1');
                let grandchildren = children(tree, child, Some(node));
                stack.push((child, grandchildren));
            }
            None => {
                stack.pop();
                if !stack.is_empty() {
                    code.push('0');
                }
            }
        }
    }

    debug!(length = code.len(), "bracket code");
    Ok(code)
}

/// Neighbours of `node` except `parent`, sorted by descending label.
fn children<N: Ord, E>(
    tree: &UnGraph<N, E>,
    node: NodeIndex,
    parent: Option<NodeIndex>,
) -> Vec<NodeIndex> {
    let mut children: Vec<NodeIndex> = tree
        .neighbors(node)
        .filter(|&v| Some(v) != parent)
        .collect();
    children.sort_by(|a, b| tree[*b].cmp(&tree[*a]));
    children
}

/// Checks that a code over `{0, 1}` is a balanced bracket sequence.
pub fn is_balanced(code: &str) -> bool {
    let mut depth: usize = 0;
    for c in code.chars() {
        match c {
            '1' => depth += 1,
            '0' if depth > 0 => depth -= 1,
            _ => return false,
        }
    }
    depth == 0
}
