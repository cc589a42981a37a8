//! Re-expression of an arbitrary hierarchy as a strictly binary tree.

use tracing::debug;

use crate::error::Result;
use crate::tree::Tree;

/// A strictly binary tree derived from an arbitrary hierarchy, with the
/// source node behind every derived node.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BinarizedTree {
    pub(crate) tree: Tree,
    pub(crate) reverse_node_map: Vec<usize>,
}

impl BinarizedTree {
    /// Returns the binary tree (`2L − 1` nodes for `L` leaves).
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Returns, for each node of the binary tree, the source node it stands
    /// for. Nodes introduced by the transformation map to the source node
    /// whose children they chain.
    #[must_use]
    pub fn reverse_node_map(&self) -> &[usize] {
        &self.reverse_node_map
    }

    /// Decomposes the record into `(tree, reverse_node_map)`.
    #[must_use]
    pub fn into_parts(self) -> (Tree, Vec<usize>) {
        (self.tree, self.reverse_node_map)
    }
}

/// Transforms a hierarchy into a strictly binary tree.
///
/// A node with `k > 2` children is replaced by a right-leaning chain of
/// `k − 2` fresh internal nodes, pairing the children two at a time from the
/// left. Already-binary trees come back structurally identical.
///
/// # Errors
/// Propagates [`crate::HierarchyError::InvalidTree`] from the construction of
/// the derived tree.
///
/// # Examples
/// ```
/// use ramure_core::{tree_to_binary_tree, Tree};
///
/// // A root with four leaf children.
/// let star = Tree::from_parents(vec![4, 4, 4, 4, 4])?;
/// let binary = tree_to_binary_tree(&star)?;
/// assert_eq!(binary.tree().parents(), [4, 4, 5, 6, 5, 6, 6]);
/// assert_eq!(binary.reverse_node_map(), [0, 1, 2, 3, 4, 4, 4]);
/// # Ok::<(), ramure_core::HierarchyError>(())
/// ```
#[tracing::instrument(level = "debug", skip_all)]
pub fn tree_to_binary_tree(tree: &Tree) -> Result<BinarizedTree> {
    let num_leaves = tree.num_leaves();
    let num_result = 2 * num_leaves - 1;

    // Scratch map from source node to the root of its already-built subtree.
    let mut node_map = vec![0_usize; tree.num_vertices()];
    let mut reverse_node_map = vec![0_usize; num_result];
    for leaf in 0..num_leaves {
        node_map[leaf] = leaf;
        reverse_node_map[leaf] = leaf;
    }

    let mut new_parents = vec![0_usize; num_result];
    let mut next_node = num_leaves;

    for node in tree.internal_nodes() {
        let children = tree.children(node);
        new_parents[node_map[children[0]]] = next_node;
        new_parents[node_map[children[1]]] = next_node;
        for &child in &children[2..] {
            new_parents[next_node] = next_node + 1;
            reverse_node_map[next_node] = node;
            next_node += 1;
            new_parents[node_map[child]] = next_node;
        }
        node_map[node] = next_node;
        reverse_node_map[next_node] = node;
        next_node += 1;
    }

    new_parents[num_result - 1] = num_result - 1;

    debug!(
        num_nodes = num_result,
        introduced = num_result - tree.num_vertices(),
        "binarized tree"
    );

    Ok(BinarizedTree {
        tree: Tree::from_parents(new_parents)?,
        reverse_node_map,
    })
}
