//! Tree simplification: deleting nodes selected by a criterion.
//!
//! Deleting an interior node re-attaches its children to its closest
//! surviving ancestor. Two policies exist because deleting leaves can turn
//! interior nodes into new leaves, which forces a full reordering of the
//! node array; keeping leaves untouched allows a cheaper in-order pass.

use std::collections::VecDeque;

use tracing::debug;

use crate::error::{HierarchyError, Result, TreeDefect};
use crate::tree::{Tree, INVALID_INDEX};

/// How [`simplify_tree`] treats leaves selected by the criterion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LeafPolicy {
    /// Leaves survive even when the criterion selects them, and node order is
    /// preserved. The root is never deleted under this policy: a deleted root
    /// would leave its children without an ancestor to re-attach to.
    Preserve,
    /// Leaves are deletable. Interior nodes whose entire subtree is deleted
    /// collapse into new leaves and the node order is rebuilt top-down.
    Prune,
}

/// A tree derived from another, with provenance for every surviving node.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RemappedTree {
    pub(crate) tree: Tree,
    pub(crate) node_map: Vec<usize>,
}

impl RemappedTree {
    /// Returns the derived tree.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Returns, for each node of the derived tree, its index in the source
    /// tree.
    #[must_use]
    pub fn node_map(&self) -> &[usize] {
        &self.node_map
    }

    /// Decomposes the record into `(tree, node_map)`.
    #[must_use]
    pub fn into_parts(self) -> (Tree, Vec<usize>) {
        (self.tree, self.node_map)
    }
}

/// Copies `tree` with every node selected by `criterion` deleted.
///
/// The criterion is evaluated exactly once per node, before any structural
/// work. Children of a deleted node are re-attached to its closest surviving
/// ancestor; see [`LeafPolicy`] for how selected leaves are handled.
///
/// # Errors
/// Propagates [`crate::HierarchyError::InvalidTree`] if the surviving nodes
/// no longer form a valid hierarchy (for example when a criterion under
/// [`LeafPolicy::Prune`] flags a collapsed subtree root inconsistently with
/// its siblings).
///
/// # Examples
/// ```
/// use ramure_core::{simplify_tree, LeafPolicy, Tree};
///
/// let tree = Tree::from_parents(vec![4, 4, 5, 6, 5, 6, 6])?;
/// // Delete internal node 4: its leaves re-attach to node 5.
/// let simplified = simplify_tree(&tree, |node| node == 4, LeafPolicy::Preserve)?;
/// assert_eq!(simplified.tree().parents(), [4, 4, 4, 5, 5, 5]);
/// assert_eq!(simplified.node_map(), [0, 1, 2, 3, 5, 6]);
/// # Ok::<(), ramure_core::HierarchyError>(())
/// ```
#[tracing::instrument(level = "debug", skip_all)]
pub fn simplify_tree<F>(tree: &Tree, criterion: F, leaf_policy: LeafPolicy) -> Result<RemappedTree>
where
    F: Fn(usize) -> bool,
{
    let selected: Vec<bool> = (0..tree.num_vertices()).map(criterion).collect();
    let simplified = match leaf_policy {
        LeafPolicy::Preserve => simplify_preserving_leaves(tree, &selected),
        LeafPolicy::Prune => simplify_pruning_leaves(tree, &selected),
    }?;
    debug!(
        num_nodes = simplified.tree.num_vertices(),
        deleted = tree.num_vertices() - simplified.tree.num_vertices(),
        "simplified tree"
    );
    Ok(simplified)
}

fn simplify_preserving_leaves(tree: &Tree, selected: &[bool]) -> Result<RemappedTree> {
    let num_nodes = tree.num_vertices();
    let root = tree.root();
    let mut copy_parent = tree.parents().to_vec();
    let mut deleted_after = vec![0_usize; num_nodes];
    let mut deleted = 0_usize;

    // Root to leaves, interior nodes only: splice out selected nodes and
    // count, for every node, how many deletions happened at or above it.
    for node in (tree.num_leaves()..root).rev() {
        if selected[node] {
            let parent = copy_parent[node];
            for &child in tree.children(node) {
                copy_parent[child] = parent;
            }
            deleted += 1;
        }
        deleted_after[node] = deleted;
    }

    // Turn the counts into "deletions below this node", the amount each
    // surviving index shifts down by.
    for shift in &mut deleted_after {
        *shift = deleted - *shift;
    }

    let new_size = num_nodes - deleted;
    let mut new_parent = vec![0_usize; new_size];
    let mut node_map = vec![0_usize; new_size];
    let mut emitted = 0_usize;
    for node in 0..root {
        if !selected[node] || tree.is_leaf(node) {
            let parent = copy_parent[node];
            new_parent[emitted] = parent - deleted_after[parent];
            node_map[emitted] = node;
            emitted += 1;
        }
    }
    new_parent[new_size - 1] = new_size - 1;
    node_map[new_size - 1] = root;

    Ok(RemappedTree {
        tree: Tree::from_parents(new_parent)?,
        node_map,
    })
}

fn simplify_pruning_leaves(tree: &Tree, selected: &[bool]) -> Result<RemappedTree> {
    let num_nodes = tree.num_vertices();
    let num_leaves = tree.num_leaves();
    let root = tree.root();

    // removed[i] holds when the entire subtree below and including i is
    // deleted; an interior node with removed[i] but a surviving parent
    // collapses into a new leaf.
    let mut removed = vec![false; num_nodes];
    for leaf in 0..num_leaves {
        removed[leaf] = selected[leaf];
    }
    for node in num_leaves..num_nodes {
        removed[node] = tree
            .children(node)
            .iter()
            .all(|&child| removed[child] && selected[child]);
    }

    let mut new_leaves: Vec<usize> = Vec::new();
    let mut deleted = 0_usize;
    for leaf in 0..num_leaves {
        if selected[leaf] {
            deleted += 1;
        } else {
            new_leaves.push(leaf);
        }
    }
    for node in num_leaves..root {
        if removed[node] && !removed[tree.parent(node)] {
            new_leaves.push(node);
        }
        if selected[node] {
            deleted += 1;
        }
    }
    if removed[root] {
        new_leaves.push(root);
    }

    let new_size = num_nodes - deleted;
    if new_size == 0 {
        // Only reachable for a single-node tree whose root is selected.
        return Err(HierarchyError::InvalidTree {
            defect: TreeDefect::Empty,
        });
    }
    let mut new_parent = vec![0_usize; new_size];
    let mut node_map = vec![0_usize; new_size];

    // New index of every surviving node; leaves first, then interior nodes
    // numbered decreasingly along a top-down traversal so parents always end
    // up after their children.
    let mut new_order = vec![INVALID_INDEX; num_nodes];
    for (index, &leaf) in new_leaves.iter().enumerate() {
        new_order[leaf] = index;
    }

    let mut next_interior = new_size as isize - 1;
    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        if !selected[node] || node == root {
            let index = next_interior as usize;
            new_order[node] = index;
            new_parent[index] = new_order[tree.parent(node)];
            node_map[index] = node;
            next_interior -= 1;
        } else {
            // Deleted interior node: descendants re-attach to its ancestor.
            new_order[node] = new_order[tree.parent(node)];
        }
        for &child in tree.children(node) {
            if new_order[child] == INVALID_INDEX {
                queue.push_back(child);
            }
        }
    }

    for (index, &leaf) in new_leaves.iter().enumerate() {
        new_parent[index] = new_order[tree.parent(leaf)];
        node_map[index] = leaf;
    }

    Ok(RemappedTree {
        tree: Tree::from_parents(new_parent)?,
        node_map,
    })
}
