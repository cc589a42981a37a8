//! The hierarchy container: an immutable parent-array tree.
//!
//! Nodes are indexed so that children always precede their parents; leaves
//! occupy the prefix `[0, num_leaves)` and the root is the last node, its own
//! parent. Child lists are derived once at construction and stored
//! contiguously (offset table plus flat child array), so traversals never
//! chase pointers.

mod accumulate;


pub use self::accumulate::{
    accumulate_parallel, propagate_parallel, propagate_parallel_if, Accumulator,
};

use crate::error::{HierarchyError, Result, TreeDefect};

/// Sentinel index meaning "no such node".
pub const INVALID_INDEX: usize = usize::MAX;

/// An immutable rooted tree stored as a parent array.
///
/// # Examples
/// ```
/// use ramure_core::Tree;
///
/// // Path graph hierarchy: leaves 0..4, internal nodes 4..7, root 6.
/// let tree = Tree::from_parents(vec![4, 4, 5, 6, 5, 6, 6])?;
/// assert_eq!(tree.num_vertices(), 7);
/// assert_eq!(tree.num_leaves(), 4);
/// assert_eq!(tree.root(), 6);
/// assert_eq!(tree.children(6), [3, 5]);
/// assert!(tree.is_leaf(2));
/// # Ok::<(), ramure_core::HierarchyError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tree {
    parents: Vec<usize>,
    num_leaves: usize,
    child_index: Vec<usize>,
    children: Vec<usize>,
}

impl Tree {
    /// Builds a tree from a parent array, validating its structure.
    ///
    /// # Errors
    /// Returns [`HierarchyError::InvalidTree`] when the array is empty, the
    /// last node is not self-rooted, a parent does not come strictly after
    /// its child, childless nodes do not form the prefix of the node order,
    /// or an interior node has fewer than two children.
    pub fn from_parents(parents: Vec<usize>) -> Result<Self> {
        let Some(&root_parent) = parents.last() else {
            return Err(HierarchyError::InvalidTree {
                defect: TreeDefect::Empty,
            });
        };
        let root = parents.len() - 1;
        if root_parent != root {
            return Err(HierarchyError::InvalidTree {
                defect: TreeDefect::UnrootedLastNode { parent: root_parent },
            });
        }

        let mut child_counts = vec![0_usize; parents.len()];
        for (node, &parent) in parents.iter().enumerate().take(root) {
            if parent <= node || parent > root {
                return Err(HierarchyError::InvalidTree {
                    defect: TreeDefect::NonMonotoneParent { node, parent },
                });
            }
            child_counts[parent] += 1;
        }

        let num_leaves = child_counts.iter().take_while(|&&count| count == 0).count();
        for (node, &count) in child_counts.iter().enumerate().skip(num_leaves) {
            if count == 0 {
                return Err(HierarchyError::InvalidTree {
                    defect: TreeDefect::LeavesNotPrefix { node },
                });
            }
            if count == 1 {
                return Err(HierarchyError::InvalidTree {
                    defect: TreeDefect::TooFewChildren { node },
                });
            }
        }

        let mut child_index = vec![0_usize; parents.len() + 1];
        for (node, &count) in child_counts.iter().enumerate() {
            child_index[node + 1] = child_index[node] + count;
        }
        let mut cursor = child_index.clone();
        let mut children = vec![0_usize; root];
        for (node, &parent) in parents.iter().enumerate().take(root) {
            children[cursor[parent]] = node;
            cursor[parent] += 1;
        }

        Ok(Self {
            parents,
            num_leaves,
            child_index,
            children,
        })
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.parents.len()
    }

    /// Returns the number of leaves.
    #[must_use]
    pub fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    /// Returns the root node (always the last node).
    #[must_use]
    pub fn root(&self) -> usize {
        self.parents.len() - 1
    }

    /// Returns the parent of `node`; the root is its own parent.
    #[must_use]
    pub fn parent(&self, node: usize) -> usize {
        self.parents[node]
    }

    /// Returns the full parent array.
    #[must_use]
    pub fn parents(&self) -> &[usize] {
        &self.parents
    }

    /// Returns `true` when `node` is a leaf.
    #[must_use]
    pub fn is_leaf(&self, node: usize) -> bool {
        node < self.num_leaves
    }

    /// Returns the number of children of `node`.
    #[must_use]
    pub fn num_children(&self, node: usize) -> usize {
        self.child_index[node + 1] - self.child_index[node]
    }

    /// Returns the children of `node` in ascending index order.
    #[must_use]
    pub fn children(&self, node: usize) -> &[usize] {
        &self.children[self.child_index[node]..self.child_index[node + 1]]
    }

    /// Returns the `rank`-th child of `node`.
    #[must_use]
    pub fn child(&self, node: usize, rank: usize) -> usize {
        self.children(node)[rank]
    }

    /// Leaves, in index order.
    pub fn leaves(&self) -> impl DoubleEndedIterator<Item = usize> {
        0..self.num_leaves
    }

    /// Internal nodes, in index order.
    pub fn internal_nodes(&self) -> impl DoubleEndedIterator<Item = usize> {
        self.num_leaves..self.parents.len()
    }

    /// All nodes from the leaves up to the root (ascending index).
    pub fn leaves_to_root(&self) -> impl DoubleEndedIterator<Item = usize> {
        0..self.parents.len()
    }

    /// All nodes from the root down to the leaves (descending index).
    pub fn root_to_leaves(&self) -> impl DoubleEndedIterator<Item = usize> {
        (0..self.parents.len()).rev()
    }
}
