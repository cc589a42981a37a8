//! Constant-time lowest common ancestor queries.
//!
//! An Euler tour of the tree turns every LCA query into a range minimum over
//! tour depths, answered by a sparse table: `O(N log N)` preprocessing and
//! `O(1)` per query.

use tracing::debug;

use crate::tree::Tree;

/// Lowest common ancestor index over a fixed tree.
///
/// # Examples
/// ```
/// use ramure_core::{LcaSparseTable, Tree};
///
/// let tree = Tree::from_parents(vec![4, 4, 5, 6, 5, 6, 6])?;
/// let lca = LcaSparseTable::new(&tree);
/// assert_eq!(lca.lca(0, 1), 4);
/// assert_eq!(lca.lca(0, 3), 6);
/// assert_eq!(lca.lca(2, 2), 2);
/// # Ok::<(), ramure_core::HierarchyError>(())
/// ```
#[derive(Clone, Debug)]
pub struct LcaSparseTable {
    tour: Vec<usize>,
    tour_depth: Vec<u32>,
    first_visit: Vec<usize>,
    // table[k][i] = position in [i, i + 2^k) of the minimal tour depth.
    table: Vec<Vec<usize>>,
}

impl LcaSparseTable {
    /// Preprocesses `tree` for constant-time queries.
    #[must_use]
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new(tree: &Tree) -> Self {
        let num_nodes = tree.num_vertices();
        let root = tree.root();

        let mut depth = vec![0_u32; num_nodes];
        for node in (0..root).rev() {
            depth[node] = depth[tree.parent(node)] + 1;
        }

        let mut tour = Vec::with_capacity(2 * num_nodes - 1);
        let mut first_visit = vec![0_usize; num_nodes];
        let mut stack: Vec<(usize, usize)> = Vec::with_capacity(num_nodes);
        first_visit[root] = 0;
        tour.push(root);
        stack.push((root, 0));
        while let Some(frame) = stack.last_mut() {
            let (node, cursor) = *frame;
            if cursor < tree.num_children(node) {
                frame.1 += 1;
                let child = tree.child(node, cursor);
                first_visit[child] = tour.len();
                tour.push(child);
                stack.push((child, 0));
            } else {
                stack.pop();
                if let Some(&(parent, _)) = stack.last() {
                    tour.push(parent);
                }
            }
        }

        let tour_depth: Vec<u32> = tour.iter().map(|&node| depth[node]).collect();

        let len = tour.len();
        let mut table: Vec<Vec<usize>> = vec![(0..len).collect()];
        let mut span = 1_usize;
        while span * 2 <= len {
            let previous = &table[table.len() - 1];
            let merged: Vec<usize> = (0..=len - span * 2)
                .map(|start| {
                    let left = previous[start];
                    let right = previous[start + span];
                    if tour_depth[right] < tour_depth[left] {
                        right
                    } else {
                        left
                    }
                })
                .collect();
            table.push(merged);
            span *= 2;
        }

        debug!(
            num_nodes,
            tour_len = tour.len(),
            levels = table.len(),
            "built lca sparse table"
        );

        Self {
            tour,
            tour_depth,
            first_visit,
            table,
        }
    }

    /// Returns the lowest common ancestor of `left` and `right`.
    #[must_use]
    pub fn lca(&self, left: usize, right: usize) -> usize {
        let mut lo = self.first_visit[left];
        let mut hi = self.first_visit[right];
        if lo > hi {
            std::mem::swap(&mut lo, &mut hi);
        }
        let level = (hi - lo + 1).ilog2() as usize;
        let a = self.table[level][lo];
        let b = self.table[level][hi + 1 - (1 << level)];
        let position = if self.tour_depth[b] < self.tour_depth[a] {
            b
        } else {
            a
        };
        self.tour[position]
    }

    /// Lowest common ancestor of every endpoint pair, in iteration order.
    pub fn lca_edges(&self, edges: impl IntoIterator<Item = (usize, usize)>) -> Vec<usize> {
        edges
            .into_iter()
            .map(|(left, right)| self.lca(left, right))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::LcaSparseTable;
    use crate::tree::Tree;

    fn naive_lca(tree: &Tree, mut left: usize, mut right: usize) -> usize {
        let mut seen = vec![false; tree.num_vertices()];
        loop {
            if seen[left] {
                return left;
            }
            seen[left] = true;
            left = tree.parent(left);
            std::mem::swap(&mut left, &mut right);
        }
    }

    #[test]
    fn matches_naive_ancestor_walk_on_every_pair() {
        let tree = Tree::from_parents(vec![5, 5, 6, 7, 7, 6, 8, 8, 8]).expect("valid tree");
        let lca = LcaSparseTable::new(&tree);
        for left in 0..tree.num_vertices() {
            for right in 0..tree.num_vertices() {
                assert_eq!(
                    lca.lca(left, right),
                    naive_lca(&tree, left, right),
                    "lca({left}, {right})"
                );
            }
        }
    }

    #[test]
    fn single_node_tree_is_its_own_ancestor() {
        let tree = Tree::from_parents(vec![0]).expect("valid tree");
        let lca = LcaSparseTable::new(&tree);
        assert_eq!(lca.lca(0, 0), 0);
    }

    #[test]
    fn batch_queries_follow_iteration_order() {
        let tree = Tree::from_parents(vec![4, 4, 5, 6, 5, 6, 6]).expect("valid tree");
        let lca = LcaSparseTable::new(&tree);
        assert_eq!(lca.lca_edges([(0, 1), (1, 2), (2, 3)]), [4, 5, 6]);
    }
}
