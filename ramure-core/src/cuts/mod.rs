//! Horizontal-cut exploration of a node-weighted hierarchy.
//!
//! A horizontal cut partitions the leaves by slicing the hierarchy at one
//! altitude threshold. The explorer enumerates every distinct cut once at
//! construction time, then answers queries by cut index, altitude threshold
//! or region count with a binary search over the precomputed tables.

#[cfg(test)]
mod tests;

use std::cmp::Ordering;

use tracing::debug;

use crate::error::{AltitudeDefect, HierarchyError, Result};
use crate::graph::EdgeGraph;
use crate::tree::{accumulate_parallel, Accumulator, Tree, INVALID_INDEX};
use crate::weight::Weight;

/// One horizontal cut: the tree nodes whose subtrees form the regions.
///
/// Node indices refer to the tree the explorer was built from.
#[derive(Clone, Debug)]
pub struct HorizontalCutNodes<W> {
    nodes: Vec<usize>,
    altitude: W,
}

impl<W: Weight> HorizontalCutNodes<W> {
    /// Returns the cut nodes, one per region.
    #[must_use]
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Returns the altitude the cut was taken at.
    #[must_use]
    pub fn altitude(&self) -> W {
        self.altitude
    }

    /// Labels every leaf of `tree` with the cut node whose subtree contains
    /// it.
    ///
    /// `tree` must be the tree the explorer was built from.
    ///
    /// # Panics
    /// Panics if a cut node is out of range for `tree`.
    #[must_use]
    pub fn labelisation_leaves(&self, tree: &Tree) -> Vec<usize> {
        let mut labels = vec![INVALID_INDEX; tree.num_vertices()];
        for &node in &self.nodes {
            labels[node] = node;
        }
        for node in (0..tree.root()).rev() {
            if labels[node] == INVALID_INDEX {
                labels[node] = labels[tree.parent(node)];
            }
        }
        labels.truncate(tree.num_leaves());
        labels
    }

    /// For each graph edge, whether its endpoints fall in different regions
    /// of the cut.
    ///
    /// `tree` must be the tree the explorer was built from and its leaves
    /// must be the vertices of `graph`.
    ///
    /// # Panics
    /// Panics if a cut node or a graph endpoint is out of range for `tree`.
    #[must_use]
    pub fn graph_cut<G: EdgeGraph>(&self, tree: &Tree, graph: &G) -> Vec<bool> {
        let labels = self.labelisation_leaves(tree);
        graph
            .edges()
            .map(|(source, target)| labels[source] != labels[target])
            .collect()
    }
}

/// Precomputed horizontal cuts of a node-weighted tree.
///
/// Cuts are stored from the coarsest (one region, at the root altitude) to
/// the finest: altitudes strictly decrease and region counts strictly
/// increase with the cut index.
#[derive(Clone, Debug)]
pub struct HorizontalCutExplorer<W> {
    tree: Tree,
    node_map: Vec<usize>,
    altitudes: Vec<W>,
    num_regions_cuts: Vec<usize>,
    altitude_cuts: Vec<W>,
    range_cuts: Vec<(usize, usize)>,
}

impl<W: Weight> HorizontalCutExplorer<W> {
    /// Enumerates the horizontal cuts of `(tree, altitudes)`.
    ///
    /// # Errors
    /// - [`HierarchyError::ShapeMismatch`] when `altitudes` does not have one
    ///   entry per node.
    /// - [`HierarchyError::InvalidAltitudes`] when a leaf altitude is nonzero
    ///   or any altitude is negative.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn new(tree: &Tree, altitudes: &[W]) -> Result<Self> {
        if altitudes.len() != tree.num_vertices() {
            return Err(HierarchyError::ShapeMismatch {
                got: altitudes.len(),
                expected: tree.num_vertices(),
            });
        }
        for leaf in tree.leaves() {
            if altitudes[leaf] != W::zero() {
                return Err(HierarchyError::InvalidAltitudes {
                    node: leaf,
                    defect: AltitudeDefect::NonZeroLeaf,
                });
            }
        }
        for node in tree.leaves_to_root() {
            if altitudes[node] < W::zero() {
                return Err(HierarchyError::InvalidAltitudes {
                    node,
                    defect: AltitudeDefect::Negative,
                });
            }
        }

        let (tree, node_map, altitudes) = sort_hierarchy_with_altitudes(tree, altitudes)?;
        let min_alt_children = accumulate_parallel(&tree, &altitudes, Accumulator::Min)?;

        let root = tree.root();
        let num_leaves = tree.num_leaves();

        // Single-region partition at the root altitude: always present.
        let mut num_regions_cuts = vec![1_usize];
        let mut altitude_cuts = vec![altitudes[root]];
        let mut range_cuts = vec![(INVALID_INDEX, INVALID_INDEX)];

        let mut range_start = root;
        let mut range_end = root;
        let mut num_regions = tree.num_children(root);
        let mut current_threshold = altitudes[range_start];

        // Walk the thresholds downward. The active range holds the internal
        // nodes with altitude >= threshold whose children dip below it; each
        // extension of the range splits one region into its children.
        while current_threshold != W::zero() && range_start >= num_leaves {
            while min_alt_children[range_end].total_order(&current_threshold) != Ordering::Less {
                range_end -= 1;
            }
            while altitudes[range_start - 1].total_order(&current_threshold) != Ordering::Less {
                range_start -= 1;
                num_regions += tree.num_children(range_start) - 1;
            }
            current_threshold = altitudes[range_start - 1];

            num_regions_cuts.push(num_regions);
            altitude_cuts.push(current_threshold);
            range_cuts.push((range_start, range_end));
        }

        debug!(num_cuts = num_regions_cuts.len(), "explored horizontal cuts");

        Ok(Self {
            tree,
            node_map,
            altitudes,
            num_regions_cuts,
            altitude_cuts,
            range_cuts,
        })
    }

    /// Returns the number of distinct cuts.
    #[must_use]
    pub fn num_cuts(&self) -> usize {
        self.num_regions_cuts.len()
    }

    /// Returns the region count of cut `index`.
    ///
    /// # Errors
    /// Returns [`HierarchyError::QueryOutOfRange`] when `index` is not a cut.
    pub fn num_regions_cut(&self, index: usize) -> Result<usize> {
        self.check_cut_index(index)?;
        Ok(self.num_regions_cuts[index])
    }

    /// Returns the altitude of cut `index`.
    ///
    /// # Errors
    /// Returns [`HierarchyError::QueryOutOfRange`] when `index` is not a cut.
    pub fn altitude_cut(&self, index: usize) -> Result<W> {
        self.check_cut_index(index)?;
        Ok(self.altitude_cuts[index])
    }

    /// Region counts of every cut, in increasing order.
    #[must_use]
    pub fn num_regions_cuts(&self) -> &[usize] {
        &self.num_regions_cuts
    }

    /// Altitudes of every cut, in decreasing order.
    #[must_use]
    pub fn altitude_cuts(&self) -> &[W] {
        &self.altitude_cuts
    }

    /// Materializes cut `index`.
    ///
    /// # Errors
    /// Returns [`HierarchyError::QueryOutOfRange`] when `index` is not a cut.
    pub fn cut_from_index(&self, index: usize) -> Result<HorizontalCutNodes<W>> {
        self.check_cut_index(index)?;
        Ok(self.cut_at(index))
    }

    /// Returns the coarsest cut whose altitude is at most `threshold`, or the
    /// finest cut when no altitude qualifies.
    #[must_use]
    pub fn cut_from_altitude(&self, threshold: W) -> HorizontalCutNodes<W> {
        let index = self
            .altitude_cuts
            .partition_point(|altitude| altitude.total_order(&threshold) == Ordering::Greater)
            .min(self.num_cuts() - 1);
        self.cut_at(index)
    }

    /// Returns the coarsest cut with at least `num_regions` regions, or the
    /// finest cut when no cut has that many.
    #[must_use]
    pub fn cut_from_num_regions(&self, num_regions: usize) -> HorizontalCutNodes<W> {
        let index = self
            .num_regions_cuts
            .partition_point(|&regions| regions < num_regions)
            .min(self.num_cuts() - 1);
        self.cut_at(index)
    }

    fn cut_at(&self, index: usize) -> HorizontalCutNodes<W> {
        let altitude = self.altitude_cuts[index];
        let mut nodes = Vec::with_capacity(self.num_regions_cuts[index]);
        if index == 0 {
            nodes.push(self.node_map[self.tree.root()]);
        } else {
            let (start, end) = self.range_cuts[index];
            for node in start..=end {
                for &child in self.tree.children(node) {
                    if self.altitudes[child].total_order(&altitude) != Ordering::Greater {
                        nodes.push(self.node_map[child]);
                    }
                }
            }
        }
        HorizontalCutNodes { nodes, altitude }
    }

    fn check_cut_index(&self, index: usize) -> Result<()> {
        if index < self.num_cuts() {
            Ok(())
        } else {
            Err(HierarchyError::QueryOutOfRange {
                index,
                num_cuts: self.num_cuts(),
            })
        }
    }
}

/// Reorders a node-weighted tree so internal node altitudes are
/// non-decreasing with the node index. Stable on the original index, so an
/// altitude-monotone input keeps a valid parent order.
fn sort_hierarchy_with_altitudes<W: Weight>(
    tree: &Tree,
    altitudes: &[W],
) -> Result<(Tree, Vec<usize>, Vec<W>)> {
    let num_nodes = tree.num_vertices();
    let mut order: Vec<usize> = (0..num_nodes).collect();
    order[tree.num_leaves()..].sort_by(|&a, &b| altitudes[a].total_order(&altitudes[b]));

    let mut rank = vec![0_usize; num_nodes];
    for (new_index, &old_index) in order.iter().enumerate() {
        rank[old_index] = new_index;
    }

    let parents = order
        .iter()
        .map(|&old_index| rank[tree.parent(old_index)])
        .collect();
    let sorted_altitudes = order.iter().map(|&old_index| altitudes[old_index]).collect();

    Ok((Tree::from_parents(parents)?, order, sorted_altitudes))
}
