//! Hierarchy construction and structural transforms.
//!
//! The canonical binary partition tree is built by a Kruskal-style scan of
//! the edge weights; every other hierarchy in the crate derives from it (or
//! from any node-weighted tree) through simplification, binarization or
//! altitude reordering.

use tracing::debug;

mod binarize;
mod bpt;
mod saliency;
mod simplify;
mod union_find;

#[cfg(test)]
mod property;

pub use self::{
    binarize::{tree_to_binary_tree, BinarizedTree},
    bpt::{bpt_canonical, CanonicalBpt},
    saliency::saliency_map,
    simplify::{simplify_tree, LeafPolicy, RemappedTree},
};

use crate::error::Result;
use crate::graph::EdgeGraph;
use crate::tree::{propagate_parallel, Tree};
use crate::weight::Weight;

/// A tree with one altitude per node.
#[derive(Clone, Debug)]
pub struct WeightedHierarchy<W> {
    pub(crate) tree: Tree,
    pub(crate) altitudes: Vec<W>,
}

impl<W: Weight> WeightedHierarchy<W> {
    /// Returns the hierarchy.
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Returns one altitude per node; leaves sit at zero.
    #[must_use]
    pub fn altitudes(&self) -> &[W] {
        &self.altitudes
    }

    /// Decomposes the record into `(tree, altitudes)`.
    #[must_use]
    pub fn into_parts(self) -> (Tree, Vec<W>) {
        (self.tree, self.altitudes)
    }
}

/// Computes the quasi-flat zone hierarchy of an edge-weighted graph.
///
/// For a threshold λ, a λ-connected component is a maximal set of vertices
/// pairwise joined by paths whose edges all weigh at most λ. The quasi-flat
/// zone hierarchy stacks the λ-partitions for every λ occurring in
/// `weights`; it is obtained from the canonical binary partition tree by
/// collapsing every internal node whose altitude equals its parent's.
///
/// # Errors
/// Same failure modes as [`bpt_canonical`].
///
/// # Examples
/// ```
/// use ramure_core::{quasi_flat_zone_hierarchy, UndirectedGraph};
///
/// let graph = UndirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
/// let qfz = quasi_flat_zone_hierarchy(&graph, &[1, 1, 2])?;
/// // The two weight-1 merges collapse into a single three-leaf node.
/// assert_eq!(qfz.tree().parents(), [4, 4, 4, 5, 5, 5]);
/// assert_eq!(qfz.altitudes(), [0, 0, 0, 0, 1, 2]);
/// # Ok::<(), ramure_core::HierarchyError>(())
/// ```
#[tracing::instrument(level = "debug", skip_all)]
pub fn quasi_flat_zone_hierarchy<G: EdgeGraph, W: Weight>(
    graph: &G,
    weights: &[W],
) -> Result<WeightedHierarchy<W>> {
    let bpt = bpt_canonical(graph, weights)?;
    let altitude_parents = propagate_parallel(bpt.tree(), bpt.altitudes())?;
    let altitudes = bpt.altitudes();

    let simplified = simplify_tree(
        bpt.tree(),
        |node| altitudes[node] == altitude_parents[node],
        LeafPolicy::Preserve,
    )?;

    let qfz_altitudes = simplified
        .node_map()
        .iter()
        .map(|&original| altitudes[original])
        .collect();
    let (tree, _node_map) = simplified.into_parts();

    debug!(
        num_nodes = tree.num_vertices(),
        collapsed = bpt.tree().num_vertices() - tree.num_vertices(),
        "built quasi-flat zone hierarchy"
    );

    Ok(WeightedHierarchy {
        tree,
        altitudes: qfz_altitudes,
    })
}
