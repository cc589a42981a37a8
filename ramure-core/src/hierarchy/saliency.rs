//! Saliency map: reprojection of a hierarchy onto the edges of its graph.

use tracing::debug;

use crate::error::{HierarchyError, Result};
use crate::graph::EdgeGraph;
use crate::lca::LcaSparseTable;
use crate::tree::Tree;
use crate::weight::Weight;

/// Weights every graph edge `{u, v}` with the altitude of the lowest common
/// ancestor of `u` and `v` in the hierarchy.
///
/// Rebuilding a canonical binary partition tree from the returned weights
/// reproduces the hierarchy's altitudes.
///
/// # Errors
/// Returns [`HierarchyError::ShapeMismatch`] when `altitudes` does not have
/// one entry per tree node or the tree's leaves do not match the graph's
/// vertices.
#[tracing::instrument(level = "debug", skip_all)]
pub fn saliency_map<G: EdgeGraph, W: Weight>(
    graph: &G,
    tree: &Tree,
    altitudes: &[W],
) -> Result<Vec<W>> {
    if altitudes.len() != tree.num_vertices() {
        return Err(HierarchyError::ShapeMismatch {
            got: altitudes.len(),
            expected: tree.num_vertices(),
        });
    }
    if tree.num_leaves() != graph.num_vertices() {
        return Err(HierarchyError::ShapeMismatch {
            got: tree.num_leaves(),
            expected: graph.num_vertices(),
        });
    }

    let lca = LcaSparseTable::new(tree);
    let saliency: Vec<W> = lca
        .lca_edges(graph.edges())
        .into_iter()
        .map(|ancestor| altitudes[ancestor])
        .collect();

    debug!(num_edges = saliency.len(), "computed saliency map");

    Ok(saliency)
}
