//! Canonical binary partition tree construction.
//!
//! Kruskal's algorithm with hierarchy tracking: edges are processed in
//! non-decreasing weight order and every accepted merge creates one internal
//! node, yielding the binary partition tree by altitude ordering together
//! with the minimum spanning tree it corresponds to. Ties between equal
//! weights are broken by original edge index, which makes the result unique.

use tracing::debug;

use crate::error::{HierarchyError, Result, TreeDefect};
use crate::graph::{EdgeGraph, UndirectedGraph};
use crate::tree::Tree;
use crate::weight::Weight;

use super::union_find::DisjointSet;

/// Result of [`bpt_canonical`]: the hierarchy, its node altitudes, the
/// minimum spanning tree and the map from MST edges back to input edges.
#[derive(Clone, Debug)]
pub struct CanonicalBpt<W> {
    pub(crate) tree: Tree,
    pub(crate) altitudes: Vec<W>,
    pub(crate) mst: UndirectedGraph,
    pub(crate) mst_edge_map: Vec<usize>,
}

impl<W: Weight> CanonicalBpt<W> {
    /// Returns the binary partition tree (`2n − 1` nodes).
    #[must_use]
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Returns one altitude per tree node; leaves sit at zero.
    #[must_use]
    pub fn altitudes(&self) -> &[W] {
        &self.altitudes
    }

    /// Returns the minimum spanning tree, edges in discovery order.
    #[must_use]
    pub fn mst(&self) -> &UndirectedGraph {
        &self.mst
    }

    /// Returns the input-edge index of each MST edge, in discovery order.
    #[must_use]
    pub fn mst_edge_map(&self) -> &[usize] {
        &self.mst_edge_map
    }

    /// Decomposes the record into its owned parts:
    /// `(tree, altitudes, mst, mst_edge_map)`.
    #[must_use]
    pub fn into_parts(self) -> (Tree, Vec<W>, UndirectedGraph, Vec<usize>) {
        (self.tree, self.altitudes, self.mst, self.mst_edge_map)
    }
}

fn validate_edge_weights<G: EdgeGraph, W: Weight>(graph: &G, weights: &[W]) -> Result<()> {
    if weights.len() != graph.num_edges() {
        return Err(HierarchyError::ShapeMismatch {
            got: weights.len(),
            expected: graph.num_edges(),
        });
    }
    if let Some(index) = weights.iter().position(Weight::is_nan) {
        return Err(HierarchyError::InvalidWeights { index });
    }
    Ok(())
}

/// Computes the canonical binary partition tree of an edge-weighted graph.
///
/// The tree merges graph vertices two regions at a time in increasing
/// edge-weight order; each internal node records the weight of the merge
/// that created it. The minimum spanning tree falls out of the same scan.
///
/// # Errors
/// - [`HierarchyError::ShapeMismatch`] when `weights` does not have one entry
///   per edge.
/// - [`HierarchyError::InvalidWeights`] when a weight is NaN.
/// - [`HierarchyError::NotConnected`] when the graph has no spanning tree.
/// - [`HierarchyError::InvalidTree`] when the graph has no vertices.
///
/// # Examples
/// ```
/// use ramure_core::{bpt_canonical, UndirectedGraph};
///
/// let graph = UndirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
/// let bpt = bpt_canonical(&graph, &[1, 2, 3])?;
/// assert_eq!(bpt.tree().parents(), [4, 4, 5, 6, 5, 6, 6]);
/// assert_eq!(bpt.altitudes(), [0, 0, 0, 0, 1, 2, 3]);
/// assert_eq!(bpt.mst_edge_map(), [0, 1, 2]);
/// # Ok::<(), ramure_core::HierarchyError>(())
/// ```
#[tracing::instrument(level = "debug", skip_all)]
pub fn bpt_canonical<G: EdgeGraph, W: Weight>(graph: &G, weights: &[W]) -> Result<CanonicalBpt<W>> {
    validate_edge_weights(graph, weights)?;

    let num_points = graph.num_vertices();
    if num_points == 0 {
        return Err(HierarchyError::InvalidTree {
            defect: TreeDefect::Empty,
        });
    }
    let spanning_edges = num_points - 1;

    // Stable sort keeps equal weights in original index order; this pins the
    // tree on tie-heavy inputs.
    let mut order: Vec<usize> = (0..graph.num_edges()).collect();
    order.sort_by(|&a, &b| weights[a].total_order(&weights[b]));

    let mut uf = DisjointSet::new(num_points);
    let mut roots: Vec<usize> = (0..num_points).collect();
    let mut parents: Vec<usize> = (0..2 * num_points - 1).collect();
    let mut altitudes: Vec<W> = vec![W::zero(); 2 * num_points - 1];
    let mut mst = UndirectedGraph::new(num_points);
    let mut mst_edge_map: Vec<usize> = Vec::with_capacity(spanning_edges);
    let mut next_node = num_points;

    for &edge_index in &order {
        if mst_edge_map.len() == spanning_edges {
            break;
        }
        let (source, target) = graph.edge_from_index(edge_index);
        let component_a = uf.find(source);
        let component_b = uf.find(target);
        if component_a == component_b {
            continue;
        }
        altitudes[next_node] = weights[edge_index];
        parents[roots[component_a]] = next_node;
        parents[roots[component_b]] = next_node;
        let merged = uf.link(component_a, component_b);
        roots[merged] = next_node;
        mst.add_edge(source, target);
        mst_edge_map.push(edge_index);
        next_node += 1;
    }

    if mst_edge_map.len() != spanning_edges {
        return Err(HierarchyError::NotConnected {
            found: mst_edge_map.len(),
            required: spanning_edges,
        });
    }

    debug!(
        num_vertices = num_points,
        num_nodes = parents.len(),
        "built canonical binary partition tree"
    );

    let tree = Tree::from_parents(parents)?;
    Ok(CanonicalBpt {
        tree,
        altitudes,
        mst,
        mst_edge_map,
    })
}
