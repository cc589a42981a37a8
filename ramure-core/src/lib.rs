//! Ramure core library.
//!
//! Builds and manipulates hierarchies on edge-weighted graphs, as used in
//! image and graph segmentation and mathematical morphology. The central
//! construction converts a connected edge-weighted graph into a rooted tree
//! of nested partitions (the canonical binary partition tree, jointly with
//! its minimum spanning tree); the rest of the crate transforms such trees:
//! quasi-flat zone collapse, criterion-driven simplification, binarization
//! and horizontal-cut exploration.
//!
//! All hierarchies share one data model: an immutable parent array whose
//! children precede their parents, with leaves in the prefix and the root
//! last. Operations are pure functions from borrowed inputs to owned result
//! records and never touch global state.
//!
//! # Examples
//! ```
//! use ramure_core::{bpt_canonical, HorizontalCutExplorer, UndirectedGraph};
//!
//! // A path of four vertices with increasing edge weights.
//! let graph = UndirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
//! let bpt = bpt_canonical(&graph, &[1, 2, 3])?;
//! assert_eq!(bpt.altitudes(), [0, 0, 0, 0, 1, 2, 3]);
//!
//! let cuts = HorizontalCutExplorer::new(bpt.tree(), bpt.altitudes())?;
//! let two_regions = cuts.cut_from_num_regions(2);
//! assert_eq!(two_regions.labelisation_leaves(bpt.tree()), [5, 5, 5, 3]);
//! # Ok::<(), ramure_core::HierarchyError>(())
//! ```

mod cuts;
mod error;
mod graph;
mod hierarchy;
mod lca;
mod tree;
mod weight;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    cuts::{HorizontalCutExplorer, HorizontalCutNodes},
    error::{AltitudeDefect, HierarchyError, HierarchyErrorCode, Result, TreeDefect},
    graph::{EdgeGraph, UndirectedGraph},
    hierarchy::{
        bpt_canonical, quasi_flat_zone_hierarchy, saliency_map, simplify_tree,
        tree_to_binary_tree, BinarizedTree, CanonicalBpt, LeafPolicy, RemappedTree,
        WeightedHierarchy,
    },
    lca::LcaSparseTable,
    tree::{
        accumulate_parallel, propagate_parallel, propagate_parallel_if, Accumulator, Tree,
        INVALID_INDEX,
    },
    weight::Weight,
};
