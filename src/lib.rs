//! Ramure: hierarchies on edge-weighted graphs.
//!
//! Facade crate re-exporting the [`ramure_core`] API: canonical binary
//! partition trees with their minimum spanning trees, quasi-flat zone
//! hierarchies, tree simplification and binarization, saliency maps and
//! horizontal-cut exploration.
//!
//! # Examples
//! ```
//! use ramure::{quasi_flat_zone_hierarchy, UndirectedGraph};
//!
//! let graph = UndirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
//! let qfz = quasi_flat_zone_hierarchy(&graph, &[1, 1, 2])?;
//! assert_eq!(qfz.altitudes(), [0, 0, 0, 0, 1, 2]);
//! # Ok::<(), ramure::HierarchyError>(())
//! ```

pub use ramure_core::*;
