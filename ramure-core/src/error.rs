//! Error types for the ramure core library.
//!
//! Defines the error enum exposed by the public API, its stable machine
//! readable codes and a convenient result alias.

use std::fmt;

use thiserror::Error;

/// Ways a parent array can fail to describe a valid tree.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum TreeDefect {
    /// The parent array was empty.
    #[error("the parent array is empty")]
    Empty,
    /// The last node was not its own parent.
    #[error("last node has parent {parent}, expected a self-rooted final node")]
    UnrootedLastNode {
        /// Parent recorded for the last node.
        parent: usize,
    },
    /// A node's parent did not come strictly after it in the node order.
    #[error("node {node} has parent {parent}, breaking the children-before-parents order")]
    NonMonotoneParent {
        /// Offending node.
        node: usize,
        /// Parent recorded for the offending node.
        parent: usize,
    },
    /// A childless node appeared after the leaf prefix.
    #[error("childless node {node} sits outside the leaf prefix")]
    LeavesNotPrefix {
        /// Offending node.
        node: usize,
    },
    /// An interior node had a single child.
    #[error("interior node {node} has a single child, at least two are required")]
    TooFewChildren {
        /// Offending node.
        node: usize,
    },
}

/// Ways a node altitude array can violate the explorer preconditions.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum AltitudeDefect {
    /// A leaf carried a nonzero altitude.
    #[error("leaf altitude must be zero")]
    NonZeroLeaf,
    /// A node carried a negative altitude.
    #[error("altitude must be non-negative")]
    Negative,
}

/// Stable codes describing [`HierarchyError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum HierarchyErrorCode {
    /// An input array length disagreed with the structure it annotates.
    ShapeMismatch,
    /// An edge weight was NaN.
    InvalidWeights,
    /// The input graph does not span a single connected component.
    NotConnected,
    /// A node altitude violated a precondition.
    InvalidAltitudes,
    /// A parent array did not describe a valid tree.
    InvalidTree,
    /// A cut index fell outside the explored range.
    QueryOutOfRange,
}

impl HierarchyErrorCode {
    /// Returns the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ShapeMismatch => "SHAPE_MISMATCH",
            Self::InvalidWeights => "INVALID_WEIGHTS",
            Self::NotConnected => "NOT_CONNECTED",
            Self::InvalidAltitudes => "INVALID_ALTITUDES",
            Self::InvalidTree => "INVALID_TREE",
            Self::QueryOutOfRange => "QUERY_OUT_OF_RANGE",
        }
    }
}

impl fmt::Display for HierarchyErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type produced by the hierarchy operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HierarchyError {
    /// An input array length disagreed with the graph or tree it annotates.
    #[error("annotation has length {got} but {expected} values were expected")]
    ShapeMismatch {
        /// Length of the provided array.
        got: usize,
        /// Length required by the annotated structure.
        expected: usize,
    },
    /// An edge weight was NaN.
    #[error("edge weight at index {index} is NaN")]
    InvalidWeights {
        /// Index of the offending weight.
        index: usize,
    },
    /// The input graph does not span a single connected component.
    #[error("input graph is not connected: {found} of {required} spanning edges found")]
    NotConnected {
        /// Spanning edges discovered before the edge supply ran out.
        found: usize,
        /// Spanning edges a connected graph would yield.
        required: usize,
    },
    /// A node altitude violated the explorer preconditions.
    #[error("invalid altitude at node {node}: {defect}")]
    InvalidAltitudes {
        /// Offending node.
        node: usize,
        /// The violated precondition.
        defect: AltitudeDefect,
    },
    /// A parent array did not describe a valid tree.
    #[error("invalid tree: {defect}")]
    InvalidTree {
        /// The violated structural invariant.
        #[source]
        defect: TreeDefect,
    },
    /// A cut index fell outside `[0, num_cuts)`.
    #[error("cut index {index} is out of range for {num_cuts} cuts")]
    QueryOutOfRange {
        /// Requested cut index.
        index: usize,
        /// Number of cuts held by the explorer.
        num_cuts: usize,
    },
}

impl HierarchyError {
    /// Retrieve the stable [`HierarchyErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> HierarchyErrorCode {
        match self {
            Self::ShapeMismatch { .. } => HierarchyErrorCode::ShapeMismatch,
            Self::InvalidWeights { .. } => HierarchyErrorCode::InvalidWeights,
            Self::NotConnected { .. } => HierarchyErrorCode::NotConnected,
            Self::InvalidAltitudes { .. } => HierarchyErrorCode::InvalidAltitudes,
            Self::InvalidTree { .. } => HierarchyErrorCode::InvalidTree,
            Self::QueryOutOfRange { .. } => HierarchyErrorCode::QueryOutOfRange,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, HierarchyError>;

#[cfg(test)]
mod tests {
    use super::{HierarchyError, HierarchyErrorCode, TreeDefect};

    #[test]
    fn codes_are_stable() {
        let err = HierarchyError::NotConnected {
            found: 2,
            required: 3,
        };
        assert_eq!(err.code(), HierarchyErrorCode::NotConnected);
        assert_eq!(err.code().as_str(), "NOT_CONNECTED");
    }

    #[test]
    fn tree_defects_render_through_the_outer_error() {
        let err = HierarchyError::InvalidTree {
            defect: TreeDefect::NonMonotoneParent { node: 4, parent: 2 },
        };
        let message = err.to_string();
        assert!(message.contains("invalid tree"), "got: {message}");
    }
}
