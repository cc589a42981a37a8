//! Data-parallel per-node primitives over a tree.
//!
//! Each output value depends only on one node's parent or children, so the
//! node loop parallelises freely. Every node folds its own children
//! sequentially, which keeps the reduction result deterministic regardless of
//! worker count.

use rayon::prelude::*;

use crate::error::{HierarchyError, Result};
use crate::tree::Tree;
use crate::weight::Weight;

/// Reduction applied over the children of each node by
/// [`accumulate_parallel`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Accumulator {
    /// Smallest child value; leaves receive the type's maximum.
    Min,
    /// Largest child value; leaves receive the type's minimum.
    Max,
    /// Sum of child values; leaves receive zero.
    Sum,
}

fn check_node_annotation(tree: &Tree, len: usize) -> Result<()> {
    if len == tree.num_vertices() {
        Ok(())
    } else {
        Err(HierarchyError::ShapeMismatch {
            got: len,
            expected: tree.num_vertices(),
        })
    }
}

/// For each node, takes the value of its parent: `out[i] = values[parent(i)]`.
///
/// The root keeps its own value.
///
/// # Errors
/// Returns [`HierarchyError::ShapeMismatch`] when `values` does not have one
/// entry per node.
pub fn propagate_parallel<W: Weight>(tree: &Tree, values: &[W]) -> Result<Vec<W>> {
    check_node_annotation(tree, values.len())?;
    Ok((0..tree.num_vertices())
        .into_par_iter()
        .map(|node| values[tree.parent(node)])
        .collect())
}

/// Conditionally takes the parent value: `out[i] = values[parent(i)]` when
/// `condition[i]` holds, `values[i]` otherwise.
///
/// # Errors
/// Returns [`HierarchyError::ShapeMismatch`] when `values` or `condition`
/// does not have one entry per node.
pub fn propagate_parallel_if<W: Weight>(
    tree: &Tree,
    values: &[W],
    condition: &[bool],
) -> Result<Vec<W>> {
    check_node_annotation(tree, values.len())?;
    check_node_annotation(tree, condition.len())?;
    Ok((0..tree.num_vertices())
        .into_par_iter()
        .map(|node| {
            if condition[node] {
                values[tree.parent(node)]
            } else {
                values[node]
            }
        })
        .collect())
}

/// For each node, reduces the values of its children:
/// `out[i] = accumulator over children c of values[c]`.
///
/// Leaves receive the accumulator's neutral element.
///
/// # Errors
/// Returns [`HierarchyError::ShapeMismatch`] when `values` does not have one
/// entry per node.
pub fn accumulate_parallel<W: Weight>(
    tree: &Tree,
    values: &[W],
    accumulator: Accumulator,
) -> Result<Vec<W>> {
    check_node_annotation(tree, values.len())?;
    Ok((0..tree.num_vertices())
        .into_par_iter()
        .map(|node| {
            let children = tree.children(node);
            match accumulator {
                Accumulator::Min => children
                    .iter()
                    .fold(W::max_value(), |acc, &child| acc.min_weight(values[child])),
                Accumulator::Max => children
                    .iter()
                    .fold(W::min_value(), |acc, &child| acc.max_weight(values[child])),
                Accumulator::Sum => children
                    .iter()
                    .fold(W::zero(), |acc, &child| acc + values[child]),
            }
        })
        .collect())
}
