//! Unit tests for the horizontal-cut explorer.

use rstest::rstest;

use crate::cuts::HorizontalCutExplorer;
use crate::error::{AltitudeDefect, HierarchyError};
use crate::graph::UndirectedGraph;
use crate::hierarchy::{bpt_canonical, quasi_flat_zone_hierarchy};
use crate::tree::Tree;

/// BPT of the path 0-1-2-3 with weights [1, 1, 2].
fn plateau_bpt() -> (Tree, Vec<u32>) {
    let tree = Tree::from_parents(vec![4, 4, 5, 6, 5, 6, 6]).expect("valid tree");
    (tree, vec![0, 0, 0, 0, 1, 1, 2])
}

#[test]
fn enumerates_cuts_from_coarse_to_fine() {
    let (tree, altitudes) = plateau_bpt();
    let explorer = HorizontalCutExplorer::new(&tree, &altitudes).expect("valid altitudes");

    assert_eq!(explorer.num_cuts(), 3);
    assert_eq!(explorer.num_regions_cuts(), [1, 2, 4]);
    assert_eq!(explorer.altitude_cuts(), [2, 1, 0]);
    assert_eq!(explorer.num_regions_cut(1).expect("cut exists"), 2);
    assert_eq!(explorer.altitude_cut(2).expect("cut exists"), 0);
}

#[test]
fn materializes_cut_nodes_in_original_indices() {
    let (tree, altitudes) = plateau_bpt();
    let explorer = HorizontalCutExplorer::new(&tree, &altitudes).expect("valid altitudes");

    let coarsest = explorer.cut_from_index(0).expect("cut exists");
    assert_eq!(coarsest.nodes(), [6]);
    assert_eq!(coarsest.altitude(), 2);

    let middle = explorer.cut_from_index(1).expect("cut exists");
    assert_eq!(middle.nodes(), [3, 5]);
    assert_eq!(middle.altitude(), 1);

    let finest = explorer.cut_from_index(2).expect("cut exists");
    assert_eq!(finest.nodes(), [0, 1, 2, 3]);
    assert_eq!(finest.altitude(), 0);
}

#[rstest]
#[case::above_all(5, 2, 1)]
#[case::at_root(2, 2, 1)]
#[case::at_plateau(1, 1, 2)]
#[case::below_all(0, 0, 4)]
fn altitude_queries_pick_the_coarsest_qualifying_cut(
    #[case] threshold: u32,
    #[case] expected_altitude: u32,
    #[case] expected_regions: usize,
) {
    let (tree, altitudes) = plateau_bpt();
    let explorer = HorizontalCutExplorer::new(&tree, &altitudes).expect("valid altitudes");

    let cut = explorer.cut_from_altitude(threshold);
    assert_eq!(cut.altitude(), expected_altitude);
    assert_eq!(cut.nodes().len(), expected_regions);
}

#[rstest]
#[case::single(1, 1)]
#[case::two(2, 2)]
#[case::three_rounds_up(3, 4)]
#[case::saturates(100, 4)]
fn region_queries_pick_the_coarsest_cut_with_enough_regions(
    #[case] requested: usize,
    #[case] expected_regions: usize,
) {
    let (tree, altitudes) = plateau_bpt();
    let explorer = HorizontalCutExplorer::new(&tree, &altitudes).expect("valid altitudes");

    let cut = explorer.cut_from_num_regions(requested);
    assert_eq!(cut.nodes().len(), expected_regions);
}

#[test]
fn reorders_internal_nodes_by_altitude_before_walking() {
    // Two cherries whose node order disagrees with their altitudes.
    let tree = Tree::from_parents(vec![4, 4, 5, 5, 6, 6, 6]).expect("valid tree");
    let altitudes = vec![0_u32, 0, 0, 0, 3, 1, 5];
    let explorer = HorizontalCutExplorer::new(&tree, &altitudes).expect("valid altitudes");

    assert_eq!(explorer.num_regions_cuts(), [1, 2, 3, 4]);
    assert_eq!(explorer.altitude_cuts(), [5, 3, 1, 0]);

    // The 3-region cut splits only the cheaper cherry.
    let cut = explorer.cut_from_index(2).expect("cut exists");
    let mut nodes = cut.nodes().to_vec();
    nodes.sort_unstable();
    assert_eq!(nodes, [0, 1, 5]);
}

#[test]
fn labels_leaves_by_their_cut_region() {
    let graph = UndirectedGraph::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
    let qfz = quasi_flat_zone_hierarchy(&graph, &[1_u32, 1, 2]).expect("connected graph");
    let explorer = HorizontalCutExplorer::new(qfz.tree(), qfz.altitudes()).expect("valid");

    let cut = explorer.cut_from_altitude(1);
    assert_eq!(cut.labelisation_leaves(qfz.tree()), [4, 4, 4, 3]);
    assert_eq!(cut.graph_cut(qfz.tree(), &graph), [false, false, true]);
}

#[test]
fn single_region_cut_labels_everything_alike() {
    let graph = UndirectedGraph::from_edges(3, [(0, 1), (1, 2)]);
    let bpt = bpt_canonical(&graph, &[1_u32, 2]).expect("connected graph");
    let explorer = HorizontalCutExplorer::new(bpt.tree(), bpt.altitudes()).expect("valid");

    let cut = explorer.cut_from_index(0).expect("cut exists");
    assert_eq!(cut.nodes(), [bpt.tree().root()]);
    let labels = cut.labelisation_leaves(bpt.tree());
    assert!(labels.iter().all(|&label| label == bpt.tree().root()));
}

#[test]
fn flat_hierarchies_expose_only_the_single_region_cut() {
    // All weights equal: the quasi-flat zone hierarchy is a root at zero...
    let graph = UndirectedGraph::from_edges(3, [(0, 1), (1, 2)]);
    let bpt = bpt_canonical(&graph, &[0_u32, 0]).expect("connected graph");
    let explorer = HorizontalCutExplorer::new(bpt.tree(), bpt.altitudes()).expect("valid");

    assert_eq!(explorer.num_cuts(), 1);
    assert_eq!(explorer.altitude_cuts(), [0]);
}

#[test]
fn single_node_trees_have_one_trivial_cut() {
    let tree = Tree::from_parents(vec![0]).expect("valid tree");
    let explorer = HorizontalCutExplorer::new(&tree, &[0_u32]).expect("valid");
    assert_eq!(explorer.num_cuts(), 1);
    let cut = explorer.cut_from_index(0).expect("cut exists");
    assert_eq!(cut.nodes(), [0]);
}

#[test]
fn rejects_cut_indices_outside_the_table() {
    let (tree, altitudes) = plateau_bpt();
    let explorer = HorizontalCutExplorer::new(&tree, &altitudes).expect("valid altitudes");

    let err = explorer.cut_from_index(3).expect_err("only three cuts exist");
    assert_eq!(
        err,
        HierarchyError::QueryOutOfRange {
            index: 3,
            num_cuts: 3
        }
    );
    assert!(explorer.num_regions_cut(9).is_err());
    assert!(explorer.altitude_cut(9).is_err());
}

#[test]
fn rejects_nonzero_leaf_altitudes() {
    let (tree, mut altitudes) = plateau_bpt();
    altitudes[2] = 7;
    let err = HorizontalCutExplorer::new(&tree, &altitudes).expect_err("leaf must be zero");
    assert_eq!(
        err,
        HierarchyError::InvalidAltitudes {
            node: 2,
            defect: AltitudeDefect::NonZeroLeaf
        }
    );
}

#[test]
fn rejects_negative_altitudes() {
    let tree = Tree::from_parents(vec![2, 2, 2]).expect("valid tree");
    let err = HorizontalCutExplorer::new(&tree, &[0.0_f64, 0.0, -1.0])
        .expect_err("altitudes must be non-negative");
    assert_eq!(
        err,
        HierarchyError::InvalidAltitudes {
            node: 2,
            defect: AltitudeDefect::Negative
        }
    );
}

#[test]
fn rejects_altitude_arrays_of_the_wrong_length() {
    let (tree, _) = plateau_bpt();
    let err = HorizontalCutExplorer::new(&tree, &[0_u32; 3]).expect_err("wrong length");
    assert_eq!(
        err,
        HierarchyError::ShapeMismatch {
            got: 3,
            expected: 7
        }
    );
}
