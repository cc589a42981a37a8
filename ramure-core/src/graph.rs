//! Graph access used by hierarchy construction.
//!
//! Builders consume graphs through the [`EdgeGraph`] trait: an indexed edge
//! list over vertices `[0, num_vertices)`. Any provider satisfying the trait
//! works; [`UndirectedGraph`] is the owned edge-list implementation the crate
//! itself returns for minimum spanning trees.

/// Abstraction over an undirected graph presented as an indexed edge list.
///
/// Self-loops and parallel edges are permitted; the hierarchy builders filter
/// them through the union-find cycle test.
///
/// # Examples
/// ```
/// use ramure_core::{EdgeGraph, UndirectedGraph};
///
/// let mut graph = UndirectedGraph::new(3);
/// graph.add_edge(0, 1);
/// graph.add_edge(1, 2);
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.edge_from_index(1), (1, 2));
/// assert_eq!(graph.edges().collect::<Vec<_>>(), [(0, 1), (1, 2)]);
/// ```
pub trait EdgeGraph {
    /// Returns the number of vertices.
    fn num_vertices(&self) -> usize;

    /// Returns the number of edges.
    fn num_edges(&self) -> usize;

    /// Endpoints of edge `index`.
    ///
    /// Implementations guarantee both endpoints are smaller than
    /// [`Self::num_vertices`].
    fn edge_from_index(&self, index: usize) -> (usize, usize);

    /// Edges in index order.
    fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_
    where
        Self: Sized,
    {
        (0..self.num_edges()).map(|index| self.edge_from_index(index))
    }
}

/// An undirected graph owning its edge list.
///
/// This is the concrete graph type produced for minimum spanning trees; it is
/// also the simplest way to feed an explicit edge list to the builders.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UndirectedGraph {
    num_vertices: usize,
    edges: Vec<(usize, usize)>,
}

impl UndirectedGraph {
    /// Creates a graph with `num_vertices` vertices and no edges.
    #[must_use]
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            edges: Vec::new(),
        }
    }

    /// Creates a graph from an explicit edge list.
    ///
    /// # Panics
    /// Panics if an endpoint is not smaller than `num_vertices`.
    #[must_use]
    pub fn from_edges(num_vertices: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut graph = Self::new(num_vertices);
        for (source, target) in edges {
            graph.add_edge(source, target);
        }
        graph
    }

    /// Appends the edge `{source, target}`.
    ///
    /// # Panics
    /// Panics if an endpoint is not smaller than [`Self::num_vertices`].
    pub fn add_edge(&mut self, source: usize, target: usize) {
        assert!(
            source < self.num_vertices && target < self.num_vertices,
            "edge ({source}, {target}) references a vertex outside [0, {})",
            self.num_vertices,
        );
        self.edges.push((source, target));
    }

    /// Returns the owned edge list in insertion order.
    #[must_use]
    pub fn edge_list(&self) -> &[(usize, usize)] {
        &self.edges
    }
}

impl EdgeGraph for UndirectedGraph {
    fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn edge_from_index(&self, index: usize) -> (usize, usize) {
        self.edges[index]
    }
}
