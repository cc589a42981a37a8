//! Implicit 4-adjacency grid graph provider implementing `EdgeGraph`.
//!
//! Pixels of a `height x width` image become vertices in row-major order;
//! edges join horizontal then vertical neighbours and are computed on the
//! fly, so the graph occupies constant memory regardless of size.

use thiserror::Error;

use ramure_core::EdgeGraph;

/// Error raised when constructing a [`GridGraph`].
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum GridGraphError {
    /// Both grid dimensions must be positive.
    #[error("grid dimensions must be positive, got {height}x{width}")]
    EmptyGrid {
        /// Requested number of rows.
        height: usize,
        /// Requested number of columns.
        width: usize,
    },
}

/// A `height x width` grid with 4-adjacency, vertices in row-major order.
///
/// Horizontal edges come first, row by row, followed by vertical edges.
///
/// # Examples
/// ```
/// use ramure_core::EdgeGraph;
/// use ramure_providers_grid::GridGraph;
///
/// let grid = GridGraph::new(2, 3)?;
/// assert_eq!(grid.num_vertices(), 6);
/// assert_eq!(grid.num_edges(), 7);
/// assert_eq!(grid.edge_from_index(0), (0, 1));   // first horizontal edge
/// assert_eq!(grid.edge_from_index(4), (0, 3));   // first vertical edge
/// # Ok::<(), ramure_providers_grid::GridGraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GridGraph {
    height: usize,
    width: usize,
}

impl GridGraph {
    /// Creates a grid with the given number of rows and columns.
    ///
    /// # Errors
    /// Returns [`GridGraphError::EmptyGrid`] when either dimension is zero.
    pub fn new(height: usize, width: usize) -> Result<Self, GridGraphError> {
        if height == 0 || width == 0 {
            return Err(GridGraphError::EmptyGrid { height, width });
        }
        Ok(Self { height, width })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    fn num_horizontal_edges(&self) -> usize {
        self.height * (self.width - 1)
    }
}

impl EdgeGraph for GridGraph {
    fn num_vertices(&self) -> usize {
        self.height * self.width
    }

    fn num_edges(&self) -> usize {
        self.num_horizontal_edges() + (self.height - 1) * self.width
    }

    fn edge_from_index(&self, index: usize) -> (usize, usize) {
        let horizontal = self.num_horizontal_edges();
        if index < horizontal {
            let row = index / (self.width - 1);
            let column = index % (self.width - 1);
            let source = row * self.width + column;
            (source, source + 1)
        } else {
            let offset = index - horizontal;
            let row = offset / self.width;
            let column = offset % self.width;
            let source = row * self.width + column;
            (source, source + self.width)
        }
    }
}
