//! Square grid of placed tiles
//!
//! Cells are filled once and never re-oriented. Each cell remembers the
//! approach that filled it so a later disagreement can name both paths.

use ndarray::Array2;

use crate::io::error::{Approach, Result, topology_error};
use crate::spatial::tile::{Tile, TileId};

/// Mosaic under construction, `side x side` cells indexed `(row, col)`
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2<Option<Tile>>,
    approaches: Array2<Option<Approach>>,
}

impl Grid {
    /// Create an empty grid
    pub fn new(side: usize) -> Self {
        Self {
            cells: Array2::from_shape_simple_fn((side, side), || None),
            approaches: Array2::from_elem((side, side), None),
        }
    }

    /// Create an empty grid sized for `tile_count` tiles
    ///
    /// # Errors
    ///
    /// Returns a topology error if `tile_count` is not a perfect square
    pub fn for_tile_count(tile_count: usize) -> Result<Self> {
        let side = tile_count.isqrt();
        if side * side != tile_count {
            return Err(topology_error(&format!(
                "{tile_count} tiles cannot form a square mosaic"
            )));
        }
        Ok(Self::new(side))
    }

    /// Cells per row and per column
    pub fn side(&self) -> usize {
        self.cells.nrows()
    }

    /// Tile placed at `(row, col)`
    pub fn get(&self, position: (usize, usize)) -> Option<&Tile> {
        self.cells.get(position).and_then(Option::as_ref)
    }

    /// Whether `(row, col)` already holds a tile
    pub fn is_occupied(&self, position: (usize, usize)) -> bool {
        self.get(position).is_some()
    }

    /// Path that filled `(row, col)`; `None` for the starting cell or an empty one
    pub fn approach(&self, position: (usize, usize)) -> Option<Approach> {
        self.approaches.get(position).copied().flatten()
    }

    /// Place a tile into an empty cell
    ///
    /// # Errors
    ///
    /// Returns a topology error if the position is outside the grid or the
    /// cell is already occupied
    pub fn place(
        &mut self,
        position: (usize, usize),
        tile: Tile,
        approach: Option<Approach>,
    ) -> Result<()> {
        let cell = self.cells.get_mut(position).ok_or_else(|| {
            topology_error(&format!(
                "cell ({}, {}) is outside the mosaic",
                position.0, position.1
            ))
        })?;
        if cell.is_some() {
            return Err(topology_error(&format!(
                "cell ({}, {}) is already occupied",
                position.0, position.1
            )));
        }
        *cell = Some(tile);

        if let Some(slot) = self.approaches.get_mut(position) {
            *slot = approach;
        }
        Ok(())
    }

    /// Number of filled cells
    pub fn placed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Whether every cell holds a tile
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Identities of the four corner cells, clockwise from the top left
    pub fn corner_ids(&self) -> Option<[TileId; 4]> {
        let last = self.side().checked_sub(1)?;
        Some([
            self.get((0, 0))?.id(),
            self.get((0, last))?.id(),
            self.get((last, last))?.id(),
            self.get((last, 0))?.id(),
        ])
    }

    /// Identity layout, `None` for empty cells
    pub fn layout(&self) -> Array2<Option<TileId>> {
        self.cells.map(|cell| cell.as_ref().map(Tile::id))
    }

    /// Iterate filled cells in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = ((usize, usize), &Tile)> {
        self.cells
            .indexed_iter()
            .filter_map(|(position, cell)| cell.as_ref().map(|tile| (position, tile)))
    }
}
