//! Square tiles with edge fingerprints, interior pixels and neighbour slots
//!
//! A tile is parsed once from its full pixel block. The border is reduced to
//! four fingerprints read clockwise (North left to right, East top to bottom,
//! South right to left, West bottom to top) and only the interior pixels are
//! kept. Transforms update fingerprints, neighbour slots and interior
//! together, so `edges[side]` is always the border of `interior` on `side`.

use ndarray::{Array2, s};

use crate::io::configuration::{
    BORDER_NEIGHBORS, CORNER_NEIGHBORS, INTERIOR_NEIGHBORS, MAX_EDGE_LENGTH, MIN_TILE_SIZE,
};
use crate::io::error::{Result, malformed_tile};
use crate::spatial::dihedral::{Orientation, Step, Transformable, mirror_array, rotate_array_cw};
use crate::spatial::edge::EdgeFingerprint;
use crate::spatial::pixel::Pixel;
use crate::spatial::side::{Side, Sides};

/// Opaque tile identity
pub type TileId = u64;

/// Raw tile as handed over by a parser: identity plus pixel rows
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileDescriptor {
    /// Tile identity
    pub id: TileId,
    /// Square block of `#` (on) and `.` (off) characters
    pub rows: Vec<String>,
}

/// Position of a tile in the mosaic implied by its neighbour count
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TileClass {
    /// Two neighbours
    Corner,
    /// Three neighbours
    Border,
    /// Four neighbours
    Interior,
    /// Any other neighbour count, impossible in a rectangular mosaic
    Detached,
}

/// A square tile in its current orientation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    size: usize,
    edges: Sides<EdgeFingerprint>,
    interior: Array2<Pixel>,
    neighbors: Sides<Option<TileId>>,
    orientation: Orientation,
}

impl Tile {
    /// Build a tile from text rows
    ///
    /// # Errors
    ///
    /// Returns an error if the block is not square, is smaller than 3 or larger
    /// than 64 pixels per side, or contains characters other than `#` and `.`
    pub fn from_rows<S: AsRef<str>>(id: TileId, rows: &[S]) -> Result<Self> {
        let size = rows.len();
        let mut pixels = Vec::with_capacity(size * size);

        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let width = row.chars().count();
            if width != size {
                return Err(malformed_tile(
                    id,
                    &format!("row {row_index} has {width} pixels, expected {size}"),
                ));
            }
            for symbol in row.chars() {
                let pixel = Pixel::from_char(symbol).ok_or_else(|| {
                    malformed_tile(
                        id,
                        &format!("unexpected character {symbol:?} in row {row_index}"),
                    )
                })?;
                pixels.push(pixel);
            }
        }

        let block = Array2::from_shape_vec((size, size), pixels)
            .map_err(|e| malformed_tile(id, &e))?;
        Self::from_pixels(id, &block)
    }

    /// Build a tile from its full pixel block, border included
    ///
    /// # Errors
    ///
    /// Returns an error if the block is not square or its side is outside
    /// the supported range
    pub fn from_pixels(id: TileId, block: &Array2<Pixel>) -> Result<Self> {
        let (rows, cols) = block.dim();
        if rows != cols {
            return Err(malformed_tile(
                id,
                &format!("block is {rows}x{cols}, tiles must be square"),
            ));
        }
        let size = rows;
        if !(MIN_TILE_SIZE..=MAX_EDGE_LENGTH).contains(&size) {
            return Err(malformed_tile(
                id,
                &format!(
                    "side of {size} pixels is outside {MIN_TILE_SIZE}..={MAX_EDGE_LENGTH}"
                ),
            ));
        }

        let last = size - 1;
        let lit = |pixel: &Pixel| pixel.is_lit();
        let north: Vec<bool> = block.row(0).iter().map(lit).collect();
        let east: Vec<bool> = block.column(last).iter().map(lit).collect();
        let south: Vec<bool> = block.row(last).iter().rev().map(lit).collect();
        let west: Vec<bool> = block.column(0).iter().rev().map(lit).collect();

        let edges = Sides::new([
            EdgeFingerprint::from_pixels(&north)?,
            EdgeFingerprint::from_pixels(&east)?,
            EdgeFingerprint::from_pixels(&south)?,
            EdgeFingerprint::from_pixels(&west)?,
        ]);

        Ok(Self {
            id,
            size,
            edges,
            interior: block.slice(s![1..last, 1..last]).to_owned(),
            neighbors: Sides::default(),
            orientation: Orientation::IDENTITY,
        })
    }

    /// Tile identity
    pub const fn id(&self) -> TileId {
        self.id
    }

    /// Side length in pixels, border included
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Side length of the interior in pixels
    pub const fn interior_size(&self) -> usize {
        self.size - 2
    }

    /// Fingerprint of one border as currently oriented
    pub fn edge(&self, side: Side) -> &EdgeFingerprint {
        &self.edges[side]
    }

    /// All four fingerprints
    pub const fn edges(&self) -> &Sides<EdgeFingerprint> {
        &self.edges
    }

    /// Interior pixels as currently oriented
    pub const fn interior(&self) -> &Array2<Pixel> {
        &self.interior
    }

    /// Neighbour across one side, if resolved
    pub fn neighbor(&self, side: Side) -> Option<TileId> {
        self.neighbors[side]
    }

    /// All four neighbour slots
    pub const fn neighbors(&self) -> &Sides<Option<TileId>> {
        &self.neighbors
    }

    /// Record the neighbour across one side
    pub fn set_neighbor(&mut self, side: Side, neighbor: Option<TileId>) {
        self.neighbors[side] = neighbor;
    }

    /// Forget all neighbours
    pub fn clear_neighbors(&mut self) {
        self.neighbors = Sides::default();
    }

    /// Transform applied since the tile was parsed
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of resolved neighbours
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.values().filter(|n| n.is_some()).count()
    }

    /// Classify the tile by its neighbour count
    pub fn class(&self) -> TileClass {
        match self.neighbor_count() {
            CORNER_NEIGHBORS => TileClass::Corner,
            BORDER_NEIGHBORS => TileClass::Border,
            INTERIOR_NEIGHBORS => TileClass::Interior,
            _ => TileClass::Detached,
        }
    }
}

impl Transformable for Tile {
    fn rotate_cw(&mut self) {
        self.edges.rotate_cw();
        self.neighbors.rotate_cw();
        self.interior = rotate_array_cw(&self.interior);
        self.orientation = self.orientation.then(Step::Rotate);
    }

    fn mirror_horizontal(&mut self) {
        self.edges.swap_east_west();
        for edge in self.edges.values_mut() {
            edge.flip();
        }
        self.neighbors.swap_east_west();
        self.interior = mirror_array(&self.interior);
        self.orientation = self.orientation.then(Step::Mirror);
    }
}
