//! Raster composition from an assembled grid

use ndarray::{Array2, s};

use crate::io::error::{Result, topology_error};
use crate::spatial::grid::Grid;
use crate::spatial::pixel::Pixel;
use crate::spatial::raster::Raster;
use crate::spatial::tile::Tile;

/// Copy every tile interior into its block of one contiguous raster
///
/// Borders were only needed for matching and are dropped.
///
/// # Errors
///
/// Returns a topology error if the grid still has empty cells or its tiles
/// disagree on interior size
pub fn composite(grid: &Grid) -> Result<Raster> {
    if !grid.is_complete() {
        return Err(topology_error(&format!(
            "cannot composite a grid with {} of {} cells filled",
            grid.placed_count(),
            grid.side() * grid.side()
        )));
    }

    let block = grid.get((0, 0)).map_or(0, Tile::interior_size);
    let extent = grid.side() * block;
    let mut pixels = Array2::from_elem((extent, extent), Pixel::Off);

    for ((row, col), tile) in grid.tiles() {
        if tile.interior_size() != block {
            return Err(topology_error(&format!(
                "tile {} has a {}-pixel interior, expected {block}",
                tile.id(),
                tile.interior_size()
            )));
        }
        let top = row * block;
        let left = col * block;
        pixels
            .slice_mut(s![top..top + block, left..left + block])
            .assign(tile.interior());
    }

    Ok(Raster::new(pixels))
}
