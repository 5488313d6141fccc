//! Spatial data structures and orientation handling
//!
//! This module contains spatial-related functionality including:
//! - Sides, edge fingerprints and pixels
//! - Tiles and their dihedral transforms
//! - The placement grid and the composited raster

/// Dihedral group of the square and the orientation search
pub mod dihedral;
/// Edge fingerprints packed into integers
pub mod edge;
/// Placement grid indexed by row and column
pub mod grid;
/// Pixel states
pub mod pixel;
/// Composited picture
pub mod raster;
/// Solvable puzzle generation
pub mod scramble;
/// Compass sides and per-side storage
pub mod side;
/// Tiles with edges, interior and neighbours
pub mod tile;

pub use grid::Grid;
pub use tile::Tile;
