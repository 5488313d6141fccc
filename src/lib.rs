//! Reconstruction of a square picture from scrambled, randomly oriented tiles
//!
//! Tiles are matched on their border fingerprints, assembled into a grid,
//! stripped of their borders and composited into one raster, which is then
//! searched for a motif in all eight orientations.

#![deny(unsafe_code)]

/// Adjacency resolution, assembly, compositing and motif search
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tiles, edges, orientations and the grids they are placed on
pub mod spatial;

pub use io::error::{MosaicError, Result};
