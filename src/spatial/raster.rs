//! Flat pixel buffer built from tile interiors

use ndarray::Array2;
use std::fmt;

use crate::spatial::dihedral::{Orientation, Step, Transformable, mirror_array, rotate_array_cw};
use crate::spatial::pixel::Pixel;

/// Composited mosaic image
///
/// Only ever turned, mirrored or annotated after construction, never resized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Raster {
    pixels: Array2<Pixel>,
    orientation: Orientation,
}

impl Raster {
    /// Wrap a pixel array in its composited orientation
    pub const fn new(pixels: Array2<Pixel>) -> Self {
        Self {
            pixels,
            orientation: Orientation::IDENTITY,
        }
    }

    /// Parse `#`/`.` rows, as used for fixtures and saved rasters
    ///
    /// Returns `None` for ragged rows or unknown characters.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.as_ref().chars().count());
        let pixels = rows
            .iter()
            .flat_map(|row| row.as_ref().chars())
            .map(Pixel::from_char)
            .collect::<Option<Vec<Pixel>>>()?;
        Array2::from_shape_vec((height, width), pixels)
            .ok()
            .map(Self::new)
    }

    /// Pixel buffer in the current orientation
    pub const fn pixels(&self) -> &Array2<Pixel> {
        &self.pixels
    }

    /// Mutable access for annotating motif occurrences
    pub const fn pixels_mut(&mut self) -> &mut Array2<Pixel> {
        &mut self.pixels
    }

    /// Transform applied since composition
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Height in pixels
    pub fn rows(&self) -> usize {
        self.pixels.nrows()
    }

    /// Width in pixels
    pub fn cols(&self) -> usize {
        self.pixels.ncols()
    }

    /// Pixel at `(row, col)`
    pub fn get(&self, position: (usize, usize)) -> Option<Pixel> {
        self.pixels.get(position).copied()
    }

    /// Number of pixels equal to `value`
    pub fn count(&self, value: Pixel) -> usize {
        self.pixels.iter().filter(|&&pixel| pixel == value).count()
    }

    /// Number of lit pixels, marked or not
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|pixel| pixel.is_lit()).count()
    }
}

impl Transformable for Raster {
    fn rotate_cw(&mut self) {
        self.pixels = rotate_array_cw(&self.pixels);
        self.orientation = self.orientation.then(Step::Rotate);
    }

    fn mirror_horizontal(&mut self) {
        self.pixels = mirror_array(&self.pixels);
        self.orientation = self.orientation.then(Step::Mirror);
    }
}

impl fmt::Display for Raster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.pixels.rows() {
            let line: String = row.iter().map(|pixel| pixel.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
