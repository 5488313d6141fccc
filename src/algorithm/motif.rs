//! Motif search over the eight orientations of a raster
//!
//! The motif is a rectangular mask of required cells. Only one orientation of
//! the raster is upright relative to the motif, so the search stops at the
//! first orientation with any occurrence, marks them, and reports what is
//! left lit.

use bitvec::prelude::*;

use crate::io::configuration::DEFAULT_MOTIF;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::spatial::dihedral::{
    ORIENTATION_WALK, Orientation, Step, Transformable, find_orientation,
};
use crate::spatial::pixel::Pixel;
use crate::spatial::raster::Raster;

/// Rectangular mask of required-on cells
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Motif {
    rows: usize,
    cols: usize,
    required: BitVec,
}

impl Motif {
    /// Parse a motif: `#` marks a required cell, anything else is ignored
    ///
    /// Lines may differ in length; short lines are padded with don't-care
    /// cells.
    ///
    /// # Errors
    ///
    /// Returns an error if the motif has no required cell
    pub fn parse(text: &str) -> Result<Self> {
        let lines: Vec<&str> = text.lines().collect();
        let rows = lines.len();
        let cols = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let mut required = bitvec![0; rows * cols];
        for (row, line) in lines.iter().enumerate() {
            for (col, symbol) in line.chars().enumerate() {
                if symbol == '#' {
                    required.set(row * cols + col, true);
                }
            }
        }

        if required.not_any() {
            return Err(invalid_parameter(
                "motif",
                &text,
                &"motif needs at least one '#' cell",
            ));
        }

        Ok(Self {
            rows,
            cols,
            required,
        })
    }

    /// The three-line sea monster
    ///
    /// # Errors
    ///
    /// Never fails in practice; the built-in pattern always has required cells
    pub fn sea_monster() -> Result<Self> {
        Self::parse(DEFAULT_MOTIF)
    }

    /// Mask height
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Mask width
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of required cells
    pub fn weight(&self) -> usize {
        self.required.count_ones()
    }

    /// Offsets `(row, col)` of the required cells
    pub fn offsets(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.required
            .iter_ones()
            .map(|index| (index / self.cols, index % self.cols))
    }

    /// Whether the motif occurs with its top-left corner at `(row, col)`
    pub fn occurs_at(&self, raster: &Raster, (row, col): (usize, usize)) -> bool {
        self.offsets().all(|(dr, dc)| {
            raster
                .get((row + dr, col + dc))
                .is_some_and(Pixel::is_lit)
        })
    }

    /// Every top-left position where the motif occurs, row-major
    pub fn occurrences(&self, raster: &Raster) -> Vec<(usize, usize)> {
        if self.rows > raster.rows() || self.cols > raster.cols() {
            return Vec::new();
        }

        let mut found = Vec::new();
        for row in 0..=raster.rows() - self.rows {
            for col in 0..=raster.cols() - self.cols {
                if self.occurs_at(raster, (row, col)) {
                    found.push((row, col));
                }
            }
        }
        found
    }

    /// Mark the cells of every occurrence in the raster's current orientation
    ///
    /// Occurrences may overlap; each is counted. Returns the occurrence count.
    pub fn mark(&self, raster: &mut Raster) -> usize {
        let found = self.occurrences(raster);
        let pixels = raster.pixels_mut();
        for &(row, col) in &found {
            for (dr, dc) in self.offsets() {
                if let Some(pixel) = pixels.get_mut((row + dr, col + dc)) {
                    *pixel = Pixel::Motif;
                }
            }
        }
        found.len()
    }
}

/// Result of a successful scan
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MotifScan {
    /// Orientation, relative to the scanned raster, that holds the motif
    pub orientation: Orientation,
    /// Number of occurrences
    pub match_count: usize,
    /// Raster in that orientation with occurrence cells marked
    pub raster: Raster,
    /// Lit pixels not covered by any occurrence
    pub roughness: usize,
}

/// Outcome of scanning all orientations
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The motif occurs in some orientation
    Found(MotifScan),
    /// No orientation holds the motif
    NotFound {
        /// Lit pixels in the raster
        lit_pixels: usize,
    },
}

impl ScanOutcome {
    /// Occurrence count, zero when nothing was found
    pub const fn match_count(&self) -> usize {
        match self {
            Self::Found(scan) => scan.match_count,
            Self::NotFound { .. } => 0,
        }
    }

    /// Unmarked lit pixels, if the motif was found
    pub const fn roughness(&self) -> Option<usize> {
        match self {
            Self::Found(scan) => Some(scan.roughness),
            Self::NotFound { .. } => None,
        }
    }

    /// Treat a missing motif as an error
    ///
    /// # Errors
    ///
    /// Returns `NoMotifOrientationFound` if no orientation held the motif
    pub fn into_result(self) -> Result<MotifScan> {
        match self {
            Self::Found(scan) => Ok(scan),
            Self::NotFound { lit_pixels } => {
                Err(MosaicError::NoMotifOrientationFound { lit_pixels })
            }
        }
    }
}

/// Searches rasters for one motif
#[derive(Clone, Debug)]
pub struct MotifScanner {
    motif: Motif,
}

impl MotifScanner {
    /// Create a scanner for `motif`
    pub const fn new(motif: Motif) -> Self {
        Self { motif }
    }

    /// Motif being searched for
    pub const fn motif(&self) -> &Motif {
        &self.motif
    }

    /// Find the first orientation holding the motif and mark its occurrences
    pub fn scan(&self, mut raster: Raster) -> ScanOutcome {
        let lit_pixels = raster.lit_count();
        let Some(orientation) = find_orientation(&mut raster, |candidate| {
            !self.motif.occurrences(candidate).is_empty()
        }) else {
            return ScanOutcome::NotFound { lit_pixels };
        };

        let match_count = self.motif.mark(&mut raster);
        ScanOutcome::Found(MotifScan {
            orientation,
            match_count,
            roughness: raster.count(Pixel::On),
            raster,
        })
    }

    /// Occurrence count in each of the eight orientations, in walk order
    ///
    /// More than one non-zero entry means the upright orientation is ambiguous.
    pub fn survey(&self, raster: &Raster) -> Vec<(Orientation, usize)> {
        let mut candidate = raster.clone();
        let mut orientation = Orientation::IDENTITY;
        let mut counts = Vec::with_capacity(ORIENTATION_WALK.len() + 1);
        counts.push((orientation, self.motif.occurrences(&candidate).len()));

        for step in ORIENTATION_WALK {
            match step {
                Step::Rotate => candidate.rotate_cw(),
                Step::Mirror => candidate.mirror_horizontal(),
            }
            orientation = orientation.then(step);
            counts.push((orientation, self.motif.occurrences(&candidate).len()));
        }
        counts
    }
}
