//! Solvable puzzle generation
//!
//! Cuts a picture into tiles with a one-pixel border each, giving every
//! border shared by two tiles its own edge class so the adjacency is
//! unambiguous, then turns, mirrors and shuffles the tiles. Border corner
//! pixels are always off; only the pixels between corners carry the class.

use ndarray::{Array2, s};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::HashSet;

use crate::io::configuration::{
    DEFAULT_FILL, MAX_SCRAMBLE_TILE_SIZE, MIN_GRID_SIZE, MIN_TILE_SIZE, SCRAMBLE_ID_BASE,
    SCRAMBLE_ID_RANGE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::dihedral::Orientation;
use crate::spatial::pixel::Pixel;
use crate::spatial::tile::{TileDescriptor, TileId};

/// Shape of a puzzle to generate
#[derive(Clone, Debug, PartialEq)]
pub struct MosaicBlueprint {
    /// Tiles per mosaic side
    pub grid_size: usize,
    /// Pixels per tile side, border included
    pub tile_size: usize,
    /// Fraction of lit pixels in a random picture
    pub fill: f64,
    /// Identities in row-major layout order; random when `None`
    pub ids: Option<Vec<TileId>>,
}

impl MosaicBlueprint {
    /// Blueprint with a random picture and random identities
    pub const fn new(grid_size: usize, tile_size: usize) -> Self {
        Self {
            grid_size,
            tile_size,
            fill: DEFAULT_FILL,
            ids: None,
        }
    }

    /// Use fixed identities, row-major
    #[must_use]
    pub fn with_ids(mut self, ids: Vec<TileId>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Set the fraction of lit pixels in a random picture
    #[must_use]
    pub const fn with_fill(mut self, fill: f64) -> Self {
        self.fill = fill;
        self
    }

    /// Side of the picture carried by the tile interiors
    pub const fn picture_size(&self) -> usize {
        self.grid_size * self.tile_size.saturating_sub(2)
    }
}

/// Generated puzzle along with its answer
#[derive(Clone, Debug)]
pub struct ScrambledMosaic {
    /// Tiles in shuffled order, each in a random orientation
    pub tiles: Vec<TileDescriptor>,
    /// Identity at each grid cell of the original layout
    pub layout: Array2<TileId>,
    /// Picture the interiors composite to, in the original orientation
    pub picture: Array2<Pixel>,
}

impl ScrambledMosaic {
    /// Identities of the four layout corners in ascending order
    pub fn corners(&self) -> Vec<TileId> {
        let last = self.layout.nrows().saturating_sub(1);
        let mut corners: Vec<TileId> = [(0, 0), (0, last), (last, 0), (last, last)]
            .iter()
            .filter_map(|&position| self.layout.get(position).copied())
            .collect();
        corners.sort_unstable();
        corners
    }
}

/// Generate a puzzle over a random picture
///
/// # Errors
///
/// Returns an error if the blueprint is out of range
pub fn scramble(blueprint: &MosaicBlueprint, seed: u64) -> Result<ScrambledMosaic> {
    if !(0.0..=1.0).contains(&blueprint.fill) {
        return Err(invalid_parameter(
            "fill",
            &blueprint.fill,
            &"fill must lie in 0.0..=1.0",
        ));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let size = blueprint.picture_size();
    let picture = Array2::from_shape_simple_fn((size, size), || {
        Pixel::from(rng.random_bool(blueprint.fill))
    });
    scramble_picture(blueprint, &picture, seed)
}

/// Generate a puzzle whose interiors composite to `picture`
///
/// # Errors
///
/// Returns an error if the blueprint is out of range, the picture does not
/// have the blueprint's size, the identities are wrong in number or repeat,
/// or the tile size leaves too few edge classes for the grid
pub fn scramble_picture(
    blueprint: &MosaicBlueprint,
    picture: &Array2<Pixel>,
    seed: u64,
) -> Result<ScrambledMosaic> {
    let n = blueprint.grid_size;
    let k = blueprint.tile_size;
    validate(blueprint, picture)?;

    let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed_7115);
    let ids = match &blueprint.ids {
        Some(ids) => ids.clone(),
        None => rand::seq::index::sample(&mut rng, SCRAMBLE_ID_RANGE, n * n)
            .into_iter()
            .map(|offset| SCRAMBLE_ID_BASE + offset as u64)
            .collect(),
    };
    let layout = Array2::from_shape_vec((n, n), ids)
        .map_err(|e| invalid_parameter("ids", &n, &e))?;

    // Separators between rows of tiles, then between columns of tiles
    let separator_count = 2 * n * (n + 1);
    let mut classes = edge_classes(k - 2);
    if classes.len() < separator_count {
        return Err(invalid_parameter(
            "tile_size",
            &k,
            &format!(
                "{} edge classes available, a {n}x{n} mosaic needs {separator_count}",
                classes.len()
            ),
        ));
    }
    classes.shuffle(&mut rng);
    let (horizontal, vertical) = classes.split_at(n * (n + 1));

    let interior = k - 2;
    let mut tiles = Vec::with_capacity(n * n);
    for ((row, col), &id) in layout.indexed_iter() {
        let mut block = Array2::from_elem((k, k), Pixel::Off);
        block
            .slice_mut(s![1..=interior, 1..=interior])
            .assign(&picture.slice(s![
                row * interior..(row + 1) * interior,
                col * interior..(col + 1) * interior
            ]));

        let north = horizontal.get(row * n + col).copied().unwrap_or(0);
        let south = horizontal.get((row + 1) * n + col).copied().unwrap_or(0);
        let west = vertical.get(row * (n + 1) + col).copied().unwrap_or(0);
        let east = vertical.get(row * (n + 1) + col + 1).copied().unwrap_or(0);
        for i in 0..interior {
            let bit = |pattern: u64| Pixel::from((pattern >> (interior - 1 - i)) & 1 == 1);
            set(&mut block, (0, i + 1), bit(north));
            set(&mut block, (k - 1, i + 1), bit(south));
            set(&mut block, (i + 1, 0), bit(west));
            set(&mut block, (i + 1, k - 1), bit(east));
        }

        let orientation = Orientation::new(rng.random_range(0..4), rng.random_bool(0.5));
        tiles.push(TileDescriptor {
            id,
            rows: render(&orientation.apply_to_array(&block)),
        });
    }
    tiles.shuffle(&mut rng);

    Ok(ScrambledMosaic {
        tiles,
        layout,
        picture: picture.clone(),
    })
}

fn validate(blueprint: &MosaicBlueprint, picture: &Array2<Pixel>) -> Result<()> {
    let n = blueprint.grid_size;
    let k = blueprint.tile_size;
    if n < MIN_GRID_SIZE {
        return Err(invalid_parameter(
            "grid_size",
            &n,
            &format!("mosaic needs at least {MIN_GRID_SIZE} tiles per side"),
        ));
    }
    if !(MIN_TILE_SIZE..=MAX_SCRAMBLE_TILE_SIZE).contains(&k) {
        return Err(invalid_parameter(
            "tile_size",
            &k,
            &format!("tile size must lie in {MIN_TILE_SIZE}..={MAX_SCRAMBLE_TILE_SIZE}"),
        ));
    }
    let expected = blueprint.picture_size();
    if picture.dim() != (expected, expected) {
        return Err(invalid_parameter(
            "picture",
            &format!("{:?}", picture.dim()),
            &format!("picture must be {expected}x{expected}"),
        ));
    }
    match &blueprint.ids {
        Some(ids) => {
            let distinct: HashSet<&TileId> = ids.iter().collect();
            if ids.len() != n * n || distinct.len() != ids.len() {
                return Err(invalid_parameter(
                    "ids",
                    &ids.len(),
                    &format!("need {} distinct identities", n * n),
                ));
            }
        }
        None if n * n > SCRAMBLE_ID_RANGE => {
            return Err(invalid_parameter(
                "grid_size",
                &n,
                &format!("random identities cover at most {SCRAMBLE_ID_RANGE} tiles"),
            ));
        }
        None => {}
    }
    Ok(())
}

/// One representative per reversal class of `bits`-bit patterns
///
/// Palindromes are skipped: a border that reads the same both ways fits its
/// neighbour in two orientations.
fn edge_classes(bits: usize) -> Vec<u64> {
    let reverse = |pattern: u64| {
        (0..bits).fold(0u64, |acc, i| (acc << 1) | ((pattern >> i) & 1))
    };
    (0..1u64 << bits)
        .filter(|&pattern| pattern < reverse(pattern))
        .collect()
}

fn set(block: &mut Array2<Pixel>, position: (usize, usize), pixel: Pixel) {
    if let Some(cell) = block.get_mut(position) {
        *cell = pixel;
    }
}

/// Render a pixel block as `#`/`.` rows
pub fn render(block: &Array2<Pixel>) -> Vec<String> {
    block
        .rows()
        .into_iter()
        .map(|row| row.iter().map(|pixel| pixel.symbol()).collect())
        .collect()
}
