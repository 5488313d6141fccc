//! Engine constants and runtime configuration defaults

// Fingerprints pack an edge into a u64
/// Maximum tile side length in pixels
pub const MAX_EDGE_LENGTH: usize = 64;

// A one-pixel border on both sides must leave an interior behind
/// Minimum tile side length in pixels
pub const MIN_TILE_SIZE: usize = 3;

// Two neighbours per corner tile only holds from 2x2 upward
/// Minimum mosaic side length in tiles
pub const MIN_GRID_SIZE: usize = 2;

/// Neighbour count of a tile in a mosaic corner
pub const CORNER_NEIGHBORS: usize = 2;

/// Neighbour count of a tile along a mosaic border
pub const BORDER_NEIGHBORS: usize = 3;

/// Neighbour count of a tile surrounded on all sides
pub const INTERIOR_NEIGHBORS: usize = 4;

/// Number of corners in a rectangular mosaic
pub const MOSAIC_CORNERS: usize = 4;

/// Default motif searched for in the raster
pub const DEFAULT_MOTIF: &str = concat!(
    "                  # \n",
    "#    ##    ##    ###\n",
    " #  #  #  #  #  #   ",
);

// Scrambler limits keep the edge-class enumeration small
/// Largest tile size the scrambler will generate
pub const MAX_SCRAMBLE_TILE_SIZE: usize = 22;
/// Fixed seed for reproducible scrambling
pub const DEFAULT_SEED: u64 = 42;
/// Default fraction of lit interior pixels in scrambled pictures
pub const DEFAULT_FILL: f64 = 0.35;
/// Lowest tile identity handed out by the scrambler
pub const SCRAMBLE_ID_BASE: u64 = 1000;
/// Number of distinct identities available to the scrambler
pub const SCRAMBLE_ID_RANGE: usize = 9000;

// Output settings
/// Extension of puzzle files picked up from a directory
pub const INPUT_EXTENSION: &str = "txt";
/// Suffix added to exported raster filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// RGBA colour of unlit pixels
pub const OFF_COLOR: [u8; 4] = [16, 32, 64, 255];
/// RGBA colour of lit pixels
pub const ON_COLOR: [u8; 4] = [96, 160, 224, 255];
/// RGBA colour of motif pixels
pub const MOTIF_COLOR: [u8; 4] = [240, 64, 48, 255];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Number of pipeline stages reported per file
pub const PIPELINE_STAGES: u64 = 5;
