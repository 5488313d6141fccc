//! Mosaic reconstruction pipeline
//!
//! Tiles are ingested one at a time, then a run resolves adjacency, assembles
//! the grid, composites the raster and scans it for the motif. Each stage
//! depends on the complete output of the previous one.

use std::collections::HashSet;
use std::fmt;

use crate::algorithm::adjacency::resolve;
use crate::algorithm::assembly::MosaicAssembler;
use crate::algorithm::composite::composite;
use crate::algorithm::motif::{MotifScanner, ScanOutcome};
use crate::io::configuration::{MIN_GRID_SIZE, MOSAIC_CORNERS};
use crate::io::error::{Result, computation_error, malformed_tile, topology_error};
use crate::spatial::grid::Grid;
use crate::spatial::raster::Raster;
use crate::spatial::tile::{Tile, TileDescriptor, TileId};

/// Pipeline stage about to run
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Checking the tile count forms a square
    Validating,
    /// Linking tiles that share an edge
    Resolving,
    /// Placing tiles into the grid
    Assembling,
    /// Copying interiors into the raster
    Compositing,
    /// Searching the raster for the motif
    Scanning,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Validating => "validating",
            Self::Resolving => "resolving edges",
            Self::Assembling => "assembling",
            Self::Compositing => "compositing",
            Self::Scanning => "scanning",
        };
        f.write_str(name)
    }
}

/// Everything a run produces
#[derive(Clone, Debug)]
pub struct MosaicReport {
    /// Corner tile identities in ascending order
    pub corners: [TileId; MOSAIC_CORNERS],
    /// Product of the corner identities
    pub corner_product: u64,
    /// Assembled tile identities, row-major
    pub layout: Vec<Vec<TileId>>,
    /// Composited raster before any motif search
    pub raster: Raster,
    /// Motif search result
    pub scan: ScanOutcome,
}

/// Collects tiles and runs the reconstruction pipeline
#[derive(Debug, Default)]
pub struct MosaicEngine {
    tiles: Vec<Tile>,
    ids: HashSet<TileId>,
}

impl MosaicEngine {
    /// Create an engine with no tiles
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine and ingest every descriptor
    ///
    /// # Errors
    ///
    /// Returns the first ingestion error
    pub fn from_descriptors<'a, I>(descriptors: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a TileDescriptor>,
    {
        let mut engine = Self::new();
        for descriptor in descriptors {
            engine.ingest(descriptor)?;
        }
        Ok(engine)
    }

    /// Accept one tile
    ///
    /// # Errors
    ///
    /// Returns a malformed tile error if the block is invalid, differs in size
    /// from tiles ingested earlier, or reuses an identity
    pub fn ingest(&mut self, descriptor: &TileDescriptor) -> Result<()> {
        if self.ids.contains(&descriptor.id) {
            return Err(malformed_tile(descriptor.id, &"duplicate tile identity"));
        }

        let tile = Tile::from_rows(descriptor.id, &descriptor.rows)?;
        if let Some(first) = self.tiles.first().filter(|first| first.size() != tile.size()) {
            return Err(malformed_tile(
                tile.id(),
                &format!(
                    "side of {} pixels differs from the {} pixels of earlier tiles",
                    tile.size(),
                    first.size()
                ),
            ));
        }

        self.ids.insert(tile.id());
        self.tiles.push(tile);
        Ok(())
    }

    /// Number of tiles ingested
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no tile has been ingested
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Run the pipeline
    ///
    /// # Errors
    ///
    /// Returns the first fatal error of any stage; a missing motif is not an
    /// error here but a [`ScanOutcome::NotFound`] in the report
    pub fn run(self, scanner: &MotifScanner) -> Result<MosaicReport> {
        self.run_observed(scanner, |_| {})
    }

    /// Run the pipeline, announcing each stage before it starts
    ///
    /// # Errors
    ///
    /// Returns the first fatal error of any stage
    pub fn run_observed<F>(self, scanner: &MotifScanner, mut observe: F) -> Result<MosaicReport>
    where
        F: FnMut(Stage),
    {
        let mut tiles = self.tiles;

        observe(Stage::Validating);
        let tile_count = tiles.len();
        let side = tile_count.isqrt();
        if side * side != tile_count || side < MIN_GRID_SIZE {
            return Err(topology_error(&format!(
                "{tile_count} tiles cannot form a square mosaic of at least \
                 {MIN_GRID_SIZE}x{MIN_GRID_SIZE}"
            )));
        }

        observe(Stage::Resolving);
        let graph = resolve(&mut tiles)?;
        let corners = graph.corners()?;
        let corner_product = corner_product(&corners)?;

        observe(Stage::Assembling);
        let grid = MosaicAssembler::new(tiles)?.assemble(corners[0])?;
        let layout = layout_of(&grid);

        observe(Stage::Compositing);
        let raster = composite(&grid)?;

        observe(Stage::Scanning);
        let scan = scanner.scan(raster.clone());

        Ok(MosaicReport {
            corners,
            corner_product,
            layout,
            raster,
            scan,
        })
    }
}

/// Product of tile identities, failing on overflow
///
/// # Errors
///
/// Returns a computation error if the product does not fit in 64 bits
pub fn corner_product(corners: &[TileId]) -> Result<u64> {
    corners.iter().try_fold(1u64, |product, &id| {
        product
            .checked_mul(id)
            .ok_or_else(|| computation_error("corner product", &"product overflows 64 bits"))
    })
}

fn layout_of(grid: &Grid) -> Vec<Vec<TileId>> {
    let side = grid.side();
    (0..side)
        .map(|row| {
            (0..side)
                .filter_map(|col| grid.get((row, col)).map(Tile::id))
                .collect()
        })
        .collect()
}
