//! Error types for mosaic reconstruction and its file-facing surface

use std::fmt;
use std::path::PathBuf;

use crate::spatial::side::Side;
use crate::spatial::tile::TileId;

/// How the assembler arrived at a grid cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Approach {
    /// Cell of the already placed tile
    pub from: (usize, usize),
    /// Side of that tile facing the target cell
    pub side: Side,
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} side of ({}, {})",
            self.side, self.from.0, self.from.1
        )
    }
}

/// Main error type for all engine operations
#[derive(Debug)]
pub enum MosaicError {
    /// Tile block is unusable (shape, characters, size or duplicate identity)
    MalformedTile {
        /// Identity given for the tile
        tile: TileId,
        /// Description of the defect
        reason: String,
    },

    /// More than one other tile claims the same edge
    AmbiguousAdjacency {
        /// Tile whose edge is contested
        tile: TileId,
        /// Contested side of that tile
        side: Side,
        /// Every tile involved, including `tile`, in ascending order
        tiles: Vec<TileId>,
    },

    /// Tile set cannot form a square mosaic
    Topology {
        /// Description of the structural problem
        reason: String,
    },

    /// No orientation of a neighbour fits the edge it is supposed to share
    UnresolvableOrientation {
        /// Tile that could not be oriented
        tile: TileId,
        /// Placed tile it should attach to
        anchor: TileId,
        /// Side of the anchor facing the tile
        side: Side,
    },

    /// A cell reached along two paths disagrees with itself
    PlacementConflict {
        /// Grid cell (row, column)
        position: (usize, usize),
        /// Tile already in the cell
        occupant: TileId,
        /// Path that placed the occupant (`None` for the starting corner)
        occupant_approach: Option<Approach>,
        /// Tile the second path expected
        incoming: TileId,
        /// Second path into the cell
        incoming_approach: Approach,
    },

    /// The motif does not occur in any orientation of the raster
    NoMotifOrientationFound {
        /// Lit pixels in the raster
        lit_pixels: usize,
    },

    /// Text input could not be parsed
    InvalidInput {
        /// 1-based line number
        line: usize,
        /// Description of what's wrong with the line
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Numerical computation produced invalid result
    Computation {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save raster image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedTile { tile, reason } => {
                write!(f, "Malformed tile {tile}: {reason}")
            }
            Self::AmbiguousAdjacency { tile, side, tiles } => {
                let listed: Vec<String> = tiles.iter().map(ToString::to_string).collect();
                write!(
                    f,
                    "Ambiguous adjacency on {side} side of tile {tile}: tiles {} share one edge",
                    listed.join(", ")
                )
            }
            Self::Topology { reason } => write!(f, "Topology error: {reason}"),
            Self::UnresolvableOrientation { tile, anchor, side } => {
                write!(
                    f,
                    "No orientation of tile {tile} fits the {side} side of tile {anchor}"
                )
            }
            Self::PlacementConflict {
                position,
                occupant,
                occupant_approach,
                incoming,
                incoming_approach,
            } => {
                let first = occupant_approach
                    .map_or_else(|| "starting corner".to_string(), |a| a.to_string());
                write!(
                    f,
                    "Placement conflict at ({}, {}): tile {occupant} placed via {first}, \
                     tile {incoming} expected via {incoming_approach}",
                    position.0, position.1
                )
            }
            Self::NoMotifOrientationFound { lit_pixels } => {
                write!(
                    f,
                    "Motif not found in any orientation ({lit_pixels} lit pixels)"
                )
            }
            Self::InvalidInput { line, reason } => {
                write!(f, "Invalid input at line {line}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl MosaicError {
    /// Whether the error comes from structurally invalid tile input
    ///
    /// Only a missing motif leaves a usable mosaic behind.
    pub const fn is_fatal(&self) -> bool {
        !matches!(self, Self::NoMotifOrientationFound { .. })
    }
}

/// Convenience type alias for engine results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> MosaicError {
    MosaicError::Computation {
        operation,
        reason: reason.to_string(),
    }
}

/// Create a malformed tile error
pub fn malformed_tile(tile: TileId, reason: &impl ToString) -> MosaicError {
    MosaicError::MalformedTile {
        tile,
        reason: reason.to_string(),
    }
}

/// Create a topology error
pub fn topology_error(reason: &impl ToString) -> MosaicError {
    MosaicError::Topology {
        reason: reason.to_string(),
    }
}
