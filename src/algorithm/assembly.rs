//! Breadth-first mosaic assembly from a single corner
//!
//! No global coordinates exist up front, so the frame is grown outward: the
//! first corner fixes the origin and axes, and every later tile is oriented
//! against the tile it was reached from. The adjacency graph says which tile
//! goes where; the orientation search says how it must be turned.

use std::collections::{HashMap, VecDeque};

use crate::io::error::{Approach, MosaicError, Result, topology_error};
use crate::spatial::dihedral::{Transformable, find_orientation};
use crate::spatial::grid::Grid;
use crate::spatial::side::Side;
use crate::spatial::tile::{Tile, TileId};

/// Places resolved tiles into a square grid
pub struct MosaicAssembler {
    pool: HashMap<TileId, Tile>,
    grid: Grid,
    frontier: VecDeque<(usize, usize)>,
}

impl MosaicAssembler {
    /// Take ownership of tiles whose neighbours are already resolved
    ///
    /// # Errors
    ///
    /// Returns a topology error if the tile count is not a perfect square
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        let grid = Grid::for_tile_count(tiles.len())?;
        let pool = tiles.into_iter().map(|tile| (tile.id(), tile)).collect();

        Ok(Self {
            pool,
            grid,
            frontier: VecDeque::new(),
        })
    }

    /// Assemble the mosaic starting from `corner`
    ///
    /// # Errors
    ///
    /// Returns an error if the corner cannot face East and South, a neighbour
    /// cannot be oriented to fit, two paths disagree about a cell, or tiles
    /// are left over
    pub fn assemble(mut self, corner: TileId) -> Result<Grid> {
        let mut origin = self.take(corner)?;
        orient_corner(&mut origin)?;
        self.grid.place((0, 0), origin, None)?;
        self.frontier.push_back((0, 0));

        while let Some(position) = self.frontier.pop_front() {
            self.expand(position)?;
        }

        if !self.grid.is_complete() || !self.pool.is_empty() {
            let side = self.grid.side();
            return Err(topology_error(&format!(
                "placed {} of {} cells, {} tiles unreachable from the first corner",
                self.grid.placed_count(),
                side * side,
                self.pool.len()
            )));
        }

        Ok(self.grid)
    }

    fn expand(&mut self, position: (usize, usize)) -> Result<()> {
        let Some(anchor) = self.grid.get(position) else {
            return Ok(());
        };
        let anchor_id = anchor.id();
        let edges = *anchor.edges();
        let neighbors = *anchor.neighbors();
        let side_length = self.grid.side();

        for (side, neighbor) in neighbors.iter() {
            let Some(neighbor_id) = *neighbor else {
                continue;
            };
            let approach = Approach {
                from: position,
                side,
            };
            let target = side.step(position, side_length, side_length).ok_or_else(|| {
                topology_error(&format!(
                    "tile {anchor_id} at ({}, {}) has neighbour {neighbor_id} beyond the {side} edge of the mosaic",
                    position.0, position.1
                ))
            })?;
            let facing = side.opposite();

            if let Some(occupant) = self.grid.get(target) {
                if occupant.id() != neighbor_id || !edges[side].abuts(occupant.edge(facing)) {
                    return Err(MosaicError::PlacementConflict {
                        position: target,
                        occupant: occupant.id(),
                        occupant_approach: self.grid.approach(target),
                        incoming: neighbor_id,
                        incoming_approach: approach,
                    });
                }
                continue;
            }

            let Some(mut tile) = self.pool.remove(&neighbor_id) else {
                return Err(self.misplaced(neighbor_id, approach));
            };

            let anchor_edge = edges[side];
            if find_orientation(&mut tile, |candidate| anchor_edge.abuts(candidate.edge(facing)))
                .is_none()
            {
                return Err(MosaicError::UnresolvableOrientation {
                    tile: neighbor_id,
                    anchor: anchor_id,
                    side,
                });
            }

            self.grid.place(target, tile, Some(approach))?;
            self.frontier.push_back(target);
        }

        Ok(())
    }

    // The tile is missing from the pool: either it already sits in another
    // cell or it was never ingested
    fn misplaced(&self, id: TileId, approach: Approach) -> MosaicError {
        match self.grid.tiles().find(|(_, tile)| tile.id() == id) {
            Some((position, _)) => MosaicError::PlacementConflict {
                position,
                occupant: id,
                occupant_approach: self.grid.approach(position),
                incoming: id,
                incoming_approach: approach,
            },
            None => topology_error(&format!("neighbour {id} is not part of the mosaic")),
        }
    }

    fn take(&mut self, id: TileId) -> Result<Tile> {
        self.pool
            .remove(&id)
            .ok_or_else(|| topology_error(&format!("tile {id} is not part of the mosaic")))
    }
}

/// Turn a corner tile until its neighbours lie East and South
///
/// A corner's two neighbours are adjacent in clockwise order, so turning
/// alone always suffices.
///
/// # Errors
///
/// Returns a topology error if no quarter turn puts neighbours on both sides
pub fn orient_corner(tile: &mut Tile) -> Result<()> {
    for _ in 0..4 {
        if tile.neighbor(Side::East).is_some() && tile.neighbor(Side::South).is_some() {
            return Ok(());
        }
        tile.rotate_cw();
    }

    Err(topology_error(&format!(
        "tile {} has no pair of neighbours on adjacent sides",
        tile.id()
    )))
}
