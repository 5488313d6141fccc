//! Neighbour resolution by edge fingerprint
//!
//! Every edge is indexed by its canonical key, so tiles that could share a
//! border land in the same bucket regardless of how either was scanned. A
//! bucket holding edges of more than two distinct tiles is ambiguous.

use std::collections::{BTreeSet, HashMap};

use crate::io::configuration::{
    BORDER_NEIGHBORS, CORNER_NEIGHBORS, INTERIOR_NEIGHBORS, MOSAIC_CORNERS,
};
use crate::io::error::{MosaicError, Result, topology_error};
use crate::spatial::side::{Side, Sides};
use crate::spatial::tile::{Tile, TileClass, TileId};

/// Resolved neighbour map keyed by tile identity
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    links: HashMap<TileId, Sides<Option<TileId>>>,
}

impl AdjacencyGraph {
    /// Neighbour of `tile` across `side`, in the orientation at resolution time
    pub fn neighbor(&self, tile: TileId, side: Side) -> Option<TileId> {
        self.links.get(&tile).and_then(|sides| sides[side])
    }

    /// All neighbour slots of `tile`
    pub fn neighbors(&self, tile: TileId) -> Option<&Sides<Option<TileId>>> {
        self.links.get(&tile)
    }

    /// Number of resolved neighbours of `tile`
    pub fn neighbor_count(&self, tile: TileId) -> usize {
        self.links
            .get(&tile)
            .map_or(0, |sides| sides.values().filter(|n| n.is_some()).count())
    }

    /// Number of tiles in the graph
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Whether the graph holds no tiles
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Tiles of one class in ascending identity order
    pub fn tiles_of_class(&self, class: TileClass) -> Vec<TileId> {
        let mut ids: Vec<TileId> = self
            .links
            .iter()
            .filter(|(_, sides)| classify(sides) == class)
            .map(|(&id, _)| id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// The four corner tiles in ascending identity order
    ///
    /// # Errors
    ///
    /// Returns a topology error unless exactly four tiles have two neighbours
    pub fn corners(&self) -> Result<[TileId; MOSAIC_CORNERS]> {
        let corners = self.tiles_of_class(TileClass::Corner);
        let found = corners.len();
        corners.try_into().map_err(|_: Vec<TileId>| {
            topology_error(&format!(
                "found {found} corner tiles, a rectangular mosaic has {MOSAIC_CORNERS}"
            ))
        })
    }
}

fn classify(sides: &Sides<Option<TileId>>) -> TileClass {
    match sides.values().filter(|n| n.is_some()).count() {
        CORNER_NEIGHBORS => TileClass::Corner,
        BORDER_NEIGHBORS => TileClass::Border,
        INTERIOR_NEIGHBORS => TileClass::Interior,
        _ => TileClass::Detached,
    }
}

/// Resolve the neighbour of every tile on every side
///
/// Clears any neighbours recorded earlier, then links each edge to the single
/// other tile owning a matching edge. Running it twice gives the same result.
///
/// # Errors
///
/// Returns an error if more than one other tile matches the same edge
pub fn resolve(tiles: &mut [Tile]) -> Result<AdjacencyGraph> {
    let mut buckets: HashMap<u64, Vec<(TileId, Side)>> = HashMap::new();
    for tile in tiles.iter() {
        for (side, edge) in tile.edges().iter() {
            buckets
                .entry(edge.canonical())
                .or_default()
                .push((tile.id(), side));
        }
    }

    let mut graph = AdjacencyGraph::default();
    for tile in tiles.iter_mut() {
        let id = tile.id();
        tile.clear_neighbors();
        for side in Side::ALL {
            let candidates: BTreeSet<TileId> = buckets
                .get(&tile.edge(side).canonical())
                .into_iter()
                .flatten()
                .filter(|&&(other, _)| other != id)
                .map(|&(other, _)| other)
                .collect();

            if candidates.len() > 1 {
                let mut involved: Vec<TileId> = candidates.into_iter().collect();
                involved.push(id);
                involved.sort_unstable();
                return Err(MosaicError::AmbiguousAdjacency {
                    tile: id,
                    side,
                    tiles: involved,
                });
            }

            tile.set_neighbor(side, candidates.into_iter().next());
        }
        graph.links.insert(id, *tile.neighbors());
    }

    Ok(graph)
}
