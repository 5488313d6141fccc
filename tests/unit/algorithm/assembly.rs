//! Tests for breadth-first mosaic assembly

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use tilemosaic::MosaicError;
    use tilemosaic::algorithm::adjacency::resolve;
    use tilemosaic::algorithm::assembly::{MosaicAssembler, orient_corner};
    use tilemosaic::spatial::grid::Grid;
    use tilemosaic::spatial::scramble::{MosaicBlueprint, scramble};
    use tilemosaic::spatial::side::Side;
    use tilemosaic::spatial::tile::{Tile, TileId};

    fn resolved(grid_size: usize, seed: u64) -> (Vec<Tile>, Array2<TileId>) {
        let count = (grid_size * grid_size) as u64;
        let blueprint = MosaicBlueprint::new(grid_size, 10).with_ids((1..=count).collect());
        let puzzle = scramble(&blueprint, seed).expect("valid blueprint");
        let mut tiles: Vec<Tile> = puzzle
            .tiles
            .iter()
            .map(|t| Tile::from_rows(t.id, &t.rows).expect("valid tile"))
            .collect();
        resolve(&mut tiles).expect("unambiguous edges");
        (tiles, puzzle.layout)
    }

    fn layout_of(grid: &Grid) -> Array2<TileId> {
        grid.layout().mapv(|id| id.unwrap_or(0))
    }

    fn relink(tiles: &mut [Tile], id: TileId, from: TileId, to: Option<TileId>) {
        if let Some(tile) = tiles.iter_mut().find(|t| t.id() == id) {
            if let Some(side) = Side::ALL.into_iter().find(|&s| tile.neighbor(s) == Some(from)) {
                tile.set_neighbor(side, to);
            }
        }
    }

    // Tests assembling from the top-left source corner gives the layout up to the diagonal mirror
    // Verified by orienting neighbours against the anchor's opposite side
    #[test]
    fn test_assembles_original_layout() {
        for seed in 0..4 {
            let (tiles, expected) = resolved(3, seed);
            let grid = MosaicAssembler::new(tiles)
                .expect("square count")
                .assemble(1)
                .expect("consistent puzzle");

            let layout = layout_of(&grid);
            assert!(
                layout == expected || layout == expected.t(),
                "seed {seed}: {layout:?}"
            );
        }
    }

    // Tests every pair of neighbouring cells shares an exactly abutting edge
    // Verified by accepting any matching orientation instead of abutting
    #[test]
    fn test_neighbouring_cells_abut() {
        let (tiles, _) = resolved(4, 5);
        let grid = MosaicAssembler::new(tiles)
            .expect("square count")
            .assemble(1)
            .expect("consistent puzzle");

        for ((row, col), tile) in grid.tiles() {
            if let Some(right) = grid.get((row, col + 1)) {
                assert!(tile.edge(Side::East).abuts(right.edge(Side::West)));
                assert_eq!(tile.neighbor(Side::East), Some(right.id()));
            }
            if let Some(below) = grid.get((row + 1, col)) {
                assert!(tile.edge(Side::South).abuts(below.edge(Side::North)));
            }
        }
        assert_eq!(grid.approach((0, 0)), None);
        assert!(grid.approach((3, 3)).is_some());
    }

    // Tests a corner is turned until its neighbours face East and South
    // Verified by mirroring instead of turning
    #[test]
    fn test_orient_corner_turns_only() {
        let mut corner = Tile::from_rows(1, &["...", "...", "..."]).expect("valid tile");
        corner.set_neighbor(Side::North, Some(2));
        corner.set_neighbor(Side::West, Some(3));
        orient_corner(&mut corner).expect("adjacent neighbours");
        assert_eq!(corner.neighbor(Side::East), Some(3));
        assert_eq!(corner.neighbor(Side::South), Some(2));
        assert_eq!(corner.orientation().quarter_turns, 2);
        assert!(!corner.orientation().mirrored);

        let mut straight = Tile::from_rows(1, &["...", "...", "..."]).expect("valid tile");
        straight.set_neighbor(Side::North, Some(2));
        straight.set_neighbor(Side::South, Some(3));
        assert!(matches!(
            orient_corner(&mut straight),
            Err(MosaicError::Topology { .. })
        ));
    }

    // Tests a neighbour whose edges never abut the anchor is reported
    // Verified by placing the neighbour in its last tried orientation
    #[test]
    fn test_unresolvable_orientation() {
        let (mut tiles, _) = resolved(2, 9);
        relink(&mut tiles, 1, 2, Some(4));

        let result = MosaicAssembler::new(tiles)
            .expect("square count")
            .assemble(1);
        assert!(matches!(
            result,
            Err(MosaicError::UnresolvableOrientation {
                tile: 4,
                anchor: 1,
                ..
            })
        ));
    }

    // Tests two paths disagreeing about a cell raise a conflict
    // Verified by skipping validation of occupied cells
    #[test]
    fn test_placement_conflict() {
        let (mut tiles, _) = resolved(2, 4);
        relink(&mut tiles, 2, 4, Some(3));

        let result = MosaicAssembler::new(tiles)
            .expect("square count")
            .assemble(1);
        assert!(matches!(result, Err(MosaicError::PlacementConflict { .. })));
    }

    // Tests unreachable tiles leave the grid incomplete and fail
    // Verified by returning the grid without checking completeness
    #[test]
    fn test_unreachable_tile_is_topology_error() {
        let (mut tiles, _) = resolved(2, 2);
        relink(&mut tiles, 2, 4, None);
        relink(&mut tiles, 3, 4, None);

        let result = MosaicAssembler::new(tiles)
            .expect("square count")
            .assemble(1);
        assert!(matches!(result, Err(MosaicError::Topology { .. })));
    }

    // Tests the assembler refuses a tile count that is not a square
    // Verified by flooring the grid side
    #[test]
    fn test_rejects_non_square_count() {
        let (mut tiles, _) = resolved(2, 1);
        tiles.pop();
        assert!(MosaicAssembler::new(tiles).is_err());
    }
}
