//! Tests for the dihedral group and the orientation walk

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};
    use std::collections::HashSet;
    use tilemosaic::spatial::dihedral::{
        ORIENTATION_WALK, Orientation, Step, find_orientation, mirror_array, rotate_array_cw,
    };
    use tilemosaic::spatial::pixel::Pixel;
    use tilemosaic::spatial::raster::Raster;

    fn numbered() -> Array2<u8> {
        array![[1, 2, 3], [4, 5, 6], [7, 8, 9]]
    }

    // Tests a clockwise turn moves the left column to the top row
    // Verified by reversing rows instead of columns after transposing
    #[test]
    fn test_rotate_array_cw() {
        assert_eq!(
            rotate_array_cw(&numbered()),
            array![[7, 4, 1], [8, 5, 2], [9, 6, 3]]
        );
        assert_eq!(mirror_array(&numbered()), array![[3, 2, 1], [6, 5, 4], [9, 8, 7]]);
    }

    // Tests the orientation tracked along the walk matches the array it describes
    // Verified by incrementing turns after a mirror in Orientation::then
    #[test]
    fn test_walk_orientation_matches_transformed_array() {
        let original = numbered();
        let mut current = original.clone();
        let mut orientation = Orientation::IDENTITY;
        let mut seen = HashSet::from([current.clone()]);

        for step in ORIENTATION_WALK {
            current = match step {
                Step::Rotate => rotate_array_cw(&current),
                Step::Mirror => mirror_array(&current),
            };
            orientation = orientation.then(step);
            assert_eq!(orientation.apply_to_array(&original), current);
            seen.insert(current.clone());
        }

        assert_eq!(seen.len(), 8, "walk must visit every orientation once");
    }

    // Tests every listed orientation is distinct and normalised
    // Verified by dropping the modulo in Orientation::new
    #[test]
    fn test_all_orientations_are_distinct() {
        let arrays: HashSet<Array2<u8>> = Orientation::ALL
            .iter()
            .map(|o| o.apply_to_array(&numbered()))
            .collect();
        assert_eq!(arrays.len(), 8);
        assert_eq!(Orientation::new(5, false), Orientation::new(1, false));
        assert_eq!(Orientation::new(3, true).to_string(), "270° mirrored");
    }

    // Tests a rejecting predicate sees exactly eight states and yields None
    // Verified by testing only after each move
    #[test]
    fn test_find_orientation_tries_eight_states() {
        let mut raster = Raster::from_rows(&["#..", "...", "..."]).expect("valid raster");
        let mut calls = 0;
        let found = find_orientation(&mut raster, |_| {
            calls += 1;
            false
        });
        assert_eq!(found, None);
        assert_eq!(calls, 8);
    }

    // Tests the search stops on the first accepted state and reports it
    // Verified by returning the orientation before the last move
    #[test]
    fn test_find_orientation_returns_accepted_state() {
        let mut raster = Raster::from_rows(&["#..", "...", "..."]).expect("valid raster");
        let found = find_orientation(&mut raster, |r| r.get((2, 2)) == Some(Pixel::On));
        assert_eq!(found, Some(Orientation::new(2, false)));
        assert_eq!(raster.orientation(), Orientation::new(2, false));
    }
}
