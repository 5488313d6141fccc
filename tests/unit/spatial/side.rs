//! Tests for compass sides and per-side storage

#[cfg(test)]
mod tests {
    use tilemosaic::spatial::side::{Side, Sides};

    // Tests every side faces its opposite and opposite is an involution
    // Verified by swapping the East and West rules
    #[test]
    fn test_opposite_pairs() {
        assert_eq!(Side::North.opposite(), Side::South);
        assert_eq!(Side::East.opposite(), Side::West);
        for side in Side::ALL {
            assert_eq!(side.opposite().opposite(), side);
        }
    }

    // Tests stepping across a side stays within the grid or returns None
    // Verified by dropping the lower-bound check in step
    #[test]
    fn test_step_respects_grid_bounds() {
        assert_eq!(Side::North.step((0, 0), 3, 3), None);
        assert_eq!(Side::West.step((1, 0), 3, 3), None);
        assert_eq!(Side::East.step((1, 2), 3, 3), None);
        assert_eq!(Side::South.step((2, 1), 3, 3), None);
        assert_eq!(Side::East.step((1, 1), 3, 3), Some((1, 2)));
        assert_eq!(Side::South.step((1, 1), 3, 3), Some((2, 1)));
        assert_eq!(Side::North.step((1, 1), 3, 3), Some((0, 1)));
        assert_eq!(Side::West.step((1, 1), 3, 3), Some((1, 0)));
    }

    // Tests a clockwise shift moves each value one side clockwise
    // Verified by using rotate_left in rotate_cw
    #[test]
    fn test_rotate_cw_shifts_values() {
        let mut sides = Sides::new(['n', 'e', 's', 'w']);
        sides.rotate_cw();
        assert_eq!(sides[Side::North], 'w');
        assert_eq!(sides[Side::East], 'n');
        assert_eq!(sides[Side::South], 'e');
        assert_eq!(sides[Side::West], 's');

        for _ in 0..3 {
            sides.rotate_cw();
        }
        assert_eq!(sides, Sides::new(['n', 'e', 's', 'w']));
    }

    // Tests the east/west swap leaves north and south alone
    // Verified by swapping North and South instead
    #[test]
    fn test_swap_east_west() {
        let mut sides = Sides::new([1, 2, 3, 4]);
        sides.swap_east_west();
        let values: Vec<i32> = sides.values().copied().collect();
        assert_eq!(values, vec![1, 4, 3, 2]);
    }

    // Tests iteration pairs each value with its side in clockwise order
    // Verified by zipping with a reversed side list
    #[test]
    fn test_iter_pairs_sides_in_order() {
        let mut sides = Sides::<Option<u64>>::default();
        sides[Side::South] = Some(7);
        let pairs: Vec<(Side, Option<u64>)> = sides.iter().map(|(s, &v)| (s, v)).collect();
        assert_eq!(
            pairs,
            vec![
                (Side::North, None),
                (Side::East, None),
                (Side::South, Some(7)),
                (Side::West, None),
            ]
        );
        assert_eq!(Side::South.to_string(), "south");
    }
}
