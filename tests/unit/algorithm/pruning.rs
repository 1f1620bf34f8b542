//! Tests for the edge pruning heuristics

#[cfg(test)]
mod tests {
    use partridge::algorithm::{Inventory, PruningRule};
    use partridge::spatial::Location;

    const WIDTH: usize = 36;

    fn skips(size: usize, x: usize, y: usize) -> bool {
        PruningRule::Symmetry.can_skip(Location::new(x, y), size, WIDTH)
    }

    #[test]
    fn test_rule_follows_piece_set() {
        assert_eq!(
            PruningRule::for_inventory(&Inventory::standard(8)),
            PruningRule::Symmetry
        );
        let Some(fixture) = Inventory::test_configuration(3) else {
            unreachable!("configuration 3 exists");
        };
        assert_eq!(PruningRule::for_inventory(&fixture), PruningRule::Disabled);
    }

    #[test]
    fn test_disabled_never_skips() {
        for size in 1..=8 {
            for x in 0..WIDTH {
                assert!(!PruningRule::Disabled.can_skip(Location::new(x, 0), size, WIDTH));
            }
        }
    }

    // Unit squares stay out of the two outermost rings on every side
    #[test]
    fn test_unit_square_outer_rings() {
        for ring in [0, 1, WIDTH - 2, WIDTH - 1] {
            assert!(skips(1, ring, 10), "x = {ring}");
            assert!(skips(1, 10, ring), "y = {ring}");
        }
        assert!(!skips(1, 2, 2));
        assert!(!skips(1, WIDTH - 3, WIDTH - 3));
    }

    #[test]
    fn test_size_two_is_never_skipped() {
        for x in 0..WIDTH {
            assert!(!skips(2, x, 0));
            assert!(!skips(2, x, 1));
        }
    }

    // The far-side check for size 3 sits on the border, not one ring in
    #[test]
    fn test_size_three_bounds() {
        assert!(skips(3, 1, 10));
        assert!(skips(3, 10, 1));
        assert!(skips(3, WIDTH - 1, 10));
        assert!(skips(3, 10, WIDTH - 1));

        assert!(!skips(3, 0, 0));
        assert!(!skips(3, 2, 10));
        assert!(!skips(3, WIDTH - 2, 10));
    }

    #[test]
    fn test_size_five_second_ring() {
        assert!(skips(5, 2, 10));
        assert!(skips(5, 10, 2));
        assert!(skips(5, WIDTH - 2, 10));
        assert!(skips(5, 10, WIDTH - 2));
        assert!(skips(5, 1, 10));

        assert!(!skips(5, 0, 0));
        assert!(!skips(5, 3, 3));
        assert!(!skips(4, 2, 10));
    }
}
