use proptest::prelude::*;
use twenty48::{Direction, Grid4};

/// Grids whose non-zero cells are powers of 2 between 2 and 2048.
fn arb_grid() -> impl Strategy<Value = Grid4> {
    prop::array::uniform4(prop::array::uniform4(0u32..=11)).prop_map(|exponents| {
        Grid4::from_cells(exponents.map(|row| row.map(|e| if e == 0 { 0 } else { 1u32 << e })))
    })
}

fn arb_direction() -> impl Strategy<Value = Direction> {
    (0usize..4).prop_map(|i| Direction::ALL[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn compress_is_idempotent(grid in arb_grid()) {
        let once = grid.compress();
        prop_assert_eq!(once.compress(), once);
    }

    #[test]
    fn compress_preserves_tiles(grid in arb_grid()) {
        let compressed = grid.compress();
        prop_assert_eq!(compressed.empty_count(), grid.empty_count());
        prop_assert_eq!(compressed.tile_sum(), grid.tile_sum());
    }

    #[test]
    fn four_quarter_turns_are_identity(grid in arb_grid()) {
        let full_circle = grid
            .rotate_quarter()
            .rotate_quarter()
            .rotate_quarter()
            .rotate_quarter();
        prop_assert_eq!(full_circle, grid);
    }

    #[test]
    fn rotation_inverse_restores_grid(grid in arb_grid(), turns in 0usize..4) {
        prop_assert_eq!(grid.rotate(turns).rotate((4 - turns) % 4), grid);
    }

    #[test]
    fn merge_conserves_value_mass(grid in arb_grid()) {
        let compressed = grid.compress();
        let (merged, gained) = compressed.merge();
        prop_assert_eq!(merged.tile_sum(), grid.tile_sum());
        // gained is exactly the sum of the doubled cells, so it is zero
        // iff no pair merged.
        prop_assert_eq!(gained == 0, merged == compressed);
    }

    #[test]
    fn shift_conserves_value_mass(grid in arb_grid(), direction in arb_direction()) {
        let (shifted, _gained) = grid.shift(direction);
        prop_assert_eq!(shifted.tile_sum(), grid.tile_sum());
    }

    #[test]
    fn shift_gains_zero_iff_no_merge(grid in arb_grid(), direction in arb_direction()) {
        let (shifted, gained) = grid.shift(direction);
        // Each merge empties exactly one cell; placement is the only other
        // way the cell population changes, and shift never places.
        prop_assert_eq!(gained == 0, shifted.empty_count() == grid.empty_count());
    }

    #[test]
    fn shift_is_idempotent_without_merges(grid in arb_grid(), direction in arb_direction()) {
        let (once, _) = grid.shift(direction);
        let (twice, gained) = once.shift(direction);
        // A second shift in the same direction can only merge; it never
        // slides anything if nothing merged.
        if gained == 0 {
            prop_assert_eq!(twice, once);
        }
    }
}
