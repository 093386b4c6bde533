use battleline::{Board, GameError, Unit, BOARD_SIZE, NUM_UNITS};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const SIZE: usize = BOARD_SIZE as usize;

fn random_board(seed: u64) -> Board {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = Board::random(&mut rng).unwrap();
    let shots = rng.random_range(0..SIZE * SIZE / 4);
    for _ in 0..shots {
        let r = rng.random_range(0..SIZE);
        let c = rng.random_range(0..SIZE);
        let _ = board.receive_shot(r, c);
    }
    board
}

fn touching(a: &Unit, b: &Unit) -> bool {
    for (ar, ac) in a.cells() {
        for (br, bc) in b.cells() {
            let dr = (ar as isize - br as isize).abs();
            let dc = (ac as isize - bc as isize).abs();
            if dr <= 1 && dc <= 1 {
                return true;
            }
        }
    }
    false
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_boards_keep_units_apart(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::random(&mut rng).unwrap();
        prop_assert_eq!(board.units().len(), NUM_UNITS);
        prop_assert_eq!(board.occupied().count_ones(), 2 * NUM_UNITS);
        let units = board.units();
        for (i, a) in units.iter().enumerate() {
            prop_assert!(a.is_well_formed());
            for b in &units[i + 1..] {
                prop_assert!(!touching(a, b));
            }
        }
    }

    #[test]
    fn placement_matches_chebyshev_rule(
        placed_row in 0..SIZE - 1,
        placed_col in 0..SIZE,
        row in 0..SIZE - 1,
        col in 0..SIZE,
    ) {
        let mut board = Board::new();
        let placed = Unit::vertical(placed_row, placed_col);
        prop_assert!(board.place_unit(placed));
        let candidate = Unit::vertical(row, col);
        prop_assert_eq!(board.is_valid_placement(&candidate), !touching(&placed, &candidate));
    }

    #[test]
    fn rejected_placement_leaves_board_unchanged(
        seed in any::<u64>(),
        row in 0..SIZE,
        col in 0..SIZE,
    ) {
        let mut board = random_board(seed);
        let candidate = Unit::vertical(row, col);
        let before = board.clone();
        if !board.place_unit(candidate) {
            prop_assert_eq!(board, before);
        } else {
            prop_assert_eq!(board.units().len(), before.units().len() + 1);
        }
    }

    #[test]
    fn second_shot_at_a_cell_errors(seed in any::<u64>(), row in 0..SIZE, col in 0..SIZE) {
        let mut board = random_board(seed);
        if !board.has_shot_at(row, col) {
            board.receive_shot(row, col).unwrap();
        }
        let after = board.clone();
        let err = board.receive_shot(row, col).unwrap_err();
        prop_assert_eq!(err, GameError::DuplicateShot { row, col });
        prop_assert_eq!(board, after);
    }

    #[test]
    fn shot_history_has_one_entry_per_fired_cell(seed in any::<u64>()) {
        let board = random_board(seed);
        prop_assert_eq!(board.shots().len(), board.fired().count_ones());
        for shot in board.shots() {
            prop_assert_eq!(shot.hit(), board.unit_at(shot.row(), shot.column()).is_some());
        }
    }
}
