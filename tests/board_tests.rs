use battleline::{Board, GameError, ShotOutcome, Unit, BOARD_SIZE, NUM_UNITS};

fn spread_units() -> Vec<Unit> {
    // five columns apart by two, two row bands apart by one empty row
    let mut units = Vec::new();
    for col in [0, 2, 4, 6, 8] {
        units.push(Unit::vertical(0, col));
        units.push(Unit::vertical(3, col));
    }
    units
}

#[test]
fn test_place_and_destroy_single_unit() {
    let mut board = Board::new();
    assert!(board.place_unit(Unit::new((0, 1), 0)));

    assert_eq!(board.receive_shot(0, 0), Ok(true));
    assert!(!board.is_destroyed());
    assert_eq!(board.receive_shot(1, 0), Ok(true));
    assert!(board.is_destroyed());
}

#[test]
fn test_adjacent_placement_rejected() {
    let mut board = Board::new();
    assert!(board.place_unit(Unit::new((0, 1), 0)));
    assert!(!board.place_unit(Unit::new((1, 2), 1)));
    assert_eq!(board.units().len(), 1);
}

#[test]
fn test_diagonal_and_end_to_end_contact_rejected() {
    let mut board = Board::new();
    assert!(board.place_unit(Unit::vertical(4, 4)));
    // corner contact
    assert!(!board.is_valid_placement(&Unit::vertical(6, 5)));
    assert!(!board.is_valid_placement(&Unit::vertical(2, 3)));
    // directly below, no gap
    assert!(!board.is_valid_placement(&Unit::vertical(6, 4)));
    // overlap
    assert!(!board.is_valid_placement(&Unit::vertical(5, 4)));
    // one empty cell of separation is enough
    assert!(board.is_valid_placement(&Unit::vertical(7, 4)));
    assert!(board.is_valid_placement(&Unit::vertical(4, 6)));
    assert!(board.is_valid_placement(&Unit::vertical(7, 5)));
}

#[test]
fn test_malformed_units_rejected() {
    let board = Board::new();
    assert!(!board.is_valid_placement(&Unit::new((2, 4), 0)));
    assert!(!board.is_valid_placement(&Unit::new((3, 3), 0)));
    assert!(!board.is_valid_placement(&Unit::new((9, 10), 0)));
    assert!(!board.is_valid_placement(&Unit::new((0, 1), BOARD_SIZE as usize)));
    assert!(board.is_valid_placement(&Unit::new((9, 8), 9)));
}

#[test]
fn test_rows_are_normalized() {
    let unit = Unit::new((6, 5), 2);
    assert_eq!(unit.rows(), (5, 6));
    assert_eq!(unit.cells(), [(5, 2), (6, 2)]);
}

#[test]
fn test_duplicate_shot_is_an_error() {
    let mut board = Board::new();
    board.place_unit(Unit::vertical(3, 3));
    assert_eq!(board.receive_shot(3, 3), Ok(true));
    assert_eq!(
        board.receive_shot(3, 3),
        Err(GameError::DuplicateShot { row: 3, col: 3 })
    );
    assert_eq!(board.shots().len(), 1);
}

#[test]
fn test_out_of_bounds_shot_rejected() {
    let mut board = Board::new();
    assert_eq!(
        board.receive_shot(10, 0),
        Err(GameError::OutOfBounds { row: 10, col: 0 })
    );
    assert!(board.shots().is_empty());
}

#[test]
fn test_shots_recorded_in_firing_order() {
    let mut board = Board::new();
    board.place_unit(Unit::vertical(0, 0));
    board.receive_shot(5, 5).unwrap();
    board.receive_shot(0, 0).unwrap();
    board.receive_shot(9, 9).unwrap();
    let coords: Vec<_> = board.shots().iter().map(|s| (s.coord(), s.hit())).collect();
    assert_eq!(coords, vec![((5, 5), false), ((0, 0), true), ((9, 9), false)]);
}

#[test]
fn test_empty_board_is_destroyed() {
    assert!(Board::new().is_destroyed());
}

#[test]
fn test_fire_at_reports_destruction() {
    let mut board = Board::new();
    board.place_unit(Unit::vertical(2, 7));
    board.place_unit(Unit::vertical(6, 1));
    assert_eq!(board.fire_at(0, 0), Ok(ShotOutcome::Miss));
    assert_eq!(board.fire_at(3, 7), Ok(ShotOutcome::Hit));
    assert_eq!(board.remaining_units(), 2);
    assert_eq!(board.fire_at(2, 7), Ok(ShotOutcome::Destroyed));
    assert_eq!(board.remaining_units(), 1);
    assert!(!board.is_destroyed());
}

#[test]
fn test_place_batch_all_or_nothing() {
    let mut board = Board::new();
    let mut units = spread_units();
    assert_eq!(units.len(), NUM_UNITS);

    // last unit touches the first
    units[NUM_UNITS - 1] = Unit::vertical(1, 1);
    assert_eq!(board.place_batch(&units), Err(GameError::InvalidPlacement));
    assert!(board.units().is_empty());
    assert!(board.occupied().is_empty());

    assert_eq!(
        board.place_batch(&units[..3]),
        Err(GameError::WrongBatchSize {
            expected: NUM_UNITS,
            found: 3
        })
    );

    let units = spread_units();
    board.place_batch(&units).unwrap();
    assert_eq!(board.units(), &units[..]);
    assert_eq!(board.occupied().count_ones(), 2 * NUM_UNITS);
}

#[test]
fn test_target_view_hides_units() {
    let mut board = Board::new();
    board.place_unit(Unit::vertical(0, 0));
    board.place_unit(Unit::vertical(5, 5));
    board.receive_shot(0, 0).unwrap();
    board.receive_shot(9, 9).unwrap();

    let view = board.target_view();
    assert_eq!(view.shots().len(), 2);
    assert!(view.shot_at(0, 0).unwrap().hit());
    assert!(!view.shot_at(9, 9).unwrap().hit());
    assert!(view.shot_at(5, 5).is_none());
    assert_eq!(view.remaining_units(), 2);
}

#[test]
fn test_units_cannot_be_placed_after_shots() {
    let mut board = Board::new();
    assert!(board.place_unit(Unit::vertical(5, 5)));
    assert_eq!(board.receive_shot(0, 0), Ok(false));

    // the missed cell would become part of the new unit
    assert!(!board.place_unit(Unit::vertical(0, 0)));
    assert!(!board.place_unit(Unit::vertical(0, 9)));
    assert_eq!(board.units().len(), 1);
    assert_eq!(board.occupied().count_ones(), 2);

    assert_eq!(
        board.place_batch(&spread_units()),
        Err(GameError::PlacementAfterShots)
    );
    assert_eq!(board.units(), &[Unit::vertical(5, 5)]);

    assert_eq!(board.receive_shot(5, 5), Ok(true));
    assert_eq!(board.receive_shot(6, 5), Ok(true));
    assert!(board.is_destroyed());
}

#[test]
fn test_destruction_needs_a_hit_on_every_cell() {
    let mut board = Board::new();
    let unit = Unit::vertical(2, 2);
    board.place_unit(unit);
    board.receive_shot(2, 2).unwrap();
    board.receive_shot(0, 0).unwrap();
    assert!(!board.is_unit_destroyed(&unit));
    assert_eq!(board.remaining_units(), 1);
    board.receive_shot(3, 2).unwrap();
    assert!(board.is_unit_destroyed(&unit));
    assert_eq!(board.remaining_units(), 0);
}
