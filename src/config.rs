pub const BOARD_SIZE: u8 = 10;
pub const NUM_UNITS: usize = 10;
pub const UNIT_LENGTH: usize = 2;

/// Total number of unit cells on a fully populated board.
pub const TOTAL_UNIT_CELLS: usize = NUM_UNITS * UNIT_LENGTH;

/// Fresh-board restarts allowed during automated setup.
pub const SETUP_GLOBAL_ATTEMPTS: usize = 3;
/// Random candidates tried per unit before a restart.
pub const SETUP_TRIES_PER_UNIT: usize = 100;

/// Neighbour probe order after a hit: up, down, left, right.
pub const FOLLOW_UP_OFFSETS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Column labels used by the text interface.
pub const COLUMN_LABELS: [char; BOARD_SIZE as usize] =
    ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];
