//! One side's grid: placed units and the history of shots fired at it.

use alloc::vec::Vec;
use core::fmt;

use log::{debug, warn};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{GameError, ShotOutcome};
use crate::config::{BOARD_SIZE, NUM_UNITS, SETUP_GLOBAL_ATTEMPTS, SETUP_TRIES_PER_UNIT};
use crate::shot::Shot;
use crate::unit::Unit;

pub type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Unit placement and incoming shot history for one side.
///
/// Units are only added during setup and shots only during play. Both lists
/// are append-only; `occupied` and `fired` mirror them for constant-time
/// lookups.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Board {
    units: Vec<Unit>,
    shots: Vec<Shot>,
    occupied: BB,
    fired: BB,
}

impl Board {
    /// Create an empty board (no units, no shots).
    pub fn new() -> Self {
        Self::default()
    }

    /// Units in placement order.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Shots in firing order.
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }

    /// Cells covered by units.
    pub fn occupied(&self) -> BB {
        self.occupied
    }

    /// Cells that have been fired at.
    pub fn fired(&self) -> BB {
        self.fired
    }

    /// Read-only view for the opposing side: shot outcomes only.
    pub fn target_view(&self) -> TargetView<'_> {
        TargetView { board: self }
    }

    /// Whether a shot has been resolved at (`row`, `col`). Off-grid cells
    /// are never fired at.
    pub fn has_shot_at(&self, row: usize, col: usize) -> bool {
        self.fired.get(row, col).unwrap_or(false)
    }

    /// The shot recorded at (`row`, `col`), if any.
    pub fn shot_at(&self, row: usize, col: usize) -> Option<&Shot> {
        if !self.has_shot_at(row, col) {
            return None;
        }
        self.shots.iter().find(|s| s.coord() == (row, col))
    }

    /// The unit covering (`row`, `col`), if any.
    pub fn unit_at(&self, row: usize, col: usize) -> Option<&Unit> {
        self.units.iter().find(|u| u.contains(row, col))
    }

    /// Whether `unit` may be added: well formed, inside the grid and not
    /// touching any placed unit, diagonals included.
    pub fn is_valid_placement(&self, unit: &Unit) -> bool {
        unit.is_well_formed() && !self.units.iter().any(|placed| placed.touches(unit))
    }

    /// Append `unit` if it is a valid placement and no shot has been fired
    /// at the board yet. Returns `false` and leaves the board untouched
    /// otherwise.
    pub fn place_unit(&mut self, unit: Unit) -> bool {
        if !self.shots.is_empty() {
            debug!("rejected placement {:?}: board already under fire", unit);
            return false;
        }
        if !self.is_valid_placement(&unit) {
            debug!("rejected placement {:?}", unit);
            return false;
        }
        for (r, c) in unit.cells() {
            let marked = self.occupied.set(r, c);
            debug_assert!(marked.is_ok(), "well-formed unit left the grid");
        }
        self.units.push(unit);
        true
    }

    /// Replace the placement with a full batch of units. The batch is
    /// validated as a whole; on any failure the board is unchanged. Only
    /// allowed before the first shot.
    pub fn place_batch(&mut self, units: &[Unit]) -> Result<(), GameError> {
        if !self.shots.is_empty() {
            return Err(GameError::PlacementAfterShots);
        }
        if units.len() != NUM_UNITS {
            return Err(GameError::WrongBatchSize {
                expected: NUM_UNITS,
                found: units.len(),
            });
        }
        let mut scratch = Board::new();
        for unit in units {
            if !scratch.place_unit(*unit) {
                return Err(GameError::InvalidPlacement);
            }
        }
        self.units = scratch.units;
        self.occupied = scratch.occupied;
        Ok(())
    }

    /// Resolve a shot at (`row`, `col`), recording exactly one [`Shot`].
    /// Returns `true` on a hit.
    pub fn receive_shot(&mut self, row: usize, col: usize) -> Result<bool, GameError> {
        let size = BOARD_SIZE as usize;
        if row >= size || col >= size {
            return Err(GameError::OutOfBounds { row, col });
        }
        if self.fired.get(row, col)? {
            return Err(GameError::DuplicateShot { row, col });
        }
        let hit = self.occupied.get(row, col)?;
        self.fired.set(row, col)?;
        self.shots.push(Shot::new(row, col, hit));
        debug!("shot at ({}, {}) -> {}", row, col, if hit { "hit" } else { "miss" });
        Ok(hit)
    }

    /// Like [`receive_shot`](Self::receive_shot) but reports whether the hit
    /// finished off a unit.
    pub fn fire_at(&mut self, row: usize, col: usize) -> Result<ShotOutcome, GameError> {
        if !self.receive_shot(row, col)? {
            return Ok(ShotOutcome::Miss);
        }
        match self.unit_at(row, col) {
            Some(unit) if self.is_unit_destroyed(unit) => Ok(ShotOutcome::Destroyed),
            _ => Ok(ShotOutcome::Hit),
        }
    }

    /// Every cell of `unit` has a recorded hit.
    pub fn is_unit_destroyed(&self, unit: &Unit) -> bool {
        unit.cells()
            .iter()
            .all(|&(r, c)| self.shot_at(r, c).is_some_and(Shot::hit))
    }

    /// Units with at least one unhit cell.
    pub fn remaining_units(&self) -> usize {
        self.units
            .iter()
            .filter(|u| !self.is_unit_destroyed(u))
            .count()
    }

    /// True when every unit is destroyed. Vacuously true for a board without
    /// units, so only meaningful after setup.
    pub fn is_destroyed(&self) -> bool {
        self.units.iter().all(|u| self.is_unit_destroyed(u))
    }

    /// A uniformly drawn candidate: any column, any top row that keeps the
    /// unit on the grid. Not checked against placed units.
    pub fn random_candidate<R: Rng + ?Sized>(rng: &mut R) -> Unit {
        let size = BOARD_SIZE as usize;
        let col = rng.random_range(0..size);
        let row = rng.random_range(0..size - 1);
        Unit::vertical(row, col)
    }

    /// Draw up to `tries` candidates and return the first valid one.
    pub fn random_placement<R: Rng + ?Sized>(&self, rng: &mut R, tries: usize) -> Option<Unit> {
        (0..tries)
            .map(|_| Self::random_candidate(rng))
            .find(|unit| self.is_valid_placement(unit))
    }

    /// Fill a fresh board with randomly placed units using the default
    /// retry limits.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        Self::random_with_limits(rng, SETUP_GLOBAL_ATTEMPTS, SETUP_TRIES_PER_UNIT)
    }

    /// Fill a fresh board with [`NUM_UNITS`] random units.
    ///
    /// Each global attempt starts from an empty board and gives every unit
    /// `tries_per_unit` candidates. A unit that cannot be placed abandons the
    /// attempt. After `global_attempts` failures this returns
    /// [`GameError::SetupExhausted`].
    pub fn random_with_limits<R: Rng + ?Sized>(
        rng: &mut R,
        global_attempts: usize,
        tries_per_unit: usize,
    ) -> Result<Self, GameError> {
        for attempt in 1..=global_attempts {
            let mut board = Board::new();
            let mut complete = true;
            for _ in 0..NUM_UNITS {
                match board.random_placement(rng, tries_per_unit) {
                    Some(unit) => {
                        board.place_unit(unit);
                    }
                    None => {
                        complete = false;
                        break;
                    }
                }
            }
            if complete {
                debug!("random setup succeeded on attempt {}", attempt);
                return Ok(board);
            }
            warn!(
                "random setup attempt {} placed only {} units, restarting",
                attempt,
                board.units.len()
            );
        }
        Err(GameError::SetupExhausted {
            attempts: global_attempts,
        })
    }
}

/// What the firing side may know about a board: resolved shots and the
/// number of surviving units, never where the unhit units are.
#[derive(Clone, Copy)]
pub struct TargetView<'a> {
    board: &'a Board,
}

impl<'a> TargetView<'a> {
    pub fn shots(&self) -> &'a [Shot] {
        &self.board.shots
    }

    pub fn fired(&self) -> BB {
        self.board.fired
    }

    pub fn has_shot_at(&self, row: usize, col: usize) -> bool {
        self.board.has_shot_at(row, col)
    }

    pub fn shot_at(&self, row: usize, col: usize) -> Option<&'a Shot> {
        self.board.shot_at(row, col)
    }

    pub fn remaining_units(&self) -> usize {
        self.board.remaining_units()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  occupied: {:?},\n  fired: {:?},\n  units: {:?},\n  shots: {:?}\n}}",
            self.occupied, self.fired, self.units, self.shots
        )
    }
}
