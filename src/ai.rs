// Hunt-then-random targeting for the automated side.
// Works against the target board's shot history only and avoids heap
// allocations.

use log::trace;
use rand::Rng;

use crate::board::TargetView;
use crate::common::GameError;
use crate::config::{BOARD_SIZE, FOLLOW_UP_OFFSETS};

/// Which rule picks the next target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// Uniform choice among untried cells.
    Scan,
    /// Probe the neighbours of the last hit.
    FollowUp { row: usize, col: usize },
}

/// Pick uniformly among the cells of `board` that have not been fired at.
pub fn scan_target<R: Rng + ?Sized>(
    board: TargetView<'_>,
    rng: &mut R,
) -> Result<(usize, usize), GameError> {
    let untried = !board.fired();
    let count = untried.count_ones();
    if count == 0 {
        return Err(GameError::NoTargetsRemaining);
    }
    let pick = rng.random_range(0..count);
    untried
        .iter_set_bits()
        .nth(pick)
        .ok_or(GameError::NoTargetsRemaining)
}

/// First in-bounds, untried neighbour of (`row`, `col`), vertical
/// neighbours before horizontal ones.
pub fn follow_up_target(board: TargetView<'_>, row: usize, col: usize) -> Option<(usize, usize)> {
    let size = BOARD_SIZE as usize;
    FOLLOW_UP_OFFSETS.iter().find_map(|&(dr, dc)| {
        let r = row.checked_add_signed(dr).filter(|&r| r < size)?;
        let c = col.checked_add_signed(dc).filter(|&c| c < size)?;
        (!board.has_shot_at(r, c)).then_some((r, c))
    })
}

/// Targeting state: remembers the last hit between shots of a chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Targeting {
    last_hit: Option<(usize, usize)>,
}

impl Targeting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_hit(&self) -> Option<(usize, usize)> {
        self.last_hit
    }

    pub fn mode(&self) -> TargetMode {
        match self.last_hit {
            Some((row, col)) => TargetMode::FollowUp { row, col },
            None => TargetMode::Scan,
        }
    }

    /// Choose the next cell to fire at on `board`. Follow-up falls back to
    /// scanning when every neighbour is tried or off the grid.
    pub fn next_target<R: Rng + ?Sized>(
        &self,
        board: TargetView<'_>,
        rng: &mut R,
    ) -> Result<(usize, usize), GameError> {
        if let TargetMode::FollowUp { row, col } = self.mode() {
            if let Some(target) = follow_up_target(board, row, col) {
                trace!("follow-up from ({}, {}) -> {:?}", row, col, target);
                return Ok(target);
            }
            trace!("no neighbour left around ({}, {}), scanning", row, col);
        }
        scan_target(board, rng)
    }

    /// Feed back the result of a shot: a hit seeds follow-up, a miss
    /// returns to scanning.
    pub fn record(&mut self, coord: (usize, usize), hit: bool) {
        self.last_hit = if hit { Some(coord) } else { None };
    }

    /// Forget the last hit.
    pub fn reset(&mut self) {
        self.last_hit = None;
    }
}
