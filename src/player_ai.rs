use log::error;
use rand::rngs::SmallRng;

use crate::{
    ai::Targeting,
    board::{Board, TargetView},
    common::{GameError, ShotReport},
    player::Player,
};

/// Automated player using the same hunt-then-random targeting as the
/// match's opponent side.
pub struct AiPlayer {
    targeting: Targeting,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self {
            targeting: Targeting::new(),
        }
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn place_units(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError> {
        let placed = Board::random(rng)?;
        board.place_batch(placed.units())
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        target: TargetView<'_>,
    ) -> Option<(usize, usize)> {
        match self.targeting.next_target(target, rng) {
            Ok(coord) => Some(coord),
            Err(e) => {
                error!("automated player cannot pick a target: {}", e);
                None
            }
        }
    }

    fn handle_shot_result(&mut self, report: ShotReport) {
        self.targeting
            .record((report.row, report.col), report.outcome.is_hit());
    }
}
