use rand::rngs::SmallRng;

use crate::{
    board::{Board, TargetView},
    common::{GameError, ShotReport},
};

/// Interface implemented by the side that is not driven by the match's own
/// targeting: a human at the console, or an automated stand-in.
pub trait Player {
    /// Place all units onto the provided board.
    fn place_units(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError>;

    /// Choose the next coordinate to fire at. `None` abandons the match.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        target: TargetView<'_>,
    ) -> Option<(usize, usize)>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _report: ShotReport) {}

    /// Inform the player of a shot against its own board.
    fn handle_opponent_shot(&mut self, _report: ShotReport) {}
}
