use alloc::vec::Vec;

use log::{debug, info};
use rand::{rngs::SmallRng, Rng};

use crate::{
    ai::Targeting,
    board::{Board, TargetView},
    common::{GameError, ShotReport},
    player::Player,
};

/// Side holding the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    Player,
    Opponent,
}

/// Current status of a match, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchStatus {
    InProgress,
    Won,
    Lost,
    Aborted,
}

/// Match controller: owns both boards, the turn and the automated side's
/// last-hit memory.
///
/// The player always opens. A side that hits keeps the turn; a miss hands
/// it over. The automated side resolves its whole chain of shots inside
/// [`opponent_turn`](Self::opponent_turn).
pub struct Match {
    player_board: Board,
    opponent_board: Board,
    targeting: Targeting,
    turn: Turn,
    aborted: bool,
}

impl Match {
    /// Start a match from two fully placed boards.
    pub fn new(player_board: Board, opponent_board: Board) -> Self {
        Self {
            player_board,
            opponent_board,
            targeting: Targeting::new(),
            turn: Turn::Player,
            aborted: false,
        }
    }

    /// Start a match against a randomly placed opponent board. Fails with
    /// [`GameError::SetupExhausted`] without creating a match.
    pub fn with_random_opponent<R: Rng + ?Sized>(
        player_board: Board,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let opponent_board = Board::random(rng)?;
        Ok(Self::new(player_board, opponent_board))
    }

    /// Let `player` place its units, then place the opponent's randomly.
    pub fn setup(player: &mut dyn Player, rng: &mut SmallRng) -> Result<Self, GameError> {
        let mut player_board = Board::new();
        player.place_units(rng, &mut player_board)?;
        let game = Self::with_random_opponent(player_board, rng)?;
        info!(
            "match ready: {} player units, {} opponent units",
            game.player_board.units().len(),
            game.opponent_board.units().len()
        );
        Ok(game)
    }

    /// The player's own board, units included.
    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    /// What the player may see of the opponent's board.
    pub fn opponent_view(&self) -> TargetView<'_> {
        self.opponent_board.target_view()
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Last hit the automated side is following up on.
    pub fn last_hit(&self) -> Option<(usize, usize)> {
        self.targeting.last_hit()
    }

    /// Evaluate the match. Only one shot resolves at a time, so both boards
    /// can never be destroyed together.
    pub fn status(&self) -> MatchStatus {
        if self.aborted {
            MatchStatus::Aborted
        } else if self.opponent_board.is_destroyed() {
            MatchStatus::Won
        } else if self.player_board.is_destroyed() {
            MatchStatus::Lost
        } else {
            MatchStatus::InProgress
        }
    }

    /// Abandon the match between turns.
    pub fn abort(&mut self) {
        info!("match aborted");
        self.aborted = true;
    }

    fn ensure_turn(&self, side: Turn) -> Result<(), GameError> {
        if self.status() != MatchStatus::InProgress {
            return Err(GameError::MatchOver);
        }
        if self.turn != side {
            return Err(GameError::NotYourTurn);
        }
        Ok(())
    }

    /// Resolve one player shot at the opponent board. A hit keeps the turn,
    /// a miss passes it. A repeated coordinate fails with
    /// [`GameError::DuplicateShot`] and changes nothing.
    pub fn player_fire(&mut self, row: usize, col: usize) -> Result<ShotReport, GameError> {
        self.ensure_turn(Turn::Player)?;
        let outcome = self.opponent_board.fire_at(row, col)?;
        if !outcome.is_hit() {
            self.turn = Turn::Opponent;
        }
        debug!("player fired at ({}, {}): {:?}", row, col, outcome);
        Ok(ShotReport { row, col, outcome })
    }

    /// Play the automated side's turn: keep firing while shots hit and the
    /// player board survives. The turn passes back on the first miss.
    ///
    /// Targets are always in bounds and untried, so once the turn check
    /// passes no shot in the chain can fail. Every shot is recorded on the
    /// board before its report is pushed.
    pub fn opponent_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<ShotReport>, GameError> {
        self.ensure_turn(Turn::Opponent)?;
        let mut reports = Vec::new();
        loop {
            let (row, col) = self
                .targeting
                .next_target(self.player_board.target_view(), rng)?;
            let outcome = self.player_board.fire_at(row, col)?;
            self.targeting.record((row, col), outcome.is_hit());
            debug!("opponent fired at ({}, {}): {:?}", row, col, outcome);
            reports.push(ShotReport { row, col, outcome });

            if !outcome.is_hit() {
                self.turn = Turn::Player;
                break;
            }
            if self.player_board.is_destroyed() {
                break;
            }
        }
        Ok(reports)
    }

    /// Advance the match by one turn, asking `player` for its coordinate
    /// when it holds the turn. A repeated coordinate is dropped so the
    /// player can be asked again.
    pub fn play_round(
        &mut self,
        player: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> Result<MatchStatus, GameError> {
        let status = self.status();
        if status != MatchStatus::InProgress {
            return Ok(status);
        }
        match self.turn {
            Turn::Player => match player.select_target(rng, self.opponent_view()) {
                None => self.abort(),
                Some((row, col)) => match self.player_fire(row, col) {
                    Ok(report) => player.handle_shot_result(report),
                    Err(GameError::DuplicateShot { row, col }) => {
                        debug!("player repeated ({}, {}), asking again", row, col);
                    }
                    Err(e) => return Err(e),
                },
            },
            Turn::Opponent => {
                for report in self.opponent_turn(rng)? {
                    player.handle_opponent_shot(report);
                }
            }
        }
        Ok(self.status())
    }

    /// Play rounds until the match is decided or abandoned.
    pub fn run(
        &mut self,
        player: &mut dyn Player,
        rng: &mut SmallRng,
    ) -> Result<MatchStatus, GameError> {
        loop {
            let status = self.play_round(player, rng)?;
            if status != MatchStatus::InProgress {
                info!(
                    "match finished: {:?} ({} player shots, {} opponent shots)",
                    status,
                    self.opponent_board.shots().len(),
                    self.player_board.shots().len()
                );
                return Ok(status);
            }
        }
    }
}
