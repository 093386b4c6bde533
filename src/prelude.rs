//! Commonly used types and utilities for ease of import.

pub use crate::{AiPlayer, Board, GameError, Match, MatchStatus, Player, ShotOutcome, Unit};

#[cfg(feature = "std")]
pub use crate::{
    init_logging,
    ui::{render_own_board, render_side_by_side, render_target_board},
    CliPlayer,
};
