#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;
use std::vec::Vec;

use rand::rngs::SmallRng;

use crate::{
    board::{Board, TargetView},
    common::{GameError, ShotOutcome, ShotReport},
    config::{BOARD_SIZE, COLUMN_LABELS, NUM_UNITS},
    player::Player,
    ui::{coord_to_string, render_own_board},
    unit::Unit,
};

/// Reasons a line of console input was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Empty,
    BadColumn(char),
    BadRow(String),
    BadFormat(String),
    NotVertical(String),
    NotAdjacent(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::Empty => write!(f, "no coordinate given"),
            InputError::BadColumn(c) => write!(
                f,
                "column '{}' is not between {} and {}",
                c,
                COLUMN_LABELS[0],
                COLUMN_LABELS[BOARD_SIZE as usize - 1]
            ),
            InputError::BadRow(r) => {
                write!(f, "row '{}' is not between 1 and {}", r, BOARD_SIZE)
            }
            InputError::BadFormat(s) => write!(f, "cannot read '{}'", s),
            InputError::NotVertical(s) => write!(f, "unit '{}' must stay in one column", s),
            InputError::NotAdjacent(s) => {
                write!(f, "unit '{}' must cover two neighbouring rows", s)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a cell such as `A5` or `j10` into `(row, col)`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), InputError> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or(InputError::Empty)?.to_ascii_uppercase();
    let col = COLUMN_LABELS
        .iter()
        .position(|&l| l == col_ch)
        .ok_or(InputError::BadColumn(col_ch))?;
    let row_str = chars.as_str();
    let row: usize = row_str
        .parse()
        .map_err(|_| InputError::BadRow(row_str.into()))?;
    if row == 0 || row > BOARD_SIZE as usize {
        return Err(InputError::BadRow(row_str.into()));
    }
    Ok((row - 1, col))
}

/// Parse a unit descriptor such as `A1A2` or `J10J9`: two cells of the same
/// column on neighbouring rows, in either order.
pub fn parse_unit(input: &str) -> Result<Unit, InputError> {
    let input = input.trim();
    let split = input
        .char_indices()
        .skip(1)
        .find(|(_, ch)| ch.is_alphabetic())
        .map(|(i, _)| i)
        .ok_or_else(|| InputError::BadFormat(input.into()))?;
    let (first, second) = input.split_at(split);
    let (r1, c1) = parse_coord(first)?;
    let (r2, c2) = parse_coord(second)?;
    if c1 != c2 {
        return Err(InputError::NotVertical(input.into()));
    }
    if r1.abs_diff(r2) != 1 {
        return Err(InputError::NotAdjacent(input.into()));
    }
    Ok(Unit::new((r1, r2), c1))
}

/// Parse a whitespace-separated list of unit descriptors.
pub fn parse_units(line: &str) -> Result<Vec<Unit>, InputError> {
    line.split_whitespace().map(parse_unit).collect()
}

/// Human player at a text console.
pub struct CliPlayer<R = io::StdinLock<'static>, W = io::Stdout> {
    input: R,
    output: W,
}

impl CliPlayer {
    /// Player reading stdin and writing stdout.
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn say(&mut self, text: fmt::Arguments<'_>) {
        let _ = writeln!(self.output, "{}", text);
    }

    /// Print `text` and read one trimmed line. `None` on end of input.
    fn ask(&mut self, text: &str) -> Option<String> {
        let _ = write!(self.output, "{}", text);
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    fn confirm_quit(&mut self) -> bool {
        matches!(
            self.ask("Really quit? (y/n): ").as_deref(),
            Some("y") | Some("Y") | Some("yes") | None
        )
    }

    /// Consume the player and hand back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn place_units(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), GameError> {
        self.say(format_args!(
            "Place {} units of two cells in one column (e.g. A1A2 C1C2 ...).",
            NUM_UNITS
        ));
        self.say(format_args!(
            "Units may not touch, not even at a corner. Press enter for random placement."
        ));
        loop {
            // end of input before a placement was accepted
            let line = match self.ask("> ") {
                Some(line) => line,
                None => return Err(GameError::Aborted),
            };
            if line.is_empty() {
                let placed = Board::random(rng)?;
                board.place_batch(placed.units())?;
                break;
            }
            let units = match parse_units(&line) {
                Ok(units) => units,
                Err(e) => {
                    self.say(format_args!("Error: {}. Try again.", e));
                    continue;
                }
            };
            match board.place_batch(&units) {
                Ok(()) => break,
                Err(e) => self.say(format_args!("Error: {}. Try again.", e)),
            }
        }
        let rendered = render_own_board(board);
        self.say(format_args!("{}", rendered));
        Ok(())
    }

    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        target: TargetView<'_>,
    ) -> Option<(usize, usize)> {
        loop {
            self.say(format_args!("Enemy units remaining: {}", target.remaining_units()));
            let line = self.ask("Your shot (e.g. A1, 'quit' to leave): ")?;
            if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
                if self.confirm_quit() {
                    return None;
                }
                continue;
            }
            match parse_coord(&line) {
                Ok((r, c)) if target.has_shot_at(r, c) => {
                    self.say(format_args!("You already fired at {}!", coord_to_string(r, c)));
                }
                Ok(coord) => return Some(coord),
                Err(e) => self.say(format_args!("Error: {}. Example: A1", e)),
            }
        }
    }

    fn handle_shot_result(&mut self, report: ShotReport) {
        let at = coord_to_string(report.row, report.col);
        match report.outcome {
            ShotOutcome::Miss => self.say(format_args!("{}: miss.", at)),
            ShotOutcome::Hit => self.say(format_args!("{}: hit! Fire again.", at)),
            ShotOutcome::Destroyed => {
                self.say(format_args!("{}: hit! Enemy unit destroyed! Fire again.", at))
            }
        }
    }

    fn handle_opponent_shot(&mut self, report: ShotReport) {
        let at = coord_to_string(report.row, report.col);
        match report.outcome {
            ShotOutcome::Miss => self.say(format_args!("Opponent fired at {} and missed.", at)),
            ShotOutcome::Hit => self.say(format_args!("Opponent hit {}!", at)),
            ShotOutcome::Destroyed => {
                self.say(format_args!("Opponent hit {} and destroyed your unit!", at))
            }
        }
    }
}
