#![cfg(feature = "std")]

//! Text rendering of boards for the console game.

use std::fmt::Write;
use std::string::String;
use std::vec::Vec;

use crate::{
    board::{Board, TargetView},
    config::{BOARD_SIZE, COLUMN_LABELS},
};

pub const EMPTY_GLYPH: char = '.';
pub const UNIT_GLYPH: char = 'S';
pub const MISS_GLYPH: char = 'o';
pub const HIT_GLYPH: char = 'X';

const GAP: &str = "     ";

/// Human-readable form of a coordinate, e.g. `(4, 0)` -> `A5`.
pub fn coord_to_string(row: usize, col: usize) -> String {
    let label = COLUMN_LABELS.get(col).copied().unwrap_or('?');
    format!("{}{}", label, row + 1)
}

fn shot_glyph(hit: Option<bool>) -> Option<char> {
    hit.map(|h| if h { HIT_GLYPH } else { MISS_GLYPH })
}

fn header() -> String {
    let mut line = String::from("   ");
    for label in COLUMN_LABELS {
        let _ = write!(line, " {}", label);
    }
    line
}

fn grid_lines<F>(glyph: F) -> Vec<String>
where
    F: Fn(usize, usize) -> char,
{
    let size = BOARD_SIZE as usize;
    let mut lines = Vec::with_capacity(size + 1);
    lines.push(header());
    for r in 0..size {
        let mut line = format!("{:2} ", r + 1);
        for c in 0..size {
            let _ = write!(line, " {}", glyph(r, c));
        }
        lines.push(line);
    }
    lines
}

fn own_lines(board: &Board) -> Vec<String> {
    grid_lines(|r, c| {
        shot_glyph(board.shot_at(r, c).map(|s| s.hit())).unwrap_or_else(|| {
            if board.unit_at(r, c).is_some() {
                UNIT_GLYPH
            } else {
                EMPTY_GLYPH
            }
        })
    })
}

fn target_lines(view: TargetView<'_>) -> Vec<String> {
    grid_lines(|r, c| shot_glyph(view.shot_at(r, c).map(|s| s.hit())).unwrap_or(EMPTY_GLYPH))
}

/// The owner's board: units and every shot fired at it.
pub fn render_own_board(board: &Board) -> String {
    own_lines(board).join("\n")
}

/// An opposing board as its attacker sees it: resolved cells only.
pub fn render_target_board(view: TargetView<'_>) -> String {
    target_lines(view).join("\n")
}

/// Own board on the left, target board on the right.
pub fn render_side_by_side(own: &Board, target: TargetView<'_>) -> String {
    let left = own_lines(own);
    let right = target_lines(target);
    let width = left.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let mut out = format!("{:<width$}{}{}\n", "YOUR BOARD", GAP, "ENEMY BOARD", width = width);
    for (l, r) in left.iter().zip(right.iter()) {
        let _ = writeln!(out, "{:<width$}{}{}", l, GAP, r, width = width);
    }
    out
}
