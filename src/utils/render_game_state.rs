//! Terminal-oriented board renderer.
//!
//! Produces the console layout: one line per row from rank 8 down to rank 1,
//! each framed by the rank number and vertical bars, followed by a rule and
//! the column letters.

use std::fmt;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Position, BOARD_COLUMNS, BOARD_ROWS};
use crate::game_state::game_engine::GameEngine;

const RULE_LINE: &str = "  -----------------  ";
const COLUMN_LINE: &str = "   A B C D E F G H   ";

/// Render the board to a string for terminal output.
///
/// ```text
/// 8| R N B Q K B N R |
/// 7| M M M M M M M M |
/// ...
/// 1| r n b q k b n r |
///   -----------------
///    A B C D E F G H
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    for row in (0..BOARD_ROWS).rev() {
        out.push(char::from(b'1' + row as u8));
        out.push('|');
        for column in 0..BOARD_COLUMNS {
            out.push(' ');
            out.push(board.piece_at(Position::new(row, column)).symbol());
        }
        out.push_str(" |\n");
    }

    out.push_str(RULE_LINE);
    out.push('\n');
    out.push_str(COLUMN_LINE);
    out.push('\n');

    out
}

/// Board followed by a status line naming the player to move and any check.
pub fn render_game(game: &GameEngine) -> String {
    let mut out = render_board(game.board());
    out.push_str(&format!("{} to move", game.current_player()));
    if game.is_check() {
        out.push_str(", check");
    }
    out.push('\n');
    out
}

impl fmt::Display for GameEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_game(self))
    }
}
