//! Piece symbols and the 8x8 text grid.
//!
//! This is the boundary used by console rendering and by save/load code that
//! lives outside the core. White pieces are lower-case, Black pieces upper-case:
//!
//! | kind   | white | black |
//! |--------|-------|-------|
//! | pawn   | `m`   | `M`   |
//! | knight | `n`   | `N`   |
//! | bishop | `b`   | `B`   |
//! | rook   | `r`   | `R`   |
//! | queen  | `q`   | `Q`   |
//! | king   | `k`   | `K`   |
//!
//! An empty square is `_`. A board is written as 8 lines of 8 symbols, the
//! line for row 7 (rank 8) first.

use crate::game_state::board::Board;
use crate::game_state::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Piece, PieceKind, Player, Position, BOARD_COLUMNS, BOARD_ROWS};

pub const EMPTY_SYMBOL: char = '_';

/// Symbol of a piece.
pub fn piece_to_char(piece: Piece) -> char {
    let symbol = match piece.kind() {
        PieceKind::Pawn => 'm',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
        PieceKind::Empty => return EMPTY_SYMBOL,
    };
    match piece.owner() {
        Some(Player::Black) => symbol.to_ascii_uppercase(),
        _ => symbol,
    }
}

/// Piece named by `symbol`.
///
/// # Errors
/// `ChessErrors::InvalidPieceSymbol` for any character outside the table.
pub fn char_to_piece(symbol: char) -> Result<Piece, ChessErrors> {
    if symbol == EMPTY_SYMBOL {
        return Ok(Piece::EMPTY);
    }
    let kind = match symbol.to_ascii_lowercase() {
        'm' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return Err(ChessErrors::InvalidPieceSymbol(symbol)),
    };
    let owner = if symbol.is_ascii_uppercase() {
        Player::Black
    } else {
        Player::White
    };
    Ok(Piece::new(kind, owner))
}

/// Writes the board as 8 newline-terminated lines, row 7 first.
pub fn board_to_text(board: &Board) -> String {
    let mut out = String::with_capacity(72);
    for row in (0..BOARD_ROWS).rev() {
        for column in 0..BOARD_COLUMNS {
            out.push(piece_to_char(board.piece_at(Position::new(row, column))));
        }
        out.push('\n');
    }
    out
}

/// Reads a board written by `board_to_text`.
///
/// Blank lines and surrounding whitespace are ignored, so indented literals
/// work in tests. King counts are not checked here; `GameEngine::from_board`
/// does that.
///
/// # Errors
/// `ChessErrors::InvalidBoardText` when the grid is not 8x8, and
/// `ChessErrors::InvalidPieceSymbol` for an unknown symbol.
pub fn board_from_text(text: &str) -> Result<Board, ChessErrors> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() != BOARD_ROWS as usize {
        return Err(ChessErrors::InvalidBoardText(format!(
            "expected {} rows, found {}",
            BOARD_ROWS,
            lines.len()
        )));
    }

    let mut board = Board::empty();
    for (line_index, line) in lines.iter().enumerate() {
        let row = BOARD_ROWS - 1 - line_index as i8;
        let symbols: Vec<char> = line.chars().collect();
        if symbols.len() != BOARD_COLUMNS as usize {
            return Err(ChessErrors::InvalidBoardText(format!(
                "row {} has {} squares",
                row + 1,
                symbols.len()
            )));
        }
        for (column, symbol) in symbols.into_iter().enumerate() {
            board.place_piece(Position::new(row, column as i8), char_to_piece(symbol)?)?;
        }
    }
    Ok(board)
}
