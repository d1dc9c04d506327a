//! Core value types of the board model.
//!
//! Pieces, positions and moves are small `Copy` values. A board cell is simply
//! overwritten by value when a piece moves; pieces have no identity of their own.

use std::fmt;
use std::str::FromStr;

use crate::game_state::chess_errors::ChessErrors;
use crate::utils::board_text::piece_to_char;

/// Number of rows (ranks) on the board.
pub const BOARD_ROWS: i8 = 8;
/// Number of columns (files) on the board.
pub const BOARD_COLUMNS: i8 = 8;

/// Side owning a piece or holding the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row step of a pawn move: White moves up (+1), Black moves down (-1).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }

    /// Row from which this player's pawns may advance two squares.
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => 6,
        }
    }

    /// Row holding this player's back-rank pieces at the start of a game.
    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Player::White => 0,
            Player::Black => 7,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => write!(f, "white"),
            Player::Black => write!(f, "black"),
        }
    }
}

impl FromStr for Player {
    type Err = ChessErrors;

    /// Accepts `white`/`black` (any case) or the numeric codes `1`/`0` used by
    /// the settings layer (1 = white, 0 = black).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" | "1" => Ok(Player::White),
            "black" | "0" => Ok(Player::Black),
            _ => Err(ChessErrors::InvalidSetting {
                setting: "player",
                value: s.to_string(),
            }),
        }
    }
}

/// Piece kind, including the filler kind of an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Empty,
}

impl PieceKind {
    /// Upper bound on the number of destinations a piece of this kind can have
    /// on an empty 8x8 board. Move buffers are sized with it.
    #[inline]
    pub const fn max_moves(self) -> usize {
        match self {
            PieceKind::Pawn => 4,
            PieceKind::Knight => 8,
            PieceKind::Bishop => 13,
            PieceKind::Rook => 14,
            PieceKind::Queen => 27,
            PieceKind::King => 8,
            PieceKind::Empty => 0,
        }
    }

    /// Lower-case piece name as used in console messages.
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
            PieceKind::Empty => "empty",
        }
    }
}

/// Content of a board square: a kind plus an owner.
///
/// Empty squares carry `PieceKind::Empty` and no owner; the constructor keeps
/// that pairing intact, so an owned empty piece cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    owner: Option<Player>,
}

impl Piece {
    pub const EMPTY: Piece = Piece {
        kind: PieceKind::Empty,
        owner: None,
    };

    #[inline]
    pub const fn new(kind: PieceKind, owner: Player) -> Self {
        match kind {
            PieceKind::Empty => Piece::EMPTY,
            _ => Piece {
                kind,
                owner: Some(owner),
            },
        }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn owner(self) -> Option<Player> {
        self.owner
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self.kind, PieceKind::Empty)
    }

    #[inline]
    pub fn belongs_to(self, player: Player) -> bool {
        self.owner == Some(player)
    }

    /// Single-character symbol of the piece (see `utils::board_text`).
    #[inline]
    pub fn symbol(self) -> char {
        piece_to_char(self)
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::EMPTY
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Board coordinate as (row, column).
///
/// Row 0 is White's back rank and column 0 is file A. Coordinates are signed so
/// that out-of-range user input can be represented and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i8,
    pub column: i8,
}

impl Position {
    #[inline]
    pub const fn new(row: i8, column: i8) -> Self {
        Position { row, column }
    }

    /// Both coordinates are within `0..8`.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.row >= 0 && self.row < BOARD_ROWS && self.column >= 0 && self.column < BOARD_COLUMNS
    }

    /// Position shifted by the given row and column deltas. The result may be
    /// off the board; check it with `is_valid`.
    #[inline]
    pub const fn offset(self, d_row: i8, d_column: i8) -> Self {
        Position {
            row: self.row.saturating_add(d_row),
            column: self.column.saturating_add(d_column),
        }
    }

    /// All 64 board positions in row-major order, starting at `<1,A>`.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_ROWS).flat_map(|row| (0..BOARD_COLUMNS).map(move |column| Position::new(row, column)))
    }
}

impl fmt::Display for Position {
    /// Console notation `<row,COLUMN>`, e.g. `<2,E>` for row index 1, column 4.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "<{},{}>", self.row + 1, char::from(b'A' + self.column as u8))
        } else {
            write!(f, "<{},{}>", self.row, self.column)
        }
    }
}

/// A played or candidate move.
///
/// `captured` is whatever occupied `to` before the move (`Piece::EMPTY` if
/// nothing did) and is what undo restores. `is_threatened` is a UI hint only
/// and takes no part in equality.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub captured: Piece,
    pub is_threatened: bool,
}

impl Move {
    #[inline]
    pub const fn new(from: Position, to: Position, captured: Piece) -> Self {
        Move {
            from,
            to,
            captured,
            is_threatened: false,
        }
    }

    /// Ordering key used to break ties between equally scored moves:
    /// source column, source row, destination column, destination row.
    #[inline]
    pub const fn tie_break_key(&self) -> (i8, i8, i8, i8) {
        (self.from.column, self.from.row, self.to.column, self.to.row)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to && self.captured == other.captured
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
