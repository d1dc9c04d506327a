//! 8x8 mailbox board.
//!
//! `Board` is a plain grid of `Piece` values indexed by `Position`. It knows the
//! standard starting layout and how to apply and revert a single move; all rule
//! knowledge lives in `moves` and `game_state::game_engine`.

use std::fmt;
use std::str::FromStr;

use crate::game_state::chess_errors::{ChessErrors, GameError, GameResult};
use crate::game_state::chess_types::{Move, Piece, PieceKind, Player, Position};
use crate::utils::board_text::board_from_text;
use crate::utils::render_game_state::render_board;

/// Back-rank order from column A to column H.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Piece; 8]; 8],
}

impl Board {
    /// A board with no pieces at all.
    pub const fn empty() -> Self {
        Board {
            squares: [[Piece::EMPTY; 8]; 8],
        }
    }

    /// The standard starting position: pawns on rows 1 and 6, back ranks
    /// mirrored on rows 0 and 7.
    pub fn new_game() -> Self {
        let mut board = Board::empty();
        for player in [Player::White, Player::Black] {
            for (column, kind) in BACK_RANK.iter().enumerate() {
                let column = column as i8;
                board.set_piece(Position::new(player.back_row(), column), Piece::new(*kind, player));
                board.set_piece(
                    Position::new(player.pawn_start_row(), column),
                    Piece::new(PieceKind::Pawn, player),
                );
            }
        }
        board
    }

    /// Piece on `pos`, or `Piece::EMPTY` when `pos` is off the board.
    #[inline]
    pub fn piece_at(&self, pos: Position) -> Piece {
        if pos.is_valid() {
            self.squares[pos.row as usize][pos.column as usize]
        } else {
            Piece::EMPTY
        }
    }

    #[inline]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.piece_at(pos).is_empty()
    }

    /// Overwrites the square at `pos`.
    ///
    /// # Errors
    /// `GameError::InvalidPosition` if `pos` is off the board; the board is
    /// left unchanged.
    pub fn place_piece(&mut self, pos: Position, piece: Piece) -> GameResult {
        if !pos.is_valid() {
            return Err(GameError::InvalidPosition);
        }
        self.set_piece(pos, piece);
        Ok(())
    }

    /// Overwrites the square at `pos`, which must be on the board.
    ///
    /// # Panics
    /// If `pos` is off the board.
    #[inline]
    pub(crate) fn set_piece(&mut self, pos: Position, piece: Piece) {
        assert!(pos.is_valid(), "cannot place a piece on {pos}");
        self.squares[pos.row as usize][pos.column as usize] = piece;
    }

    /// Every occupied square in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Position::all()
            .map(move |pos| (pos, self.piece_at(pos)))
            .filter(|(_, piece)| !piece.is_empty())
    }

    /// Squares holding a king of `player`, in row-major order.
    pub fn kings(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        self.pieces()
            .filter(move |(_, piece)| piece.kind() == PieceKind::King && piece.belongs_to(player))
            .map(|(pos, _)| pos)
    }

    /// Moves the piece on `from` to `to`, clearing `from`, and returns the
    /// move record holding whatever `to` contained before.
    ///
    /// No rule is checked; both positions must be on the board.
    pub(crate) fn apply(&mut self, from: Position, to: Position) -> Move {
        let mover = self.piece_at(from);
        let record = Move::new(from, to, self.piece_at(to));
        self.set_piece(to, mover);
        self.set_piece(from, Piece::EMPTY);
        record
    }

    /// Exact inverse of `apply` for the given record.
    pub(crate) fn revert(&mut self, record: &Move) {
        let mover = self.piece_at(record.to);
        self.set_piece(record.from, mover);
        self.set_piece(record.to, record.captured);
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new_game()
    }
}

impl FromStr for Board {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        board_from_text(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_has_thirty_two_pieces() {
        let board = Board::new_game();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces().filter(|(_, p)| p.belongs_to(Player::White)).count(), 16);
        assert_eq!(board.piece_at(Position::new(0, 4)), Piece::new(PieceKind::King, Player::White));
        assert_eq!(board.piece_at(Position::new(7, 3)), Piece::new(PieceKind::Queen, Player::Black));
        assert_eq!(board.piece_at(Position::new(6, 5)), Piece::new(PieceKind::Pawn, Player::Black));
        assert!(board.is_empty_at(Position::new(3, 3)));
    }

    #[test]
    fn each_side_starts_with_one_king() {
        let board = Board::new_game();
        assert_eq!(board.kings(Player::White).collect::<Vec<_>>(), vec![Position::new(0, 4)]);
        assert_eq!(board.kings(Player::Black).collect::<Vec<_>>(), vec![Position::new(7, 4)]);
    }

    #[test]
    fn off_board_lookup_is_empty() {
        let board = Board::new_game();
        assert_eq!(board.piece_at(Position::new(-1, 0)), Piece::EMPTY);
        assert_eq!(board.piece_at(Position::new(0, 8)), Piece::EMPTY);
    }

    #[test]
    fn placing_off_the_board_is_rejected() {
        let mut board = Board::empty();
        let queen = Piece::new(PieceKind::Queen, Player::White);
        assert_eq!(board.place_piece(Position::new(8, 0), queen), Err(GameError::InvalidPosition));
        assert_eq!(board.place_piece(Position::new(0, -1), queen), Err(GameError::InvalidPosition));
        assert_eq!(board, Board::empty());

        assert_eq!(board.place_piece(Position::new(3, 3), queen), Ok(()));
        assert_eq!(board.piece_at(Position::new(3, 3)), queen);
    }

    #[test]
    fn apply_then_revert_restores_a_capture() {
        let mut board = Board::new_game();
        let before = board.clone();
        let record = board.apply(Position::new(0, 0), Position::new(6, 0));
        assert_eq!(record.captured, Piece::new(PieceKind::Pawn, Player::Black));
        assert!(board.is_empty_at(Position::new(0, 0)));
        board.revert(&record);
        assert_eq!(board, before);
    }
}
