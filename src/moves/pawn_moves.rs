//! Pawn movement.
//!
//! A pawn steps one square forward onto an empty square, two squares from its
//! starting row when both squares are empty, or one square diagonally forward
//! onto an enemy piece. There is no en passant and no promotion.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Position};
use crate::game_state::move_log::BoundedMoveLog;
use crate::moves::move_shared::try_add_relative;

/// Geometry and occupancy check for a pawn on `from`.
pub fn pawn_move_is_valid(board: &Board, from: Position, to: Position) -> bool {
    let Some(owner) = board.piece_at(from).owner() else {
        return false;
    };
    let direction = owner.pawn_direction();
    let forward = (to.row - from.row) * direction;
    let sideways = to.column - from.column;

    match (forward, sideways) {
        (1, 0) => board.is_empty_at(to),
        (1, -1) | (1, 1) => board.piece_at(to).belongs_to(owner.opponent()),
        (2, 0) => {
            from.row == owner.pawn_start_row()
                && board.is_empty_at(from.offset(direction, 0))
                && board.is_empty_at(to)
        }
        _ => false,
    }
}

/// Appends every pseudo-legal pawn move from `from`: the single push, both
/// captures, then the double push.
pub fn generate_pawn_moves(board: &Board, from: Position, list: &mut BoundedMoveLog<Move>) {
    let Some(owner) = board.piece_at(from).owner() else {
        return;
    };
    let direction = owner.pawn_direction();
    try_add_relative(list, board, from, direction, 0);
    try_add_relative(list, board, from, direction, -1);
    try_add_relative(list, board, from, direction, 1);
    try_add_relative(list, board, from, 2 * direction, 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind, Player};

    #[test]
    fn starting_pawn_has_single_and_double_push() {
        let board = Board::new_game();
        let mut list = BoundedMoveLog::new(4);
        generate_pawn_moves(&board, Position::new(1, 4), &mut list);
        let targets: Vec<Position> = list.iter().map(|mv| mv.to).collect();
        assert_eq!(targets, vec![Position::new(2, 4), Position::new(3, 4)]);
    }

    #[test]
    fn double_push_needs_a_clear_intermediate_square() {
        let mut board = Board::new_game();
        board.set_piece(Position::new(5, 3), Piece::new(PieceKind::Knight, Player::White));
        assert!(!pawn_move_is_valid(&board, Position::new(6, 3), Position::new(4, 3)));
        assert!(!pawn_move_is_valid(&board, Position::new(6, 3), Position::new(5, 3)));
    }

    #[test]
    fn diagonal_step_needs_an_enemy_on_the_target() {
        let mut board = Board::new_game();
        let black_pawn = Position::new(6, 3);
        assert!(!pawn_move_is_valid(&board, black_pawn, Position::new(5, 2)));

        board.set_piece(Position::new(5, 2), Piece::new(PieceKind::Knight, Player::White));
        assert!(pawn_move_is_valid(&board, black_pawn, Position::new(5, 2)));

        board.set_piece(Position::new(5, 4), Piece::new(PieceKind::Knight, Player::Black));
        assert!(!pawn_move_is_valid(&board, black_pawn, Position::new(5, 4)));
    }

    #[test]
    fn double_push_only_from_the_start_row() {
        let mut board = Board::empty();
        board.set_piece(Position::new(2, 0), Piece::new(PieceKind::Pawn, Player::White));
        assert!(pawn_move_is_valid(&board, Position::new(2, 0), Position::new(3, 0)));
        assert!(!pawn_move_is_valid(&board, Position::new(2, 0), Position::new(4, 0)));
    }

    #[test]
    fn pawns_capture_diagonally_and_never_backwards() {
        let mut board = Board::empty();
        let black_pawn = Position::new(4, 4);
        board.set_piece(black_pawn, Piece::new(PieceKind::Pawn, Player::Black));
        board.set_piece(Position::new(3, 3), Piece::new(PieceKind::Rook, Player::White));
        board.set_piece(Position::new(3, 4), Piece::new(PieceKind::Rook, Player::White));

        assert!(pawn_move_is_valid(&board, black_pawn, Position::new(3, 3)));
        assert!(!pawn_move_is_valid(&board, black_pawn, Position::new(3, 4)));
        assert!(!pawn_move_is_valid(&board, black_pawn, Position::new(3, 5)));
        assert!(!pawn_move_is_valid(&board, black_pawn, Position::new(5, 4)));
    }
}
