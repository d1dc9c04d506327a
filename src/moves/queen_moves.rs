//! Queen movement: the union of rook and bishop movement.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Position};
use crate::game_state::move_log::BoundedMoveLog;
use crate::moves::bishop_moves::{bishop_move_is_valid, DIAGONALS};
use crate::moves::move_shared::add_ray;
use crate::moves::rook_moves::{rook_move_is_valid, STRAIGHTS};

pub fn queen_move_is_valid(board: &Board, from: Position, to: Position) -> bool {
    rook_move_is_valid(board, from, to) || bishop_move_is_valid(board, from, to)
}

pub fn generate_queen_moves(board: &Board, from: Position, list: &mut BoundedMoveLog<Move>) {
    for (d_row, d_column) in STRAIGHTS.into_iter().chain(DIAGONALS) {
        add_ray(list, board, from, d_row, d_column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind, Player};

    #[test]
    fn centre_queen_has_twenty_seven_moves() {
        let mut board = Board::empty();
        let d4 = Position::new(3, 3);
        board.set_piece(d4, Piece::new(PieceKind::Queen, Player::White));
        let mut list = BoundedMoveLog::new(27);
        generate_queen_moves(&board, d4, &mut list);
        assert_eq!(list.len(), 27);
        assert!(!queen_move_is_valid(&board, d4, Position::new(5, 4)));
    }
}
