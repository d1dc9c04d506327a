//! Knight movement: an L-shaped jump that ignores intervening pieces.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Position};
use crate::game_state::move_log::BoundedMoveLog;
use crate::moves::move_shared::try_add_relative;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

pub fn knight_move_is_valid(_board: &Board, from: Position, to: Position) -> bool {
    let d_row = (to.row - from.row).abs();
    let d_column = (to.column - from.column).abs();
    matches!((d_row, d_column), (1, 2) | (2, 1))
}

pub fn generate_knight_moves(board: &Board, from: Position, list: &mut BoundedMoveLog<Move>) {
    for (d_row, d_column) in KNIGHT_OFFSETS {
        try_add_relative(list, board, from, d_row, d_column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind, Player};

    #[test]
    fn centre_knight_reaches_eight_squares() {
        let mut board = Board::empty();
        let d4 = Position::new(3, 3);
        board.set_piece(d4, Piece::new(PieceKind::Knight, Player::White));
        let mut list = BoundedMoveLog::new(8);
        generate_knight_moves(&board, d4, &mut list);
        assert_eq!(list.len(), 8);
    }

    #[test]
    fn starting_knight_jumps_over_pawns() {
        let board = Board::new_game();
        let mut list = BoundedMoveLog::new(8);
        generate_knight_moves(&board, Position::new(0, 1), &mut list);
        let mut targets: Vec<Position> = list.iter().map(|mv| mv.to).collect();
        targets.sort_by_key(|pos| pos.column);
        assert_eq!(targets, vec![Position::new(2, 0), Position::new(2, 2)]);
        assert!(knight_move_is_valid(&board, Position::new(0, 1), Position::new(1, 3)));
        assert!(!knight_move_is_valid(&board, Position::new(0, 1), Position::new(2, 1)));
    }
}
