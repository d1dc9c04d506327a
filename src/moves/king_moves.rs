//! King movement: one square in any direction. There is no castling.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Position};
use crate::game_state::move_log::BoundedMoveLog;
use crate::moves::move_shared::try_add_relative;

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, -1),
    (1, 0),
    (1, 1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub fn king_move_is_valid(_board: &Board, from: Position, to: Position) -> bool {
    let d_row = (to.row - from.row).abs();
    let d_column = (to.column - from.column).abs();
    d_row.max(d_column) == 1
}

pub fn generate_king_moves(board: &Board, from: Position, list: &mut BoundedMoveLog<Move>) {
    for (d_row, d_column) in KING_OFFSETS {
        try_add_relative(list, board, from, d_row, d_column);
    }
}
