//! Rook movement: any distance along a row or column with no piece in between.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Position};
use crate::game_state::move_log::BoundedMoveLog;
use crate::moves::move_shared::{add_ray, path_is_clear};

pub(crate) const STRAIGHTS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub fn rook_move_is_valid(board: &Board, from: Position, to: Position) -> bool {
    let same_row = to.row == from.row;
    let same_column = to.column == from.column;
    same_row != same_column && path_is_clear(board, from, to)
}

pub fn generate_rook_moves(board: &Board, from: Position, list: &mut BoundedMoveLog<Move>) {
    for (d_row, d_column) in STRAIGHTS {
        add_ray(list, board, from, d_row, d_column);
    }
}
