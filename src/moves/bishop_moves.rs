//! Bishop movement: any distance along a diagonal with no piece in between.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Position};
use crate::game_state::move_log::BoundedMoveLog;
use crate::moves::move_shared::{add_ray, path_is_clear};

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub fn bishop_move_is_valid(board: &Board, from: Position, to: Position) -> bool {
    let d_row = (to.row - from.row).abs();
    let d_column = (to.column - from.column).abs();
    d_row == d_column && d_row != 0 && path_is_clear(board, from, to)
}

pub fn generate_bishop_moves(board: &Board, from: Position, list: &mut BoundedMoveLog<Move>) {
    for (d_row, d_column) in DIAGONALS {
        add_ray(list, board, from, d_row, d_column);
    }
}
