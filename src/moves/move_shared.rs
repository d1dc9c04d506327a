//! Helpers shared by the per-piece move files.
//!
//! Validators in this module only look at geometry and occupancy. Ownership of
//! the source square and the "cannot land on your own piece" rule are enforced
//! once, in `move_rules::is_pseudo_legal`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, Position};
use crate::game_state::move_log::BoundedMoveLog;
use crate::moves::move_rules::is_pseudo_legal;

/// Appends `from -> to` to `list`, recording the piece currently on `to`.
///
/// Buffers are sized with `PieceKind::max_moves`, so a full list here means a
/// generator produced more moves than the piece can have.
#[inline]
pub fn add_move(list: &mut BoundedMoveLog<Move>, board: &Board, from: Position, to: Position) {
    let pushed = list.push_last(Move::new(from, to, board.piece_at(to)));
    debug_assert!(pushed.is_ok(), "move buffer overflow at {from} -> {to}");
}

/// Adds the move to `from + (d_row, d_column)` if it is on the board and
/// pseudo-legal for the piece on `from`.
#[inline]
pub fn try_add_relative(
    list: &mut BoundedMoveLog<Move>,
    board: &Board,
    from: Position,
    d_row: i8,
    d_column: i8,
) {
    let to = from.offset(d_row, d_column);
    if is_pseudo_legal(board, from, to) {
        add_move(list, board, from, to);
    }
}

/// Walks from `from` in steps of `(d_row, d_column)`, adding every empty
/// square and the first occupied square when it holds an enemy piece.
pub fn add_ray(list: &mut BoundedMoveLog<Move>, board: &Board, from: Position, d_row: i8, d_column: i8) {
    let mover = board.piece_at(from).owner();
    let mut to = from.offset(d_row, d_column);
    while to.is_valid() {
        let target = board.piece_at(to);
        if target.is_empty() {
            add_move(list, board, from, to);
        } else {
            if target.owner() != mover {
                add_move(list, board, from, to);
            }
            return;
        }
        to = to.offset(d_row, d_column);
    }
}

/// True when every square strictly between `from` and `to` is empty.
///
/// `from` and `to` must share a row, a column or a diagonal.
pub fn path_is_clear(board: &Board, from: Position, to: Position) -> bool {
    let step_row = (to.row - from.row).signum();
    let step_column = (to.column - from.column).signum();
    let mut square = from.offset(step_row, step_column);
    while square != to {
        if !board.is_empty_at(square) {
            return false;
        }
        square = square.offset(step_row, step_column);
    }
    true
}
