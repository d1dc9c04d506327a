//! Pseudo-legal move rules.
//!
//! "Pseudo-legal" means the move obeys the movement pattern of the piece and
//! does not land on a friendly piece. Whether it leaves the mover's own king
//! attacked is decided by `GameEngine`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, PieceKind, Player, Position};
use crate::game_state::move_log::BoundedMoveLog;
use crate::moves::bishop_moves::{bishop_move_is_valid, generate_bishop_moves};
use crate::moves::king_moves::{generate_king_moves, king_move_is_valid};
use crate::moves::knight_moves::{generate_knight_moves, knight_move_is_valid};
use crate::moves::pawn_moves::{generate_pawn_moves, pawn_move_is_valid};
use crate::moves::queen_moves::{generate_queen_moves, queen_move_is_valid};
use crate::moves::rook_moves::{generate_rook_moves, rook_move_is_valid};

/// Whether the piece on `from` may move to `to` ignoring king safety.
///
/// # Arguments
/// * `board` - Board to inspect.
/// * `from` - Source square; an empty square never moves.
/// * `to` - Destination square.
///
/// # Returns
/// `false` for off-board positions, a null move, or a destination holding a
/// piece of the same owner; otherwise the per-kind rule decides.
pub fn is_pseudo_legal(board: &Board, from: Position, to: Position) -> bool {
    if !from.is_valid() || !to.is_valid() || from == to {
        return false;
    }
    let mover = board.piece_at(from);
    let Some(owner) = mover.owner() else {
        return false;
    };
    if board.piece_at(to).belongs_to(owner) {
        return false;
    }

    match mover.kind() {
        PieceKind::Pawn => pawn_move_is_valid(board, from, to),
        PieceKind::Knight => knight_move_is_valid(board, from, to),
        PieceKind::Bishop => bishop_move_is_valid(board, from, to),
        PieceKind::Rook => rook_move_is_valid(board, from, to),
        PieceKind::Queen => queen_move_is_valid(board, from, to),
        PieceKind::King => king_move_is_valid(board, from, to),
        PieceKind::Empty => false,
    }
}

/// Every pseudo-legal move of the piece on `from`, in a buffer sized to that
/// piece kind's maximum. An empty or off-board square yields an empty list.
pub fn enumerate_pseudo_legal_moves(board: &Board, from: Position) -> BoundedMoveLog<Move> {
    let kind = board.piece_at(from).kind();
    let mut list = BoundedMoveLog::new(kind.max_moves());
    match kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, &mut list),
        PieceKind::Knight => generate_knight_moves(board, from, &mut list),
        PieceKind::Bishop => generate_bishop_moves(board, from, &mut list),
        PieceKind::Rook => generate_rook_moves(board, from, &mut list),
        PieceKind::Queen => generate_queen_moves(board, from, &mut list),
        PieceKind::King => generate_king_moves(board, from, &mut list),
        PieceKind::Empty => {}
    }
    list
}

/// Whether any piece of `attacker` has a pseudo-legal move onto `square`.
///
/// The attacker's own king safety is not considered: a pinned piece still
/// attacks.
pub fn is_square_attacked(board: &Board, square: Position, attacker: Player) -> bool {
    board
        .pieces()
        .any(|(from, piece)| piece.belongs_to(attacker) && is_pseudo_legal(board, from, square))
}
