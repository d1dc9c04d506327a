//! Scoring utilities for the search.
//!
//! Conventions:
//! - Scores are integers from White's perspective: positive favours White,
//!   negative favours Black.
//! - Material uses pawn 1, knight 3, bishop 3, rook 5, queen 9, king 100. Both
//!   kings are always on the board, so the king terms cancel.
//! - A checkmated side to move scores `-CHECKMATE_SCORE` for White and
//!   `+CHECKMATE_SCORE` for Black; a draw scores `DRAW_SCORE`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Player};

/// Numeric evaluation of a position, positive when White is better.
pub type Score = i32;

/// Sentinel below every reachable score.
pub const MIN_SCORE: Score = Score::MIN;
/// Sentinel above every reachable score.
pub const MAX_SCORE: Score = Score::MAX;

pub const CHECKMATE_SCORE: Score = 1000;
pub const DRAW_SCORE: Score = 0;

/// Material value of one piece of `kind`.
pub const fn piece_value(kind: PieceKind) -> Score {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 100,
        PieceKind::Empty => 0,
    }
}

/// Static evaluation: White material minus Black material.
pub fn material_score(board: &Board) -> Score {
    board
        .pieces()
        .map(|(_, piece)| match piece.owner() {
            Some(Player::White) => piece_value(piece.kind()),
            Some(Player::Black) => -piece_value(piece.kind()),
            None => 0,
        })
        .sum()
}

/// Terminal score of a position in which `mated` is checkmated.
pub const fn checkmate_score(mated: Player) -> Score {
    match mated {
        Player::White => -CHECKMATE_SCORE,
        Player::Black => CHECKMATE_SCORE,
    }
}

/// Starting value of a node's best score: the worst possible one for `player`.
pub const fn worst_score(player: Player) -> Score {
    match player {
        Player::White => MIN_SCORE,
        Player::Black => MAX_SCORE,
    }
}

/// Whether `candidate` is strictly better than `reference` for `player`.
///
/// White prefers larger scores and Black smaller ones.
#[inline]
pub fn is_better_score(candidate: Score, reference: Score, player: Player) -> bool {
    match player {
        Player::White => candidate > reference,
        Player::Black => candidate < reference,
    }
}
