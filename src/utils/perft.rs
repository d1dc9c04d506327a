//! Perft: counts the leaf positions of the legal move tree.
//!
//! Used to check move generation against known totals. Castling, en passant
//! and promotion are not part of this rule set, so only positions where those
//! cannot yet occur (the standard start up to depth 4) match the usual
//! published tables.

use crate::game_state::chess_errors::ChessErrors;
use crate::game_state::game_engine::{GameEngine, GameStatus};
use crate::game_state::scoped_move::ScopedMove;

/// Leaf statistics of one perft run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    /// Leaves with the side to move in check, checkmates included.
    pub checks: u64,
    pub checkmates: u64,
}

/// Number of legal move paths of exactly `depth` plies from `game`.
pub fn perft(game: &GameEngine, depth: u8) -> Result<u64, ChessErrors> {
    perft_counts(game, depth).map(|counts| counts.nodes)
}

/// Like `perft`, also classifying each leaf.
///
/// `game` is not modified; the walk runs on a copy.
pub fn perft_counts(game: &GameEngine, depth: u8) -> Result<PerftCounts, ChessErrors> {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return Ok(counts);
    }
    let mut work = game.copy_with_empty_history(usize::from(depth));
    perft_recursion(&mut work, depth, &mut counts)?;
    Ok(counts)
}

fn perft_recursion(game: &mut GameEngine, depth: u8, counts: &mut PerftCounts) -> Result<(), ChessErrors> {
    for mv in game.legal_moves() {
        let mut scoped = ScopedMove::play(game, mv.from, mv.to)?;
        if depth > 1 {
            perft_recursion(&mut scoped, depth - 1, counts)?;
            continue;
        }

        counts.nodes += 1;
        if !mv.captured.is_empty() {
            counts.captures += 1;
        }
        if scoped.is_check() {
            counts.checks += 1;
            if scoped.current_state() == GameStatus::Checkmate {
                counts.checkmates += 1;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Player;

    #[test]
    fn start_position_matches_known_totals() {
        let game = GameEngine::default();
        assert_eq!(perft(&game, 0).unwrap(), 1);
        assert_eq!(perft(&game, 1).unwrap(), 20);
        assert_eq!(perft(&game, 2).unwrap(), 400);
        assert_eq!(
            perft_counts(&game, 3).unwrap(),
            PerftCounts {
                nodes: 8902,
                captures: 34,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn sparse_endgame_single_ply() {
        let board: Board = "
            ________
            __M_____
            ___M____
            km_____R
            _r___M_K
            ________
            ____m_m_
            ________
        "
        .parse()
        .unwrap();
        let game = GameEngine::from_board(board, Player::White, 6).unwrap();
        assert_eq!(perft(&game, 1).unwrap(), 14);
    }

    #[test]
    fn perft_does_not_touch_the_game() {
        let game = GameEngine::default();
        let before = game.clone();
        perft(&game, 2).unwrap();
        assert_eq!(game, before);
    }
}
