//! Depth-limited minimax search.
//!
//! The search runs on a copy of the live game whose history is exactly as deep
//! as the search, playing and undoing moves in place through `ScopedMove`.
//! Each node receives the best score its parent has found so far and stops
//! early once its own best is strictly worse for the parent than that bound.
//! Equal scores are resolved by the smallest
//! (from column, from row, to column, to row), so results are reproducible.

use tracing::debug;

use crate::game_state::chess_errors::ChessErrors;
use crate::game_state::chess_types::Move;
use crate::game_state::game_engine::{GameEngine, GameStatus};
use crate::game_state::scoped_move::ScopedMove;
use crate::search::board_scoring::{
    checkmate_score, is_better_score, material_score, worst_score, Score, DRAW_SCORE,
};

/// Outcome of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub best_move: Move,
    /// Score of `best_move`, from White's perspective.
    pub score: Score,
    /// Positions visited, the root included.
    pub nodes: u64,
    /// Nodes abandoned early because the parent already had a better line.
    pub cutoffs: u64,
}

#[derive(Default)]
struct SearchStats {
    nodes: u64,
    cutoffs: u64,
}

/// Minimax searcher with a fixed ply limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    max_depth: u8,
}

impl Minimax {
    /// # Errors
    /// `ChessErrors::InvalidSearchDepth` when `max_depth` is zero.
    pub fn new(max_depth: u8) -> Result<Self, ChessErrors> {
        if max_depth == 0 {
            return Err(ChessErrors::InvalidSearchDepth(max_depth));
        }
        Ok(Minimax { max_depth })
    }

    #[inline]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Finds the best move for the player to move in `game`.
    ///
    /// `game` itself is never modified.
    ///
    /// # Errors
    /// `ChessErrors::NoLegalMoves` when the position is checkmate or a draw.
    pub fn search(&self, game: &GameEngine) -> Result<SearchReport, ChessErrors> {
        let mut work = game.copy_with_empty_history(usize::from(self.max_depth));
        let mut stats = SearchStats::default();

        let (score, best_move) = self.recurse(&mut work, 1, None, &mut stats)?;
        let best_move = best_move.ok_or(ChessErrors::NoLegalMoves)?;

        debug!(
            player = %game.current_player(),
            depth = self.max_depth,
            %best_move,
            score,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "search finished"
        );

        Ok(SearchReport {
            best_move,
            score,
            nodes: stats.nodes,
            cutoffs: stats.cutoffs,
        })
    }

    /// Scores the position in `game` at `depth` (the root is depth 1).
    ///
    /// # Arguments
    /// * `bound` - Best score the parent has so far, `None` at the root.
    ///
    /// # Returns
    /// The node's score and the move that produced it; the move is `None` for
    /// terminal and leaf positions.
    fn recurse(
        &self,
        game: &mut GameEngine,
        depth: u8,
        bound: Option<Score>,
        stats: &mut SearchStats,
    ) -> Result<(Score, Option<Move>), ChessErrors> {
        stats.nodes += 1;
        let player = game.current_player();

        match game.current_state() {
            GameStatus::Checkmate => return Ok((checkmate_score(player), None)),
            GameStatus::Draw => return Ok((DRAW_SCORE, None)),
            GameStatus::Ongoing | GameStatus::Check => {}
        }
        if depth > self.max_depth {
            return Ok((material_score(game.board()), None));
        }

        let mut best_score = worst_score(player);
        let mut best_move: Option<Move> = None;

        for candidate in game.legal_moves() {
            let score = {
                let mut scoped = ScopedMove::play(game, candidate.from, candidate.to)?;
                let (score, _) = self.recurse(&mut scoped, depth + 1, Some(best_score), stats)?;
                score
            };

            let improves = match best_move {
                None => true,
                Some(current) => {
                    is_better_score(score, best_score, player)
                        || (score == best_score && candidate.tie_break_key() < current.tie_break_key())
                }
            };
            if !improves {
                continue;
            }
            best_score = score;
            best_move = Some(candidate);

            if let Some(bound) = bound {
                if is_better_score(bound, best_score, player.opponent()) {
                    stats.cutoffs += 1;
                    break;
                }
            }
        }

        Ok((best_score, best_move))
    }
}

/// Best move for the player to move in `game`, searching `max_depth` plies.
///
/// # Errors
/// `ChessErrors::InvalidSearchDepth` for a zero depth and
/// `ChessErrors::NoLegalMoves` when the game is already over.
pub fn compute_best_move(game: &GameEngine, max_depth: u8) -> Result<Move, ChessErrors> {
    Minimax::new(max_depth)?.search(game).map(|report| report.best_move)
}
