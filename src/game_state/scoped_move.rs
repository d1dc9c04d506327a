//! Scoped move execution.
//!
//! `ScopedMove` plays a move on construction and undoes it when dropped, so a
//! recursive walker restores the position on every exit path, early returns
//! included.

use std::ops::{Deref, DerefMut};

use tracing::error;

use crate::game_state::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Move, Position};
use crate::game_state::game_engine::GameEngine;

/// A move that is taken back when this guard goes out of scope.
///
/// The guard dereferences to the game so the caller can keep exploring from
/// the new position. A full history still works: the oldest entry is evicted
/// and the undo pops the newest. A history of capacity zero cannot take the
/// move back, so `play` refuses it.
pub struct ScopedMove<'a> {
    game: &'a mut GameEngine,
    played: Move,
}

impl<'a> ScopedMove<'a> {
    /// Executes `from -> to` on `game`.
    ///
    /// # Errors
    /// * `ChessErrors::InvalidHistorySize` when the game keeps no history.
    /// * Whatever `GameEngine::set_move` reports, wrapped in `ChessErrors::Game`.
    ///
    /// Nothing is played on error.
    pub fn play(game: &'a mut GameEngine, from: Position, to: Position) -> Result<Self, ChessErrors> {
        let capacity = game.history().capacity();
        if capacity == 0 {
            return Err(ChessErrors::InvalidHistorySize(capacity));
        }
        let played = game.set_move(from, to)?;
        Ok(ScopedMove { game, played })
    }

    #[inline]
    pub fn played(&self) -> Move {
        self.played
    }
}

impl Deref for ScopedMove<'_> {
    type Target = GameEngine;

    fn deref(&self) -> &GameEngine {
        &*self.game
    }
}

impl DerefMut for ScopedMove<'_> {
    fn deref_mut(&mut self) -> &mut GameEngine {
        &mut *self.game
    }
}

impl Drop for ScopedMove<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.game.undo_move() {
            error!(played = %self.played, %err, "scoped move could not be undone");
        }
    }
}
