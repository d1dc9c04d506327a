//! Errors used throughout the chess core.
//!
//! Two error types live here:
//! - `GameError` carries the recoverable rule/state outcomes of a move or undo
//!   request (bad coordinates, wrong owner, illegal geometry, king safety,
//!   exhausted history). The caller simply does not apply the move and may retry.
//! - `ChessErrors` covers structural failures: malformed board text, broken
//!   king bookkeeping, invalid configuration and search without any legal move.
//!
//! `GameError` converts into `ChessErrors`, so code that drives the engine
//! (search, perft, settings) can propagate both with `?`.

use thiserror::Error;

use crate::game_state::chess_types::Player;

/// Outcome of a rejected move, validation or undo request.
///
/// The display strings match the messages shown to console users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// One of the given positions lies outside the 8x8 board.
    #[error("Invalid position on the board")]
    InvalidPosition,

    /// The source square does not hold a piece of the player to move.
    #[error("The specified position does not contain your piece")]
    NoPieceFound,

    /// The piece cannot reach the destination under its movement rules.
    #[error("Illegal move")]
    InvalidMove,

    /// The move would expose the mover's own king to an attack.
    #[error("Illegal move: king will be threatened")]
    MoveThreatensOwnKing,

    /// The mover's king was in check and the move leaves it in check.
    #[error("Illegal move: king is still threatened")]
    UnresolvedCheck,

    /// No move is left in the bounded history.
    #[error("Empty history, no move to undo")]
    EmptyHistory,
}

/// Result type alias for game operations; `Ok` is a successful request.
pub type GameResult<T = ()> = Result<T, GameError>;

/// Structural error type for the chess core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// A rule/state error surfaced while driving a game.
    #[error(transparent)]
    Game(#[from] GameError),

    /// `push_last` was called on a move log that reached its capacity.
    #[error("move log is full (capacity {0})")]
    MoveLogFull(usize),

    /// A game needs room for at least one move in its history.
    #[error("history size must be positive, got {0}")]
    InvalidHistorySize(usize),

    /// The search needs at least one ply.
    #[error("search depth must be positive, got {0}")]
    InvalidSearchDepth(u8),

    /// A character that does not name any piece.
    #[error("invalid piece symbol '{0}'")]
    InvalidPieceSymbol(char),

    /// A board grid that is not 8 lines of 8 symbols.
    #[error("invalid board text: {0}")]
    InvalidBoardText(String),

    /// The board has no king for the given player.
    #[error("board does not contain a {0} king")]
    MissingKing(Player),

    /// The board has more than one king for the given player.
    #[error("board contains more than one {0} king")]
    DuplicateKing(Player),

    /// The player to move has no legal move, so nothing can be chosen.
    #[error("no legal moves available")]
    NoLegalMoves,

    /// A settings value that could not be parsed.
    #[error("invalid value '{value}' for setting {setting}")]
    InvalidSetting {
        /// Name of the setting (or environment variable).
        setting: &'static str,
        /// The rejected raw value.
        value: String,
    },
}
