//! Crate root module declarations for the chess core.
//!
//! This file exposes the rules engine (board model, per-piece movement rules,
//! legality filtering and game-state classification), the minimax search, the
//! game settings layer and the text helpers used by console/save collaborators.

pub mod game_state {
    pub mod board;
    pub mod chess_errors;
    pub mod chess_types;
    pub mod game_engine;
    pub mod move_log;
    pub mod scoped_move;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_rules;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod game_settings;
}

pub mod utils {
    pub mod board_text;
    pub mod perft;
    pub mod render_game_state;
}

pub use game_state::board::Board;
pub use game_state::chess_errors::{ChessErrors, GameError, GameResult};
pub use game_state::chess_types::{Move, Piece, PieceKind, Player, Position};
pub use game_state::game_engine::{GameEngine, GameStatus, DEFAULT_HISTORY_SIZE};
pub use game_state::move_log::BoundedMoveLog;
pub use search::minimax::{compute_best_move, Minimax, SearchReport};
pub use utils::board_text::{char_to_piece, piece_to_char};
pub use engines::game_settings::{Difficulty, GameMode, GameSettings};
pub use utils::perft::{perft, perft_counts, PerftCounts};
