//! Game settings: mode, computer difficulty, user colour and undo depth.
//!
//! Defaults are a one-player game at difficulty 2 with the user playing White
//! and a six-move undo window. Any of them can be overridden from the
//! environment:
//!
//! | variable             | values                                      |
//! |----------------------|---------------------------------------------|
//! | `CHESS_GAME_MODE`    | `1` (vs computer) or `2` (two players)      |
//! | `CHESS_DIFFICULTY`   | `1`..`5` or `amateur` .. `expert`           |
//! | `CHESS_USER_COLOR`   | `white`/`1` or `black`/`0`                  |
//! | `CHESS_HISTORY_SIZE` | positive integer                            |

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::game_state::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Move, Player};
use crate::game_state::game_engine::{GameEngine, DEFAULT_HISTORY_SIZE};
use crate::search::minimax::compute_best_move;

pub const ENV_GAME_MODE: &str = "CHESS_GAME_MODE";
pub const ENV_DIFFICULTY: &str = "CHESS_DIFFICULTY";
pub const ENV_USER_COLOR: &str = "CHESS_USER_COLOR";
pub const ENV_HISTORY_SIZE: &str = "CHESS_HISTORY_SIZE";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// The user plays against the computer.
    #[default]
    OnePlayer,
    /// Two users share the board.
    TwoPlayer,
}

impl FromStr for GameMode {
    type Err = ChessErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(GameMode::OnePlayer),
            "2" => Ok(GameMode::TwoPlayer),
            _ => Err(ChessErrors::InvalidSetting {
                setting: "game mode",
                value: s.to_string(),
            }),
        }
    }
}

/// Computer strength; the level is the search depth in plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Difficulty {
    Amateur,
    #[default]
    Easy,
    Moderate,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Amateur,
        Difficulty::Easy,
        Difficulty::Moderate,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Level 1..=5.
    pub const fn level(self) -> u8 {
        match self {
            Difficulty::Amateur => 1,
            Difficulty::Easy => 2,
            Difficulty::Moderate => 3,
            Difficulty::Hard => 4,
            Difficulty::Expert => 5,
        }
    }

    #[inline]
    pub const fn max_depth(self) -> u8 {
        self.level()
    }

    pub fn from_level(level: u8) -> Option<Self> {
        Difficulty::ALL.into_iter().find(|difficulty| difficulty.level() == level)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Difficulty::Amateur => "amateur",
            Difficulty::Easy => "easy",
            Difficulty::Moderate => "moderate",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = ChessErrors;

    /// Accepts a level (`1`..`5`) or a name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let by_level = wanted.parse::<u8>().ok().and_then(Difficulty::from_level);
        by_level
            .or_else(|| Difficulty::ALL.into_iter().find(|difficulty| difficulty.name() == wanted))
            .ok_or_else(|| ChessErrors::InvalidSetting {
                setting: "difficulty",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub game_mode: GameMode,
    pub difficulty: Difficulty,
    pub user_color: Player,
    pub history_size: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            game_mode: GameMode::OnePlayer,
            difficulty: Difficulty::Easy,
            user_color: Player::White,
            history_size: DEFAULT_HISTORY_SIZE,
        }
    }
}

impl GameSettings {
    /// Defaults overridden by the `CHESS_*` environment variables.
    ///
    /// # Errors
    /// `ChessErrors::InvalidSetting` for a value that does not parse, and
    /// `ChessErrors::InvalidHistorySize` for a zero history size.
    pub fn from_env() -> Result<Self, ChessErrors> {
        GameSettings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ChessErrors>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = GameSettings::default();

        if let Some(value) = lookup(ENV_GAME_MODE) {
            settings.game_mode = value.parse()?;
        }
        if let Some(value) = lookup(ENV_DIFFICULTY) {
            settings.difficulty = value.parse()?;
        }
        if let Some(value) = lookup(ENV_USER_COLOR) {
            settings.user_color = value.parse()?;
        }
        if let Some(value) = lookup(ENV_HISTORY_SIZE) {
            let size = value.trim().parse::<usize>().map_err(|_| ChessErrors::InvalidSetting {
                setting: "history size",
                value: value.clone(),
            })?;
            if size == 0 {
                return Err(ChessErrors::InvalidHistorySize(size));
            }
            settings.history_size = size;
        }

        debug!(?settings, "game settings loaded");
        Ok(settings)
    }

    /// A fresh game with this history size.
    pub fn new_game(&self) -> Result<GameEngine, ChessErrors> {
        GameEngine::new(self.history_size)
    }

    /// Colour played by the computer in a one-player game.
    #[inline]
    pub fn computer_color(&self) -> Player {
        self.user_color.opponent()
    }

    pub fn is_computer_turn(&self, game: &GameEngine) -> bool {
        self.game_mode == GameMode::OnePlayer && game.current_player() == self.computer_color()
    }

    /// Move the computer would play in `game` at the configured difficulty.
    ///
    /// The move is not executed; pass it to `GameEngine::set_move`.
    pub fn computer_move(&self, game: &GameEngine) -> Result<Move, ChessErrors> {
        compute_best_move(game, self.difficulty.max_depth())
    }
}
