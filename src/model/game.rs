use super::status::GameStatus;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a game counts toward ratings, or came in from an external PGN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    #[default]
    Casual,
    Rated,
    Imported,
}

impl GameType {
    pub fn code(&self) -> u8 {
        match self {
            GameType::Casual => 0,
            GameType::Rated => 1,
            GameType::Imported => 2,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.code() == code)
    }

    pub fn all() -> [GameType; 3] {
        [GameType::Casual, GameType::Rated, GameType::Imported]
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameType::Casual => write!(f, "casual"),
            GameType::Rated => write!(f, "rated"),
            GameType::Imported => write!(f, "imported"),
        }
    }
}

/// Kind of job handed to the background analysis workers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FishnetWorkType {
    Move,
    Analysis,
}

impl FishnetWorkType {
    pub fn code(&self) -> u8 {
        match self {
            FishnetWorkType::Move => 0,
            FishnetWorkType::Analysis => 1,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::all().iter().copied().find(|w| w.code() == code)
    }

    pub fn all() -> [FishnetWorkType; 2] {
        [FishnetWorkType::Move, FishnetWorkType::Analysis]
    }
}

/// Loss causes reported by token instead of by raw status code.
pub(crate) const LOSERS: &[(&str, GameStatus)] = &[
    ("abandone", GameStatus::Abandone),
    ("abort", GameStatus::Aborted),
    ("resign", GameStatus::Resign),
    ("flag", GameStatus::Flag),
];
