use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle and outcome code of a single game.
///
/// The integer codes are written to storage with every game, so they are
/// append-only: never renumber or remove an existing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
#[repr(i8)]
pub enum GameStatus {
    Created = -2,
    Started = -1,
    Aborted = 0,
    Mate = 1,
    Resign = 2,
    Stalemate = 3,
    Timeout = 4,
    Draw = 5,
    Flag = 6,
    Abandone = 7,
    Cheat = 8,
    NoStart = 9,
    InvalidMove = 10,
    UnknownFinish = 11,
    VariantEnd = 12,
    Claim = 13,
}

const ALL_GAME_STATUSES: &[GameStatus] = &[
    GameStatus::Created,
    GameStatus::Started,
    GameStatus::Aborted,
    GameStatus::Mate,
    GameStatus::Resign,
    GameStatus::Stalemate,
    GameStatus::Timeout,
    GameStatus::Draw,
    GameStatus::Flag,
    GameStatus::Abandone,
    GameStatus::Cheat,
    GameStatus::NoStart,
    GameStatus::InvalidMove,
    GameStatus::UnknownFinish,
    GameStatus::VariantEnd,
    GameStatus::Claim,
];

impl GameStatus {
    pub fn code(&self) -> i8 {
        *self as i8
    }

    pub fn from_code(code: i8) -> Option<Self> {
        ALL_GAME_STATUSES.iter().copied().find(|s| s.code() == code)
    }

    /// All statuses in code order.
    pub fn all() -> &'static [GameStatus] {
        ALL_GAME_STATUSES
    }

    /// Stable snake_case token for logs and exports
    pub fn name(&self) -> &'static str {
        match self {
            GameStatus::Created => "created",
            GameStatus::Started => "started",
            GameStatus::Aborted => "aborted",
            GameStatus::Mate => "mate",
            GameStatus::Resign => "resign",
            GameStatus::Stalemate => "stalemate",
            GameStatus::Timeout => "timeout",
            GameStatus::Draw => "draw",
            GameStatus::Flag => "flag",
            GameStatus::Abandone => "abandone",
            GameStatus::Cheat => "cheat",
            GameStatus::NoStart => "nostart",
            GameStatus::InvalidMove => "invalidmove",
            GameStatus::UnknownFinish => "unknownfinish",
            GameStatus::VariantEnd => "variantend",
            GameStatus::Claim => "claim",
        }
    }

    /// True once the game can no longer continue. Negative codes are games
    /// still waiting to start or being played right now.
    pub fn is_over(&self) -> bool {
        self.code() >= 0
    }
}

impl TryFrom<i8> for GameStatus {
    type Error = RegistryError;

    fn try_from(code: i8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(RegistryError::UnknownGameStatus(code))
    }
}

impl From<GameStatus> for i8 {
    fn from(status: GameStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Tournament lifecycle. Moves forward only: created, started, then one of
/// aborted or finished, and finally archived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum TournamentStatus {
    Created = 0,
    Started = 1,
    Aborted = 2,
    Finished = 3,
    Archived = 4,
}

const ALL_TOURNAMENT_STATUSES: &[TournamentStatus] = &[
    TournamentStatus::Created,
    TournamentStatus::Started,
    TournamentStatus::Aborted,
    TournamentStatus::Finished,
    TournamentStatus::Archived,
];

impl TournamentStatus {
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        ALL_TOURNAMENT_STATUSES
            .iter()
            .copied()
            .find(|s| s.code() == code)
    }

    pub fn all() -> &'static [TournamentStatus] {
        ALL_TOURNAMENT_STATUSES
    }

    pub fn name(&self) -> &'static str {
        match self {
            TournamentStatus::Created => "created",
            TournamentStatus::Started => "started",
            TournamentStatus::Aborted => "aborted",
            TournamentStatus::Finished => "finished",
            TournamentStatus::Archived => "archived",
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(
            self,
            TournamentStatus::Aborted | TournamentStatus::Finished | TournamentStatus::Archived
        )
    }
}

impl TryFrom<u8> for TournamentStatus {
    type Error = RegistryError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(RegistryError::UnknownTournamentStatus(code))
    }
}

impl From<TournamentStatus> for u8 {
    fn from(status: TournamentStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
