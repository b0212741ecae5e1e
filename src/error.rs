use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    #[error("Missing icon for variant: {0}")]
    MissingIcon(String),

    #[error("Unknown loss reason: {0}")]
    UnknownLossReason(String),

    #[error("Unknown game status code: {0}")]
    UnknownGameStatus(i8),

    #[error("Unknown tournament status code: {0}")]
    UnknownTournamentStatus(u8),

    #[error("Unknown video target: {0}")]
    UnknownVideoTarget(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Registry integrity check failed: {}", .0.join("; "))]
    Integrity(Vec<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
