use thiserror::Error;

use paddock_registry::RegistryError;

/// Season simulation error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeasonError {
    /// No eligible participants; nothing is drawn and nothing is recorded.
    #[error("cannot simulate a season: no {pool} available")]
    EmptyPool { pool: &'static str },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type Result<T> = std::result::Result<T, SeasonError>;
