use thiserror::Error;

use paddock_model::{DriverId, ModelError, TeamId};

/// Roster operation error.
///
/// Every variant is reported before any mutation happens; a failed
/// operation never leaves partial state behind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Malformed input, rejected by the entity model.
    #[error(transparent)]
    Validation(#[from] ModelError),

    /// The driver is absent from the partition the operation requires.
    #[error("driver {id} not found in the {expected} roster")]
    DriverNotFound {
        id: DriverId,
        expected: &'static str,
    },

    /// The team is absent from the partition the operation requires.
    #[error("team {id} not found among {expected} teams")]
    TeamNotFound { id: TeamId, expected: &'static str },
}

pub type Result<T> = std::result::Result<T, RegistryError>;
