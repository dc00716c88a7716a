//! Core entity types for the paddock league model.
//!
//! This crate holds the pure data layer: identifiers, driver and team
//! records, the derived rating block, and the championship history entry.
//! All input validation lives here; collection ownership and state
//! transitions live in `paddock-registry`.

pub mod driver;
pub mod error;
pub mod ids;
pub mod record;
pub mod stats;
pub mod team;

pub use driver::{Driver, DriverDraft, DriverStatus};
pub use error::{ModelError, Result};
pub use ids::{DriverId, TeamId};
pub use record::ChampionshipRecord;
pub use stats::{RATING_MAX, RATING_MIN, StatBlock, mean_overall};
pub use team::Team;
