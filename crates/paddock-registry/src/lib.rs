//! Roster registry: the owning container for every driver and team in the
//! league, plus the championship history.
//!
//! The registry partitions drivers into active / retired / hall-of-fame
//! collections and teams into active / former collections, and it is the
//! only place those collections are mutated. Every operation validates its
//! input before touching any state, so a failed call leaves the registry
//! exactly as it was.

pub mod error;
pub mod registry;

pub use error::{RegistryError, Result};
pub use registry::{DriverEdit, Registry, RegistryParts};
