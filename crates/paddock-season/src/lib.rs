//! Championship season simulation.
//!
//! One invocation crowns one drivers' champion and one constructors'
//! champion, both drawn uniformly at random. The two draws are
//! independent: the champion driver's team is not necessarily the champion
//! constructor. That mirrors the original league rules and is kept as-is.
//!
//! Randomness comes from any [`rand::Rng`]; [`seeded_rng`] builds a
//! deterministic PCG generator for reproducible runs.

pub mod error;
pub mod simulate;

pub use error::{Result, SeasonError};
pub use simulate::{seeded_rng, simulate_season, simulate_seasons};
