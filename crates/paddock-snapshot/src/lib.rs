//! Snapshot codec for whole-league persistence.
//!
//! The entire registry (all driver and team partitions, the championship
//! history, and the id allocators) round-trips through a single opaque
//! blob; loading always replaces the in-memory registry wholesale, never
//! merges.
//!
//! # File format
//!
//! `.pdk` league files use a simple binary format:
//!
//! ```text
//! +------------------+
//! | Magic: "PDK\x01" | 4 bytes - file identification
//! +------------------+
//! | Version: 1       | 4 bytes - u32 little-endian schema version
//! +------------------+
//! | rkyv payload     | Variable
//! +------------------+
//! ```
//!
//! The schema version lets a future loader detect and reject (or migrate)
//! older blobs instead of misreading them.

pub mod convert;
pub mod error;
pub mod io;
pub mod types;

pub use error::{Result, SnapshotError};
pub use io::{deserialize_registry, load_league, save_league, serialize_registry};
pub use types::{CURRENT_SCHEMA_VERSION, LeagueFile, MAGIC_BYTES};
