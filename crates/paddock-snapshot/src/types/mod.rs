//! Serializable mirror types for the snapshot payload.
//!
//! These mirror the registry's runtime types but carry rkyv derives and
//! only plain data (raw ids, no cross-references), so the on-disk schema
//! is decoupled from the in-memory model.

mod driver;
mod league;
mod record;
mod team;

pub use driver::{DriverSnapshot, DriverStatusSnapshot};
pub use league::LeagueFile;
pub use record::RecordSnapshot;
pub use team::TeamSnapshot;

/// Current schema version.
///
/// Increment this when making breaking changes to the snapshot format.
/// The loader rejects blobs with version > CURRENT_SCHEMA_VERSION.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Magic bytes at the start of .pdk files.
///
/// Format: "PDK" + version byte (0x01 for v1)
pub const MAGIC_BYTES: [u8; 4] = [b'P', b'D', b'K', 0x01];
