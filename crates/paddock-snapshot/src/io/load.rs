//! League loading operations.

use std::fs;
use std::path::Path;

use paddock_registry::Registry;

use crate::convert::league_to_registry;
use crate::error::{Result, SnapshotError};
use crate::types::{CURRENT_SCHEMA_VERSION, LeagueFile, MAGIC_BYTES};

/// Load a registry from a .pdk league file, replacing any in-memory state
/// wholesale.
pub fn load_league(path: &Path) -> Result<Registry> {
    let bytes = fs::read(path).map_err(|e| SnapshotError::Io {
        operation: "read",
        path: path.to_path_buf(),
        source: e,
    })?;

    let registry = deserialize_registry(&bytes)?;
    tracing::info!("Loaded league from {}", path.display());
    Ok(registry)
}

/// Decode an opaque league blob back into a registry.
pub fn deserialize_registry(bytes: &[u8]) -> Result<Registry> {
    // Minimum size: magic (4) + version (4) + some payload
    if bytes.len() < 12 {
        return Err(SnapshotError::InvalidFormat {
            reason: "blob too small".to_string(),
        });
    }

    if bytes[0..4] != MAGIC_BYTES {
        return Err(SnapshotError::InvalidFormat {
            reason: "not a league snapshot (invalid magic bytes)".to_string(),
        });
    }

    let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    if version > CURRENT_SCHEMA_VERSION {
        return Err(SnapshotError::UnsupportedVersion {
            found: version,
            max_supported: CURRENT_SCHEMA_VERSION,
        });
    }

    let payload = &bytes[8..];
    let league: LeagueFile = rkyv::from_bytes::<LeagueFile, rkyv::rancor::Error>(payload)
        .map_err(|e| SnapshotError::Deserialization {
            source: Box::new(std::io::Error::other(format!(
                "rkyv deserialization failed: {e}"
            ))),
        })?;

    league_to_registry(league)
}
