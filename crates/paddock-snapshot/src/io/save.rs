//! League saving operations.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use paddock_registry::Registry;

use crate::convert::registry_to_league;
use crate::error::{Result, SnapshotError};
use crate::types::{CURRENT_SCHEMA_VERSION, LeagueFile, MAGIC_BYTES};

/// Serialize the full registry state into an opaque blob.
///
/// Format:
/// - 4 bytes: Magic ("PDK\x01")
/// - 4 bytes: Schema version (u32 little-endian)
/// - N bytes: rkyv payload
pub fn serialize_registry(registry: &Registry) -> Result<Vec<u8>> {
    serialize_league(&registry_to_league(registry))
}

/// Save a registry to a .pdk league file.
///
/// Uses atomic write (temp file + rename) to prevent data corruption
/// on crash or power loss.
pub fn save_league(registry: &Registry, path: &Path) -> Result<()> {
    let bytes = serialize_registry(registry)?;

    // Write to a temp file first, then rename for atomicity
    let temp_path = path.with_extension("pdk.tmp");

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SnapshotError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| SnapshotError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(&bytes).map_err(|e| SnapshotError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;

    file.sync_all().map_err(|e| SnapshotError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| SnapshotError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!("Saved league to {}", path.display());
    Ok(())
}

fn serialize_league(league: &LeagueFile) -> Result<Vec<u8>> {
    let rkyv_bytes = rkyv::to_bytes::<rkyv::rancor::Error>(league).map_err(|e| {
        SnapshotError::Serialization {
            source: Box::new(std::io::Error::other(format!(
                "rkyv serialization failed: {e}"
            ))),
        }
    })?;

    let mut output = Vec::with_capacity(8 + rkyv_bytes.len());
    output.extend_from_slice(&MAGIC_BYTES);
    output.extend_from_slice(&CURRENT_SCHEMA_VERSION.to_le_bytes());
    output.extend_from_slice(&rkyv_bytes);

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn serialized_blob_carries_magic_and_version() {
        let registry = Registry::new();
        let bytes = serialize_registry(&registry).unwrap();

        assert_eq!(bytes[0..4], MAGIC_BYTES);
        let version = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
        assert_eq!(version, CURRENT_SCHEMA_VERSION);
        assert!(bytes.len() > 8);
    }

    #[test]
    fn save_league_writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.pdk");

        let mut registry = Registry::new();
        registry.add_team("Apex", "UK").unwrap();
        save_league(&registry, &path).unwrap();

        assert!(path.exists());
        // No temp file is left behind.
        assert!(!path.with_extension("pdk.tmp").exists());
    }
}
