//! Root snapshot type.

use std::collections::BTreeMap;

use chrono::Utc;
use rkyv::{Archive, Deserialize, Serialize};

use super::{DriverSnapshot, RecordSnapshot, TeamSnapshot};

/// Root league snapshot: everything needed to rebuild a registry.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[rkyv(compare(PartialEq))]
pub struct LeagueFile {
    /// Schema version (for future migrations).
    pub schema_version: u32,

    /// When the snapshot was written, RFC 3339.
    pub saved_at: String,

    /// Driver partitions, keyed by raw driver id.
    pub active_drivers: BTreeMap<u64, DriverSnapshot>,
    pub retired_drivers: BTreeMap<u64, DriverSnapshot>,
    pub hall_of_fame: BTreeMap<u64, DriverSnapshot>,

    /// Team partitions, keyed by raw team id.
    pub active_teams: BTreeMap<u64, TeamSnapshot>,
    pub former_teams: BTreeMap<u64, TeamSnapshot>,

    /// Season-by-season title history, oldest first.
    pub history: Vec<RecordSnapshot>,

    /// Id allocators, so a restored registry keeps issuing unique ids.
    pub next_driver_id: u64,
    pub next_team_id: u64,
}

impl LeagueFile {
    /// Create an empty snapshot shell stamped with the current time.
    pub fn empty() -> Self {
        Self {
            schema_version: super::CURRENT_SCHEMA_VERSION,
            saved_at: Utc::now().to_rfc3339(),
            active_drivers: BTreeMap::new(),
            retired_drivers: BTreeMap::new(),
            hall_of_fame: BTreeMap::new(),
            active_teams: BTreeMap::new(),
            former_teams: BTreeMap::new(),
            history: Vec::new(),
            next_driver_id: 1,
            next_team_id: 1,
        }
    }

    /// Update the saved-at timestamp.
    pub fn touch(&mut self) {
        self.saved_at = Utc::now().to_rfc3339();
    }
}
