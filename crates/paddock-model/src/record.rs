use serde::{Deserialize, Serialize};

/// One season's title outcome. Immutable once appended to the registry's
/// history; `year` is 1-based and sequential.
///
/// Winner names are captured at crown time, so later renames do not
/// rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChampionshipRecord {
    pub year: u32,
    pub team: String,
    pub driver: String,
}
