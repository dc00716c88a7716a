use rkyv::{Archive, Deserialize, Serialize};

/// One team, flattened for storage. The roster is a sorted list of raw
/// driver ids.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[rkyv(compare(PartialEq))]
pub struct TeamSnapshot {
    pub id: u64,
    pub name: String,
    pub nationality: String,
    pub drivers: Vec<u64>,
    pub bankrupt: bool,
    pub championships: u32,
}
