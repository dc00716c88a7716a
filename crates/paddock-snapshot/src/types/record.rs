use rkyv::{Archive, Deserialize, Serialize};

/// One championship history entry.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[rkyv(compare(PartialEq))]
pub struct RecordSnapshot {
    pub year: u32,
    pub team: String,
    pub driver: String,
}
