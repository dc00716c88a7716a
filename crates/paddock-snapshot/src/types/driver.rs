use rkyv::{Archive, Deserialize, Serialize};

/// Career status for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Archive, Serialize, Deserialize)]
#[rkyv(compare(PartialEq))]
pub enum DriverStatusSnapshot {
    #[default]
    Active,
    Retired,
    HallOfFame,
}

/// One driver, flattened for storage. Ratings are stored raw; the
/// composite rating is recomputed on load rather than trusted from disk.
#[derive(Debug, Clone, PartialEq, Archive, Serialize, Deserialize)]
#[rkyv(compare(PartialEq))]
pub struct DriverSnapshot {
    pub id: u64,
    pub name: String,
    pub nationality: String,
    pub age: u8,
    pub racecraft: u8,
    pub overtaking: u8,
    pub iq: u8,
    pub focus: u8,
    pub potential: u8,
    pub team: Option<u64>,
    pub status: DriverStatusSnapshot,
    pub retirement_reason: Option<String>,
    pub wdcs: u32,
    pub constructor_championships: u32,
}
