use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::ids::{DriverId, TeamId};
use crate::stats::StatBlock;

/// Youngest age a driver may be registered with.
pub const AGE_MIN: u8 = 18;
/// Oldest age a driver may be registered with.
pub const AGE_MAX: u8 = 100;

/// Career status. A driver occupies exactly one registry partition,
/// matching this status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriverStatus {
    Active,
    Retired,
    HallOfFame,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Active => "Active",
            DriverStatus::Retired => "Retired",
            DriverStatus::HallOfFame => "Hall of Fame",
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated input for driver creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriverDraft {
    pub name: String,
    pub nationality: String,
    pub age: u8,
    pub racecraft: u8,
    pub overtaking: u8,
    pub iq: u8,
    pub focus: u8,
    pub potential: u8,
}

impl DriverDraft {
    /// Validate the draft and build its rating block.
    pub fn validate(&self) -> Result<StatBlock> {
        if self.name.trim().is_empty() {
            return Err(ModelError::BlankField { field: "name" });
        }
        if self.nationality.trim().is_empty() {
            return Err(ModelError::BlankField {
                field: "nationality",
            });
        }
        if !(AGE_MIN..=AGE_MAX).contains(&self.age) {
            return Err(ModelError::AgeOutOfRange { age: self.age });
        }
        StatBlock::new(
            self.racecraft,
            self.overtaking,
            self.iq,
            self.focus,
            self.potential,
        )
    }
}

/// A league driver.
///
/// `team` is `Some` only while the driver is attached to a team; a driver
/// restored to the active roster after its team went under is
/// active-but-unassigned (`team == None`) until transferred.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    pub id: DriverId,
    pub name: String,
    pub nationality: String,
    pub age: u8,
    pub stats: StatBlock,
    pub team: Option<TeamId>,
    pub status: DriverStatus,
    /// Set when the driver left the active roster; `None` while active.
    pub retirement_reason: Option<String>,
    /// World drivers' championships won.
    pub wdcs: u32,
    /// Constructors' titles won by a team while this driver drove for it.
    pub constructor_championships: u32,
}

impl Driver {
    /// Create a driver from a validated draft.
    pub fn from_draft(id: DriverId, draft: &DriverDraft, team: Option<TeamId>) -> Result<Self> {
        let stats = draft.validate()?;
        Ok(Self {
            id,
            name: draft.name.trim().to_string(),
            nationality: draft.nationality.trim().to_string(),
            age: draft.age,
            stats,
            team,
            status: DriverStatus::Active,
            retirement_reason: None,
            wdcs: 0,
            constructor_championships: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> DriverDraft {
        DriverDraft {
            name: "A. Smith".to_string(),
            nationality: "UK".to_string(),
            age: 25,
            racecraft: 80,
            overtaking: 80,
            iq: 80,
            focus: 80,
            potential: 80,
        }
    }

    #[test]
    fn draft_validation_catches_bad_input() {
        let mut blank = draft();
        blank.name = "  ".to_string();
        assert_eq!(
            blank.validate().unwrap_err(),
            ModelError::BlankField { field: "name" }
        );

        let mut young = draft();
        young.age = 17;
        assert_eq!(
            young.validate().unwrap_err(),
            ModelError::AgeOutOfRange { age: 17 }
        );

        let mut bad_rating = draft();
        bad_rating.focus = 0;
        assert!(matches!(
            bad_rating.validate().unwrap_err(),
            ModelError::RatingOutOfRange {
                rating: "focus",
                ..
            }
        ));
    }

    #[test]
    fn new_driver_starts_active_with_zero_titles() {
        let driver =
            Driver::from_draft(DriverId::new(7), &draft(), Some(TeamId::new(1))).expect("valid");
        assert_eq!(driver.status, DriverStatus::Active);
        assert_eq!(driver.wdcs, 0);
        assert_eq!(driver.constructor_championships, 0);
        assert_eq!(driver.retirement_reason, None);
        assert_eq!(driver.stats.overall(), 80.0);
    }
}
