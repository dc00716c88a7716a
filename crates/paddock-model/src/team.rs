use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::ids::{DriverId, TeamId};

/// A constructor entered in the league.
///
/// `drivers` is maintained by the registry and always mirrors the set of
/// Active drivers whose `team` pointer names this team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub nationality: String,
    pub drivers: BTreeSet<DriverId>,
    /// A bankrupt team is excluded from driver assignment and from
    /// championship draws, but stays in the former-team partition.
    pub bankrupt: bool,
    /// Constructors' championships won.
    pub championships: u32,
}

impl Team {
    pub fn new(id: TeamId, name: &str, nationality: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(ModelError::BlankField { field: "name" });
        }
        Ok(Self {
            id,
            name: name.trim().to_string(),
            nationality: nationality.trim().to_string(),
            drivers: BTreeSet::new(),
            bankrupt: false,
            championships: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_team_is_solvent_and_empty() {
        let team = Team::new(TeamId::new(1), "Apex", "UK").expect("valid team");
        assert!(!team.bankrupt);
        assert!(team.drivers.is_empty());
        assert_eq!(team.championships, 0);
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(
            Team::new(TeamId::new(1), "   ", "UK").unwrap_err(),
            ModelError::BlankField { field: "name" }
        );
    }
}
