use std::collections::BTreeMap;

use tracing::info;

use paddock_model::{
    ChampionshipRecord, Driver, DriverDraft, DriverId, DriverStatus, Team, TeamId,
};

use crate::error::{RegistryError, Result};

/// Partial update for an active driver.
///
/// Team and status are deliberately absent: team moves go through
/// [`Registry::transfer_driver`], status moves through the
/// retire/restore/induct operations.
#[derive(Debug, Clone, Default)]
pub struct DriverEdit {
    pub name: Option<String>,
    pub nationality: Option<String>,
    pub age: Option<u8>,
    pub racecraft: Option<u8>,
    pub overtaking: Option<u8>,
    pub iq: Option<u8>,
    pub focus: Option<u8>,
    pub potential: Option<u8>,
}

/// The full league state, owned by one session.
///
/// Drivers live in exactly one of three partitions (active, retired,
/// hall of fame) and teams in one of two (active, former); the partition a
/// record sits in always agrees with its own status fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    active_drivers: BTreeMap<DriverId, Driver>,
    retired_drivers: BTreeMap<DriverId, Driver>,
    hall_of_fame: BTreeMap<DriverId, Driver>,
    active_teams: BTreeMap<TeamId, Team>,
    former_teams: BTreeMap<TeamId, Team>,
    history: Vec<ChampionshipRecord>,
    next_driver_id: u64,
    next_team_id: u64,
}

/// Wholesale registry state, used by the snapshot codec to rebuild a
/// registry without replaying operations.
#[derive(Debug, Clone, Default)]
pub struct RegistryParts {
    pub active_drivers: BTreeMap<DriverId, Driver>,
    pub retired_drivers: BTreeMap<DriverId, Driver>,
    pub hall_of_fame: BTreeMap<DriverId, Driver>,
    pub active_teams: BTreeMap<TeamId, Team>,
    pub former_teams: BTreeMap<TeamId, Team>,
    pub history: Vec<ChampionshipRecord>,
    pub next_driver_id: u64,
    pub next_team_id: u64,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            next_driver_id: 1,
            next_team_id: 1,
            ..Self::default()
        }
    }

    // ---- teams ----------------------------------------------------------

    /// Register a new team on the active grid.
    pub fn add_team(&mut self, name: &str, nationality: &str) -> Result<TeamId> {
        let id = TeamId::new(self.next_team_id);
        let team = Team::new(id, name, nationality)?;
        self.next_team_id += 1;
        info!(team = %team.name, %id, "team added");
        self.active_teams.insert(id, team);
        Ok(id)
    }

    /// Mark a team bankrupt and move it to the former-team partition.
    ///
    /// Its drivers stay active but become unassigned; they must be
    /// transferred to a solvent team before they can race for one again.
    pub fn retire_team(&mut self, id: TeamId) -> Result<()> {
        let mut team =
            self.active_teams
                .remove(&id)
                .ok_or(RegistryError::TeamNotFound {
                    id,
                    expected: "active",
                })?;
        for driver_id in std::mem::take(&mut team.drivers) {
            if let Some(driver) = self.active_drivers.get_mut(&driver_id) {
                driver.team = None;
            }
        }
        team.bankrupt = true;
        info!(team = %team.name, %id, "team retired");
        self.former_teams.insert(id, team);
        Ok(())
    }

    /// Bring a former team back onto the active grid with an empty roster.
    pub fn restore_team(&mut self, id: TeamId) -> Result<()> {
        let mut team =
            self.former_teams
                .remove(&id)
                .ok_or(RegistryError::TeamNotFound {
                    id,
                    expected: "former",
                })?;
        team.bankrupt = false;
        info!(team = %team.name, %id, "team restored");
        self.active_teams.insert(id, team);
        Ok(())
    }

    // ---- drivers --------------------------------------------------------

    /// Validate a draft and add the driver to the active roster, attached
    /// to the given team.
    pub fn add_driver(&mut self, draft: &DriverDraft, team_id: TeamId) -> Result<DriverId> {
        if !self.active_teams.contains_key(&team_id) {
            return Err(RegistryError::TeamNotFound {
                id: team_id,
                expected: "active",
            });
        }
        let id = DriverId::new(self.next_driver_id);
        let driver = Driver::from_draft(id, draft, Some(team_id))?;
        self.next_driver_id += 1;
        if let Some(team) = self.active_teams.get_mut(&team_id) {
            team.drivers.insert(id);
        }
        info!(driver = %driver.name, %id, team = %team_id, "driver added");
        self.active_drivers.insert(id, driver);
        Ok(id)
    }

    /// Apply a partial update to an active driver. Any rating change
    /// rebuilds the stat block, so the composite rating is recomputed in
    /// the same step.
    pub fn edit_driver(&mut self, id: DriverId, edit: &DriverEdit) -> Result<()> {
        let current = self
            .active_drivers
            .get(&id)
            .ok_or(RegistryError::DriverNotFound {
                id,
                expected: "active",
            })?;
        let draft = DriverDraft {
            name: edit.name.clone().unwrap_or_else(|| current.name.clone()),
            nationality: edit
                .nationality
                .clone()
                .unwrap_or_else(|| current.nationality.clone()),
            age: edit.age.unwrap_or(current.age),
            racecraft: edit.racecraft.unwrap_or(current.stats.racecraft()),
            overtaking: edit.overtaking.unwrap_or(current.stats.overtaking()),
            iq: edit.iq.unwrap_or(current.stats.iq()),
            focus: edit.focus.unwrap_or(current.stats.focus()),
            potential: edit.potential.unwrap_or(current.stats.potential()),
        };
        let stats = draft.validate()?;
        if let Some(driver) = self.active_drivers.get_mut(&id) {
            driver.name = draft.name.trim().to_string();
            driver.nationality = draft.nationality.trim().to_string();
            driver.age = draft.age;
            driver.stats = stats;
            info!(driver = %driver.name, %id, "driver edited");
        }
        Ok(())
    }

    /// Move an active driver to a new active team. Detach, attach, and the
    /// pointer update happen in one step; transferring a driver to its own
    /// team is a no-op that leaves exactly one attachment.
    pub fn transfer_driver(&mut self, id: DriverId, new_team_id: TeamId) -> Result<()> {
        if !self.active_teams.contains_key(&new_team_id) {
            return Err(RegistryError::TeamNotFound {
                id: new_team_id,
                expected: "active",
            });
        }
        let driver = self
            .active_drivers
            .get_mut(&id)
            .ok_or(RegistryError::DriverNotFound {
                id,
                expected: "active",
            })?;
        let old_team = driver.team;
        driver.team = Some(new_team_id);
        let name = driver.name.clone();
        if let Some(old_id) = old_team {
            if old_id != new_team_id {
                if let Some(old) = self.active_teams.get_mut(&old_id) {
                    old.drivers.remove(&id);
                }
            }
        }
        if let Some(new_team) = self.active_teams.get_mut(&new_team_id) {
            new_team.drivers.insert(id);
        }
        info!(driver = %name, %id, team = %new_team_id, "driver transferred");
        Ok(())
    }

    /// Move an active driver to the retired partition. The driver's team
    /// pointer is kept as the last team; the team's roster no longer lists
    /// the driver.
    pub fn retire_driver(&mut self, id: DriverId, reason: &str) -> Result<()> {
        let mut driver =
            self.active_drivers
                .remove(&id)
                .ok_or(RegistryError::DriverNotFound {
                    id,
                    expected: "active",
                })?;
        if let Some(team_id) = driver.team {
            if let Some(team) = self.active_teams.get_mut(&team_id) {
                team.drivers.remove(&id);
            }
        }
        driver.status = DriverStatus::Retired;
        driver.retirement_reason = Some(reason.to_string());
        info!(driver = %driver.name, %id, reason, "driver retired");
        self.retired_drivers.insert(id, driver);
        Ok(())
    }

    /// Bring a retired driver back to the active roster.
    ///
    /// If the remembered team is still on the active grid the driver
    /// rejoins it; otherwise the driver comes back unassigned and must be
    /// transferred before racing for a team.
    pub fn restore_driver(&mut self, id: DriverId) -> Result<()> {
        let mut driver =
            self.retired_drivers
                .remove(&id)
                .ok_or(RegistryError::DriverNotFound {
                    id,
                    expected: "retired",
                })?;
        driver.status = DriverStatus::Active;
        driver.retirement_reason = None;
        if let Some(team_id) = driver.team {
            match self.active_teams.get_mut(&team_id) {
                Some(team) => {
                    team.drivers.insert(id);
                }
                None => driver.team = None,
            }
        }
        info!(driver = %driver.name, %id, "driver restored");
        self.active_drivers.insert(id, driver);
        Ok(())
    }

    /// Move an active or retired driver into the hall of fame. Terminal:
    /// there is no operation out of this partition.
    pub fn induct_hall_of_fame(&mut self, id: DriverId) -> Result<()> {
        let mut driver = match self.active_drivers.remove(&id) {
            Some(driver) => driver,
            None => self
                .retired_drivers
                .remove(&id)
                .ok_or(RegistryError::DriverNotFound {
                    id,
                    expected: "active or retired",
                })?,
        };
        if let Some(team_id) = driver.team {
            if let Some(team) = self.active_teams.get_mut(&team_id) {
                team.drivers.remove(&id);
            }
        }
        driver.team = None;
        driver.status = DriverStatus::HallOfFame;
        info!(driver = %driver.name, %id, "driver inducted into the hall of fame");
        self.hall_of_fame.insert(id, driver);
        Ok(())
    }

    // ---- championships --------------------------------------------------

    /// Commit one simulated season: bump the winners' title counters and
    /// append the immutable history record.
    ///
    /// Every active driver on the constructors'-champion team also gains a
    /// constructors' title on their own tally.
    pub fn crown_champions(
        &mut self,
        driver_id: DriverId,
        team_id: TeamId,
    ) -> Result<ChampionshipRecord> {
        if !self.active_drivers.contains_key(&driver_id) {
            return Err(RegistryError::DriverNotFound {
                id: driver_id,
                expected: "active",
            });
        }
        let team = self
            .active_teams
            .get_mut(&team_id)
            .ok_or(RegistryError::TeamNotFound {
                id: team_id,
                expected: "active",
            })?;
        team.championships += 1;
        let team_name = team.name.clone();
        let members: Vec<DriverId> = team.drivers.iter().copied().collect();
        for member in members {
            if let Some(driver) = self.active_drivers.get_mut(&member) {
                driver.constructor_championships += 1;
            }
        }
        let mut driver_name = String::new();
        if let Some(driver) = self.active_drivers.get_mut(&driver_id) {
            driver.wdcs += 1;
            driver_name = driver.name.clone();
        }
        let record = ChampionshipRecord {
            year: u32::try_from(self.history.len()).unwrap_or(u32::MAX - 1) + 1,
            team: team_name,
            driver: driver_name,
        };
        info!(
            year = record.year,
            driver = %record.driver,
            team = %record.team,
            "champions crowned"
        );
        self.history.push(record.clone());
        Ok(record)
    }

    // ---- queries ---------------------------------------------------------

    pub fn active_drivers(&self) -> impl Iterator<Item = &Driver> {
        self.active_drivers.values()
    }

    pub fn retired_drivers(&self) -> impl Iterator<Item = &Driver> {
        self.retired_drivers.values()
    }

    pub fn hall_of_fame(&self) -> impl Iterator<Item = &Driver> {
        self.hall_of_fame.values()
    }

    pub fn active_teams(&self) -> impl Iterator<Item = &Team> {
        self.active_teams.values()
    }

    pub fn former_teams(&self) -> impl Iterator<Item = &Team> {
        self.former_teams.values()
    }

    /// Look a driver up across all three partitions.
    pub fn driver(&self, id: DriverId) -> Option<&Driver> {
        self.active_drivers
            .get(&id)
            .or_else(|| self.retired_drivers.get(&id))
            .or_else(|| self.hall_of_fame.get(&id))
    }

    /// Look a team up across both partitions.
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.active_teams
            .get(&id)
            .or_else(|| self.former_teams.get(&id))
    }

    /// Ids of every driver eligible to win a drivers' championship.
    pub fn active_driver_ids(&self) -> Vec<DriverId> {
        self.active_drivers.keys().copied().collect()
    }

    /// Ids of every team eligible to win a constructors' championship:
    /// the active, non-bankrupt grid.
    pub fn eligible_team_ids(&self) -> Vec<TeamId> {
        self.active_teams
            .values()
            .filter(|team| !team.bankrupt)
            .map(|team| team.id)
            .collect()
    }

    pub fn history(&self) -> &[ChampionshipRecord] {
        &self.history
    }

    pub fn season_count(&self) -> usize {
        self.history.len()
    }

    // ---- snapshot support -------------------------------------------------

    /// Rebuild a registry wholesale from previously captured state.
    pub fn from_parts(parts: RegistryParts) -> Self {
        Self {
            active_drivers: parts.active_drivers,
            retired_drivers: parts.retired_drivers,
            hall_of_fame: parts.hall_of_fame,
            active_teams: parts.active_teams,
            former_teams: parts.former_teams,
            history: parts.history,
            next_driver_id: parts.next_driver_id,
            next_team_id: parts.next_team_id,
        }
    }

    /// Capture the full state for snapshotting.
    pub fn to_parts(&self) -> RegistryParts {
        RegistryParts {
            active_drivers: self.active_drivers.clone(),
            retired_drivers: self.retired_drivers.clone(),
            hall_of_fame: self.hall_of_fame.clone(),
            active_teams: self.active_teams.clone(),
            former_teams: self.former_teams.clone(),
            history: self.history.clone(),
            next_driver_id: self.next_driver_id,
            next_team_id: self.next_team_id,
        }
    }
}
