//! Conversions between the runtime registry and the snapshot mirror types.
//!
//! Registry -> snapshot is infallible. Snapshot -> registry revalidates
//! the rating block (the composite rating is recomputed, never trusted
//! from disk), so a payload carrying impossible ratings is reported as a
//! corrupt snapshot instead of entering the registry.

use std::collections::{BTreeMap, BTreeSet};

use paddock_model::{
    ChampionshipRecord, Driver, DriverId, DriverStatus, StatBlock, Team, TeamId,
};
use paddock_registry::{Registry, RegistryParts};

use crate::error::{Result, SnapshotError};
use crate::types::{
    DriverSnapshot, DriverStatusSnapshot, LeagueFile, RecordSnapshot, TeamSnapshot,
};

/// Capture the full registry state into a snapshot.
pub fn registry_to_league(registry: &Registry) -> LeagueFile {
    let parts = registry.to_parts();
    let mut league = LeagueFile::empty();
    league.active_drivers = driver_map_to_snapshot(&parts.active_drivers);
    league.retired_drivers = driver_map_to_snapshot(&parts.retired_drivers);
    league.hall_of_fame = driver_map_to_snapshot(&parts.hall_of_fame);
    league.active_teams = team_map_to_snapshot(&parts.active_teams);
    league.former_teams = team_map_to_snapshot(&parts.former_teams);
    league.history = parts
        .history
        .iter()
        .map(|record| RecordSnapshot {
            year: record.year,
            team: record.team.clone(),
            driver: record.driver.clone(),
        })
        .collect();
    league.next_driver_id = parts.next_driver_id;
    league.next_team_id = parts.next_team_id;
    league
}

/// Rebuild a registry wholesale from a decoded snapshot.
pub fn league_to_registry(league: LeagueFile) -> Result<Registry> {
    let parts = RegistryParts {
        active_drivers: driver_map_from_snapshot(league.active_drivers)?,
        retired_drivers: driver_map_from_snapshot(league.retired_drivers)?,
        hall_of_fame: driver_map_from_snapshot(league.hall_of_fame)?,
        active_teams: team_map_from_snapshot(league.active_teams),
        former_teams: team_map_from_snapshot(league.former_teams),
        history: league
            .history
            .into_iter()
            .map(|record| ChampionshipRecord {
                year: record.year,
                team: record.team,
                driver: record.driver,
            })
            .collect(),
        next_driver_id: league.next_driver_id,
        next_team_id: league.next_team_id,
    };
    Ok(Registry::from_parts(parts))
}

fn driver_map_to_snapshot(drivers: &BTreeMap<DriverId, Driver>) -> BTreeMap<u64, DriverSnapshot> {
    drivers
        .values()
        .map(|driver| (driver.id.get(), driver_to_snapshot(driver)))
        .collect()
}

fn driver_map_from_snapshot(
    drivers: BTreeMap<u64, DriverSnapshot>,
) -> Result<BTreeMap<DriverId, Driver>> {
    drivers
        .into_values()
        .map(|snapshot| {
            let driver = driver_from_snapshot(snapshot)?;
            Ok((driver.id, driver))
        })
        .collect()
}

fn team_map_to_snapshot(teams: &BTreeMap<TeamId, Team>) -> BTreeMap<u64, TeamSnapshot> {
    teams
        .values()
        .map(|team| {
            (
                team.id.get(),
                TeamSnapshot {
                    id: team.id.get(),
                    name: team.name.clone(),
                    nationality: team.nationality.clone(),
                    drivers: team.drivers.iter().map(|id| id.get()).collect(),
                    bankrupt: team.bankrupt,
                    championships: team.championships,
                },
            )
        })
        .collect()
}

fn team_map_from_snapshot(teams: BTreeMap<u64, TeamSnapshot>) -> BTreeMap<TeamId, Team> {
    teams
        .into_values()
        .map(|snapshot| {
            let id = TeamId::new(snapshot.id);
            (
                id,
                Team {
                    id,
                    name: snapshot.name,
                    nationality: snapshot.nationality,
                    drivers: snapshot
                        .drivers
                        .into_iter()
                        .map(DriverId::new)
                        .collect::<BTreeSet<_>>(),
                    bankrupt: snapshot.bankrupt,
                    championships: snapshot.championships,
                },
            )
        })
        .collect()
}

fn driver_to_snapshot(driver: &Driver) -> DriverSnapshot {
    DriverSnapshot {
        id: driver.id.get(),
        name: driver.name.clone(),
        nationality: driver.nationality.clone(),
        age: driver.age,
        racecraft: driver.stats.racecraft(),
        overtaking: driver.stats.overtaking(),
        iq: driver.stats.iq(),
        focus: driver.stats.focus(),
        potential: driver.stats.potential(),
        team: driver.team.map(TeamId::get),
        status: match driver.status {
            DriverStatus::Active => DriverStatusSnapshot::Active,
            DriverStatus::Retired => DriverStatusSnapshot::Retired,
            DriverStatus::HallOfFame => DriverStatusSnapshot::HallOfFame,
        },
        retirement_reason: driver.retirement_reason.clone(),
        wdcs: driver.wdcs,
        constructor_championships: driver.constructor_championships,
    }
}

fn driver_from_snapshot(snapshot: DriverSnapshot) -> Result<Driver> {
    let stats = StatBlock::new(
        snapshot.racecraft,
        snapshot.overtaking,
        snapshot.iq,
        snapshot.focus,
        snapshot.potential,
    )
    .map_err(|error| SnapshotError::InvalidFormat {
        reason: format!("driver {}: {error}", snapshot.id),
    })?;
    Ok(Driver {
        id: DriverId::new(snapshot.id),
        name: snapshot.name,
        nationality: snapshot.nationality,
        age: snapshot.age,
        stats,
        team: snapshot.team.map(TeamId::new),
        status: match snapshot.status {
            DriverStatusSnapshot::Active => DriverStatus::Active,
            DriverStatusSnapshot::Retired => DriverStatus::Retired,
            DriverStatusSnapshot::HallOfFame => DriverStatus::HallOfFame,
        },
        retirement_reason: snapshot.retirement_reason,
        wdcs: snapshot.wdcs,
        constructor_championships: snapshot.constructor_championships,
    })
}
