//! Command handlers: each loads the league file, applies one registry
//! operation, and saves the result back.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::info;

use paddock_model::{DriverDraft, DriverId, TeamId};
use paddock_registry::{DriverEdit, Registry};
use paddock_season::{seeded_rng, simulate_seasons};
use paddock_snapshot::{load_league, save_league};

use crate::cli::{AddDriverArgs, AddTeamArgs, EditDriverArgs, SimulateArgs};
use crate::views::{print_history, print_roster};

/// Create a fresh league file; refuses to overwrite an existing one.
pub fn run_init(league: &Path) -> Result<()> {
    if league.exists() {
        bail!("league file already exists: {}", league.display());
    }
    let registry = Registry::new();
    save_league(&registry, league).context("save league")?;
    println!("Created empty league at {}", league.display());
    Ok(())
}

pub fn run_add_team(league: &Path, args: &AddTeamArgs) -> Result<()> {
    let mut registry = load(league)?;
    let id = registry.add_team(&args.name, &args.nationality)?;
    save_league(&registry, league).context("save league")?;
    println!("Added team {} with id {id}", args.name);
    Ok(())
}

pub fn run_retire_team(league: &Path, team: TeamId) -> Result<()> {
    let mut registry = load(league)?;
    registry.retire_team(team)?;
    save_league(&registry, league).context("save league")?;
    println!("Team {team} retired; its drivers are now unassigned");
    Ok(())
}

pub fn run_restore_team(league: &Path, team: TeamId) -> Result<()> {
    let mut registry = load(league)?;
    registry.restore_team(team)?;
    save_league(&registry, league).context("save league")?;
    println!("Team {team} restored to the active grid");
    Ok(())
}

pub fn run_add_driver(league: &Path, args: &AddDriverArgs) -> Result<()> {
    let mut registry = load(league)?;
    let draft = DriverDraft {
        name: args.name.clone(),
        nationality: args.nationality.clone(),
        age: args.age,
        racecraft: args.racecraft,
        overtaking: args.overtaking,
        iq: args.iq,
        focus: args.focus,
        potential: args.potential,
    };
    let id = registry.add_driver(&draft, args.team)?;
    save_league(&registry, league).context("save league")?;
    println!("Added driver {} with id {id} to team {}", args.name, args.team);
    Ok(())
}

pub fn run_edit_driver(league: &Path, args: &EditDriverArgs) -> Result<()> {
    let mut registry = load(league)?;
    let edit = DriverEdit {
        name: args.name.clone(),
        nationality: args.nationality.clone(),
        age: args.age,
        racecraft: args.racecraft,
        overtaking: args.overtaking,
        iq: args.iq,
        focus: args.focus,
        potential: args.potential,
    };
    registry.edit_driver(args.driver, &edit)?;
    save_league(&registry, league).context("save league")?;
    println!("Driver {} updated", args.driver);
    Ok(())
}

pub fn run_transfer(
    league: &Path,
    driver: DriverId,
    team: TeamId,
) -> Result<()> {
    let mut registry = load(league)?;
    registry.transfer_driver(driver, team)?;
    save_league(&registry, league).context("save league")?;
    println!("Driver {driver} transferred to team {team}");
    Ok(())
}

pub fn run_retire_driver(
    league: &Path,
    driver: DriverId,
    reason: &str,
) -> Result<()> {
    let mut registry = load(league)?;
    registry.retire_driver(driver, reason)?;
    save_league(&registry, league).context("save league")?;
    println!("Driver {driver} retired ({reason})");
    Ok(())
}

pub fn run_restore_driver(league: &Path, driver: DriverId) -> Result<()> {
    let mut registry = load(league)?;
    registry.restore_driver(driver)?;
    save_league(&registry, league).context("save league")?;
    println!("Driver {driver} restored to the active roster");
    Ok(())
}

pub fn run_hall_of_fame(league: &Path, driver: DriverId) -> Result<()> {
    let mut registry = load(league)?;
    registry.induct_hall_of_fame(driver)?;
    save_league(&registry, league).context("save league")?;
    println!("Driver {driver} inducted into the hall of fame");
    Ok(())
}

pub fn run_simulate(league: &Path, args: &SimulateArgs) -> Result<()> {
    let mut registry = load(league)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed, seasons = args.seasons, "simulating");
    let mut rng = seeded_rng(seed);
    let records = simulate_seasons(&mut registry, &mut rng, args.seasons)?;
    save_league(&registry, league).context("save league")?;
    for record in &records {
        println!(
            "Season {}: drivers' champion {}, constructors' champion {}",
            record.year, record.driver, record.team
        );
    }
    Ok(())
}

pub fn run_roster(league: &Path, json: bool) -> Result<()> {
    let registry = load(league)?;
    print_roster(&registry, json)
}

pub fn run_history(league: &Path, json: bool) -> Result<()> {
    let registry = load(league)?;
    print_history(&registry, json)
}

fn load(league: &Path) -> Result<Registry> {
    if !league.exists() {
        bail!(
            "no league file at {}; run `paddock init` first",
            league.display()
        );
    }
    Ok(load_league(league)?)
}
