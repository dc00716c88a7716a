//! End-to-end command handler tests against a temporary league file.

use std::path::PathBuf;

use tempfile::TempDir;

use paddock_cli::cli::{AddDriverArgs, AddTeamArgs, EditDriverArgs, SimulateArgs};
use paddock_cli::commands::{
    run_add_driver, run_add_team, run_edit_driver, run_history, run_init, run_retire_driver,
    run_roster, run_simulate, run_transfer,
};
use paddock_model::{DriverId, TeamId};
use paddock_snapshot::load_league;

fn league() -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("league.pdk");
    run_init(&path).expect("init league");
    (dir, path)
}

fn team_args(name: &str) -> AddTeamArgs {
    AddTeamArgs {
        name: name.to_string(),
        nationality: "UK".to_string(),
    }
}

fn driver_args(name: &str, team: TeamId) -> AddDriverArgs {
    AddDriverArgs {
        name: name.to_string(),
        nationality: "UK".to_string(),
        age: 25,
        racecraft: 80,
        overtaking: 80,
        iq: 80,
        focus: 80,
        potential: 80,
        team,
    }
}

#[test]
fn init_refuses_to_overwrite() {
    let (_dir, path) = league();
    let err = run_init(&path).unwrap_err();
    assert!(err.to_string().contains("already exists"));
}

#[test]
fn mutations_persist_across_invocations() {
    let (_dir, path) = league();

    run_add_team(&path, &team_args("Apex")).expect("add team");
    run_add_driver(&path, &driver_args("A. Smith", TeamId::new(1))).expect("add driver");

    // Each handler is a separate load-mutate-save cycle; the file is the
    // only state carried between them.
    let registry = load_league(&path).expect("load league");
    assert_eq!(registry.active_teams().count(), 1);
    assert_eq!(registry.active_drivers().count(), 1);

    run_edit_driver(
        &path,
        &EditDriverArgs {
            driver: DriverId::new(1),
            name: None,
            nationality: None,
            age: None,
            racecraft: None,
            overtaking: None,
            iq: None,
            focus: None,
            potential: Some(100),
        },
    )
    .expect("edit driver");

    let registry = load_league(&path).expect("load league");
    let driver = registry.driver(DriverId::new(1)).expect("driver");
    assert_eq!(driver.stats.overall(), 84.0);
}

#[test]
fn simulate_appends_history_and_saves() {
    let (_dir, path) = league();
    run_add_team(&path, &team_args("Apex")).expect("add team");
    run_add_driver(&path, &driver_args("A. Smith", TeamId::new(1))).expect("add driver");

    run_simulate(
        &path,
        &SimulateArgs {
            seasons: 3,
            seed: Some(11),
        },
    )
    .expect("simulate");

    let registry = load_league(&path).expect("load league");
    assert_eq!(registry.season_count(), 3);
    let driver = registry.driver(DriverId::new(1)).expect("driver");
    assert_eq!(driver.wdcs, 3);
}

#[test]
fn failed_operation_does_not_touch_the_file() {
    let (_dir, path) = league();
    run_add_team(&path, &team_args("Apex")).expect("add team");
    run_add_driver(&path, &driver_args("A. Smith", TeamId::new(1))).expect("add driver");
    let before = load_league(&path).expect("load league");

    // Transfer to a team that does not exist.
    let err = run_transfer(&path, DriverId::new(1), TeamId::new(9)).unwrap_err();
    assert!(err.to_string().contains("not found"));

    let after = load_league(&path).expect("load league");
    assert_eq!(after, before);
}

#[test]
fn roster_and_history_render_in_both_modes() {
    let (_dir, path) = league();
    run_add_team(&path, &team_args("Apex")).expect("add team");
    run_add_driver(&path, &driver_args("A. Smith", TeamId::new(1))).expect("add driver");
    run_simulate(
        &path,
        &SimulateArgs {
            seasons: 1,
            seed: Some(5),
        },
    )
    .expect("simulate");

    for json in [false, true] {
        run_roster(&path, json).expect("roster");
        run_history(&path, json).expect("history");
    }
}

#[test]
fn commands_require_an_existing_league() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("missing.pdk");
    let err = run_retire_driver(&path, DriverId::new(1), "Age").unwrap_err();
    assert!(err.to_string().contains("paddock init"));
}
