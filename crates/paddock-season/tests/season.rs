//! Tests for season simulation.

use paddock_model::DriverDraft;
use paddock_registry::Registry;
use paddock_season::{SeasonError, seeded_rng, simulate_season, simulate_seasons};

fn draft(name: &str) -> DriverDraft {
    DriverDraft {
        name: name.to_string(),
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
fn empty_league_fails_and_records_nothing() {
    let mut registry = Registry::new();
    let mut rng = seeded_rng(0);

    let err = simulate_season(&mut registry, &mut rng).unwrap_err();
    assert_eq!(
        err,
        SeasonError::EmptyPool {
            pool: "active drivers",
        }
    );
    assert!(registry.history().is_empty());
}

#[test]
fn league_without_solvent_teams_fails_and_records_nothing() {
    let mut registry = Registry::new();
    let apex = registry.add_team("Apex", "UK").expect("add team");
    registry.add_driver(&draft("A. Smith"), apex).expect("add");
    // The grid folds; the driver stays active but unassigned.
    registry.retire_team(apex).expect("retire team");

    let mut rng = seeded_rng(0);
    let err = simulate_season(&mut registry, &mut rng).unwrap_err();
    assert_eq!(
        err,
        SeasonError::EmptyPool {
            pool: "eligible teams",
        }
    );
    assert!(registry.history().is_empty());
}

#[test]
fn pool_of_one_is_deterministic() {
    let mut registry = Registry::new();
    let apex = registry.add_team("Apex", "UK").expect("add team");
    let smith = registry
        .add_driver(&draft("A. Smith"), apex)
        .expect("add driver");

    let mut rng = seeded_rng(42);
    let record = simulate_season(&mut registry, &mut rng).expect("simulate");

    assert_eq!(record.year, 1);
    assert_eq!(record.driver, "A. Smith");
    assert_eq!(record.team, "Apex");
    assert_eq!(registry.driver(smith).expect("driver").wdcs, 1);
    assert_eq!(registry.team(apex).expect("team").championships, 1);
    assert_eq!(registry.history().to_vec(), vec![record]);
}

#[test]
fn seasons_accumulate_sequential_years() {
    let mut registry = Registry::new();
    let apex = registry.add_team("Apex", "UK").expect("add team");
    let vortex = registry.add_team("Vortex", "IT").expect("add team");
    registry.add_driver(&draft("A. Smith"), apex).expect("add");
    registry
        .add_driver(&draft("B. Jones"), vortex)
        .expect("add");

    let mut rng = seeded_rng(7);
    let records = simulate_seasons(&mut registry, &mut rng, 5).expect("simulate");

    assert_eq!(records.len(), 5);
    let years: Vec<u32> = registry.history().iter().map(|r| r.year).collect();
    assert_eq!(years, [1, 2, 3, 4, 5]);

    let total_wdcs: u32 = registry.active_drivers().map(|d| d.wdcs).sum();
    assert_eq!(total_wdcs, 5);
    let total_titles: u32 = registry.active_teams().map(|t| t.championships).sum();
    assert_eq!(total_titles, 5);
}

#[test]
fn same_seed_reproduces_the_same_history() {
    let build = || {
        let mut registry = Registry::new();
        let apex = registry.add_team("Apex", "UK").expect("add team");
        let vortex = registry.add_team("Vortex", "IT").expect("add team");
        registry.add_driver(&draft("A. Smith"), apex).expect("add");
        registry
            .add_driver(&draft("B. Jones"), vortex)
            .expect("add");
        registry.add_driver(&draft("C. Ngata"), apex).expect("add");
        registry
    };

    let mut first = build();
    let mut second = build();
    simulate_seasons(&mut first, &mut seeded_rng(99), 10).expect("simulate");
    simulate_seasons(&mut second, &mut seeded_rng(99), 10).expect("simulate");

    assert_eq!(first.history(), second.history());
    assert_eq!(first, second);
}

#[test]
fn winning_team_roster_shares_constructor_titles() {
    let mut registry = Registry::new();
    let apex = registry.add_team("Apex", "UK").expect("add team");
    let smith = registry
        .add_driver(&draft("A. Smith"), apex)
        .expect("add driver");
    let jones = registry
        .add_driver(&draft("B. Jones"), apex)
        .expect("add driver");

    let mut rng = seeded_rng(3);
    simulate_season(&mut registry, &mut rng).expect("simulate");

    // Only one team, so both of its drivers share the constructors' title.
    for id in [smith, jones] {
        assert_eq!(
            registry
                .driver(id)
                .expect("driver")
                .constructor_championships,
            1
        );
    }
}
