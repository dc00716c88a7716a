//! Whole-registry round-trip through the snapshot codec.

use paddock_model::DriverDraft;
use paddock_registry::Registry;
use paddock_snapshot::{deserialize_registry, serialize_registry};

fn draft(name: &str, potential: u8) -> DriverDraft {
    DriverDraft {
        name: name.to_string(),
        nationality: "UK".to_string(),
        age: 30,
        racecraft: 70,
        overtaking: 65,
        iq: 85,
        focus: 75,
        potential,
    }
}

/// A registry exercising every partition: 3 teams (1 former), 5 drivers
/// (2 retired, 1 in the hall of fame), and 4 championship records.
fn populated_registry() -> Registry {
    let mut registry = Registry::new();

    let apex = registry.add_team("Apex", "UK").expect("add team");
    let vortex = registry.add_team("Vortex", "IT").expect("add team");
    let meteor = registry.add_team("Meteor", "JP").expect("add team");

    let smith = registry
        .add_driver(&draft("A. Smith", 90), apex)
        .expect("add driver");
    let jones = registry
        .add_driver(&draft("B. Jones", 80), vortex)
        .expect("add driver");
    let ngata = registry
        .add_driver(&draft("C. Ngata", 95), meteor)
        .expect("add driver");
    let diaz = registry
        .add_driver(&draft("D. Diaz", 70), apex)
        .expect("add driver");
    let evans = registry
        .add_driver(&draft("E. Evans", 60), vortex)
        .expect("add driver");

    for (driver, team) in [(smith, apex), (jones, vortex), (smith, meteor), (ngata, apex)] {
        registry.crown_champions(driver, team).expect("crown");
    }

    registry.retire_driver(diaz, "Injury").expect("retire");
    registry.retire_driver(evans, "Age").expect("retire");
    registry.induct_hall_of_fame(ngata).expect("induct");
    registry.retire_team(meteor).expect("retire team");

    registry
}

#[test]
fn round_trip_reproduces_identical_registry() {
    let registry = populated_registry();
    assert_eq!(registry.season_count(), 4);
    assert_eq!(registry.retired_drivers().count(), 2);
    assert_eq!(registry.hall_of_fame().count(), 1);
    assert_eq!(registry.former_teams().count(), 1);

    let bytes = serialize_registry(&registry).expect("serialize");
    let restored = deserialize_registry(&bytes).expect("deserialize");

    // Deep equality across every partition, counter, and the history.
    assert_eq!(restored, registry);
}

#[test]
fn restored_registry_keeps_allocating_fresh_ids() {
    let registry = populated_registry();
    let bytes = serialize_registry(&registry).expect("serialize");
    let mut restored = deserialize_registry(&bytes).expect("deserialize");

    let existing: Vec<_> = restored.active_driver_ids();
    let apex = restored
        .active_teams()
        .next()
        .expect("an active team remains")
        .id;
    let new_id = restored
        .add_driver(&draft("F. Fresh", 50), apex)
        .expect("add driver");
    assert!(!existing.contains(&new_id));
}

#[test]
fn restored_registry_stays_operable() {
    let registry = populated_registry();
    let bytes = serialize_registry(&registry).expect("serialize");
    let mut restored = deserialize_registry(&bytes).expect("deserialize");

    // History numbering continues where the snapshot left off.
    let driver = restored.active_driver_ids()[0];
    let team = restored.eligible_team_ids()[0];
    let record = restored.crown_champions(driver, team).expect("crown");
    assert_eq!(record.year, 5);
}
