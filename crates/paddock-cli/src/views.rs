//! Table and JSON rendering for rosters and history.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use serde_json::json;

use paddock_model::Driver;
use paddock_registry::Registry;

/// Print every partition of the league: active and retired drivers, the
/// hall of fame, and both team partitions.
pub fn print_roster(registry: &Registry, json: bool) -> Result<()> {
    if json {
        let value = json!({
            "active_drivers": registry.active_drivers().collect::<Vec<_>>(),
            "retired_drivers": registry.retired_drivers().collect::<Vec<_>>(),
            "hall_of_fame": registry.hall_of_fame().collect::<Vec<_>>(),
            "active_teams": registry.active_teams().collect::<Vec<_>>(),
            "former_teams": registry.former_teams().collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Active drivers");
    println!("{}", driver_table(registry, registry.active_drivers()));

    println!("Retired drivers");
    println!("{}", driver_table(registry, registry.retired_drivers()));

    println!("Hall of fame");
    println!("{}", driver_table(registry, registry.hall_of_fame()));

    println!("Active teams");
    println!("{}", team_table(registry.active_teams()));

    println!("Former teams");
    println!("{}", team_table(registry.former_teams()));
    Ok(())
}

/// Print the championship history, oldest season first.
pub fn print_history(registry: &Registry, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(registry.history())?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Year", "Drivers' champion", "Constructors' champion"]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for record in registry.history() {
        table.add_row(vec![
            record.year.to_string(),
            record.driver.clone(),
            record.team.clone(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn driver_table<'a>(registry: &Registry, drivers: impl Iterator<Item = &'a Driver>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Id",
        "Name",
        "Nationality",
        "Age",
        "Team",
        "Overall",
        "WDCs",
        "Constructors",
        "Status",
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Right);
    align_column(&mut table, 7, CellAlignment::Right);
    for driver in drivers {
        let team = driver
            .team
            .and_then(|id| registry.team(id))
            .map_or_else(|| "-".to_string(), |team| team.name.clone());
        table.add_row(vec![
            Cell::new(driver.id),
            Cell::new(&driver.name),
            Cell::new(&driver.nationality),
            Cell::new(driver.age),
            Cell::new(team),
            Cell::new(format!("{:.2}", driver.stats.overall())),
            Cell::new(driver.wdcs),
            Cell::new(driver.constructor_championships),
            Cell::new(driver.status),
        ]);
    }
    table
}

fn team_table<'a>(teams: impl Iterator<Item = &'a paddock_model::Team>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        "Id",
        "Name",
        "Nationality",
        "Drivers",
        "Championships",
        "Bankrupt",
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for team in teams {
        table.add_row(vec![
            Cell::new(team.id),
            Cell::new(&team.name),
            Cell::new(&team.nationality),
            Cell::new(team.drivers.len()),
            Cell::new(team.championships),
            Cell::new(if team.bankrupt { "yes" } else { "no" }),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
