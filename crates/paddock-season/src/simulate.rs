use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing::debug;

use paddock_model::ChampionshipRecord;
use paddock_registry::Registry;

use crate::error::{Result, SeasonError};

/// Deterministic RNG for reproducible simulation runs.
pub fn seeded_rng(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed)
}

/// Run one championship season against the registry.
///
/// Both pools are checked before anything mutates, so an empty league
/// fails cleanly with no history entry. The drivers' champion is drawn
/// from every active driver (assigned or not); the constructors' champion
/// from the active non-bankrupt grid.
pub fn simulate_season<R: Rng + ?Sized>(
    registry: &mut Registry,
    rng: &mut R,
) -> Result<ChampionshipRecord> {
    let drivers = registry.active_driver_ids();
    if drivers.is_empty() {
        return Err(SeasonError::EmptyPool {
            pool: "active drivers",
        });
    }
    let teams = registry.eligible_team_ids();
    if teams.is_empty() {
        return Err(SeasonError::EmptyPool {
            pool: "eligible teams",
        });
    }

    let driver = drivers[rng.random_range(0..drivers.len())];
    let team = teams[rng.random_range(0..teams.len())];
    debug!(%driver, %team, "season winners drawn");

    Ok(registry.crown_champions(driver, team)?)
}

/// Run `count` consecutive seasons, stopping at the first failure.
pub fn simulate_seasons<R: Rng + ?Sized>(
    registry: &mut Registry,
    rng: &mut R,
    count: u32,
) -> Result<Vec<ChampionshipRecord>> {
    let mut records = Vec::with_capacity(count as usize);
    for _ in 0..count {
        records.push(simulate_season(registry, rng)?);
    }
    Ok(records)
}
