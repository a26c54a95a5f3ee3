//! Populate an empty store with the sample heroes, powers and associations.

use heroes_core::samples::{sample_hero_powers, sample_heroes, sample_powers};
use heroes_core::NewHeroPower;
use tracing::info;

use crate::{HeroStore, StoreError};

/// Row counts written by [`seed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    /// Heroes inserted.
    pub heroes: usize,
    /// Powers inserted.
    pub powers: usize,
    /// Associations inserted.
    pub hero_powers: usize,
}

/// Insert the sample data if the store holds no heroes yet.
///
/// A store that already has heroes is left untouched and an empty summary
/// is returned.
///
/// # Errors
/// Returns the first [`StoreError`] raised by an insert.
pub async fn seed(store: &dyn HeroStore) -> Result<SeedSummary, StoreError> {
    if !store.list_heroes().await?.is_empty() {
        info!("store already populated, skipping seed");
        return Ok(SeedSummary::default());
    }

    let mut heroes = Vec::new();
    for hero in sample_heroes() {
        heroes.push(store.insert_hero(hero).await?);
    }
    let mut powers = Vec::new();
    for power in sample_powers()? {
        powers.push(store.insert_power(power).await?);
    }

    let mut hero_powers = 0;
    for (hero, power, strength) in sample_hero_powers() {
        let (Some(hero), Some(power)) = (heroes.get(hero), powers.get(power)) else {
            continue;
        };
        store.create_hero_power(NewHeroPower::new(strength, hero.id, power.id)).await?;
        hero_powers += 1;
    }

    let summary = SeedSummary { heroes: heroes.len(), powers: powers.len(), hero_powers };
    info!(?summary, "store seeded");
    Ok(summary)
}
