//! Data store abstraction.
//!
//! Handlers depend on this trait rather than on a concrete database, and
//! receive it as explicit state.

use async_trait::async_trait;
use heroes_core::{
    Description, Hero, HeroId, HeroPowerView, NewHero, NewHeroPower, NewPower, Power, PowerId,
};

use crate::StoreError;

/// Persistence for heroes, powers and the associations between them.
///
/// Implementations must be `Send + Sync` so one handle can serve concurrent
/// requests. Every write that touches `Power::description` or
/// `HeroPower::strength` takes an already-validated value.
#[async_trait]
pub trait HeroStore: Send + Sync {
    /// All heroes, ordered by id.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the query fails.
    async fn list_heroes(&self) -> Result<Vec<Hero>, StoreError>;

    /// The hero with the given id, if any.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the query fails.
    async fn find_hero(&self, id: HeroId) -> Result<Option<Hero>, StoreError>;

    /// Insert a hero and return it with its assigned id.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the insert fails.
    async fn insert_hero(&self, hero: NewHero) -> Result<Hero, StoreError>;

    /// Delete a hero and every association referencing it.
    /// Returns `true` if the hero existed.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the delete fails.
    async fn delete_hero(&self, id: HeroId) -> Result<bool, StoreError>;

    /// All powers, ordered by id.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the query fails, or
    /// [`StoreError::Corrupt`] if a stored row fails validation.
    async fn list_powers(&self) -> Result<Vec<Power>, StoreError>;

    /// The power with the given id, if any.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] or [`StoreError::Corrupt`].
    async fn find_power(&self, id: PowerId) -> Result<Option<Power>, StoreError>;

    /// Insert a power and return it with its assigned id.
    ///
    /// # Errors
    /// Returns [`StoreError::Constraint`] if the database rejects the row.
    async fn insert_power(&self, power: NewPower) -> Result<Power, StoreError>;

    /// Replace a power's description. Returns `None` if the power does not
    /// exist, in which case nothing is written.
    ///
    /// # Errors
    /// Returns [`StoreError::Constraint`] if the database rejects the value.
    async fn update_power_description(
        &self,
        id: PowerId,
        description: Description,
    ) -> Result<Option<Power>, StoreError>;

    /// Delete a power and every association referencing it.
    /// Returns `true` if the power existed.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] if the delete fails.
    async fn delete_power(&self, id: PowerId) -> Result<bool, StoreError>;

    /// Every association of the given hero, joined with its hero and power.
    ///
    /// # Errors
    /// Returns [`StoreError::Database`] or [`StoreError::Corrupt`].
    async fn hero_powers_for_hero(&self, id: HeroId) -> Result<Vec<HeroPowerView>, StoreError>;

    /// Create an association after checking that both referenced rows exist.
    ///
    /// The existence checks and the insert run in one transaction, so a
    /// concurrent delete cannot leave an orphaned association.
    ///
    /// # Errors
    /// Returns [`StoreError::HeroNotFound`] or [`StoreError::PowerNotFound`]
    /// without inserting anything if either reference is missing.
    async fn create_hero_power(&self, link: NewHeroPower) -> Result<HeroPowerView, StoreError>;
}
