use serde::{Deserialize, Serialize};

use crate::id::HeroId;

/// A persisted hero.
///
/// Serializes to its own columns only; the `hero_powers` collection is
/// composed separately by [`HeroDetail`](crate::view::HeroDetail).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct Hero {
    /// Row id assigned on insert.
    pub id: HeroId,
    /// Civilian name (e.g. `"Kamala Khan"`).
    pub name: String,
    /// Alter ego (e.g. `"Ms. Marvel"`).
    pub super_name: String,
}

impl Hero {
    #[must_use]
    pub fn new(id: HeroId, name: impl Into<String>, super_name: impl Into<String>) -> Self {
        Self { id, name: name.into(), super_name: super_name.into() }
    }
}

/// Field values for a hero that has not been inserted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct NewHero {
    /// Civilian name.
    pub name: String,
    /// Alter ego.
    pub super_name: String,
}

impl NewHero {
    pub fn new(name: impl Into<String>, super_name: impl Into<String>) -> Self {
        Self { name: name.into(), super_name: super_name.into() }
    }
}
