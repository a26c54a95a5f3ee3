//! Nested response shapes.
//!
//! Entities are plain records linked by foreign-key fields. Nested output is
//! composed here, one level deep: a [`HeroPowerView`] embeds its hero and
//! power as flat records, which never carry their own `hero_powers`, so the
//! hero → association → power graph cannot recurse.

use serde::Serialize;

use crate::hero::Hero;
use crate::hero_power::{HeroPower, Strength};
use crate::id::{HeroId, HeroPowerId, PowerId};
use crate::power::Power;

/// An association rendered together with the hero and power it links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct HeroPowerView {
    /// Association row id.
    pub id: HeroPowerId,
    /// How strongly the hero wields the power.
    pub strength: Strength,
    /// Foreign key to `hero`.
    pub hero_id: HeroId,
    /// Foreign key to `power`.
    pub power_id: PowerId,
    /// The linked hero, without its own associations.
    pub hero: Hero,
    /// The linked power, without its own associations.
    pub power: Power,
}

impl HeroPowerView {
    /// Joins an association with its referenced rows.
    ///
    /// Callers pass the rows the association's foreign keys point at.
    #[must_use]
    pub fn new(link: HeroPower, hero: Hero, power: Power) -> Self {
        debug_assert_eq!(link.hero_id, hero.id);
        debug_assert_eq!(link.power_id, power.id);
        Self {
            id: link.id,
            strength: link.strength,
            hero_id: link.hero_id,
            power_id: link.power_id,
            hero,
            power,
        }
    }
}

/// A hero with every association that references it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub struct HeroDetail {
    /// Hero row id.
    pub id: HeroId,
    /// Civilian name.
    pub name: String,
    /// Alter ego.
    pub super_name: String,
    /// Every association referencing this hero, ordered by id.
    pub hero_powers: Vec<HeroPowerView>,
}

impl HeroDetail {
    #[must_use]
    pub fn new(hero: Hero, hero_powers: Vec<HeroPowerView>) -> Self {
        Self {
            id: hero.id,
            name: hero.name,
            super_name: hero.super_name,
            hero_powers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power::Description;

    fn sample_power() -> Power {
        let description = match Description::new("gives the wielder the ability to fly") {
            Ok(d) => d,
            Err(e) => panic!("unexpected error: {e}"),
        };
        Power::new(PowerId(2), "flight", description)
    }

    #[test]
    fn hero_power_view_nests_one_level() {
        let hero = Hero::new(HeroId(1), "Kamala Khan", "Ms. Marvel");
        let link = HeroPower::new(HeroPowerId(5), Strength::Strong, HeroId(1), PowerId(2));
        let view = HeroPowerView::new(link, hero, sample_power());

        let json = match serde_json::to_value(&view) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json["id"], 5);
        assert_eq!(json["strength"], "Strong");
        assert_eq!(json["hero"]["super_name"], "Ms. Marvel");
        assert_eq!(json["power"]["name"], "flight");
        assert!(json["hero"].get("hero_powers").is_none(), "nested hero must not recurse");
        assert!(json["power"].get("hero_powers").is_none(), "nested power must not recurse");
    }

    #[test]
    fn hero_detail_lists_associations() {
        let hero = Hero::new(HeroId(1), "Kamala Khan", "Ms. Marvel");
        let link = HeroPower::new(HeroPowerId(5), Strength::Average, HeroId(1), PowerId(2));
        let view = HeroPowerView::new(link, hero.clone(), sample_power());
        let detail = HeroDetail::new(hero, vec![view]);

        let json = match serde_json::to_value(&detail) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json["name"], "Kamala Khan");
        assert_eq!(json["hero_powers"].as_array().map(Vec::len), Some(1));
        assert_eq!(json["hero_powers"][0]["power_id"], 2);
    }

    #[test]
    fn hero_detail_without_associations_has_empty_list() {
        let detail = HeroDetail::new(Hero::new(HeroId(9), "Gwen Stacy", "Spider-Gwen"), vec![]);
        let json = match serde_json::to_value(&detail) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json["hero_powers"], serde_json::json!([]));
    }
}
