use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::id::{HeroId, HeroPowerId, PowerId};

/// How strongly a hero wields a power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Strength {
    Strong,
    Weak,
    Average,
}

impl Strength {
    /// Every accepted strength, in declaration order.
    pub const ALL: [Strength; 3] = [Strength::Strong, Strength::Weak, Strength::Average];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Strength::Strong => "Strong",
            Strength::Weak => "Weak",
            Strength::Average => "Average",
        }
    }
}

/// Checks that `value` names one of the accepted strengths.
///
/// Matching is exact and case-sensitive.
///
/// # Errors
/// Returns [`CoreError::InvalidStrength`] for anything other than
/// `"Strong"`, `"Weak"` or `"Average"`.
pub fn validate_strength(value: &str) -> Result<Strength, CoreError> {
    Strength::ALL
        .into_iter()
        .find(|s| s.as_str() == value)
        .ok_or_else(|| CoreError::InvalidStrength { value: value.to_owned() })
}

impl FromStr for Strength {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_strength(s)
    }
}

impl TryFrom<String> for Strength {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_strength(&value)
    }
}

impl From<Strength> for &'static str {
    fn from(s: Strength) -> Self {
        s.as_str()
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted association between a hero and a power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub struct HeroPower {
    /// Row id assigned on insert.
    pub id: HeroPowerId,
    /// How strongly the hero wields the power.
    pub strength: Strength,
    /// The hero side of the link.
    pub hero_id: HeroId,
    /// The power side of the link.
    pub power_id: PowerId,
}

impl HeroPower {
    #[must_use]
    pub const fn new(id: HeroPowerId, strength: Strength, hero_id: HeroId, power_id: PowerId) -> Self {
        Self { id, strength, hero_id, power_id }
    }
}

/// Field values for an association that has not been inserted yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct NewHeroPower {
    /// How strongly the hero wields the power.
    pub strength: Strength,
    /// Must reference an existing hero.
    pub hero_id: HeroId,
    /// Must reference an existing power.
    pub power_id: PowerId,
}

impl NewHeroPower {
    #[must_use]
    pub const fn new(strength: Strength, hero_id: HeroId, power_id: PowerId) -> Self {
        Self { strength, hero_id, power_id }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn strength_accepts_the_three_variants() {
        assert_eq!(validate_strength("Strong"), Ok(Strength::Strong));
        assert_eq!(validate_strength("Weak"), Ok(Strength::Weak));
        assert_eq!(validate_strength("Average"), Ok(Strength::Average));
    }

    #[test]
    fn strength_is_case_sensitive() {
        assert!(validate_strength("strong").is_err());
        assert!(validate_strength("AVERAGE").is_err());
        assert!(validate_strength("").is_err());
    }

    #[test]
    fn strength_error_carries_rejected_value() {
        let err = match validate_strength("Mighty") {
            Err(e) => e,
            Ok(s) => panic!("expected rejection, got {s}"),
        };
        assert_eq!(err, CoreError::InvalidStrength { value: "Mighty".to_owned() });
        assert!(err.to_string().contains("Mighty"));
    }

    #[test]
    fn strength_serde_uses_variant_names() {
        let json = match serde_json::to_string(&Strength::Average) {
            Ok(s) => s,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json, "\"Average\"");
        assert!(serde_json::from_str::<Strength>("\"Mighty\"").is_err());
    }

    #[test]
    fn hero_power_serializes_flat() {
        let hp = HeroPower::new(HeroPowerId(7), Strength::Weak, HeroId(2), PowerId(3));
        let json = match serde_json::to_value(hp) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "strength": "Weak", "hero_id": 2, "power_id": 3})
        );
    }

    proptest! {
        #[test]
        fn strength_rejects_everything_outside_the_enum(value in "\\PC{0,12}") {
            let accepted = validate_strength(&value).is_ok();
            let expected = matches!(value.as_str(), "Strong" | "Weak" | "Average");
            prop_assert_eq!(accepted, expected);
        }
    }
}
