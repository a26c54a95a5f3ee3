//! Canonical sample data used to seed a fresh database.
//!
//! Associations reference heroes and powers by their position in
//! [`sample_heroes`] and [`sample_powers`] (zero-based).

use crate::error::CoreError;
use crate::hero::NewHero;
use crate::hero_power::Strength;
use crate::power::{Description, NewPower};

/// Returns the sample heroes.
#[must_use]
pub fn sample_heroes() -> Vec<NewHero> {
    [
        ("Kamala Khan", "Ms. Marvel"),
        ("Doreen Green", "Squirrel Girl"),
        ("Gwen Stacy", "Spider-Gwen"),
        ("Janet Van Dyne", "The Wasp"),
        ("Wanda Maximoff", "Scarlet Witch"),
        ("Carol Danvers", "Captain Marvel"),
        ("Jean Grey", "Dark Phoenix"),
        ("Ororo Munroe", "Storm"),
        ("Kitty Pryde", "Shadowcat"),
        ("Elektra Natchios", "Elektra"),
    ]
    .into_iter()
    .map(|(name, super_name)| NewHero::new(name, super_name))
    .collect()
}

/// Returns the sample powers.
///
/// # Errors
/// Returns [`CoreError::InvalidDescription`] if a sample description fails
/// validation.
pub fn sample_powers() -> Result<Vec<NewPower>, CoreError> {
    [
        ("super strength", "gives the wielder super-human strengths"),
        ("flight", "gives the wielder the ability to fly through the skies at supersonic speed"),
        ("super human senses", "allows the wielder to use her senses at a super-human level"),
        ("elasticity", "can stretch the human body to extreme lengths"),
    ]
    .into_iter()
    .map(|(name, description)| Description::new(description).map(|d| NewPower::new(name, d)))
    .collect()
}

/// Returns `(hero index, power index, strength)` triples for the sample
/// associations.
#[must_use]
pub fn sample_hero_powers() -> Vec<(usize, usize, Strength)> {
    vec![
        (0, 1, Strength::Strong),
        (0, 3, Strength::Average),
        (1, 0, Strength::Weak),
        (2, 2, Strength::Average),
        (4, 1, Strength::Strong),
        (5, 0, Strength::Strong),
        (5, 1, Strength::Average),
        (7, 1, Strength::Weak),
    ]
}
