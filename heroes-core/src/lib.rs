//! Core types for the heroes API.
//!
//! Defines the three entities (heroes, powers and the hero/power join),
//! the field validation guarding every write, and the nested views used
//! to render them.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod hero;
pub mod hero_power;
pub mod id;
pub mod power;
pub mod samples;
pub mod view;

pub use error::CoreError;
pub use hero::{Hero, NewHero};
pub use hero_power::{validate_strength, HeroPower, NewHeroPower, Strength};
pub use id::{HeroId, HeroPowerId, PowerId};
pub use power::{validate_description, Description, NewPower, Power, MIN_DESCRIPTION_LEN};
pub use view::{HeroDetail, HeroPowerView};
