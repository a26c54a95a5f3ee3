//! Relational persistence for the heroes API.
//!
//! Three tables (`heroes`, `powers`, `hero_powers`) with cascading deletes
//! from either parent to the join rows, behind the [`HeroStore`] trait.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
mod schema;
pub mod seed;
pub mod sqlite;
pub mod store;

pub use sqlx;

pub use config::StoreConfig;
pub use error::StoreError;
pub use seed::{seed, SeedSummary};
pub use sqlite::SqliteStore;
pub use store::HeroStore;
