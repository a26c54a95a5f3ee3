//! HTTP API for heroes, powers and the associations between them.
//!
//! Stateless request handlers over a [`HeroStore`](heroes_store::HeroStore)
//! handle injected as router state.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod error;
pub mod request;
pub mod routes;
