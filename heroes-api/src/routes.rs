//! Axum route handlers for the heroes API.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use heroes_core::{HeroDetail, HeroId, PowerId};
use heroes_store::HeroStore;
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    error::{ApiError, Entity},
    request::{parse_create_hero_power, parse_description_patch},
};

// ── Shared state ─────────────────────────────────────────────────────────────

/// Store handle shared by every handler.
pub type Store = Arc<dyn HeroStore>;

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given store.
pub fn create_router(store: Store) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/heroes", get(list_heroes))
        .route("/heroes/{id}", get(get_hero))
        .route("/powers", get(list_powers))
        .route("/powers/{id}", get(get_power).patch(update_power))
        .route("/hero_powers", post(create_hero_power))
        .with_state(store)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Resolve a path id, treating anything that is not an integer as an id
/// no row can have.
fn path_id(id: Result<Path<i64>, PathRejection>, entity: Entity) -> Result<i64, ApiError> {
    id.map(|Path(id)| id).map_err(|_| ApiError::NotFound(entity))
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /`: static greeting.
pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

/// `GET /heroes`: every hero, without associations.
///
/// # Errors
/// Returns [`ApiError::Store`] if the store query fails.
pub async fn list_heroes(State(store): State<Store>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(store.list_heroes().await?))
}

/// `GET /heroes/{id}`: one hero with its associations.
///
/// # Errors
/// Returns [`ApiError::NotFound`] if no hero has the given id.
pub async fn get_hero(
    State(store): State<Store>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = HeroId(path_id(id, Entity::Hero)?);
    let hero = store.find_hero(id).await?.ok_or(ApiError::NotFound(Entity::Hero))?;
    let hero_powers = store.hero_powers_for_hero(id).await?;
    Ok(Json(HeroDetail::new(hero, hero_powers)))
}

/// `GET /powers`: every power.
///
/// # Errors
/// Returns [`ApiError::Store`] if the store query fails.
pub async fn list_powers(State(store): State<Store>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(store.list_powers().await?))
}

/// `GET /powers/{id}`: one power.
///
/// # Errors
/// Returns [`ApiError::NotFound`] if no power has the given id.
pub async fn get_power(
    State(store): State<Store>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = PowerId(path_id(id, Entity::Power)?);
    let power = store.find_power(id).await?.ok_or(ApiError::NotFound(Entity::Power))?;
    Ok(Json(power))
}

/// `PATCH /powers/{id}`: replace a power's description.
///
/// The power's existence is checked before the body is looked at.
///
/// # Errors
/// Returns [`ApiError::NotFound`] if the power does not exist,
/// [`ApiError::BadRequest`] for a malformed body, and
/// [`ApiError::Validation`] for a description that is too short.
pub async fn update_power(
    State(store): State<Store>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let id = PowerId(path_id(id, Entity::Power)?);
    let current = store.find_power(id).await?.ok_or(ApiError::NotFound(Entity::Power))?;

    let Json(body) = payload?;
    let Some(description) = parse_description_patch(&body)? else {
        return Ok(Json(current));
    };

    let updated = store
        .update_power_description(id, description)
        .await?
        .ok_or(ApiError::NotFound(Entity::Power))?;
    info!(%id, "power description updated");
    Ok(Json(updated))
}

/// `POST /hero_powers`: link a hero to a power.
///
/// # Errors
/// Returns [`ApiError::BadRequest`] for missing or mistyped fields,
/// [`ApiError::Validation`] for an unknown strength, and
/// [`ApiError::NotFound`] if the hero or power does not exist.
pub async fn create_hero_power(
    State(store): State<Store>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(body) = payload?;
    let link = parse_create_hero_power(&body)?;
    let view = store.create_hero_power(link).await?;
    info!(id = %view.id, hero_id = %view.hero_id, power_id = %view.power_id, "hero power created");
    Ok((StatusCode::OK, Json(view)))
}
