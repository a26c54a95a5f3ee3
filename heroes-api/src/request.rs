//! Request-body parsing.
//!
//! Bodies are taken as raw JSON and checked in a fixed order: shape, field
//! presence, field types, then domain validation. Each stage reports every
//! problem it finds before the next stage runs.

use heroes_core::{validate_strength, Description, HeroId, NewHeroPower, PowerId};
use serde_json::{Map, Value};

use crate::error::ApiError;

const HERO_POWER_FIELDS: [&str; 3] = ["strength", "hero_id", "power_id"];

fn as_object(body: &Value) -> Result<&Map<String, Value>, ApiError> {
    body.as_object()
        .ok_or_else(|| ApiError::bad_request("request body must be a JSON object"))
}

/// Parse the body of `POST /hero_powers`.
///
/// # Errors
/// Returns [`ApiError::BadRequest`] if the body is not an object, lacks any
/// of `strength`, `hero_id` and `power_id`, or holds a value of the wrong
/// type. Returns [`ApiError::Validation`] if `strength` is not one of the
/// accepted values.
pub fn parse_create_hero_power(body: &Value) -> Result<NewHeroPower, ApiError> {
    let fields = as_object(body)?;

    let missing: Vec<String> = HERO_POWER_FIELDS
        .iter()
        .filter(|name| fields.get(**name).is_none_or(Value::is_null))
        .map(|name| format!("missing required field '{name}'"))
        .collect();
    if !missing.is_empty() {
        return Err(ApiError::BadRequest(missing));
    }

    let strength = fields.get("strength").and_then(Value::as_str);
    let hero_id = fields.get("hero_id").and_then(Value::as_i64);
    let power_id = fields.get("power_id").and_then(Value::as_i64);

    let (Some(strength), Some(hero_id), Some(power_id)) = (strength, hero_id, power_id) else {
        let mut errors = Vec::new();
        if strength.is_none() {
            errors.push("field 'strength' must be a string".to_owned());
        }
        if hero_id.is_none() {
            errors.push("field 'hero_id' must be an integer".to_owned());
        }
        if power_id.is_none() {
            errors.push("field 'power_id' must be an integer".to_owned());
        }
        return Err(ApiError::BadRequest(errors));
    };

    let strength = validate_strength(strength)?;
    Ok(NewHeroPower::new(strength, HeroId(hero_id), PowerId(power_id)))
}

/// Parse the body of `PATCH /powers/{id}`.
///
/// Returns `Ok(None)` when `description` is absent or `null`, meaning the
/// stored value is left as is.
///
/// # Errors
/// Returns [`ApiError::BadRequest`] if the body is not an object or
/// `description` is not a string, and [`ApiError::Validation`] if it is too
/// short.
pub fn parse_description_patch(body: &Value) -> Result<Option<Description>, ApiError> {
    match as_object(body)?.get("description") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(Description::new(text.as_str())?)),
        Some(_) => Err(ApiError::bad_request("field 'description' must be a string")),
    }
}
