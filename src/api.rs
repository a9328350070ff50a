//! Fetch layer for the backend endpoints and static data assets.
//!
//! The server only has to honor the shapes below; every failure here is
//! surfaced by the calling view as inline placeholder text (reads) or a
//! console log (writes), never as a crash.

use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;

use crate::model::{Character, Location, Sighting};

pub const API_BASE: &str = "http://localhost:8080";
/// Static asset fetched relative to the page, not served by the API.
pub const LOCATIONS_ASSET: &str = "data/locations.json";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("HTTP error! status: {0}")]
    Status(u16),
    #[error("unexpected payload shape")]
    Payload,
}

pub async fn fetch_characters() -> Result<Vec<Character>, ApiError> {
    let response = Request::get(&format!("{API_BASE}/api/characters"))
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    characters_from_value(response.json().await?)
}

pub async fn fetch_sightings() -> Result<Vec<Sighting>, ApiError> {
    let response = Request::get(&format!("{API_BASE}/api/sightings"))
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json().await?)
}

pub async fn fetch_locations() -> Result<Vec<Location>, ApiError> {
    let response = Request::get(LOCATIONS_ASSET).send().await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    locations_from_value(response.json().await?)
}

/// Creates a sighting on the backend. Callers fire this without blocking the
/// UI on the outcome; the response body is returned only so it can be logged.
pub async fn submit_sighting(record: &Sighting) -> Result<Value, ApiError> {
    let response = Request::post(&format!("{API_BASE}/api/sightings"))
        .json(record)?
        .send()
        .await?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json().await?)
}

/// The characters endpoint has served both `{"characters": [...]}` and a
/// bare array; accept either.
pub fn characters_from_value(value: Value) -> Result<Vec<Character>, ApiError> {
    let list = match value {
        Value::Object(mut map) => match map.remove("characters") {
            Some(inner) => inner,
            None => Value::Object(map),
        },
        other => other,
    };
    serde_json::from_value(list).map_err(|_| ApiError::Payload)
}

/// The locations asset wraps its records: `{"locations": [...]}`.
pub fn locations_from_value(value: Value) -> Result<Vec<Location>, ApiError> {
    let Value::Object(mut map) = value else {
        return Err(ApiError::Payload);
    };
    let list = map.remove("locations").ok_or(ApiError::Payload)?;
    serde_json::from_value(list).map_err(|_| ApiError::Payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn characters_accepts_wrapped_payload() {
        let parsed = characters_from_value(json!({
            "characters": [{ "name": "Sméagol", "race": "Hobbit (Stoor)" }]
        }))
        .unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Sméagol");
        assert_eq!(parsed[0].race.as_deref(), Some("Hobbit (Stoor)"));
    }

    #[test]
    fn characters_accepts_bare_array() {
        let parsed = characters_from_value(json!([{ "name": "Frodo" }, { "name": "Sam" }])).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].name, "Sam");
    }

    #[test]
    fn characters_rejects_non_list_payload() {
        assert!(characters_from_value(json!({ "count": 3 })).is_err());
        assert!(characters_from_value(json!("gollum")).is_err());
    }

    #[test]
    fn locations_requires_the_wrapper_key() {
        let parsed = locations_from_value(json!({
            "locations": [{
                "name": "The Misty Mountains",
                "description": "Cold caves under the peaks.",
                "significance": "Where he hid for five hundred years.",
                "gollums_thoughts": "Cool and dark, yes precious."
            }]
        }))
        .unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "The Misty Mountains");

        assert!(locations_from_value(json!([])).is_err());
        assert!(locations_from_value(json!({ "places": [] })).is_err());
    }
}
