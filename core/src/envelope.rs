//! The backend's JSON envelope convention.
//!
//! Write operations nest their payload under a singular key matching the
//! resource name (`{ "booking": { ... } }`), and list endpoints may answer
//! either with a bare array or with the array nested under the plural key
//! (`{ "bookings": [ ... ] }`). `wrap` and `unwrap_list` are the two halves
//! of that convention; every resource client goes through them.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// Serialize `payload` nested under `key`.
pub fn wrap<T: Serialize>(key: &str, payload: &T) -> Result<String, ApiError> {
    let value = serde_json::to_value(payload).map_err(|e| {
        tracing::warn!(key, error = %e, "failed to serialize request payload");
        ApiError::Serialization(e.to_string())
    })?;
    let mut envelope = serde_json::Map::new();
    envelope.insert(key.to_string(), value);
    serde_json::to_string(&Value::Object(envelope))
        .map_err(|e| ApiError::Serialization(e.to_string()))
}

/// Normalize a list response body into a `Vec<T>`.
///
/// Accepts the three shapes the backend is known to produce: a bare array,
/// an object carrying the array under `key`, and a single record (wrapped
/// into a one-element list). An empty body is treated as an empty list.
pub fn unwrap_list<T: DeserializeOwned>(key: &str, body: &str) -> Result<Vec<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let value: Value = serde_json::from_str(body).map_err(|e| {
        tracing::warn!(key, error = %e, "failed to parse list response body");
        ApiError::Deserialization(e.to_string())
    })?;
    let items = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => match map.remove(key) {
            Some(inner @ Value::Array(_)) => inner,
            Some(single) => Value::Array(vec![single]),
            None => Value::Array(vec![Value::Object(map)]),
        },
        other => {
            return Err(ApiError::Deserialization(format!(
                "expected array or object, got {other}"
            )))
        }
    };
    serde_json::from_value(items).map_err(|e| {
        tracing::warn!(key, error = %e, "failed to deserialize list items");
        ApiError::Deserialization(e.to_string())
    })
}
