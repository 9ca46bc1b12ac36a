//! Error types for the Garden of Ancients API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." All other non-2xx responses land in `Http`, carrying the status
//! code and a human-readable message: the backend reports failures as JSON
//! bodies with an `error` string, an `errors` array (Rails validation
//! messages), or a `message` field, and the message is lifted from whichever
//! of those is present.

use thiserror::Error;

/// Errors returned by the resource clients' `parse_*` methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404: the requested resource does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Build the error for an unexpected response status.
    ///
    /// 404 maps to `NotFound`; everything else becomes `Http` with the best
    /// message the body offers, falling back to the raw body and finally to
    /// a generic string when the body is empty.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 404 {
            return ApiError::NotFound;
        }
        let message = body_message(body)
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| "request failed".to_string());
        ApiError::Http { status, message }
    }
}

/// Extract an error message from a JSON response body, if it carries one.
fn body_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if let Some(msg) = value.get("error").and_then(|v| v.as_str()) {
        return Some(msg.to_string());
    }
    if let Some(errors) = value.get("errors").and_then(|v| v.as_array()) {
        let messages: Vec<&str> = errors.iter().filter_map(|v| v.as_str()).collect();
        if !messages.is_empty() {
            return Some(messages.join(", "));
        }
    }
    value
        .get("message")
        .and_then(|v| v.as_str())
        .map(str::to_string)
}
