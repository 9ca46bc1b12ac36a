//! Resource clients for the Garden of Ancients backend.
//!
//! # Design
//! One client per backend resource, each stateless: it holds only the base
//! URL and carries no mutable state between calls. Every operation is split
//! into a `build_*` method that produces an [`HttpRequest`](crate::http::HttpRequest)
//! and a `parse_*` method that consumes an [`HttpResponse`](crate::http::HttpResponse);
//! the caller executes the round-trip in between.
//!
//! Admin operations live under `<base>/admin/<resource>`, public submissions
//! under `<base>/<resource>`. No retry, no timeout, no caching: a failed
//! attempt surfaces immediately, and callers re-fetch explicitly.

mod blog_posts;
mod bookings;
mod contacts;
mod passwords;
mod subscribers;

pub use blog_posts::BlogPostsClient;
pub use bookings::BookingsClient;
pub use contacts::ContactsClient;
pub use passwords::PasswordsClient;
pub use subscribers::SubscribersClient;

use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::http::HttpResponse;

/// Map non-success status codes to the appropriate `ApiError` variant,
/// logging before the error is handed back to the caller.
pub(crate) fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    tracing::warn!(
        status = response.status,
        expected,
        "unexpected response status"
    );
    Err(ApiError::from_response(response.status, &response.body))
}

/// Deserialize a single-record response body.
pub(crate) fn parse_record<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ApiError> {
    serde_json::from_str(&response.body).map_err(|e| {
        tracing::warn!(error = %e, "failed to deserialize response body");
        ApiError::Deserialization(e.to_string())
    })
}

pub(crate) fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Strip a trailing slash so joined paths never double up.
pub(crate) fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
