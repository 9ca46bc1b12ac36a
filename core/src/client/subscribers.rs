//! Client for newsletter subscriptions.
//!
//! A single write endpoint used by the footer signup. Validation failures
//! (invalid or already-taken email) come back as 422 with an `errors` array,
//! which `ApiError::from_response` folds into one message.

use crate::client::{check_status, json_headers, normalize_base_url};
use crate::envelope;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::NewSubscriber;

/// Stateless client for `POST /subscribers`.
#[derive(Debug, Clone)]
pub struct SubscribersClient {
    base_url: String,
}

impl SubscribersClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn build_subscribe(&self, input: &NewSubscriber) -> Result<HttpRequest, ApiError> {
        let body = envelope::wrap("subscriber", input)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/subscribers", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn parse_subscribe(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 201)?;
        Ok(())
    }
}
