//! Client for the admin password reset flow.
//!
//! Two steps: request a reset code by email (`POST /admin/passwords`, the
//! payload enveloped under `admin`), then confirm with the emailed code
//! (`PUT /admin/password`, a flat body; the backend takes this one
//! unwrapped).

use crate::client::{check_status, json_headers, normalize_base_url};
use crate::envelope;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{PasswordReset, PasswordResetRequest};

/// Stateless client for the password reset endpoints.
#[derive(Debug, Clone)]
pub struct PasswordsClient {
    base_url: String,
}

impl PasswordsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    pub fn build_request_reset(
        &self,
        input: &PasswordResetRequest,
    ) -> Result<HttpRequest, ApiError> {
        let body = envelope::wrap("admin", input)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/admin/passwords", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_confirm_reset(&self, input: &PasswordReset) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| {
            tracing::warn!(error = %e, "failed to serialize password reset");
            ApiError::Serialization(e.to_string())
        })?;
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/admin/password", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn parse_request_reset(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)?;
        Ok(())
    }

    pub fn parse_confirm_reset(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 200)?;
        Ok(())
    }
}
