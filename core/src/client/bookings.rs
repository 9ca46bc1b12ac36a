//! Client for the bookings resource.
//!
//! Visitors submit bookings through the public endpoint; everything else is
//! an admin operation. Status changes ride the ordinary update call as a
//! status-only patch, mirroring how the admin table drives them.

use crate::client::{check_status, json_headers, normalize_base_url, parse_record};
use crate::envelope;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Booking, BookingPatch, BookingStatus, NewBooking};

/// Stateless client for `/bookings` and `/admin/bookings`.
#[derive(Debug, Clone)]
pub struct BookingsClient {
    base_url: String,
}

impl BookingsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    /// Public booking form submission: `POST /bookings`.
    pub fn build_submit(&self, input: &NewBooking) -> Result<HttpRequest, ApiError> {
        let body = envelope::wrap("booking", input)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/bookings", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/admin/bookings", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/admin/bookings/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_update(&self, id: i64, patch: &BookingPatch) -> Result<HttpRequest, ApiError> {
        let body = envelope::wrap("booking", patch)?;
        Ok(HttpRequest {
            method: HttpMethod::Patch,
            path: format!("{}/admin/bookings/{id}", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    /// Convenience for the admin table's status dropdown; delegates to
    /// `build_update` with a status-only patch.
    pub fn build_update_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> Result<HttpRequest, ApiError> {
        self.build_update(id, &BookingPatch::status(status))
    }

    pub fn build_delete(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/admin/bookings/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_submit(&self, response: HttpResponse) -> Result<Booking, ApiError> {
        check_status(&response, 201)?;
        parse_record(&response)
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Booking>, ApiError> {
        check_status(&response, 200)?;
        envelope::unwrap_list("bookings", &response.body)
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<Booking, ApiError> {
        check_status(&response, 200)?;
        parse_record(&response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Booking, ApiError> {
        check_status(&response, 200)?;
        parse_record(&response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}
