//! Client for the contacts resource.
//!
//! Visitors submit messages through the public contact form; admins read and
//! delete them. There is no update call; messages are immutable once sent.

use crate::client::{check_status, json_headers, normalize_base_url, parse_record};
use crate::envelope;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Contact, NewContact};

/// Stateless client for `/contacts` and `/admin/contacts`.
#[derive(Debug, Clone)]
pub struct ContactsClient {
    base_url: String,
}

impl ContactsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
        }
    }

    /// Public contact form submission: `POST /contacts`.
    pub fn build_submit(&self, input: &NewContact) -> Result<HttpRequest, ApiError> {
        let body = envelope::wrap("contact", input)?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/contacts", self.base_url),
            headers: json_headers(),
            body: Some(body),
        })
    }

    pub fn build_list(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/admin/contacts", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_get(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/admin/contacts/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_delete(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/admin/contacts/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_submit(&self, response: HttpResponse) -> Result<Contact, ApiError> {
        check_status(&response, 201)?;
        parse_record(&response)
    }

    pub fn parse_list(&self, response: HttpResponse) -> Result<Vec<Contact>, ApiError> {
        check_status(&response, 200)?;
        envelope::unwrap_list("contacts", &response.body)
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<Contact, ApiError> {
        check_status(&response, 200)?;
        parse_record(&response)
    }

    pub fn parse_delete(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_status(&response, 204)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ContactsClient {
        ContactsClient::new("http://localhost:3000")
    }

    #[test]
    fn build_submit_omits_empty_optionals() {
        let input = NewContact {
            full_name: "Sam Otieno".to_string(),
            email: "sam@example.com".to_string(),
            phone_number: None,
            organization: None,
            subject: Some("School trip".to_string()),
            message: "Do you host school trips?".to_string(),
        };
        let req = client().build_submit(&input).unwrap();
        assert_eq!(req.path, "http://localhost:3000/contacts");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["contact"]["subject"], "School trip");
        assert!(body["contact"].get("phone_number").is_none());
    }

    #[test]
    fn build_delete_targets_admin_endpoint() {
        let req = client().build_delete(4);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/admin/contacts/4");
    }

    #[test]
    fn parse_list_normalizes_keyed_object() {
        let response = HttpResponse {
            status: 200,
            headers: Vec::new(),
            body: r#"{"contacts":[{"id":1,"full_name":"Sam Otieno","email":"sam@example.com",
                "message":"hi","created_at":"2026-08-01T08:30:00Z",
                "updated_at":"2026-08-01T08:30:00Z"}]}"#
                .to_string(),
        };
        let contacts = client().parse_list(response).unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].full_name, "Sam Otieno");
    }

    #[test]
    fn parse_delete_server_error() {
        let response = HttpResponse {
            status: 500,
            headers: Vec::new(),
            body: "internal error".to_string(),
        };
        let err = client().parse_delete(response).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }
}
