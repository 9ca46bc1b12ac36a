//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and parses `HttpResponse` values without
//! ever touching the network; the caller (host) is responsible for executing
//! the actual I/O. This separation keeps the resource clients deterministic
//! and easy to test against canned responses.
//!
//! All fields use owned types (`String`, `Vec`) so values can be handed to
//! whatever transport the host uses without lifetime concerns.

/// HTTP method for a request.
///
/// `Patch` carries partial resource updates; `Put` is used only by the
/// password reset confirmation endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by the `build_*` methods of the resource clients. The caller is
/// responsible for executing this request against the network and returning
/// the corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Constructed by the caller after executing an `HttpRequest`, then passed
/// to the `parse_*` methods of the resource clients for deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
