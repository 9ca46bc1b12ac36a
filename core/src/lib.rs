//! Synchronous API client core for the Garden of Ancients backend.
//!
//! # Overview
//! The Garden of Ancients website is a thin UI over a remote REST backend:
//! visitors book visits, send contact messages and subscribe to the
//! newsletter; admins manage bookings, blog posts and messages. This crate
//! is the data-access and page-state layer for that UI, with no rendering
//! and no I/O of its own.
//!
//! # Design
//! - Resource clients are stateless; each holds only a `base_url`.
//! - Every operation is split into `build_*` (produces an `HttpRequest`) and
//!   `parse_*` (consumes an `HttpResponse`), so the I/O boundary is explicit
//!   and the core stays deterministic (host-does-IO pattern).
//! - Write payloads travel under the backend's singular-key envelope; list
//!   responses are normalized whether the backend answers with a bare array
//!   or a keyed object.
//! - Page controllers (`page`) are pure state machines mirroring each
//!   route's lifecycle; epoch tokens keep late responses from touching
//!   state after teardown.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod page;
pub mod types;

pub use client::{
    BlogPostsClient, BookingsClient, ContactsClient, PasswordsClient, SubscribersClient,
};
pub use config::ApiConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{
    BlogPost, BlogPostPatch, Booking, BookingPatch, BookingStatus, Contact, NewBlogPost,
    NewBooking, NewContact, NewSubscriber, PasswordReset, PasswordResetRequest,
};
