//! Page-controller state machines.
//!
//! # Design
//! Each route's UI owns one of these controllers exclusively; there is no
//! shared mutable state between pages. The controllers are pure data; the
//! host wires user events to the resource clients, executes the I/O, and
//! feeds results back in.
//!
//! In-flight requests cannot be cancelled, so every fetch hands out a
//! [`LoadToken`] stamped with the controller's current epoch. A result
//! delivered with a stale token (a newer refresh started, or the page was
//! torn down) is silently ignored instead of clobbering state.

pub mod dashboard;
pub mod forms;
pub mod list;

/// Ties an in-flight fetch to the controller state it was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadToken {
    pub(crate) epoch: u64,
}

pub use dashboard::{Dashboard, DashboardStats};
pub use forms::{
    BookingFields, BookingForm, ContactFields, ContactForm, FormController, NewsletterFields,
    NewsletterForm, Service, SubmitPhase, SubmitToken, SERVICES,
};
pub use list::{split_featured, Identified, ListController};
