//! State machine for the admin list pages (bookings, blog, messages).
//!
//! The lifecycle is `loading → {success, error}`: a refresh replaces the
//! whole list on success, while an error keeps whatever was loaded before
//! and records a dismissible message. Mutations (`remove`, `replace`,
//! `prepend`) are meant to be applied only after the backend has
//! acknowledged the corresponding call; the controller never speculates.

use crate::error::ApiError;
use crate::page::LoadToken;
use crate::types::{BlogPost, Booking, Contact};

/// Anything the list pages manage by server-assigned id.
pub trait Identified {
    fn id(&self) -> i64;
}

impl Identified for Booking {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for BlogPost {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Identified for Contact {
    fn id(&self) -> i64 {
        self.id
    }
}

/// Render-local list state for one admin page.
#[derive(Debug)]
pub struct ListController<T> {
    items: Vec<T>,
    loading: bool,
    error: Option<String>,
    epoch: u64,
}

impl<T: Identified> ListController<T> {
    pub fn new() -> Self {
        ListController {
            items: Vec::new(),
            loading: false,
            error: None,
            epoch: 0,
        }
    }

    /// Enter the loading state and hand out a token for the fetch about to
    /// start. Starting a new load supersedes any load still in flight.
    pub fn start_load(&mut self) -> LoadToken {
        self.epoch += 1;
        self.loading = true;
        self.error = None;
        LoadToken { epoch: self.epoch }
    }

    /// Deliver the result of a fetch. Results carrying a stale token are
    /// dropped: either a newer refresh superseded them or the page was torn
    /// down in the meantime.
    pub fn finish_load(&mut self, token: LoadToken, result: Result<Vec<T>, ApiError>) {
        if token.epoch != self.epoch {
            return;
        }
        self.loading = false;
        match result {
            Ok(items) => self.items = items,
            // Keep the previously loaded list visible behind the banner.
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Invalidate outstanding tokens on page teardown so late responses
    /// cannot touch state afterwards.
    pub fn teardown(&mut self) {
        self.epoch += 1;
        self.loading = false;
    }

    /// Remove the record with `id` after a confirmed delete. Returns whether
    /// anything was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Swap in the server's version of an updated record. Returns whether a
    /// matching id was found.
    pub fn replace(&mut self, updated: T) -> bool {
        match self.items.iter_mut().find(|item| item.id() == updated.id()) {
            Some(slot) => {
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Put a freshly created record at the top of the list.
    pub fn prepend(&mut self, item: T) {
        self.items.insert(0, item);
    }

    /// Record a failed mutation without touching the list.
    pub fn record_error(&mut self, err: &ApiError) {
        self.error = Some(err.to_string());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl<T: Identified> Default for ListController<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Split the blog index into the featured post (the first element) and the
/// secondary grid behind it.
pub fn split_featured<T>(items: &[T]) -> (Option<&T>, &[T]) {
    match items {
        [first, rest @ ..] => (Some(first), rest),
        [] => (None, &[]),
    }
}
