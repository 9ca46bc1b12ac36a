//! State machine for the admin dashboard.
//!
//! The dashboard shows one count per resource, gathered from the three list
//! endpoints fetched in parallel. The fetches are independent but the
//! result is all-or-nothing: if any of them fails the whole load reports an
//! error and the previous stats stay on screen.

use crate::error::ApiError;
use crate::page::LoadToken;

/// Counts shown on the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub bookings: usize,
    pub blog_posts: usize,
    pub contacts: usize,
}

#[derive(Debug, Default)]
pub struct Dashboard {
    stats: DashboardStats,
    loading: bool,
    error: Option<String>,
    epoch: u64,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_load(&mut self) -> LoadToken {
        self.epoch += 1;
        self.loading = true;
        self.error = None;
        LoadToken { epoch: self.epoch }
    }

    /// Deliver the combined result of the three parallel fetches. Stale
    /// tokens are dropped, and a failure retains the previous stats.
    pub fn finish_load(&mut self, token: LoadToken, result: Result<DashboardStats, ApiError>) {
        if token.epoch != self.epoch {
            return;
        }
        self.loading = false;
        match result {
            Ok(stats) => self.stats = stats,
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    pub fn teardown(&mut self) {
        self.epoch += 1;
        self.loading = false;
    }

    pub fn stats(&self) -> DashboardStats {
        self.stats
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
