//! Backend base URL resolution.
//!
//! The backend location is environment-provided; nothing else in the client
//! is configurable. Binaries are expected to load `.env` through `dotenvy`
//! before calling [`ApiConfig::from_env`].

/// Environment variable naming the backend base URL.
pub const BASE_URL_VAR: &str = "ANCIENTS_API_URL";

/// Fallback when the environment does not name a backend.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Resolve the base URL from `ANCIENTS_API_URL`, defaulting to the local
    /// development backend.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        ApiConfig { base_url }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}
