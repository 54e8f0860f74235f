//! Backend origin and client route configuration.
//!
//! The backend origin is fixed per build. `SAVEDDIT_API_ORIGIN` may be set at
//! compile time to point the bundle at another backend.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";

/// Path prefix every client route is mounted under.
pub const BASE_PATH: &str = "/saveddit";

pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
pub const REDDIT_AUTH_PATH: &str = "/reddit/auth";

/// Where the backend lives and how endpoint URLs are built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub origin: String,
}

impl ApiConfig {
    pub fn new(origin: impl Into<String>) -> Self {
        let origin = origin.into().trim_end_matches('/').to_owned();
        Self { origin }
    }

    /// Build the config baked into this bundle.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("SAVEDDIT_API_ORIGIN").unwrap_or(DEFAULT_API_ORIGIN))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }

    pub fn login_url(&self) -> String {
        self.endpoint(LOGIN_PATH)
    }

    pub fn register_url(&self) -> String {
        self.endpoint(REGISTER_PATH)
    }

    pub fn reddit_auth_url(&self) -> String {
        self.endpoint(REDDIT_AUTH_PATH)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
