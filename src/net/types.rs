//! Request and response bodies for the auth backend.
//!
//! DESIGN
//! ======
//! Input structs are transient: a form builds one on submit, the initiator
//! consumes it for a single round trip, and it is dropped when the request
//! settles. Field-level validation runs here so nothing incomplete is sent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Input rejected before any request is dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("log in before linking a Reddit account")]
    NotAuthenticated,
}

/// Body of `POST /auth/register`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AccountRegistration {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl AccountRegistration {
    /// # Errors
    ///
    /// Returns the first missing field, or `InvalidEmail` when the address is
    /// not of the form `local@domain`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("email", &self.email)?;
        require("username", &self.username)?;
        require("password", &self.password)?;
        if !is_plausible_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// Fields of the form-encoded `POST /auth/login` body.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

impl LoginCredentials {
    /// # Errors
    ///
    /// Returns the first missing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("username", &self.username)?;
        require("password", &self.password)
    }

    /// Key/value pairs in the order the login form sends them.
    pub fn form_pairs(&self) -> [(&'static str, &str); 2] {
        [("username", self.username.as_str()), ("password", self.password.as_str())]
    }
}

/// Body of `POST /reddit/auth`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RedditLinkCredentials {
    pub username: String,
    pub password: String,
}

impl RedditLinkCredentials {
    /// # Errors
    ///
    /// Returns the first missing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("Reddit username", &self.username)?;
        require("Reddit password", &self.password)
    }
}

/// Decoded success body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

// Credentials carry passwords; keep them out of debug output.
macro_rules! redacted_debug {
    ($ty:ident { $($field:ident),* }) => {
        impl std::fmt::Debug for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.debug_struct(stringify!($ty))
                    $(.field(stringify!($field), &self.$field))*
                    .field("password", &"<redacted>")
                    .finish()
            }
        }
    };
}

redacted_debug!(AccountRegistration { email, username });
redacted_debug!(LoginCredentials { username });
redacted_debug!(RedditLinkCredentials { username });

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

fn is_plausible_email(raw: &str) -> bool {
    let Some((local, domain)) = raw.trim().split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !raw.trim().chars().any(char::is_whitespace)
}
