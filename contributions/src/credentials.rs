//! Credential validation, performed before any network I/O.

use std::fmt;

use validator::Validate;

use crate::error::{ContributionsError, Result};

/// Validated GitHub credentials.
///
/// Both fields are guaranteed non-empty once a value exists. The token is an
/// opaque secret: it is never persisted by this crate and is redacted from
/// `Debug` output so it cannot leak through logs.
#[derive(Clone, Validate)]
pub struct Credentials {
    #[validate(length(min = 1, message = "GitHub token is required"))]
    token: String,

    #[validate(length(min = 1, message = "GitHub username is required"))]
    username: String,
}

impl Credentials {
    /// Validate raw configuration values. Absent values should be passed as
    /// empty strings; they fail the same way.
    ///
    /// Fails closed with `ContributionsError::Configuration` naming every
    /// missing field, so a malformed request is never sent to the remote API.
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Result<Self> {
        let credentials = Self {
            token: token.into(),
            username: username.into(),
        };

        if let Err(errors) = credentials.validate() {
            let field_errors = errors.field_errors();
            let mut messages = Vec::new();
            // Fixed field order keeps the combined message deterministic.
            for field in ["token", "username"] {
                if let Some(violations) = field_errors.get(field) {
                    for violation in *violations {
                        if let Some(message) = &violation.message {
                            messages.push(message.to_string());
                        }
                    }
                }
            }
            return Err(ContributionsError::Configuration(messages.join(", ")));
        }

        Ok(credentials)
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("username", &self.username)
            .finish()
    }
}
