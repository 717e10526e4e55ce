//! Authentication context for a Gitea repository.

use std::fmt;

use crate::error::{ApiError, Result};

/// Immutable credential bundle addressing a single repository.
///
/// Built once by the caller and passed by reference to every operation;
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Authentication {
    url: String,
    repo: String,
    token: String,
}

impl Authentication {
    /// Build a context from the API base URL, the repository path segment
    /// (e.g. `owner/name`), and an access token.
    ///
    /// Fails if any of the three values is empty.
    pub fn new(
        url: impl Into<String>,
        repo: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self> {
        let auth = Self {
            url: url.into(),
            repo: repo.into(),
            token: token.into(),
        };

        if auth.url.is_empty() {
            return Err(ApiError::InvalidArgument(
                "authentication url must not be empty".to_string(),
            ));
        }
        if auth.repo.is_empty() {
            return Err(ApiError::InvalidArgument(
                "authentication repo must not be empty".to_string(),
            ));
        }
        if auth.token.is_empty() {
            return Err(ApiError::InvalidArgument(
                "authentication token must not be empty".to_string(),
            ));
        }

        Ok(auth)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Authentication {{")?;
        writeln!(f, "\tapi url: {}", self.url)?;
        writeln!(f, "\trepo: {}", self.repo)?;
        writeln!(f, "\ttoken: {}", self.token)?;
        write!(f, "}}")
    }
}
