//! Pull request review entity and operations.

use std::fmt;

use serde::Deserialize;

use crate::auth::Authentication;
use crate::error::Result;
use crate::http;
use crate::pull_request::PullRequest;
use crate::user::{User, wire_bool};

/// Verdict submitted with a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewEvent {
    Approve,
    RequestChanges,
}

impl ReviewEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewEvent::Approve => "APPROVED",
            ReviewEvent::RequestChanges => "REQUEST_CHANGES",
        }
    }
}

/// An approval or change-request verdict attached to a pull request.
///
/// Parsed either from a list fetch or from the response to a review
/// submission.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PullRequestReview {
    pub id: i64,
    pub body: String,
    pub comments_count: i64,
    pub commit_id: String,
    pub html_url: String,
    #[serde(deserialize_with = "wire_bool")]
    pub official: bool,
    pub pull_request_url: String,
    #[serde(deserialize_with = "wire_bool")]
    pub stale: bool,
    /// Verdict state as sent by the server, e.g. `APPROVED` or
    /// `REQUEST_CHANGES`.
    pub state: String,
    pub submitted_at: String,
    pub user: User,
}

impl PullRequestReview {
    /// Fetch every review on `pull_request`.
    pub async fn fetch(
        auth: &Authentication,
        pull_request: &PullRequest,
    ) -> Result<Vec<PullRequestReview>> {
        let url = format!(
            "{}/{}/pulls/{}/reviews",
            auth.url(),
            auth.repo(),
            pull_request.number
        );

        http::get_json(auth, &url).await
    }

    /// Delete this review on the server.
    ///
    /// Returns true only when the server acknowledged the deletion. The
    /// entity does not self-invalidate: callers should discard their
    /// local copy after a successful delete.
    pub async fn delete(&self, auth: &Authentication, pull_request: &PullRequest) -> bool {
        let url = format!(
            "{}/{}/pulls/{}/reviews/{}",
            auth.url(),
            auth.repo(),
            pull_request.number,
            self.id
        );

        http::delete(auth, &url).await.is_ok()
    }
}

impl fmt::Display for PullRequestReview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PullRequestReview {{")?;
        writeln!(f, "\tstate: {}", self.state)?;
        writeln!(f, "\tuser: {}", self.user.login)?;
        writeln!(f, "\tbody: {}", self.body)?;
        write!(f, "}}")
    }
}
