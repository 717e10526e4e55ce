//! Client library for the Gitea pull request REST API.
//!
//! A caller builds an [`Authentication`] context once, then lists
//! [`PullRequest`]s, submits or deletes [`PullRequestReview`]s, and
//! retrieves the [`PullReviewComment`]s attached to a review. Every
//! operation sends a single request, waits for the full response, and
//! returns the parsed entities or an [`ApiError`] carrying the HTTP
//! status and raw body.
//!
//! ```ignore
//! let auth = Authentication::new("https://git.example.com/api/v1/repos", "owner/repo", token)?;
//! let pulls = PullRequest::fetch(&auth, PullRequestQuery::default()).await?;
//! let review = pulls[0].submit_review(&auth, "LGTM", ReviewEvent::Approve).await?;
//! ```

mod auth;
mod error;
mod http;
#[cfg(test)]
pub(crate) mod mock;
mod pull_request;
mod review;
mod review_comment;
mod user;

pub use auth::Authentication;
pub use error::{ApiError, Result};
pub use pull_request::{
    PullRequest, PullRequestQuery, PullRequestSort, PullRequestState, StateFilter,
};
pub use review::{PullRequestReview, ReviewEvent};
pub use review_comment::PullReviewComment;
pub use user::User;
