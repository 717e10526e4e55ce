//! Review comment entity with a field-name-driven JSON mapping.

use std::fmt;

use serde_json::Value;

use crate::auth::Authentication;
use crate::error::{ApiError, Result};
use crate::http;
use crate::pull_request::PullRequest;
use crate::review::PullRequestReview;
use crate::user::User;

/// An inline comment attached to a review, referencing a file path and
/// diff position.
///
/// A freshly constructed comment has every field unset; [`from_json`]
/// fills in whichever fields the wire object carries, so an unset field
/// stays distinguishable from an empty or zero value.
///
/// [`from_json`]: PullReviewComment::from_json
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PullReviewComment {
    pub body: Option<String>,
    pub commit_id: Option<String>,
    pub created_at: Option<String>,
    pub diff_hunk: Option<String>,
    pub html_url: Option<String>,
    pub id: Option<i64>,
    pub original_commit_id: Option<String>,
    pub original_position: Option<i64>,
    pub path: Option<String>,
    pub position: Option<i64>,
    pub pull_request_review_id: Option<i64>,
    pub pull_request_url: Option<String>,
    pub updated_at: Option<String>,
    pub user: Option<User>,
}

impl PullReviewComment {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while no field has been populated.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Populate a comment from a wire object, key by key.
    ///
    /// Keys with no matching field are ignored; `user` is deserialized
    /// into a [`User`] rather than kept as a raw nested object.
    pub fn from_json(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            ApiError::InvalidArgument("review comment must be a JSON object".to_string())
        })?;

        let mut comment = Self::new();
        for (key, value) in object {
            match key.as_str() {
                "body" => comment.body = as_string(value),
                "commit_id" => comment.commit_id = as_string(value),
                "created_at" => comment.created_at = as_string(value),
                "diff_hunk" => comment.diff_hunk = as_string(value),
                "html_url" => comment.html_url = as_string(value),
                "id" => comment.id = value.as_i64(),
                "original_commit_id" => comment.original_commit_id = as_string(value),
                "original_position" => comment.original_position = value.as_i64(),
                "path" => comment.path = as_string(value),
                "position" => comment.position = value.as_i64(),
                "pull_request_review_id" => comment.pull_request_review_id = value.as_i64(),
                "pull_request_url" => comment.pull_request_url = as_string(value),
                "updated_at" => comment.updated_at = as_string(value),
                "user" => comment.user = Some(serde_json::from_value(value.clone())?),
                _ => {}
            }
        }

        Ok(comment)
    }

    /// Fetch every comment attached to `review`.
    pub async fn fetch(
        auth: &Authentication,
        pull_request: &PullRequest,
        review: &PullRequestReview,
    ) -> Result<Vec<PullReviewComment>> {
        let url = format!(
            "{}/{}/pulls/{}/reviews/{}/comments",
            auth.url(),
            auth.repo(),
            pull_request.number,
            review.id
        );

        let elements: Vec<Value> = http::get_json(auth, &url).await?;
        elements.iter().map(Self::from_json).collect()
    }
}

fn as_string(value: &Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

impl fmt::Display for PullReviewComment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn unset_or<T: fmt::Display>(value: &Option<T>) -> String {
            value.as_ref().map_or_else(String::new, T::to_string)
        }

        writeln!(f, "PullReviewComment {{")?;
        writeln!(f, "\tid: {}", unset_or(&self.id))?;
        writeln!(f, "\tpath: {}", unset_or(&self.path))?;
        writeln!(f, "\tposition: {}", unset_or(&self.position))?;
        writeln!(f, "\tbody: {}", unset_or(&self.body))?;
        writeln!(f, "\tcommit_id: {}", unset_or(&self.commit_id))?;
        writeln!(f, "\tdiff_hunk: {}", unset_or(&self.diff_hunk))?;
        writeln!(f, "\tcreated_at: {}", unset_or(&self.created_at))?;
        writeln!(f, "\tupdated_at: {}", unset_or(&self.updated_at))?;
        writeln!(
            f,
            "\tuser: {}",
            self.user
                .as_ref()
                .map_or_else(String::new, |u| u.login.clone())
        )?;
        write!(f, "}}")
    }
}
