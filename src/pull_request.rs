//! Pull request entity, list operation, and review submission.

use std::fmt;

use serde::{Deserialize, Deserializer};
use serde_json::json;

use crate::auth::Authentication;
use crate::error::Result;
use crate::http;
use crate::review::{PullRequestReview, ReviewEvent};
use crate::user::User;

/// State a pull request can actually be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestState {
    Open,
    Closed,
}

impl PullRequestState {
    pub fn as_str(self) -> &'static str {
        match self {
            PullRequestState::Open => "open",
            PullRequestState::Closed => "closed",
        }
    }
}

impl fmt::Display for PullRequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// State filter for the list endpoint.
///
/// `All` is only valid as a filter value; no pull request is ever in
/// state "all".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StateFilter {
    #[default]
    Open,
    Closed,
    All,
}

impl StateFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StateFilter::Open => "open",
            StateFilter::Closed => "closed",
            StateFilter::All => "all",
        }
    }
}

/// Sort criteria accepted by the list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PullRequestSort {
    Oldest,
    #[default]
    RecentUpdate,
    LeastUpdate,
    MostComment,
    LeastComment,
    Priority,
}

impl PullRequestSort {
    pub fn as_str(self) -> &'static str {
        match self {
            PullRequestSort::Oldest => "oldest",
            PullRequestSort::RecentUpdate => "recentupdate",
            PullRequestSort::LeastUpdate => "leastupdate",
            PullRequestSort::MostComment => "mostcomment",
            PullRequestSort::LeastComment => "leastcomment",
            PullRequestSort::Priority => "priority",
        }
    }
}

/// Parameters for listing pull requests.
///
/// Defaults match the server's: open pull requests, most recently
/// updated first, no limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct PullRequestQuery {
    pub state: StateFilter,
    pub sort: PullRequestSort,
    /// Maximum number of results; 0 means unlimited.
    pub limit: u32,
}

/// A proposed code change submitted against a target branch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PullRequest {
    pub id: i64,
    pub number: u64,
    pub html_url: String,
    #[serde(rename = "base", deserialize_with = "branch_name")]
    pub target_branch: String,
    #[serde(rename = "head", deserialize_with = "branch_name")]
    pub source_branch: String,
    pub title: String,
    #[serde(rename = "body")]
    pub description: Option<String>,
    #[serde(rename = "user")]
    pub author: User,
    pub state: PullRequestState,
}

/// Extract the branch name from a `{"ref": ...}` branch object.
fn branch_name<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Branch {
        #[serde(rename = "ref")]
        name: String,
    }

    Ok(Branch::deserialize(deserializer)?.name)
}

impl PullRequest {
    /// List the pull requests matching `query`, in the order the server
    /// returned them.
    pub async fn fetch(auth: &Authentication, query: PullRequestQuery) -> Result<Vec<PullRequest>> {
        let mut url = format!(
            "{}/{}/pulls?state={}&sort={}",
            auth.url(),
            auth.repo(),
            query.state.as_str(),
            query.sort.as_str(),
        );
        if query.limit > 0 {
            url.push_str(&format!("&limit={}", query.limit));
        }

        http::get_json(auth, &url).await
    }

    /// Submit a review verdict on this pull request and return the review
    /// the server created from it.
    pub async fn submit_review(
        &self,
        auth: &Authentication,
        message: &str,
        event: ReviewEvent,
    ) -> Result<PullRequestReview> {
        let url = format!(
            "{}/{}/pulls/{}/reviews",
            auth.url(),
            auth.repo(),
            self.number
        );
        let body = json!({ "body": message, "event": event.as_str() });

        http::post_json(auth, &url, &body).await
    }
}

impl fmt::Display for PullRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The author block gets one extra level of indentation.
        let author = self.author.to_string().replace('\n', "\n\t");

        writeln!(f, "PullRequest {{")?;
        writeln!(f, "\tnumber: {}", self.number)?;
        writeln!(f, "\ttitle: {}", self.title)?;
        writeln!(f, "\tauthor: {author}")?;
        writeln!(f, "\tstate: {}", self.state)?;
        writeln!(f, "\tid: {}", self.id)?;
        writeln!(f, "\ttarget: {}", self.target_branch)?;
        writeln!(f, "\tsource: {}", self.source_branch)?;
        writeln!(
            f,
            "\tdescription: {}",
            self.description.as_deref().unwrap_or("")
        )?;
        write!(f, "}}")
    }
}
