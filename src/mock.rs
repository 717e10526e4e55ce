//! wiremock-based Gitea mock server for testing.
//!
//! Provides `GiteaMockServer` for HTTP-level mocking of Gitea API calls,
//! plus the JSON fixtures shared across entity tests. Mocks are mounted
//! per endpoint; `auth()` yields an [`Authentication`] pointed at the
//! server.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::auth::Authentication;

/// Gitea user object fixture.
pub(crate) fn user_json(login: &str) -> serde_json::Value {
    json!({
        "id": 0,
        "login": login,
        "full_name": "John Developer",
        "email": format!("{login}@email.com"),
        "avatar_url": format!("https://git-server.com/user/avatar/{login}/-1"),
        "language": "",
        "is_admin": false,
        "last_login": "0001-01-01T00:00:00Z",
        "created": "2019-01-08T21:51:26Z",
        "username": login
    })
}

/// Gitea pull request object fixture.
pub(crate) fn pull_request_json(number: u64, title: &str, state: &str) -> serde_json::Value {
    json!({
        "id": number + 600,
        "number": number,
        "html_url": format!("https://git-server.com/GiteaOwner/FocusApp/pulls/{number}"),
        "base": { "ref": "master", "sha": "def456" },
        "head": { "ref": format!("feature/{number}"), "sha": "abc123" },
        "title": title,
        "body": "Adds the birdseye view to the backend framework.",
        "user": user_json("john.developer"),
        "state": state
    })
}

/// Gitea review object fixture.
pub(crate) fn review_json(id: i64, state: &str) -> serde_json::Value {
    json!({
        "id": id,
        "body": "Lets reconsider the need here and revert as necessary.",
        "comments_count": 1,
        "commit_id": "7636adf5d3c54584a4588f074a7902163ce61a8d",
        "html_url": format!("https://git-server.com/GiteaOwner/FocusApp/pulls/619#issuecomment-{id}"),
        "official": false,
        "pull_request_url": "https://git-server.com/GiteaOwner/FocusApp/pulls/619",
        "stale": "false",
        "state": state,
        "submitted_at": "2020-07-01T19:48:08Z",
        "user": user_json("john.developer")
    })
}

/// The fixed review comment sample used by the mapping tests.
pub(crate) fn review_comment_json() -> serde_json::Value {
    json!({
        "id": 10108,
        "body": "We should be concealing C++ over time behind the backend framework to so that the client application can interop from Swift with a pure ObjC API. Lets reconsider the need here and revert as necessary.",
        "user": user_json("john.developer"),
        "pull_request_review_id": 2079,
        "created_at": "2020-07-01T19:48:08Z",
        "updated_at": "2020-07-02T19:44:32Z",
        "path": "/Backend/BirdseyeView.mm",
        "commit_id": "7636adf5d3c54584a4588f074a7902163ce61a8d",
        "original_commit_id": "",
        "diff_hunk": "+#import <Backend/Backend.h>",
        "position": 12,
        "original_position": 0,
        "html_url": "https://git-server.com/GiteaOwner/FocusApp/pulls/619#issuecomment-10108",
        "pull_request_url": "https://git-server.com/GiteaOwner/FocusApp/pulls/619"
    })
}

/// wiremock-based Gitea mock server.
///
/// Mount helpers cover the endpoints the crate talks to; each takes the
/// response to produce so tests control both the happy path and error
/// statuses.
pub(crate) struct GiteaMockServer {
    server: MockServer,
}

impl GiteaMockServer {
    pub(crate) async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// An authentication context pointed at this server.
    pub(crate) fn auth(&self, repo: &str) -> Authentication {
        Authentication::new(self.server.uri(), repo, "test-token").unwrap()
    }

    pub(crate) async fn received_requests(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Mock GET /{repo}/pulls, requiring the standard headers.
    pub(crate) async fn list_pull_requests(&self, repo: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/{repo}/pulls")))
            .and(header("Authorization", "token test-token"))
            .and(header("Accept", "application/json"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Mock GET /{repo}/pulls, additionally requiring a query parameter.
    pub(crate) async fn list_pull_requests_with_query(
        &self,
        repo: &str,
        key: &str,
        value: &str,
        response: ResponseTemplate,
    ) {
        Mock::given(method("GET"))
            .and(path(format!("/{repo}/pulls")))
            .and(query_param(key, value))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Mock POST /{repo}/pulls/{number}/reviews with an exact body match.
    pub(crate) async fn submit_review(
        &self,
        repo: &str,
        number: u64,
        expected_body: serde_json::Value,
        response: ResponseTemplate,
    ) {
        Mock::given(method("POST"))
            .and(path(format!("/{repo}/pulls/{number}/reviews")))
            .and(header("Authorization", "token test-token"))
            .and(header("Content-Type", "application/json"))
            .and(body_json(expected_body))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Mock GET /{repo}/pulls/{number}/reviews.
    pub(crate) async fn list_reviews(&self, repo: &str, number: u64, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(format!("/{repo}/pulls/{number}/reviews")))
            .and(header("Authorization", "token test-token"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Mock DELETE /{repo}/pulls/{number}/reviews/{id}.
    pub(crate) async fn delete_review(
        &self,
        repo: &str,
        number: u64,
        review_id: i64,
        response: ResponseTemplate,
    ) {
        Mock::given(method("DELETE"))
            .and(path(format!("/{repo}/pulls/{number}/reviews/{review_id}")))
            .and(header("Authorization", "token test-token"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }

    /// Mock GET /{repo}/pulls/{number}/reviews/{id}/comments.
    pub(crate) async fn list_review_comments(
        &self,
        repo: &str,
        number: u64,
        review_id: i64,
        response: ResponseTemplate,
    ) {
        Mock::given(method("GET"))
            .and(path(format!(
                "/{repo}/pulls/{number}/reviews/{review_id}/comments"
            )))
            .and(header("Authorization", "token test-token"))
            .respond_with(response)
            .mount(&self.server)
            .await;
    }
}
