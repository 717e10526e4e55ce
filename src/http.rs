//! Shared request plumbing over reqwest.
//!
//! Every operation opens a fresh connection, sends a single request, and
//! waits for the full response; connections are not reused across calls.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::auth::Authentication;
use crate::error::{ApiError, Result};

/// Build a request carrying the standard Gitea headers.
fn request(auth: &Authentication, method: Method, url: &str) -> RequestBuilder {
    reqwest::Client::new()
        .request(method, url)
        .header(AUTHORIZATION, format!("token {}", auth.token()))
        .header(ACCEPT, "application/json")
}

/// Read the response body, rejecting any status outside [200, 300).
async fn read_success(response: Response) -> Result<String> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        error!(
            status = status.as_u16(),
            %body,
            "unexpected response code received from server"
        );
        return Err(ApiError::Http {
            status: status.as_u16(),
            body,
        });
    }

    Ok(body)
}

pub(crate) async fn get_json<T: DeserializeOwned>(auth: &Authentication, url: &str) -> Result<T> {
    debug!(%url, "sending GET request");
    let response = request(auth, Method::GET, url).send().await?;
    let body = read_success(response).await?;
    Ok(serde_json::from_str(&body)?)
}

pub(crate) async fn post_json<T: DeserializeOwned>(
    auth: &Authentication,
    url: &str,
    body: &serde_json::Value,
) -> Result<T> {
    debug!(%url, "sending POST request");
    let response = request(auth, Method::POST, url).json(body).send().await?;
    let body = read_success(response).await?;
    Ok(serde_json::from_str(&body)?)
}

pub(crate) async fn delete(auth: &Authentication, url: &str) -> Result<()> {
    debug!(%url, "sending DELETE request");
    let response = request(auth, Method::DELETE, url).send().await?;
    read_success(response).await.map(|_| ())
}
