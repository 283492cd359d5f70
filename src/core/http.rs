//! Shared blocking HTTP plumbing for the GitHub and Google Cloud clients.

use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, Result};

/// User agent sent with every request. GitHub rejects requests without one.
pub const USER_AGENT: &str = concat!("ghstage/", env!("CARGO_PKG_VERSION"));

/// Build the blocking client shared by one remote service.
pub fn client(service: &'static str) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|source| ApiError::Transport { service, source }.into())
}

/// Append percent-encoded path segments to a base URL.
///
/// The base may carry its own path prefix (e.g. `/api/v3` on GitHub
/// Enterprise); a trailing slash on it is ignored.
pub fn join<'a, I>(service: &'static str, base: &str, segments: I) -> Result<Url>
where
    I: IntoIterator<Item = &'a str>,
{
    let invalid = || ApiError::Url {
        service,
        url: base.to_string(),
    };

    let mut url = Url::parse(base).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Send a request and turn any non-2xx answer into `ApiError::Status`.
pub fn send(service: &'static str, method: &str, url: &Url, req: RequestBuilder) -> Result<Response> {
    debug!(service, method, url = %url, "sending request");

    let resp = req
        .send()
        .map_err(|source| ApiError::Transport { service, source })?;

    let status = resp.status();
    debug!(service, status = status.as_u16(), "received response");

    if !status.is_success() {
        let body = resp.text().unwrap_or_default();
        return Err(ApiError::Status {
            service,
            method: method.to_string(),
            url: url.to_string(),
            status: status.as_u16(),
            body,
        }
        .into());
    }

    Ok(resp)
}

/// Decode a successful response body as JSON.
pub fn decode<T: DeserializeOwned>(service: &'static str, url: &Url, resp: Response) -> Result<T> {
    let body = resp
        .text()
        .map_err(|source| ApiError::Transport { service, source })?;

    serde_json::from_str(&body).map_err(|e| {
        ApiError::Decode {
            service,
            url: url.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}
