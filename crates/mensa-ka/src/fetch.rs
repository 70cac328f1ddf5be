//! The retrieval primitive shared by date discovery and menu fetching.

use crate::types::TransportError;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("mensa-ka/", env!("CARGO_PKG_VERSION"));

/// Build the default client. No timeout is set; callers that need one
/// inject their own client.
pub fn default_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_default()
}

/// GET `url`, require a success status, and return the full body.
pub async fn get_bytes(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, TransportError> {
    tracing::debug!("GET {url}");

    let resp = client
        .get(url)
        .send()
        .await
        .map_err(|source| TransportError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = resp.status();
    if !status.is_success() {
        return Err(TransportError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = resp.bytes().await.map_err(|source| TransportError::Body {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!("GET {url} -> {status}, {} bytes", body.len());
    Ok(body.to_vec())
}
