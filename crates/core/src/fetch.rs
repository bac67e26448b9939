//! HTTP client for fetching JSON samples.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{ArtGenError, Result};

/// Build the HTTP client used for every fetch in one invocation.
pub fn build_client() -> Result<reqwest::Client> {
    reqwest::Client::builder().build().map_err(|err| {
        warn!(error = %err, "Failed to build HTTP client.");
        ArtGenError::Client(err)
    })
}

/// GET `url` and parse the body as JSON.
///
/// Non-success statuses, transport errors, unparseable bodies and a JSON
/// `null` body are all errors.
pub async fn fetch_json(client: &reqwest::Client, url: &str) -> Result<Value> {
    debug!(%url, "Sending fetch request.");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| ArtGenError::Network {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    debug!(%url, %status, "Received fetch response.");
    if !status.is_success() {
        return Err(ArtGenError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|source| ArtGenError::Network {
            url: url.to_string(),
            source,
        })?;
    let value: Value =
        serde_json::from_str(&body).map_err(|source| ArtGenError::MalformedJson {
            url: url.to_string(),
            source,
        })?;

    if value.is_null() {
        return Err(ArtGenError::EmptyPayload {
            url: url.to_string(),
        });
    }
    Ok(value)
}

/// Like [`fetch_json`], but reports the failure and returns `None`.
pub async fn fetch_or_report(client: &reqwest::Client, url: &str) -> Option<Value> {
    match fetch_json(client, url).await {
        Ok(value) => Some(value),
        Err(err) => {
            report_fetch_error(url, &err);
            None
        }
    }
}

/// Print a fetch failure for the operator and log it.
pub fn report_fetch_error(url: &str, err: &ArtGenError) {
    warn!(%url, error = %err, "Fetch failed.");
    eprintln!("❌ Error fetching from {url}: {err}");
}
