// src/core/net.rs

// Single blocking GET with a status check. No retries.

use std::time::Duration;

use tracing::{debug, info};

use crate::config::consts::{FETCH_TIMEOUT_SECS, USER_AGENT};
use crate::error::{Error, Result};

pub fn fetch_html(url: &str) -> Result<String> {
    let fail = |reason: String| Error::Fetch { url: s!(url), reason };

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
        .build()
        .map_err(|e| fail(e.to_string()))?;

    info!("fetching {url}");
    let resp = client.get(url).send().map_err(|e| fail(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        return Err(fail(format!("HTTP status {status}")));
    }
    let body = resp.text().map_err(|e| fail(e.to_string()))?;
    debug!("fetched {} bytes", body.len());
    Ok(body)
}
