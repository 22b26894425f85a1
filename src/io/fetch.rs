//! Bounded HTTP fetch for the remote dataset.

use std::time::Duration;

use crate::core::error::AnalysisError;

/// Fetch `url` and return the response body.
///
/// Each attempt is bounded by `timeout`; after a failure the fetch is
/// retried up to `retries` more times before giving up with
/// [`AnalysisError::DataUnavailable`]. Non-2xx statuses count as failures.
pub fn fetch_bytes(url: &str, timeout: Duration, retries: u32) -> Result<Vec<u8>, AnalysisError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AnalysisError::DataUnavailable(format!("Failed to build HTTP client: {}", e)))?;

    let mut last_error = String::new();
    for attempt in 0..=retries {
        if attempt > 0 {
            log::warn!(
                "Fetch of {} failed ({}), retrying (attempt {} of {})",
                url,
                last_error,
                attempt + 1,
                retries + 1
            );
        }

        let outcome = client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.bytes());

        match outcome {
            Ok(bytes) => {
                log::debug!("Fetched {} bytes from {}", bytes.len(), url);
                return Ok(bytes.to_vec());
            }
            Err(e) => last_error = e.to_string(),
        }
    }

    Err(AnalysisError::DataUnavailable(format!(
        "Failed to fetch {}: {}",
        url, last_error
    )))
}
