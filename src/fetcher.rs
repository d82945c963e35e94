use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;
use tracing::info;

use crate::models::PageContent;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const ACCEPT_LANGUAGE: &str = "en-GB,en-US;q=0.9,en;q=0.8";

// Rotated per request so the cadence isn't tied to a single fingerprint.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:109.0) Gecko/20100101 Firefox/115.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/16.5 Safari/605.1.15",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/114.0.0.0 Safari/537.36",
];

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Single GET with a bounded timeout. One attempt, no retries; any network
/// error, timeout, or non-2xx status surfaces as a `FetchError`.
pub fn fetch_page(url: &str, rng: &mut impl Rng) -> Result<PageContent, FetchError> {
    let user_agent = USER_AGENTS.choose(rng).copied().unwrap_or(USER_AGENTS[0]);

    let client = reqwest::blocking::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()?;

    let body = client
        .get(url)
        .header("User-Agent", user_agent)
        .header("Accept-Language", ACCEPT_LANGUAGE)
        .send()?
        .error_for_status()?
        .text()?;

    info!("successfully fetched the page");
    Ok(PageContent::new(body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_pool_is_nonempty_and_browser_like() {
        assert!(!USER_AGENTS.is_empty());
        for ua in USER_AGENTS {
            assert!(ua.starts_with("Mozilla/5.0"));
        }
    }
}
