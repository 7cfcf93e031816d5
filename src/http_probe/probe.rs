use std::time::{Duration, Instant};

use reqwest::Client;
use url::Url;

use super::prelude::*;
use super::report;

/// Default per request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Issues timed HEAD requests. Cloning is cheap, the connection pool is shared.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("http-ping/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    /// Probe `url` once. Every failure is folded into the returned result.
    pub async fn probe(&self, url: &str) -> ProbeResult {
        let start = Instant::now();
        let outcome = match self.send(url).await {
            Ok(status) => ProbeOutcome::Responded { status },
            Err(ProbeError::Request(e)) if e.is_timeout() => ProbeOutcome::TimedOut,
            Err(e) => ProbeOutcome::TransportError { cause: report(&e) },
        };
        let elapsed = start.elapsed();

        match &outcome {
            ProbeOutcome::Responded { status } => {
                log::debug!("HEAD {url} -> {status} in {elapsed:?}")
            }
            ProbeOutcome::TimedOut => log::debug!("HEAD {url} timed out after {elapsed:?}"),
            ProbeOutcome::TransportError { cause } => {
                log::debug!("HEAD {url} failed after {elapsed:?}: {cause}")
            }
        }

        ProbeResult {
            url: url.to_string(),
            outcome,
            elapsed,
        }
    }

    async fn send(&self, url: &str) -> Result<u16, ProbeError> {
        let parsed = Url::parse(url)?;
        let response = self.client.head(parsed).send().await?;
        Ok(response.status().as_u16())
    }
}
