use std::time::Duration;

/// Status reported when no HTTP response was obtained.
pub const NO_RESPONSE_STATUS: u16 = 0;

/// How a single probe ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered, whatever the status code.
    Responded { status: u16 },
    /// The client-side timeout expired before a response arrived.
    TimedOut,
    /// DNS, connect, TLS, URL or any other transport level failure.
    TransportError { cause: String },
}

/// The result of probing one URL once.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub url: String,
    pub outcome: ProbeOutcome,
    pub elapsed: Duration,
}

impl ProbeResult {
    /// HTTP status code, or `0` when the probe got no response.
    pub fn status(&self) -> u16 {
        match self.outcome {
            ProbeOutcome::Responded { status } => status,
            _ => NO_RESPONSE_STATUS,
        }
    }

    /// True iff a response with a 2xx status was received.
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ProbeOutcome::Responded { status } if (200..=299).contains(&status))
    }

    pub fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}
