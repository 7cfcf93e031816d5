pub mod probe;
pub mod result;

pub mod prelude {
    pub use super::probe::HttpProber;
    pub use super::result::{NO_RESPONSE_STATUS, ProbeOutcome, ProbeResult};
    pub use super::ProbeError;
}

use std::fmt::Write;

/// Failures a probe can run into before or while talking to the server.
/// These never leave the prober; they end up as `ProbeOutcome::TransportError`.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("invalid url")]
    InvalidUrl(#[from] url::ParseError),

    #[error("request failed")]
    Request(#[from] reqwest::Error),
}

/// Render an error and all of its sources on a single line.
fn report(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, ": {}", src);
        err = src;
    }
    s
}
