use std::time::Duration;

use crate::http_probe::probe::DEFAULT_TIMEOUT;

pub const DEFAULT_REPEAT: u32 = 1;
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// When and how often the URL list is probed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeSchedule {
    /// The URLs to probe, in the order given.
    pub urls: Vec<String>,

    /// Number of full passes over `urls`.
    pub repeat: u32,

    /// Pause between two passes. Not applied before the first one.
    pub interval: Duration,

    /// Probe the URLs of one pass in parallel. Output order is unchanged.
    pub concurrent: bool,
}

impl Default for ProbeSchedule {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            repeat: DEFAULT_REPEAT,
            interval: DEFAULT_INTERVAL,
            concurrent: false,
        }
    }
}

/// Resolve a `--repeat` value.
/// `None` means the flag was given without a value.
/// Missing or non-numeric values fall back to the default, negative ones clamp to 0.
pub fn resolve_repeat(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        log::warn!("--repeat given without a value, using {DEFAULT_REPEAT}");
        return DEFAULT_REPEAT;
    };
    match raw.trim().parse::<i64>() {
        Ok(n) if n < 0 => {
            log::warn!("--repeat {n} is negative, no probes will run");
            0
        }
        Ok(n) => u32::try_from(n).unwrap_or(u32::MAX),
        Err(_) => {
            log::warn!("--repeat '{raw}' is not a number, using {DEFAULT_REPEAT}");
            DEFAULT_REPEAT
        }
    }
}

/// Resolve an `--interval` value in seconds.
/// Missing, non-numeric or non-finite values fall back to the default,
/// negative ones clamp to zero.
pub fn resolve_interval(raw: Option<&str>) -> Duration {
    let Some(seconds) = parse_seconds("--interval", raw) else {
        return DEFAULT_INTERVAL;
    };
    if seconds < 0.0 {
        log::warn!("--interval {seconds} is negative, using 0");
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(seconds).unwrap_or_else(|_| {
        log::warn!("--interval {seconds} is out of range, using {DEFAULT_INTERVAL:?}");
        DEFAULT_INTERVAL
    })
}

/// Resolve a `--timeout` value in seconds. Anything but a positive number
/// falls back to the default.
pub fn resolve_timeout(raw: Option<&str>) -> Duration {
    let Some(seconds) = parse_seconds("--timeout", raw) else {
        return DEFAULT_TIMEOUT;
    };
    match Duration::try_from_secs_f64(seconds) {
        Ok(timeout) if !timeout.is_zero() => timeout,
        _ => {
            log::warn!("--timeout {seconds} must be positive, using {DEFAULT_TIMEOUT:?}");
            DEFAULT_TIMEOUT
        }
    }
}

fn parse_seconds(flag: &str, raw: Option<&str>) -> Option<f64> {
    let Some(raw) = raw else {
        log::warn!("{flag} given without a value, using the default");
        return None;
    };
    match raw.trim().parse::<f64>() {
        Ok(seconds) if seconds.is_finite() => Some(seconds),
        _ => {
            log::warn!("{flag} '{raw}' is not a number, using the default");
            None
        }
    }
}
