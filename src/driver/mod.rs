pub mod output;

use std::io::{self, Write};
use std::time::Instant;

use tokio::task::JoinError;
use tokio::time::sleep;

use crate::config::ProbeSchedule;
use crate::http_probe::prelude::*;
use output::{OutputStyle, format_line};

/// Totals of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub probes: usize,
    pub successes: usize,
}

impl RunSummary {
    fn record(&mut self, result: &ProbeResult) {
        self.probes += 1;
        if result.is_success() {
            self.successes += 1;
        }
    }
}

/// Probe every URL of `schedule` `repeat` times, pausing `interval` between
/// repetitions, and write one line per probe to `out` in URL order.
///
/// Probe failures never stop the run. Only write errors are returned.
pub async fn run<W: Write>(
    schedule: &ProbeSchedule,
    prober: &HttpProber,
    style: OutputStyle,
    out: &mut W,
) -> io::Result<RunSummary> {
    let mut summary = RunSummary::default();

    for round in 0..schedule.repeat {
        if round > 0 && !schedule.interval.is_zero() {
            sleep(schedule.interval).await;
        }
        log::debug!("Repetition {} of {}", round + 1, schedule.repeat);

        if schedule.concurrent {
            let started = Instant::now();
            let handles: Vec<_> = schedule
                .urls
                .iter()
                .map(|url| {
                    let prober = prober.clone();
                    let url = url.clone();
                    tokio::spawn(async move { prober.probe(&url).await })
                })
                .collect();

            for (url, handle) in schedule.urls.iter().zip(handles) {
                let result = joined(url, started, handle.await);
                emit(&result, style, out, &mut summary)?;
            }
        } else {
            for url in &schedule.urls {
                let result = prober.probe(url).await;
                emit(&result, style, out, &mut summary)?;
            }
        }
    }

    log::info!(
        "{} probes, {} succeeded, {} failed",
        summary.probes,
        summary.successes,
        summary.probes - summary.successes
    );
    Ok(summary)
}

/// A task that died still accounts for its URL, as a failed result.
fn joined(url: &str, started: Instant, task: Result<ProbeResult, JoinError>) -> ProbeResult {
    task.unwrap_or_else(|e| {
        log::error!("Task for {url} failed: {e}");
        ProbeResult {
            url: url.to_string(),
            outcome: ProbeOutcome::TransportError {
                cause: format!("task failed: {e}"),
            },
            elapsed: started.elapsed(),
        }
    })
}

fn emit<W: Write>(
    result: &ProbeResult,
    style: OutputStyle,
    out: &mut W,
    summary: &mut RunSummary,
) -> io::Result<()> {
    summary.record(result);
    writeln!(out, "{}", format_line(result, style))?;
    out.flush()
}
