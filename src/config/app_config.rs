use std::ffi::OsString;
use std::io::IsTerminal;
use std::time::Duration;

use clap::{CommandFactory, Parser, ValueEnum};

use super::probe_config::{
    DEFAULT_INTERVAL, DEFAULT_REPEAT, ProbeSchedule, resolve_interval, resolve_repeat,
    resolve_timeout,
};
use crate::driver::output::OutputStyle;
use crate::http_probe::probe::DEFAULT_TIMEOUT;

/// Send HTTP HEAD requests to one or more URLs and report status and latency.
#[derive(Parser, Debug)]
#[command(name = "http-ping", version, about, long_about = None, args_override_self = true)]
pub struct Cli {
    /// URLs to probe, in order
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Repeat N times (default: 1)
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub repeat: Option<Option<String>>,

    /// Seconds between repetitions (default: 1)
    #[arg(long, value_name = "S", allow_hyphen_values = true)]
    pub interval: Option<Option<String>>,

    /// Seconds before a request is given up (default: 10)
    #[arg(long, value_name = "S", allow_hyphen_values = true)]
    pub timeout: Option<Option<String>>,

    /// When to color the pass/fail markers
    #[arg(long, value_enum, value_name = "WHEN", default_value_t = ColorMode::Always)]
    pub color: ColorMode,

    /// Probe the URLs of one repetition in parallel, output order is kept
    #[arg(long)]
    pub concurrent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Colored glyphs
    Always,
    /// Colored glyphs on a terminal, plain markers otherwise
    Auto,
    /// Plain ASCII markers
    Never,
}

impl ColorMode {
    pub fn style(self, is_terminal: bool) -> OutputStyle {
        match self {
            ColorMode::Always => OutputStyle::Ansi,
            ColorMode::Auto if is_terminal => OutputStyle::Ansi,
            ColorMode::Auto | ColorMode::Never => OutputStyle::Plain,
        }
    }
}

/// Everything a run needs, with numeric options already resolved.
#[derive(Debug, Clone)]
pub struct Settings {
    pub schedule: ProbeSchedule,
    pub timeout: Duration,
    pub style: OutputStyle,
}

impl Cli {
    /// Resolve the raw options. Invalid numbers are replaced by their defaults,
    /// see `probe_config` for the exact rules.
    pub fn into_settings(self) -> Settings {
        let schedule = ProbeSchedule {
            repeat: self
                .repeat
                .map_or(DEFAULT_REPEAT, |v| resolve_repeat(v.as_deref())),
            interval: self
                .interval
                .map_or(DEFAULT_INTERVAL, |v| resolve_interval(v.as_deref())),
            urls: self.urls,
            concurrent: self.concurrent,
        };
        let timeout = self
            .timeout
            .map_or(DEFAULT_TIMEOUT, |v| resolve_timeout(v.as_deref()));
        let style = self.color.style(std::io::stdout().is_terminal());

        log::debug!(
            "{} url(s), repeat {}, interval {:?}, timeout {:?}, {:?} output",
            schedule.urls.len(),
            schedule.repeat,
            schedule.interval,
            timeout,
            style
        );

        Settings {
            schedule,
            timeout,
            style,
        }
    }
}

/// The text printed when the program is started without arguments.
pub fn usage() -> String {
    Cli::command().render_help().to_string()
}

/// What the command line asks for.
#[derive(Debug)]
pub enum Invocation {
    /// No arguments at all: print the usage text and exit 0 without probing.
    Usage,
    Run(Cli),
}

impl Invocation {
    /// Interpret a full argv, program name included.
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() <= 1 {
            return Ok(Invocation::Usage);
        }
        Cli::try_parse_from(args).map(Invocation::Run)
    }
}
