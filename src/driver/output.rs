use colored::Colorize;

use crate::http_probe::prelude::*;

/// How pass/fail markers are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputStyle {
    /// Green check or red cross, colors reset right after the glyph.
    Ansi,
    /// `[OK]` or `[FAIL]`, no escape codes.
    Plain,
}

impl OutputStyle {
    /// Make `colored` honor this style regardless of what it detects itself.
    pub fn apply(self) {
        match self {
            OutputStyle::Ansi => colored::control::set_override(true),
            OutputStyle::Plain => colored::control::set_override(false),
        }
    }
}

/// Format one result line: `<marker> <url> - <status|TIMEOUT> (<ms>ms)`.
pub fn format_line(result: &ProbeResult, style: OutputStyle) -> String {
    let marker = match (style, result.is_success()) {
        (OutputStyle::Ansi, true) => "\u{2713}".green().to_string(),
        (OutputStyle::Ansi, false) => "\u{2717}".red().to_string(),
        (OutputStyle::Plain, true) => "[OK]".to_string(),
        (OutputStyle::Plain, false) => "[FAIL]".to_string(),
    };
    let status = match result.status() {
        NO_RESPONSE_STATUS => "TIMEOUT".to_string(),
        status => status.to_string(),
    };
    format!(
        "{marker} {} - {status} ({}ms)",
        result.url,
        result.elapsed_ms()
    )
}
