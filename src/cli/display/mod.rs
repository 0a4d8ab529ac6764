//! Display framework for CLI output formatting.
//!
//! Provides the output trait shared by all commands plus duration,
//! percentage and instant formatters for human-readable views.

pub mod table;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::Serialize;

pub use table::{state_color, supports_color, TableFormatter};

/// Trait for types that can be rendered as human-readable or JSON output.
pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

/// Dispatch output based on JSON mode flag.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}

/// Format a duration as "1d 2h 3m 4s".
///
/// Sub-second durations are shown in milliseconds; zero units are omitted.
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.num_milliseconds();
    if total_ms.abs() < 1000 {
        return format!("{total_ms}ms");
    }

    let sign = if total_ms < 0 { "-" } else { "" };
    let mut secs = total_ms.abs() / 1000;
    let days = secs / 86_400;
    secs %= 86_400;
    let hours = secs / 3600;
    secs %= 3600;
    let minutes = secs / 60;
    secs %= 60;

    let parts: Vec<String> = [(days, "d"), (hours, "h"), (minutes, "m"), (secs, "s")]
        .iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{value}{unit}"))
        .collect();

    format!("{sign}{}", parts.join(" "))
}

/// Format a `[0, 1]` fraction as a percentage with the given decimals.
pub fn format_percentage(fraction: f64, precision: usize) -> String {
    format!("{:.*}%", precision, fraction * 100.0)
}

/// Format an optional instant as RFC 3339, or "-".
pub fn format_instant(instant: Option<DateTime<Utc>>) -> String {
    instant.map_or_else(
        || "-".to_string(),
        |at| at.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}
