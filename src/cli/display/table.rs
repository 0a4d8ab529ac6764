//! Table output for availability reports
//!
//! Renders reports with comfy-table. Cell colors follow the state's
//! severity and are dropped when the terminal does not support them.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

use super::{format_duration, format_instant, format_percentage};
use crate::domain::models::{AvailabilityReport, AvailabilityType};

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Decimal places for percentages
    precision: usize,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    pub fn new(precision: usize) -> Self {
        Self {
            use_colors: supports_color(),
            precision,
            max_width: None,
        }
    }

    pub fn with_config(use_colors: bool, precision: usize, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            precision,
            max_width,
        }
    }

    /// Format a report as a two-column metric table
    pub fn format_report(&self, report: &AvailabilityReport) -> String {
        let mut table = self.create_base_table();

        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        let ms = chrono::Duration::milliseconds;
        let pct = |fraction: f64| format_percentage(fraction, self.precision);

        table.add_row(vec![
            Cell::new("Resource"),
            Cell::new(report.resource.as_deref().unwrap_or("-")),
        ]);
        table.add_row(vec![Cell::new("Current"), self.state_cell(report.current)]);
        table.add_row(vec![
            Cell::new("Last change"),
            Cell::new(format_instant(report.last_change)),
        ]);
        table.add_row(vec![
            Cell::new("Evaluated at"),
            Cell::new(format_instant(Some(report.generated_at))),
        ]);
        table.add_row(vec![Cell::new("Intervals"), Cell::new(report.interval_count)]);
        table.add_row(vec![Cell::new("Failures"), Cell::new(report.failures)]);
        table.add_row(vec![Cell::new("Disabled"), Cell::new(report.disabled_count)]);
        table.add_row(vec![
            Cell::new("Up time"),
            Cell::new(format!(
                "{} ({})",
                format_duration(ms(report.up_time_ms)),
                pct(report.up_percentage)
            )),
        ]);
        table.add_row(vec![
            Cell::new("Down time"),
            Cell::new(format!(
                "{} ({})",
                format_duration(ms(report.down_time_ms)),
                pct(report.down_percentage)
            )),
        ]);
        table.add_row(vec![
            Cell::new("Disabled time"),
            Cell::new(format!(
                "{} ({})",
                format_duration(ms(report.disabled_time_ms)),
                pct(report.disabled_percentage)
            )),
        ]);
        table.add_row(vec![
            Cell::new("Unknown time"),
            Cell::new(format_duration(ms(report.unknown_time_ms))),
        ]);
        table.add_row(vec![
            Cell::new("Known time"),
            Cell::new(format_duration(ms(report.known_time_ms))),
        ]);
        table.add_row(vec![
            Cell::new("Observed span"),
            Cell::new(format_duration(ms(report.total_span_ms))),
        ]);
        table.add_row(vec![
            Cell::new("MTBF"),
            Cell::new(format_duration(ms(report.mtbf_ms))),
        ]);
        table.add_row(vec![
            Cell::new("MTTR"),
            Cell::new(format_duration(ms(report.mttr_ms))),
        ]);

        table.to_string()
    }

    fn state_cell(&self, state: Option<AvailabilityType>) -> Cell {
        match state {
            Some(state) if self.use_colors => Cell::new(state).fg(state_color(state)),
            Some(state) => Cell::new(state),
            None => Cell::new("-"),
        }
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

/// Get the color for an availability state
pub const fn state_color(state: AvailabilityType) -> Color {
    match state {
        AvailabilityType::Up => Color::Green,
        AvailabilityType::Disabled => Color::Yellow,
        AvailabilityType::Unknown => Color::DarkGrey,
        AvailabilityType::Down => Color::Red,
    }
}

/// Check if the terminal supports colors
pub fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    console::colors_enabled()
}
