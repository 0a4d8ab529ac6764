//! Command-line interface.

pub mod commands;
pub mod display;
pub mod types;

pub use display::{output, CommandOutput};
pub use types::{Cli, Commands};

/// Report a command failure and exit with status 1.
///
/// In JSON mode the error is printed to stdout as `{"error": "..."}` so that
/// callers parsing stdout always receive a document.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        println!(
            "{}",
            serde_json::to_string_pretty(&body).unwrap_or_default()
        );
    } else {
        eprintln!("{} {err:#}", console::style("Error:").red().bold());
    }
    std::process::exit(1)
}
