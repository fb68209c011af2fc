//! Shared output layer for human/JSON parity across CLI commands.
//!
//! Every command handler receives an [`OutputMode`] and formats its output
//! accordingly: readable text for humans, stable JSON for scripts.

use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};

/// The two output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Print a success message, or `{"ok": true, "message": ...}` in JSON mode.
pub fn render_success(mode: OutputMode, msg: &str) -> Result<()> {
    match mode {
        OutputMode::Human => println!("{msg}"),
        OutputMode::Json => {
            let body = serde_json::json!({ "ok": true, "message": msg });
            println!("{body}");
        }
    }
    Ok(())
}

/// Render a serializable list: one JSON array, or a closure-formatted line
/// per item for humans.
pub fn render_list<T, F>(mode: OutputMode, items: &[T], human: F) -> Result<()>
where
    T: Serialize,
    F: Fn(&T, &mut dyn Write) -> io::Result<()>,
{
    match mode {
        OutputMode::Human => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for item in items {
                human(item, &mut out).context("write output")?;
            }
        }
        OutputMode::Json => {
            let body = serde_json::to_string_pretty(items).context("serialize output")?;
            println!("{body}");
        }
    }
    Ok(())
}
