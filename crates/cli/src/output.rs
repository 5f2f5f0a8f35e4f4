// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use clap::ValueEnum;
use serde::Serialize;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Current wall clock in unix seconds.
pub fn now_secs() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

/// Format a unix timestamp (seconds) as relative time (e.g., "5s", "2m", "1h", "3d")
pub fn format_time_ago(epoch_secs: f64, now_secs: f64) -> String {
    if epoch_secs <= 0.0 || !epoch_secs.is_finite() {
        return "-".to_string();
    }
    let elapsed = (now_secs - epoch_secs).max(0.0) as u64;
    fv_core::format_elapsed(elapsed)
}

/// Print a collection as JSON, or as text through `render_text`.
///
/// `empty_msg` replaces the text rendering when there is nothing to show.
pub fn handle_list<T: Serialize>(
    format: OutputFormat,
    items: &[T],
    empty_msg: &str,
    render_text: impl FnOnce(&[T], &mut dyn Write) -> std::io::Result<()>,
) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    write_list(&mut out, format, items, empty_msg, render_text)
}

pub(crate) fn write_list<T: Serialize>(
    out: &mut dyn Write,
    format: OutputFormat,
    items: &[T],
    empty_msg: &str,
    render_text: impl FnOnce(&[T], &mut dyn Write) -> std::io::Result<()>,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(items)?)?;
        }
        OutputFormat::Text => {
            if items.is_empty() {
                writeln!(out, "{}", empty_msg)?;
            } else {
                render_text(items, out)?;
            }
        }
    }
    Ok(())
}

/// Print `data` as JSON, or run `text_fn` for text output.
pub fn format_or_json<T: Serialize>(
    format: OutputFormat,
    data: &T,
    text_fn: impl FnOnce() -> anyhow::Result<()>,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => text_fn()?,
    }
    Ok(())
}
