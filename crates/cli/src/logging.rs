// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing setup. Stdout carries tables, so logs go to a file under the
//! state directory unless `--verbose` sends them to stderr.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "fv.log";

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop and must be held
/// until the process exits. No subscriber is installed when the state
/// directory cannot be resolved or created.
pub fn init(verbose: bool) -> Option<WorkerGuard> {
    if verbose {
        let filter = EnvFilter::try_new(crate::env::log_filter())
            .unwrap_or_else(|_| EnvFilter::new("warn"))
            .add_directive(tracing::Level::DEBUG.into());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
        return None;
    }

    let dir = crate::env::state_dir()?;
    std::fs::create_dir_all(&dir).ok()?;
    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_new(crate::env::log_filter()).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
    Some(guard)
}
