// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod control;
pub mod job;
pub mod jobs;
pub mod links;
pub mod rules;
pub mod slaves;
pub mod thumbs;
pub mod watch;

use fv_core::Pager;

use crate::client::{ClientError, FarmClient};
use crate::env::Config;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;
use crate::sync::{Staleness, Synchronizer};
use crate::view::PagerLabels;

/// Everything a command needs: resolved config, a client and the output format.
#[derive(Clone)]
pub struct Context {
    pub config: Config,
    pub client: FarmClient,
    pub format: OutputFormat,
}

impl Context {
    pub fn new(config: Config, client: FarmClient, format: OutputFormat) -> Self {
        Self { config, client, format }
    }

    pub fn synchronizer(&self) -> Synchronizer {
        Synchronizer::new(self.client.clone(), self.config.job_poll, self.config.slave_poll)
    }
}

/// Map a fetch error to an exit code: 2 for a missing record, 1 otherwise.
pub fn fetch_failed(what: &str, error: ClientError) -> anyhow::Error {
    if error.is_not_found() {
        ExitError::not_found(format!("{what} not found")).into()
    } else {
        ExitError::failure(format!("failed to fetch {what}: {error}")).into()
    }
}

/// Error for a slot that has no snapshot after a refresh.
pub fn unavailable(what: &str, staleness: Staleness) -> anyhow::Error {
    match staleness {
        Staleness::NeverLoaded { error: Some(e) } | Staleness::Stale { error: e, .. } => {
            ExitError::failure(format!("failed to fetch {what}: {e}")).into()
        }
        _ => ExitError::failure(format!("failed to fetch {what}")).into(),
    }
}

/// Paging captions pointing at the `--page` flag of `command`.
pub fn page_labels(command: &str, pager: &Pager, len: usize) -> PagerLabels {
    let page = pager.page_number();
    let pages = pager.page_count(len);
    PagerLabels::new(
        format!("prev: {command} --page {}", page.saturating_sub(1).max(1)),
        format!("next: {command} --page {}", (page + 1).min(pages)),
    )
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
