// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fv jobs` - List jobs

use std::io::Write;

use anyhow::Result;
use clap::Args;

use super::{fetch_failed, page_labels, Context};
use crate::output::handle_list;
use crate::view::panels::{self, JOBS_TABLE};
use crate::view::{to_text, TableState};

#[derive(Args)]
pub struct JobsArgs {
    /// Page of the table to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

pub async fn handle(args: JobsArgs, ctx: &Context) -> Result<()> {
    let jobs = ctx.client.list_jobs().await.map_err(|e| fetch_failed("job list", e))?;

    handle_list(ctx.format, &jobs, "No jobs", |jobs, out| {
        let mut state = TableState::new(ctx.config.page_size);
        let pager = state.goto(JOBS_TABLE, jobs.len(), args.page);
        let labels = page_labels("fv jobs", &pager, jobs.len());
        write!(out, "{}", to_text(&panels::jobs_panel(jobs, &mut state, &labels)))
    })
}
