// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fv job` - Show one job with its frames and side panels

use anyhow::Result;
use clap::Args;
use fv_core::JobId;

use super::{fetch_failed, page_labels, Context};
use crate::output::{format_or_json, now_secs};
use crate::view::panels::{self, FRAMES_TABLE};
use crate::view::{to_text, TableState};

#[derive(Args)]
pub struct JobArgs {
    /// Job ID
    pub id: String,

    /// Page of the frames table to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

pub async fn handle(args: JobArgs, ctx: &Context) -> Result<()> {
    let id = JobId::new(args.id.as_str());
    let detail =
        ctx.client.job_detail(&id).await.map_err(|e| fetch_failed(&format!("job {id}"), e))?;

    format_or_json(ctx.format, &detail, || {
        let frames = detail.job.frames.len();
        let mut state = TableState::new(ctx.config.page_size);
        let pager = state.goto(FRAMES_TABLE, frames, args.page);
        let labels = page_labels(&format!("fv job {id}"), &pager, frames);
        let panel = panels::job_panel(&detail, now_secs(), None, &mut state, &labels);
        print!("{}", to_text(&panel));
        Ok(())
    })
}
