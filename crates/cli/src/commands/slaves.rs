// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fv slaves` - List render slaves

use std::io::Write;

use anyhow::Result;
use clap::Args;

use super::{fetch_failed, page_labels, Context};
use crate::output::{handle_list, now_secs};
use crate::view::panels::{self, SLAVES_TABLE};
use crate::view::{to_text, TableState};

#[derive(Args)]
pub struct SlavesArgs {
    /// Page of the table to show (1-based)
    #[arg(long, default_value_t = 1)]
    pub page: usize,
}

pub async fn handle(args: SlavesArgs, ctx: &Context) -> Result<()> {
    let slaves = ctx.client.list_slaves().await.map_err(|e| fetch_failed("slave list", e))?;

    handle_list(ctx.format, &slaves, "No slaves", |slaves, out| {
        let mut state = TableState::new(ctx.config.page_size);
        let pager = state.goto(SLAVES_TABLE, slaves.len(), args.page);
        let labels = page_labels("fv slaves", &pager, slaves.len());
        let panel = panels::slaves_panel(slaves, now_secs(), &mut state, &labels);
        write!(out, "{}", to_text(&panel))
    })
}
