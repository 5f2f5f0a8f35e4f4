// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fv thumbs` - Replay clicks on a job's thumbnail strip

use anyhow::Result;
use clap::Args;
use fv_core::{JobId, ThumbEffect, ThumbnailStrip};
use serde::Serialize;

use super::{fetch_failed, Context};
use crate::output::format_or_json;
use crate::view::{panels, to_text};

#[derive(Args)]
pub struct ThumbsArgs {
    /// Job ID
    pub id: String,

    /// Frame numbers clicked, in order
    #[arg(allow_negative_numbers = true)]
    pub clicks: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClickReport {
    pub frame: i64,
    pub shown: Vec<ShownThumb>,
    pub hidden: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShownThumb {
    pub frame: i64,
    pub src: String,
}

#[derive(Debug, Serialize)]
struct ThumbsOutput {
    clicks: Vec<ClickReport>,
    visible: Vec<ShownThumb>,
}

/// Apply each click in order and describe what it changed.
pub fn replay(strip: &mut ThumbnailStrip, clicks: &[i64]) -> Vec<ClickReport> {
    clicks
        .iter()
        .map(|&frame| {
            let mut report = ClickReport { frame, shown: Vec::new(), hidden: Vec::new() };
            for effect in strip.click(frame) {
                match effect {
                    ThumbEffect::Show { frame, src } => {
                        report.shown.push(ShownThumb { frame, src })
                    }
                    ThumbEffect::Hide { frame } => report.hidden.push(frame),
                }
            }
            report
        })
        .collect()
}

pub fn describe(report: &ClickReport) -> String {
    if report.shown.is_empty() && report.hidden.is_empty() {
        return format!("click {}: ignored", report.frame);
    }
    let mut parts = Vec::new();
    if !report.shown.is_empty() {
        let frames: Vec<String> = report.shown.iter().map(|t| t.frame.to_string()).collect();
        parts.push(format!("show {}", frames.join(",")));
    }
    if !report.hidden.is_empty() {
        let frames: Vec<String> = report.hidden.iter().map(i64::to_string).collect();
        parts.push(format!("hide {}", frames.join(",")));
    }
    format!("click {}: {}", report.frame, parts.join("; "))
}

pub async fn handle(args: ThumbsArgs, ctx: &Context) -> Result<()> {
    let id = JobId::new(args.id.as_str());
    let job = ctx.client.get_job(&id).await.map_err(|e| fetch_failed(&format!("job {id}"), e))?;

    let mut strip = ThumbnailStrip::for_job(&job);
    let clicks = replay(&mut strip, &args.clicks);
    let visible = strip
        .visible()
        .into_iter()
        .filter_map(|frame| Some(ShownThumb { frame, src: strip.source(frame)?.to_string() }))
        .collect();

    let output = ThumbsOutput { clicks, visible };
    format_or_json(ctx.format, &output, || {
        for report in &output.clicks {
            println!("{}", describe(report));
        }
        if output.visible.is_empty() {
            println!("No thumbnails shown");
        } else {
            print!("{}", to_text(&panels::thumbnails(&strip)));
        }
        Ok(())
    })
}

#[cfg(test)]
#[path = "thumbs_tests.rs"]
mod tests;
