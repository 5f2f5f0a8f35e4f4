// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fv links` - Print the download links of a job's frame

use anyhow::Result;
use clap::Args;
use fv_core::{links, FrameLinks, JobId};
use serde::Serialize;

use super::{fetch_failed, Context};
use crate::color;
use crate::exit_error::ExitError;
use crate::output::format_or_json;

#[derive(Args)]
pub struct LinksArgs {
    /// Job ID
    pub id: String,

    /// Frame number
    #[arg(allow_negative_numbers = true)]
    pub frame: i64,
}

/// Absolute URLs for one frame; absent links are not available yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameUrls {
    pub log: Option<String>,
    pub result: Option<String>,
    pub thumbnail: String,
    pub archive: String,
}

impl FrameUrls {
    pub fn new(base_url: &str, job: &JobId, links: FrameLinks) -> Self {
        let absolute = |path: String| format!("{base_url}{path}");
        Self {
            log: links.log.map(absolute),
            result: links.result.map(absolute),
            thumbnail: absolute(links.thumbnail),
            archive: absolute(links::result_archive(job)),
        }
    }
}

pub async fn handle(args: LinksArgs, ctx: &Context) -> Result<()> {
    let id = JobId::new(args.id.as_str());
    let job = ctx.client.get_job(&id).await.map_err(|e| fetch_failed(&format!("job {id}"), e))?;
    let frame = job
        .frame(args.frame)
        .ok_or_else(|| {
            ExitError::not_found(format!("frame {} not found in job {id}", args.frame))
        })?;

    let urls = FrameUrls::new(&ctx.config.url, &id, FrameLinks::for_frame(&id, frame));
    format_or_json(ctx.format, &urls, || {
        let unavailable = color::muted("-");
        let show = |label: &str, url: Option<&str>| {
            let url = url.unwrap_or(unavailable.as_str());
            println!("{} {url}", color::header(&format!("{label:<10}")));
        };
        show("log", urls.log.as_deref());
        show("result", urls.result.as_deref());
        show("thumbnail", Some(urls.thumbnail.as_str()));
        show("archive", Some(urls.archive.as_str()));
        Ok(())
    })
}

#[cfg(test)]
#[path = "links_tests.rs"]
mod tests;
