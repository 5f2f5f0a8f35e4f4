// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact URLs served by the coordinator.
//!
//! Paths are relative to the coordinator base URL.

use crate::frame::Frame;
use crate::job::JobId;

/// Archive of every rendered frame of a job.
pub fn result_archive(job: &JobId) -> String {
    format!("/result_{job}.zip")
}

pub fn render(job: &JobId, frame: i64) -> String {
    format!("/render_{job}_{frame}.exr")
}

pub fn log(job: &JobId, frame: i64) -> String {
    format!("/log_{job}_{frame}.log")
}

pub fn thumbnail(job: &JobId, frame: i64) -> String {
    format!("/thumb_{job}_{frame}.jpg")
}

/// Links a frame row may show, according to the frame's state.
///
/// Every frame has a thumbnail source, matching [`crate::ThumbnailStrip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLinks {
    pub log: Option<String>,
    pub result: Option<String>,
    pub thumbnail: String,
}

impl FrameLinks {
    pub fn for_frame(job: &JobId, frame: &Frame) -> Self {
        Self {
            log: frame.has_log().then(|| log(job, frame.number)),
            result: frame.has_result().then(|| render(job, frame.number)),
            thumbnail: thumbnail(job, frame.number),
        }
    }
}

#[cfg(test)]
#[path = "links_tests.rs"]
mod tests;
