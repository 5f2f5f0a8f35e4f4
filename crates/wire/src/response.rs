// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Response shapes for job-detail side panels.
//!
//! Collections (`/html/jobs`, `/html/slaves`, `/html/rules`) decode straight
//! into `Vec<Job>`, `Vec<Slave>` and `Vec<Rule>` from `fv-core`.

use serde::{Deserialize, Serialize};

/// The scene file a job renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlendFile {
    pub path: String,
    /// Size in bytes, when the coordinator knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// An auxiliary file (cache, fluid or other) shipped with a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    pub path: String,
    #[serde(default)]
    pub size: u64,
}
