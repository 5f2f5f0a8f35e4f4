// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Render job snapshot and its control guards.

use crate::frame::Frame;
use crate::time_fmt::format_seconds;
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Identifier the coordinator assigns to a render job.
    ///
    /// Used in every job-scoped read path (`/html/job_<id>`), mutation path
    /// (`/pause_<id>`) and artifact link (`/result_<id>.zip`).
    pub struct JobId;
}

/// What kind of work a job runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum JobType {
    #[default]
    None,
    Blender,
    Process,
    /// Checked out from version control before rendering
    Versioned,
}

crate::ordinal_enum! {
    JobType {
        None = 0,
        Blender = 1,
        Process = 2,
        Versioned = 3,
    }
}

crate::simple_display! {
    JobType {
        None => "None",
        Blender => "Blender",
        Process => "Process",
        Versioned => "Versioned",
    }
}

/// Scheduling state of a job as reported by the coordinator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum JobStatus {
    Waiting,
    Paused,
    Finished,
    Queued,
}

crate::ordinal_enum! {
    JobStatus {
        Waiting = 0,
        Paused = 1,
        Finished = 2,
        Queued = 3,
    }
}

crate::simple_display! {
    JobStatus {
        Waiting => "Waiting",
        Paused => "Paused",
        Finished => "Finished",
        Queued => "Queued",
    }
}

/// Time a job has been waiting for dispatch.
///
/// The coordinator sends either a number of seconds or a sentinel string
/// (`"N/A"`) when the job has never waited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WaitTime {
    Seconds(f64),
    Unavailable(String),
}

impl Default for WaitTime {
    fn default() -> Self {
        WaitTime::Unavailable("N/A".to_string())
    }
}

impl std::fmt::Display for WaitTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WaitTime::Seconds(secs) => f.write_str(&format_seconds(*secs)),
            WaitTime::Unavailable(_) => f.write_str("N/A"),
        }
    }
}

/// Output resolution: width and height in pixels, scaled by `percent`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[u32; 3]", into = "[u32; 3]")]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
    pub percent: u32,
}

impl Resolution {
    /// Pixel dimensions actually rendered after applying `percent`.
    pub fn effective(&self) -> (u32, u32) {
        let scale = |v: u32| (u64::from(v) * u64::from(self.percent) / 100) as u32;
        (scale(self.width), scale(self.height))
    }
}

impl From<[u32; 3]> for Resolution {
    fn from([width, height, percent]: [u32; 3]) -> Self {
        Self { width, height, percent }
    }
}

impl From<Resolution> for [u32; 3] {
    fn from(r: Resolution) -> Self {
        [r.width, r.height, r.percent]
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} ({}%)", self.width, self.height, self.percent)
    }
}

/// Version-control checkout a versioned job renders from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Version control system name (e.g. "Subversion", "Git")
    pub system: String,
    pub remote_path: String,
    pub working_path: String,
    pub revision: String,
}

/// Direction of a priority or chunk-size adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

crate::simple_display! {
    Step {
        Up => "up",
        Down => "down",
    }
}

/// A render job as last reported by the coordinator.
///
/// Snapshots are read-only: the client never edits one in place, it asks
/// the coordinator for a change and re-fetches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "type", default)]
    pub job_type: JobType,
    /// Render engine or process subtype
    #[serde(default)]
    pub subtype: String,
    /// Frames dispatched to a slave per work unit (>= 1)
    pub chunks: u32,
    /// Scheduling priority (>= 1)
    pub priority: u32,
    /// Fraction of the farm this job is allotted, in [0, 1]
    #[serde(default)]
    pub usage: f64,
    #[serde(default)]
    pub wait: WaitTime,
    pub status: JobStatus,
    /// Total number of frames
    pub length: u32,
    #[serde(default)]
    pub done: u32,
    #[serde(default)]
    pub dispatched: u32,
    #[serde(default)]
    pub error: u32,
    /// A priority balancing rule currently applies to this job
    #[serde(default)]
    pub p_rule: bool,
    /// An exception balancing rule currently applies to this job
    #[serde(default)]
    pub e_rule: bool,
    #[serde(default)]
    pub resolution: Resolution,
    /// Accumulated slave time in seconds
    #[serde(default)]
    pub wktime: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_info: Option<VersionInfo>,
    /// Per-frame state; list snapshots may omit it
    #[serde(default)]
    pub frames: Vec<Frame>,
}

impl Job {
    /// Frames neither done, dispatched nor failed.
    pub fn queued(&self) -> u32 {
        self.length
            .saturating_sub(self.done)
            .saturating_sub(self.dispatched)
            .saturating_sub(self.error)
    }

    /// Completed fraction in [0, 1]; an empty job reports 0.
    pub fn progress(&self) -> f64 {
        if self.length == 0 {
            return 0.0;
        }
        (f64::from(self.done) / f64::from(self.length)).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self) -> bool {
        self.status == JobStatus::Finished
    }

    pub fn can_pause(&self) -> bool {
        !self.is_finished()
    }

    pub fn can_reset_errors(&self) -> bool {
        self.error != 0
    }

    pub fn can_decrease_chunks(&self) -> bool {
        self.chunks > 1
    }

    pub fn can_decrease_priority(&self) -> bool {
        self.priority > 1
    }

    /// Chunk size after a one-step adjustment, or `None` when the guard forbids it.
    pub fn adjusted_chunks(&self, step: Step) -> Option<u32> {
        match step {
            Step::Up => self.chunks.checked_add(1),
            Step::Down if self.can_decrease_chunks() => Some(self.chunks - 1),
            Step::Down => None,
        }
    }

    /// Priority after a one-step adjustment, or `None` when the guard forbids it.
    pub fn adjusted_priority(&self, step: Step) -> Option<u32> {
        match step {
            Step::Up => self.priority.checked_add(1),
            Step::Down if self.can_decrease_priority() => Some(self.priority - 1),
            Step::Down => None,
        }
    }

    pub fn category_display(&self) -> &str {
        if self.category.is_empty() {
            "None"
        } else {
            &self.category
        }
    }

    pub fn tags_display(&self) -> String {
        if self.tags.is_empty() {
            "-".to_string()
        } else {
            self.tags.join(", ")
        }
    }

    /// Version-control details; only meaningful for [`JobType::Versioned`].
    pub fn version_info(&self) -> Option<&VersionInfo> {
        match self.job_type {
            JobType::Versioned => self.version_info.as_ref(),
            _ => None,
        }
    }

    pub fn frame(&self, number: i64) -> Option<&Frame> {
        self.frames.iter().find(|f| f.number == number)
    }
}

crate::builder! {
    pub struct JobBuilder => Job {
        into {
            id: JobId = "1",
            name: String = "test-job",
            category: String = "",
            subtype: String = "CYCLES",
        }
        set {
            tags: Vec<String> = Vec::new(),
            job_type: JobType = JobType::Blender,
            chunks: u32 = 1,
            priority: u32 = 1,
            usage: f64 = 0.0,
            wait: WaitTime = WaitTime::default(),
            status: JobStatus = JobStatus::Queued,
            length: u32 = 10,
            done: u32 = 0,
            dispatched: u32 = 0,
            error: u32 = 0,
            p_rule: bool = false,
            e_rule: bool = false,
            resolution: Resolution = Resolution { width: 1920, height: 1080, percent: 100 },
            wktime: f64 = 0.0,
            frames: Vec<Frame> = Vec::new(),
        }
        option {
            version_info: VersionInfo = None,
        }
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
