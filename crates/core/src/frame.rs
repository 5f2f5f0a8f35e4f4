// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-frame render state within a job.

use crate::slave::SlaveId;
use serde::{Deserialize, Serialize};

/// Render state of a single frame.
///
/// Ordered by ordinal: `Queued < Dispatched < Done < Error`. Link guards
/// compare against this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum FrameStatus {
    Queued,
    Dispatched,
    Done,
    Error,
}

crate::ordinal_enum! {
    FrameStatus {
        Queued = 0,
        Dispatched = 1,
        Done = 2,
        Error = 3,
    }
}

crate::simple_display! {
    FrameStatus {
        Queued => "Queued",
        Dispatched => "Dispatched",
        Done => "Done",
        Error => "Error",
    }
}

/// One frame of a job.
///
/// Log and result URLs are derived from the job id and frame number (see
/// [`crate::links`]); they are never part of the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Frame number in the scene (not necessarily 0-based)
    pub number: i64,
    pub status: FrameStatus,
    /// Render time in seconds, meaningful once dispatched
    #[serde(default)]
    pub time: f64,
    /// Slave that rendered (or is rendering) the frame
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slave: Option<SlaveId>,
}

impl Frame {
    /// A slave has started on this frame, so it has a log.
    pub fn has_log(&self) -> bool {
        self.status >= FrameStatus::Dispatched
    }

    /// The frame finished (successfully or not), so it has a result.
    pub fn has_result(&self) -> bool {
        u8::from(self.status) > 1
    }
}

crate::builder! {
    pub struct FrameBuilder => Frame {
        set {
            number: i64 = 1,
            status: FrameStatus = FrameStatus::Queued,
            time: f64 = 0.0,
        }
        option {
            slave: SlaveId = None,
        }
    }
}

#[cfg(test)]
#[path = "frame_tests.rs"]
mod tests;
