// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Frame, FrameStatus, Job, JobRef, JobStatus, Rule, Slave};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for snapshot types.
pub mod strategies {
    use crate::{FrameStatus, Job, JobStatus};
    use proptest::prelude::*;

    pub fn arb_job_status() -> impl Strategy<Value = JobStatus> {
        prop_oneof![
            Just(JobStatus::Waiting),
            Just(JobStatus::Paused),
            Just(JobStatus::Finished),
            Just(JobStatus::Queued),
        ]
    }

    pub fn arb_frame_status() -> impl Strategy<Value = FrameStatus> {
        prop_oneof![
            Just(FrameStatus::Queued),
            Just(FrameStatus::Dispatched),
            Just(FrameStatus::Done),
            Just(FrameStatus::Error),
        ]
    }

    /// Jobs with consistent counters (`done + dispatched + error <= length`).
    pub fn arb_job() -> impl Strategy<Value = Job> {
        (arb_job_status(), 1u32..8, 1u32..8, 0u32..200, 0u32..200, 0u32..200, 0u32..200).prop_map(
            |(status, chunks, priority, done, dispatched, error, queued)| {
                Job::builder()
                    .status(status)
                    .chunks(chunks)
                    .priority(priority)
                    .done(done)
                    .dispatched(dispatched)
                    .error(error)
                    .length(done + dispatched + error + queued)
                    .build()
            },
        )
    }
}

// ── Snapshot fixtures ───────────────────────────────────────────────────

/// Frames `first..first + count` all in `status`.
pub fn frames(first: i64, count: i64, status: FrameStatus) -> Vec<Frame> {
    (first..first + count).map(|n| Frame::builder().number(n).status(status).build()).collect()
}

/// Three jobs covering the finished, paused and erroring cases.
pub fn sample_jobs() -> Vec<Job> {
    vec![
        Job::builder()
            .id("1")
            .name("intro")
            .category("shots")
            .status(JobStatus::Finished)
            .length(10)
            .done(10)
            .build(),
        Job::builder()
            .id("2")
            .name("teaser")
            .status(JobStatus::Paused)
            .chunks(3)
            .priority(2)
            .build(),
        Job::builder()
            .id("3")
            .name("credits")
            .status(JobStatus::Queued)
            .length(4)
            .done(1)
            .dispatched(1)
            .error(2)
            .frames(frames(1, 4, FrameStatus::Error))
            .build(),
    ]
}

pub fn sample_slaves() -> Vec<Slave> {
    vec![
        Slave::builder().id("s1").name("render-01").last_seen(1_000.0).build(),
        Slave::builder()
            .id("s2")
            .name("render-02")
            .tags(vec!["gpu".to_string()])
            .job(JobRef { id: "3".into(), name: "credits".to_string() })
            .build(),
    ]
}

pub fn sample_rules() -> Vec<Rule> {
    vec![
        Rule::builder().build(),
        Rule::builder()
            .id("r2")
            .kind("exception")
            .description("Pause jobs with too many errors")
            .limit(serde_json::Value::from(0.25))
            .limit_str("25%")
            .editable(false)
            .enabled(false)
            .build(),
    ]
}
