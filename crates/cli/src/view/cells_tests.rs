// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use fv_core::test_support::strategies::arb_job;
use fv_core::{Frame, FrameStatus, JobStatus};
use proptest::prelude::*;

use super::*;

fn enabled(node: &Node) -> bool {
    match node {
        Node::Button { enabled, .. } => *enabled,
        other => panic!("expected button, got {other:?}"),
    }
}

fn action(node: &Node) -> &Action {
    match node {
        Node::Button { action, .. } => action,
        other => panic!("expected button, got {other:?}"),
    }
}

#[yare::parameterized(
    waiting  = { JobStatus::Waiting,  true },
    paused   = { JobStatus::Paused,   true },
    queued   = { JobStatus::Queued,   true },
    finished = { JobStatus::Finished, false },
)]
fn pause_disabled_only_when_finished(status: JobStatus, expected: bool) {
    let job = Job::builder().status(status).build();
    assert_eq!(enabled(&pause_button(&job)), expected);
}

#[yare::parameterized(
    at_one   = { 1, false, 1 },
    above    = { 4, true,  3 },
)]
fn decrement_guards(value: u32, expected: bool, target: u32) {
    let job = Job::builder().id("5").chunks(value).priority(value).build();

    let chunks = chunks_button(&job, Step::Down);
    assert_eq!(enabled(&chunks), expected);
    assert_eq!(action(&chunks), &Action::Chunks { job: JobId::new("5"), to: target });

    let priority = priority_button(&job, Step::Down);
    assert_eq!(enabled(&priority), expected);
    assert_eq!(action(&priority), &Action::Priority { job: JobId::new("5"), to: target });
}

#[test]
fn increment_always_enabled() {
    let job = Job::builder().chunks(1).priority(1).build();
    assert!(enabled(&chunks_button(&job, Step::Up)));
    let expected = Action::Priority { job: job.id.clone(), to: 2 };
    assert_eq!(action(&priority_button(&job, Step::Up)), &expected);
}

#[yare::parameterized(
    queued     = { FrameStatus::Queued,     false, false },
    dispatched = { FrameStatus::Dispatched, true,  false },
    done       = { FrameStatus::Done,       true,  true },
    error      = { FrameStatus::Error,      true,  true },
)]
fn frame_links_by_status(status: FrameStatus, log: bool, result: bool) {
    let job = JobId::new("4");
    let frame = Frame::builder().number(12).status(status).build();
    assert_eq!(!frame_cell(&job, FrameColumn::Log, &frame).is_empty(), log);
    match frame_cell(&job, FrameColumn::Result, &frame) {
        Node::Link { href, .. } => {
            assert!(result);
            assert_eq!(href, "/render_4_12.exr");
        }
        Node::Empty => assert!(!result),
        other => panic!("unexpected result cell {other:?}"),
    }
}

#[test]
fn job_name_links_to_detail() {
    let job = Job::builder().id("9").name("shot").build();
    assert_eq!(job_cell(JobColumn::Name, &job), Node::link("shot", "/html/job_9"));
}

#[test]
fn empty_category_reads_none() {
    let job = Job::builder().build();
    assert_eq!(job_cell(JobColumn::Category, &job), Node::text("None"));
}

#[test]
fn idle_slave_job_reads_none() {
    let slave = Slave::builder().build();
    assert_eq!(slave_cell(SlaveColumn::Job, &slave, 0.0), Node::muted("None"));
    assert_eq!(slave_cell(SlaveColumn::Tags, &slave, 0.0), Node::text("all"));
}

#[test]
fn locked_rule_has_no_edit_control() {
    let rule = Rule::builder().editable(false).build();
    assert_eq!(rule_cell(RuleColumn::Limit, &rule), Node::text("10"));
}

proptest! {
    #[test]
    fn job_buttons_follow_model_guards(job in arb_job()) {
        prop_assert_eq!(enabled(&pause_button(&job)), job.status != JobStatus::Finished);
        prop_assert_eq!(enabled(&reset_all_button(&job)), job.error != 0);
        prop_assert_eq!(enabled(&reset_errors_button(&job)), job.error != 0);
        prop_assert_eq!(enabled(&chunks_button(&job, Step::Down)), job.chunks != 1);
        prop_assert_eq!(enabled(&priority_button(&job, Step::Down)), job.priority != 1);

        let row: Vec<Node> = JobColumn::ALL.iter().map(|&c| job_cell(c, &job)).collect();
        prop_assert_eq!(Node::Row(row).buttons().len(), 8);
    }
}
