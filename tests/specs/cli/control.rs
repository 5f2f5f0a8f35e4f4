// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job control specs: each command posts once and only when its guard allows.

use crate::prelude::*;

#[test]
fn pause_posts_and_refetches_jobs() {
    let farm = Coordinator::start(&[("/html/jobs", farm_jobs())]);
    farm.fv().args(&["pause", "2"]).passes().stdout_has("POST /pause_2");

    assert_eq!(farm.posts(), vec!["POST /pause_2"]);
    let job_lists = farm.requests().iter().filter(|r| *r == "GET /html/jobs").count();
    assert_eq!(job_lists, 2);
}

#[test]
fn pause_on_finished_job_sends_nothing() {
    let farm = Coordinator::start(&[("/html/jobs", farm_jobs())]);
    farm.fv().args(&["pause", "1"]).passes().stderr_has("not available");
    assert!(farm.posts().is_empty());
}

#[test]
fn cancel_with_no_keeps_files() {
    let farm = Coordinator::start(&[("/html/jobs", farm_jobs())]);
    farm.fv().args(&["cancel", "2", "--no"]).passes();
    assert_eq!(farm.posts(), vec![r#"POST /cancel_2 {"clear":false}"#]);
}

#[test]
fn cancel_prompt_reads_answer_from_stdin() {
    let farm = Coordinator::start(&[("/html/jobs", farm_jobs())]);
    farm.fv().args(&["cancel-all"]).stdin("y\n").passes().stderr_has("[y/n]");
    assert_eq!(farm.posts(), vec![r#"POST /clear {"clear":true}"#]);
}

#[test]
fn priority_down_posts_new_value() {
    let farm = Coordinator::start(&[("/html/jobs", farm_jobs())]);
    farm.fv().args(&["priority", "2", "down"]).passes();
    assert_eq!(farm.posts(), vec![r#"POST /edit_2 {"priority":1}"#]);
}

#[test]
fn missing_job_exits_two() {
    let farm = Coordinator::start(&[("/html/jobs", farm_jobs())]);
    farm.fv().args(&["pause", "9"]).exits(2).stderr_has("job 9 not found");
}
