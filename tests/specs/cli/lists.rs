// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fv jobs` / `fv job` specs

use crate::prelude::*;

#[test]
fn jobs_renders_table_with_buttons() {
    let farm = Coordinator::start(&[("/html/jobs", farm_jobs())]);
    farm.fv()
        .args(&["jobs"])
        .passes()
        .stdout_has("ID  NAME")
        .stdout_has("teaser")
        .stdout_has("[cancel all]")
        .stdout_lacks("page 1/");
}

#[test]
fn jobs_json_is_the_full_list() {
    let farm = Coordinator::start(&[("/html/jobs", farm_jobs())]);
    let run = farm.fv().args(&["jobs", "-o", "json"]).passes();
    let jobs: serde_json::Value = serde_json::from_str(run.stdout()).unwrap();
    assert_eq!(jobs.as_array().map(Vec::len), Some(2));
    assert_eq!(jobs[1]["name"], "teaser");
}

#[test]
fn jobs_paging_shows_requested_page() {
    let farm = Coordinator::start(&[("/html/jobs", farm_jobs())]);
    farm.fv()
        .args(&["jobs", "--page-size", "1", "--page", "2"])
        .passes()
        .stdout_has("teaser")
        .stdout_lacks("intro")
        .stdout_has("page 2/2 (rows 2-2 of 2)");
}

#[test]
fn empty_farm_says_no_jobs() {
    let farm = Coordinator::start(&[("/html/jobs", json!([]))]);
    farm.fv().args(&["jobs"]).passes().stdout_has("No jobs");
}

#[test]
fn unknown_job_exits_two() {
    let farm = Coordinator::start(&[]);
    farm.fv().args(&["job", "42"]).exits(2).stderr_has("job 42 not found");
}

#[test]
fn unreachable_coordinator_exits_one() {
    cli()
        .env("FV_URL", "http://127.0.0.1:1")
        .env("FV_TIMEOUT_MS", "2000")
        .args(&["jobs"])
        .exits(1)
        .stderr_has("failed to fetch job list");
}
