// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn exit_code(err: anyhow::Error) -> i32 {
    err.downcast_ref::<ExitError>().map(|e| e.code).unwrap_or(-1)
}

#[yare::parameterized(
    missing     = { ClientError::Status { path: "/html/job_9".into(), status: 404 }, 2 },
    server      = { ClientError::Status { path: "/html/job_9".into(), status: 500 }, 1 },
    unreachable = { ClientError::transport("/html/job_9", "connection refused"), 1 },
)]
fn fetch_errors_map_to_exit_codes(error: ClientError, code: i32) {
    assert_eq!(exit_code(fetch_failed("job 9", error)), code);
}

#[test]
fn page_labels_point_at_neighbouring_pages() {
    let pager = Pager::at_page(2, 5, 2);
    let labels = page_labels("fv jobs", &pager, 5);
    assert_eq!(labels, PagerLabels::new("prev: fv jobs --page 1", "next: fv jobs --page 3"));

    let last = Pager::at_page(2, 5, 3);
    assert_eq!(page_labels("fv jobs", &last, 5).forward, "next: fv jobs --page 3");
}

#[test]
fn unavailable_carries_last_error() {
    let err = unavailable("job list", Staleness::NeverLoaded { error: Some("HTTP 503".into()) });
    assert_eq!(err.to_string(), "failed to fetch job list: HTTP 503");
}
