// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::time::Duration;

use fv_core::test_support::{sample_jobs, sample_rules, sample_slaves};
use fv_core::JobId;

use crate::test_support::FakeCoordinator;

use super::*;

const PERIOD: Duration = Duration::from_millis(5_000);

fn synchronizer(fake: &Arc<FakeCoordinator>) -> Synchronizer {
    Synchronizer::new(fake.client(), PERIOD, PERIOD)
}

#[test]
fn slot_drops_older_response_after_newer_one() {
    let slot: Slot<&str> = Slot::new();
    let first = slot.issue();
    let second = slot.issue();

    assert_eq!(slot.apply::<String>(second, Ok("new")), Applied::Updated);
    assert_eq!(slot.apply::<String>(first, Ok("old")), Applied::Superseded);
    assert_eq!(slot.snapshot().as_deref(), Some(&"new"));
    assert_eq!(slot.applied_seq(), second);
}

#[test]
fn slot_applies_response_while_newer_request_is_pending() {
    let slot: Slot<u32> = Slot::new();
    let first = slot.issue();
    let second = slot.issue();
    assert_eq!(slot.apply::<String>(first, Ok(1)), Applied::Updated);
    assert_eq!(slot.snapshot().as_deref(), Some(&1));

    let _third = slot.issue();
    assert_eq!(slot.apply(second, Err("timed out")), Applied::Failed);
    assert_eq!(slot.applied_seq(), second);
}

#[tokio::test(start_paused = true)]
async fn failure_keeps_snapshot_and_reports_staleness() {
    let slot: Slot<u32> = Slot::new();
    let seq = slot.issue();
    slot.apply::<String>(seq, Ok(7));
    assert!(slot.staleness().is_fresh());

    tokio::time::advance(Duration::from_secs(3)).await;
    let seq = slot.issue();
    assert_eq!(slot.apply(seq, Err("connection refused")), Applied::Failed);
    assert_eq!(slot.snapshot().as_deref(), Some(&7));

    let since = match slot.staleness() {
        Staleness::Stale { since, error } => {
            assert_eq!(error, "connection refused");
            since
        }
        other => panic!("expected stale, got {other:?}"),
    };

    // A second failure keeps the original start of the outage
    tokio::time::advance(Duration::from_secs(5)).await;
    let seq = slot.issue();
    slot.apply(seq, Err("timed out"));
    assert_eq!(slot.staleness(), Staleness::Stale { since, error: "timed out".to_string() });
    assert_eq!(slot.staleness().describe(Instant::now()), "stale for 5s: timed out");

    let seq = slot.issue();
    slot.apply::<String>(seq, Ok(8));
    assert!(slot.staleness().is_fresh());
}

#[test]
fn never_loaded_slot_reports_first_error() {
    let slot: Slot<u32> = Slot::new();
    assert_eq!(slot.staleness(), Staleness::NeverLoaded { error: None });
    let seq = slot.issue();
    slot.apply(seq, Err("HTTP 500"));
    assert_eq!(slot.staleness(), Staleness::NeverLoaded { error: Some("HTTP 500".to_string()) });
}

#[tokio::test]
async fn refresh_replaces_snapshot_wholesale() {
    let fake = FakeCoordinator::new();
    fake.respond("/html/jobs", sample_jobs());
    let sync = synchronizer(&fake);

    assert_eq!(sync.refresh_jobs().await, Applied::Updated);
    assert_eq!(sync.jobs().snapshot().map(|j| j.len()), Some(3));

    fake.respond("/html/jobs", &sample_jobs()[..1]);
    sync.refresh_jobs().await;
    assert_eq!(sync.jobs().snapshot().map(|j| j.len()), Some(1));
}

#[tokio::test]
async fn failed_fetch_leaves_previous_snapshot() {
    let fake = FakeCoordinator::new();
    fake.respond("/html/slaves", sample_slaves());
    let sync = synchronizer(&fake);
    sync.refresh_slaves().await;

    fake.unreachable("/html/slaves");
    assert_eq!(sync.refresh_slaves().await, Applied::Failed);
    assert_eq!(sync.slaves().snapshot().as_deref(), Some(&sample_slaves()));
    assert!(matches!(sync.slaves().staleness(), Staleness::Stale { .. }));
}

#[tokio::test]
async fn every_applied_response_bumps_revision() {
    let fake = FakeCoordinator::new();
    fake.respond("/html/rules", sample_rules());
    let sync = synchronizer(&fake);
    let rx = sync.subscribe();

    sync.refresh_rules().await;
    fake.fail("/html/rules", 502);
    sync.refresh_rules().await;
    assert_eq!(*rx.borrow(), 2);
}

#[tokio::test]
async fn refresh_by_panel_targets_the_panel() {
    let fake = FakeCoordinator::new();
    fake.respond("/html/job_3", &sample_jobs()[2]);
    let sync = synchronizer(&fake);

    sync.refresh(&Panel::Job(JobId::new("3"))).await;
    assert_eq!(sync.detail().snapshot().map(|d| d.job.name.clone()).as_deref(), Some("credits"));
    assert_eq!(fake.get_count("/html/job_3"), 1);
    assert_eq!(fake.get_count("/html/jobs"), 0);
}

#[tokio::test(start_paused = true)]
async fn polling_loops_tick_independently_until_shutdown() {
    let fake = FakeCoordinator::new();
    fake.respond("/html/jobs", sample_jobs());
    fake.respond("/html/slaves", sample_slaves());
    let sync = Synchronizer::new(fake.client(), PERIOD, Duration::from_millis(2_500));
    sync.start();
    sync.start();

    // First tick fires immediately, then once per period
    tokio::time::sleep(Duration::from_millis(10_100)).await;
    assert_eq!(fake.get_count("/html/jobs"), 3);
    assert_eq!(fake.get_count("/html/slaves"), 5);
    assert!(sync.jobs().snapshot().is_some());

    sync.shutdown().await;
    tokio::time::sleep(Duration::from_millis(20_000)).await;
    assert_eq!(fake.get_count("/html/jobs"), 3);
}

#[tokio::test(start_paused = true)]
async fn rules_are_not_polled() {
    let fake = FakeCoordinator::new();
    fake.respond("/html/jobs", sample_jobs());
    fake.respond("/html/slaves", sample_slaves());
    let sync = synchronizer(&fake);
    sync.start();
    tokio::time::sleep(Duration::from_secs(30)).await;
    sync.shutdown().await;
    assert_eq!(fake.get_count("/html/rules"), 0);
}

#[tokio::test(start_paused = true)]
async fn slow_coordinator_still_fills_the_view() {
    let fake = FakeCoordinator::new();
    fake.respond("/html/jobs", sample_jobs());
    fake.respond("/html/slaves", sample_slaves());
    fake.slow(Duration::from_secs(6));
    let sync = synchronizer(&fake);
    sync.start();

    // Every reply arrives after the next tick has already issued a request
    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(sync.jobs().snapshot().map(|j| j.len()), Some(3));
    assert!(sync.slaves().staleness().is_fresh());

    fake.unreachable("/html/jobs");
    tokio::time::sleep(Duration::from_secs(30)).await;
    sync.shutdown().await;
    assert!(matches!(sync.jobs().staleness(), Staleness::Stale { .. }));
    assert_eq!(sync.jobs().snapshot().map(|j| j.len()), Some(3));
}
