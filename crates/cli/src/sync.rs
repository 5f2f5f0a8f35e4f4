// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Polling state synchronizer.
//!
//! Each resource lives in a [`Slot`]: the last applied snapshot plus the
//! sequence numbers of the newest request issued and the newest response
//! applied. A response is applied unless a later request was already
//! applied, so a slow reply can never overwrite a fresher one, yet replies
//! still land while newer requests are in flight. A failed fetch keeps the
//! previous snapshot and marks the slot stale until the next success.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use fv_core::{Job, JobId, Rule, Slave};
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::actions::Panel;
use crate::client::{ClientError, FarmClient, JobDetail};

/// What happened to a response handed to [`Slot::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Snapshot replaced
    Updated,
    /// Failure recorded, snapshot kept
    Failed,
    /// A response to a newer request was already applied; response dropped
    Superseded,
}

/// How current a slot's snapshot is.
#[derive(Debug, Clone, PartialEq)]
pub enum Staleness {
    NeverLoaded { error: Option<String> },
    Fresh { at: Instant },
    Stale { since: Instant, error: String },
}

impl Staleness {
    pub fn is_fresh(&self) -> bool {
        matches!(self, Staleness::Fresh { .. })
    }

    /// Short label for a status header, relative to `now`.
    pub fn describe(&self, now: Instant) -> String {
        match self {
            Staleness::NeverLoaded { error: None } => "loading".to_string(),
            Staleness::NeverLoaded { error: Some(e) } => format!("unavailable: {e}"),
            Staleness::Fresh { .. } => "live".to_string(),
            Staleness::Stale { since, error } => {
                let age = now.saturating_duration_since(*since).as_secs();
                format!("stale for {}: {}", fv_core::format_elapsed(age), error)
            }
        }
    }
}

#[derive(Debug)]
struct Failure {
    since: Instant,
    message: String,
}

#[derive(Debug)]
struct SlotState<T> {
    issued: u64,
    applied: u64,
    snapshot: Option<Arc<T>>,
    last_ok: Option<Instant>,
    failure: Option<Failure>,
}

/// Holder of one resource's latest snapshot.
#[derive(Debug)]
pub struct Slot<T> {
    state: Mutex<SlotState<T>>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            state: Mutex::new(SlotState {
                issued: 0,
                applied: 0,
                snapshot: None,
                last_ok: None,
                failure: None,
            }),
        }
    }
}

impl<T> Slot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next request sequence number.
    pub fn issue(&self) -> u64 {
        let mut state = self.state.lock();
        state.issued += 1;
        state.issued
    }

    /// Apply the response to request `seq`.
    pub fn apply<E: fmt::Display>(&self, seq: u64, result: Result<T, E>) -> Applied {
        let mut state = self.state.lock();
        if seq <= state.applied {
            return Applied::Superseded;
        }
        state.applied = seq;
        match result {
            Ok(value) => {
                state.snapshot = Some(Arc::new(value));
                state.last_ok = Some(Instant::now());
                state.failure = None;
                Applied::Updated
            }
            Err(e) => {
                let message = e.to_string();
                match &mut state.failure {
                    Some(failure) => failure.message = message,
                    None => state.failure = Some(Failure { since: Instant::now(), message }),
                }
                Applied::Failed
            }
        }
    }

    pub fn snapshot(&self) -> Option<Arc<T>> {
        self.state.lock().snapshot.clone()
    }

    /// Sequence number of the last response applied (0 if none).
    pub fn applied_seq(&self) -> u64 {
        self.state.lock().applied
    }

    pub fn staleness(&self) -> Staleness {
        let state = self.state.lock();
        match (&state.snapshot, &state.failure, state.last_ok) {
            (None, failure, _) => {
                Staleness::NeverLoaded { error: failure.as_ref().map(|f| f.message.clone()) }
            }
            (Some(_), Some(failure), _) => {
                Staleness::Stale { since: failure.since, error: failure.message.clone() }
            }
            (Some(_), None, Some(at)) => Staleness::Fresh { at },
            (Some(_), None, None) => Staleness::NeverLoaded { error: None },
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Polled {
    Jobs,
    Slaves,
}

struct Shared {
    client: FarmClient,
    jobs: Slot<Vec<Job>>,
    slaves: Slot<Vec<Slave>>,
    rules: Slot<Vec<Rule>>,
    detail: Slot<JobDetail>,
    revision: watch::Sender<u64>,
}

impl Shared {
    fn settle<T>(
        &self,
        what: &str,
        slot: &Slot<T>,
        seq: u64,
        result: Result<T, ClientError>,
    ) -> Applied {
        if let Err(e) = &result {
            tracing::warn!(resource = what, seq, error = %e, "refresh failed");
        }
        let applied = slot.apply(seq, result);
        match applied {
            Applied::Updated | Applied::Failed => {
                self.revision.send_modify(|rev| *rev += 1);
            }
            Applied::Superseded => {
                tracing::debug!(resource = what, seq, "dropped superseded response");
            }
        }
        applied
    }

    async fn refresh_jobs(&self) -> Applied {
        let seq = self.jobs.issue();
        let result = self.client.list_jobs().await;
        self.settle("jobs", &self.jobs, seq, result)
    }

    async fn refresh_slaves(&self) -> Applied {
        let seq = self.slaves.issue();
        let result = self.client.list_slaves().await;
        self.settle("slaves", &self.slaves, seq, result)
    }

    async fn refresh_rules(&self) -> Applied {
        let seq = self.rules.issue();
        let result = self.client.list_rules().await;
        self.settle("rules", &self.rules, seq, result)
    }

    async fn refresh_job(&self, id: &JobId) -> Applied {
        let seq = self.detail.issue();
        let result = self.client.job_detail(id).await;
        self.settle("job", &self.detail, seq, result)
    }

    async fn refresh_polled(&self, polled: Polled) -> Applied {
        match polled {
            Polled::Jobs => self.refresh_jobs().await,
            Polled::Slaves => self.refresh_slaves().await,
        }
    }
}

/// Owner of every snapshot the client shows and of the polling loops that
/// keep the job and slave lists current.
pub struct Synchronizer {
    shared: Arc<Shared>,
    job_poll: Duration,
    slave_poll: Duration,
    cancel: CancellationToken,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl Synchronizer {
    pub fn new(client: FarmClient, job_poll: Duration, slave_poll: Duration) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                client,
                jobs: Slot::new(),
                slaves: Slot::new(),
                rules: Slot::new(),
                detail: Slot::new(),
                revision,
            }),
            job_poll,
            slave_poll,
            cancel: CancellationToken::new(),
            tasks: Mutex::new(Vec::new()),
        }
    }

    pub fn client(&self) -> &FarmClient {
        &self.shared.client
    }

    /// Spawn the job and slave polling loops. Calling twice is a no-op.
    pub fn start(&self) {
        let mut tasks = self.tasks.lock();
        if !tasks.is_empty() {
            return;
        }
        tasks.push(self.spawn_poll(Polled::Jobs, self.job_poll));
        tasks.push(self.spawn_poll(Polled::Slaves, self.slave_poll));
    }

    fn spawn_poll(&self, polled: Polled, period: Duration) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        let cancel = self.cancel.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = interval.tick() => {
                        // Fetch off the loop so a slow reply never delays the next tick
                        let shared = Arc::clone(&shared);
                        let cancel = cancel.clone();
                        tokio::spawn(async move {
                            tokio::select! {
                                _ = cancel.cancelled() => {}
                                _ = shared.refresh_polled(polled) => {}
                            }
                        });
                    }
                }
            }
            tracing::debug!(?polled, "poll loop stopped");
        })
    }

    /// Stop the polling loops and wait for them to exit.
    pub async fn shutdown(&self) {
        self.cancel.cancel();
        let tasks = std::mem::take(&mut *self.tasks.lock());
        for task in tasks {
            let _ = task.await;
        }
    }

    /// Receiver whose value changes whenever a slot applies a response.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.revision.subscribe()
    }

    pub async fn refresh_jobs(&self) -> Applied {
        self.shared.refresh_jobs().await
    }

    pub async fn refresh_slaves(&self) -> Applied {
        self.shared.refresh_slaves().await
    }

    pub async fn refresh_rules(&self) -> Applied {
        self.shared.refresh_rules().await
    }

    pub async fn refresh_job(&self, id: &JobId) -> Applied {
        self.shared.refresh_job(id).await
    }

    /// Re-fetch whatever backs `panel`.
    pub async fn refresh(&self, panel: &Panel) -> Applied {
        match panel {
            Panel::Jobs => self.refresh_jobs().await,
            Panel::Slaves => self.refresh_slaves().await,
            Panel::Rules => self.refresh_rules().await,
            Panel::Job(id) => self.refresh_job(id).await,
        }
    }

    pub fn jobs(&self) -> &Slot<Vec<Job>> {
        &self.shared.jobs
    }

    pub fn slaves(&self) -> &Slot<Vec<Slave>> {
        &self.shared.slaves
    }

    pub fn rules(&self) -> &Slot<Vec<Rule>> {
        &self.shared.rules
    }

    pub fn detail(&self) -> &Slot<JobDetail> {
        &self.shared.detail
    }
}

impl Drop for Synchronizer {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
