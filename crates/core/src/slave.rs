// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Render slave (worker) snapshot.

use crate::job::JobId;
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Identifier the coordinator assigns to a slave.
    pub struct SlaveId;
}

/// Weak reference from a slave to the job it is working on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRef {
    pub id: JobId,
    pub name: String,
}

/// Weak reference to a slave, as listed in a job's blacklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaveRef {
    pub id: SlaveId,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slave {
    pub id: SlaveId,
    pub name: String,
    /// Known addresses; the first one is canonical
    #[serde(default)]
    pub address: Vec<String>,
    /// Unix timestamp (seconds) of the last heartbeat
    #[serde(default)]
    pub last_seen: f64,
    /// Job tags this slave accepts; empty accepts all
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub total_done: u64,
    #[serde(default)]
    pub total_error: u64,
    /// Job currently assigned, `None` while idle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job: Option<JobRef>,
}

impl Slave {
    pub fn display_address(&self) -> &str {
        self.address.first().map(String::as_str).unwrap_or("-")
    }

    pub fn tags_display(&self) -> String {
        if self.tags.is_empty() {
            "all".to_string()
        } else {
            self.tags.join(", ")
        }
    }

    pub fn job_display(&self) -> &str {
        self.job.as_ref().map(|j| j.name.as_str()).unwrap_or("None")
    }

    /// Seconds since the last heartbeat, relative to `now_secs`.
    pub fn seen_ago(&self, now_secs: f64) -> f64 {
        (now_secs - self.last_seen).max(0.0)
    }
}

crate::builder! {
    pub struct SlaveBuilder => Slave {
        into {
            id: SlaveId = "s1",
            name: String = "render-01",
        }
        set {
            address: Vec<String> = vec!["10.0.0.1:8000".to_string()],
            last_seen: f64 = 0.0,
            tags: Vec<String> = Vec::new(),
            total_done: u64 = 0,
            total_error: u64 = 0,
        }
        option {
            job: JobRef = None,
        }
    }
}

#[cfg(test)]
#[path = "slave_tests.rs"]
mod tests;
