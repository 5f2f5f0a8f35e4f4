// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Write endpoints of the coordinator.

use std::fmt;

use fv_core::{JobId, RuleId};
use serde_json::{json, Map, Value};

/// A POST asking the coordinator to change its state.
///
/// The client never changes a snapshot itself; after the coordinator
/// answers, the affected collection is fetched again.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Enable or disable a balancing rule
    BalanceEnable { rule: RuleId, enabled: bool },
    /// Set a balancing rule's limit
    BalanceLimit { rule: RuleId, limit: Value },
    /// Cancel every job; `clear` also deletes backing files
    ClearAll { clear: bool },
    /// Cancel one job; `clear` also deletes backing files
    Cancel { job: JobId, clear: bool },
    /// Toggle pause on a job
    Pause { job: JobId },
    EditChunks { job: JobId, chunks: u32 },
    EditPriority { job: JobId, priority: u32 },
    /// Requeue every frame of a job
    ResetAll { job: JobId },
    /// Requeue the failed frames of a job
    ResetErrors { job: JobId },
}

impl Mutation {
    pub fn path(&self) -> String {
        match self {
            Mutation::BalanceEnable { .. } => "/balance_enable".to_string(),
            Mutation::BalanceLimit { .. } => "/balance_limit".to_string(),
            Mutation::ClearAll { .. } => "/clear".to_string(),
            Mutation::Cancel { job, .. } => format!("/cancel_{job}"),
            Mutation::Pause { job } => format!("/pause_{job}"),
            Mutation::EditChunks { job, .. } | Mutation::EditPriority { job, .. } => {
                format!("/edit_{job}")
            }
            Mutation::ResetAll { job } => format!("/resetall_{job}_0"),
            Mutation::ResetErrors { job } => format!("/reset_{job}_0"),
        }
    }

    /// JSON body, if the endpoint takes one.
    pub fn body(&self) -> Option<Value> {
        match self {
            Mutation::BalanceEnable { rule, enabled } => Some(keyed(rule.as_str(), json!(enabled))),
            Mutation::BalanceLimit { rule, limit } => Some(keyed(rule.as_str(), limit.clone())),
            Mutation::ClearAll { clear } | Mutation::Cancel { clear, .. } => {
                Some(json!({ "clear": clear }))
            }
            Mutation::EditChunks { chunks, .. } => Some(json!({ "chunks": chunks })),
            Mutation::EditPriority { priority, .. } => Some(json!({ "priority": priority })),
            Mutation::Pause { .. } | Mutation::ResetAll { .. } | Mutation::ResetErrors { .. } => {
                None
            }
        }
    }
}

fn keyed(key: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(key.to_string(), value);
    Value::Object(map)
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.body() {
            Some(body) => write!(f, "POST {} {}", self.path(), body),
            None => write!(f, "POST {}", self.path()),
        }
    }
}

/// Interpret text typed into a limit editor: numbers stay numbers.
pub fn parse_limit(input: &str) -> Value {
    let trimmed = input.trim();
    match serde_json::from_str::<Value>(trimmed) {
        Ok(v @ Value::Number(_)) => v,
        _ => Value::String(trimmed.to_string()),
    }
}
