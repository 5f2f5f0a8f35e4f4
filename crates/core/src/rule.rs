// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Load-balancing rules.

use serde::{Deserialize, Serialize};
use serde_json::Value;

crate::define_id! {
    /// Identifier of a balancing rule; keys the `/balance_*` request bodies.
    pub struct RuleId;
}

/// A balancing or admission policy the coordinator applies.
///
/// `limit` is the raw value the coordinator stores; `limit_str` is how the
/// coordinator wants it shown and may be formatted differently (e.g. a
/// fraction rendered as a percentage).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: RuleId,
    #[serde(rename = "type")]
    pub kind: String,
    pub enabled: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub limit: Value,
    #[serde(default)]
    pub limit_str: String,
    #[serde(default)]
    pub editable: bool,
}

impl Rule {
    /// Text to pre-fill the limit editor with.
    pub fn limit_input(&self) -> String {
        match &self.limit {
            Value::String(s) => s.clone(),
            Value::Null => self.limit_str.clone(),
            other => other.to_string(),
        }
    }

    pub fn limit_display(&self) -> &str {
        if self.limit_str.is_empty() {
            "-"
        } else {
            &self.limit_str
        }
    }
}

crate::builder! {
    pub struct RuleBuilder => Rule {
        into {
            id: RuleId = "r1",
            kind: String = "priority",
            description: String = "Priority to new jobs",
            limit_str: String = "10",
        }
        set {
            enabled: bool = true,
            limit: Value = Value::from(10),
            editable: bool = true,
        }
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
