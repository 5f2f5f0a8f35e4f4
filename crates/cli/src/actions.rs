// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mutation workflow.
//!
//! Immediate actions POST straight away. Confirmed actions (cancelling jobs)
//! first ask whether backing files should be deleted too; either answer
//! still posts. The owning panel is re-fetched only after the coordinator
//! accepted the change.

use fv_core::{JobId, RuleId};
use fv_wire::{parse_limit, Mutation};

use crate::client::ClientError;
use crate::dialog::{Dialog, Modal};
use crate::sync::Synchronizer;
use crate::view::Node;

pub const CANCEL_PROMPT: &str = "Also delete the job's backing files?";
pub const CANCEL_ALL_PROMPT: &str = "Cancel every job. Also delete their backing files?";

/// A view whose data a mutation can invalidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Panel {
    Jobs,
    Slaves,
    Rules,
    Job(JobId),
}

fv_core::simple_display! {
    Panel {
        Jobs => "jobs",
        Slaves => "slaves",
        Rules => "rules",
        Job(..) => "job",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionClass {
    Immediate,
    Confirmed,
}

/// What a button does when pressed.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Pause(JobId),
    Priority { job: JobId, to: u32 },
    Chunks { job: JobId, to: u32 },
    ResetErrors(JobId),
    ResetAll(JobId),
    RuleEnable { rule: RuleId, enabled: bool },
    /// Opens an editor pre-filled with `current`
    RuleLimit { rule: RuleId, current: String },
    Cancel(JobId),
    CancelAll,
}

impl Action {
    pub fn class(&self) -> ActionClass {
        match self {
            Action::Cancel(_) | Action::CancelAll => ActionClass::Confirmed,
            _ => ActionClass::Immediate,
        }
    }

    /// Mutation for actions that need no user input.
    fn immediate(&self) -> Option<Mutation> {
        let mutation = match self {
            Action::Pause(job) => Mutation::Pause { job: job.clone() },
            Action::Priority { job, to } => {
                Mutation::EditPriority { job: job.clone(), priority: *to }
            }
            Action::Chunks { job, to } => Mutation::EditChunks { job: job.clone(), chunks: *to },
            Action::ResetErrors(job) => Mutation::ResetErrors { job: job.clone() },
            Action::ResetAll(job) => Mutation::ResetAll { job: job.clone() },
            Action::RuleEnable { rule, enabled } => {
                Mutation::BalanceEnable { rule: rule.clone(), enabled: *enabled }
            }
            Action::RuleLimit { .. } | Action::Cancel(_) | Action::CancelAll => return None,
        };
        Some(mutation)
    }

    /// Mutation for a confirmed action once the user answered `clear`.
    fn confirmed(&self, clear: bool) -> Option<Mutation> {
        match self {
            Action::Cancel(job) => Some(Mutation::Cancel { job: job.clone(), clear }),
            Action::CancelAll => Some(Mutation::ClearAll { clear }),
            _ => None,
        }
    }
}

/// Result of pressing a button.
#[derive(Debug)]
pub enum Outcome {
    /// Coordinator accepted the change; `refreshed` was fetched again
    Applied { mutation: Mutation, refreshed: Panel },
    /// Request failed; nothing was refreshed
    Failed { mutation: Mutation, error: ClientError },
    /// Input dialog cancelled; nothing was sent
    Declined,
    /// Button disabled by its guard; nothing was sent
    Disabled,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied { .. })
    }
}

/// Presses buttons on behalf of the user.
pub struct Workflow<'a> {
    sync: &'a Synchronizer,
    dialog: &'a dyn Dialog,
    modal: Modal,
}

impl<'a> Workflow<'a> {
    pub fn new(sync: &'a Synchronizer, dialog: &'a dyn Dialog, modal: Modal) -> Self {
        Self { sync, dialog, modal }
    }

    /// Press `button`; anything that is not a button counts as disabled.
    pub async fn press_button(&self, button: &Node, panel: Panel) -> Outcome {
        match button {
            Node::Button { action, enabled, .. } => self.press(action, *enabled, panel).await,
            _ => Outcome::Disabled,
        }
    }

    pub async fn press(&self, action: &Action, enabled: bool, panel: Panel) -> Outcome {
        if !enabled {
            tracing::debug!(?action, "ignored disabled action");
            return Outcome::Disabled;
        }
        let Some(mutation) = self.resolve(action).await else {
            return Outcome::Declined;
        };
        match self.sync.client().mutate(&mutation).await {
            Ok(()) => {
                self.sync.refresh(&panel).await;
                Outcome::Applied { mutation, refreshed: panel }
            }
            Err(error) => {
                tracing::warn!(%mutation, %error, "mutation failed");
                Outcome::Failed { mutation, error }
            }
        }
    }

    async fn resolve(&self, action: &Action) -> Option<Mutation> {
        match (action.class(), action) {
            (ActionClass::Confirmed, _) => {
                let prompt =
                    if *action == Action::CancelAll { CANCEL_ALL_PROMPT } else { CANCEL_PROMPT };
                let clear = self.confirm(prompt).await;
                action.confirmed(clear)
            }
            (ActionClass::Immediate, Action::RuleLimit { rule, current }) => {
                let _guard = self.modal.open();
                let prompt = format!("New limit for rule {rule}");
                let value = self.dialog.input(&prompt, current).await?;
                Some(Mutation::BalanceLimit { rule: rule.clone(), limit: parse_limit(&value) })
            }
            (ActionClass::Immediate, _) => action.immediate(),
        }
    }

    async fn confirm(&self, prompt: &str) -> bool {
        let _guard = self.modal.open();
        self.dialog.confirm(prompt).await
    }
}

#[cfg(test)]
#[path = "actions_tests.rs"]
mod tests;
