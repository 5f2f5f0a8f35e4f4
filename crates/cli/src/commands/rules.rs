// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fv rules` and `fv rule` - Load-balancing rules

use std::io::Write;

use anyhow::Result;
use clap::{Args, Subcommand};
use fv_core::{Rule, RuleId};

use super::{fetch_failed, unavailable, Context};
use crate::actions::{Action, Outcome, Panel, Workflow};
use crate::dialog::{Dialog, Modal, ScriptedDialog, TerminalDialog};
use crate::exit_error::ExitError;
use crate::output::handle_list;
use crate::sync::Synchronizer;
use crate::view::cells::{self, RuleColumn};
use crate::view::{panels, to_text, Node};

#[derive(Args)]
pub struct RuleArgs {
    #[command(subcommand)]
    pub command: RuleCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum RuleCommand {
    /// Enable a rule
    Enable {
        /// Rule ID
        id: String,
    },
    /// Disable a rule
    Disable {
        /// Rule ID
        id: String,
    },
    /// Change a rule's limit; prompts when no value is given
    Limit {
        /// Rule ID
        id: String,

        /// New limit; numbers are sent as numbers, anything else as text
        value: Option<String>,
    },
}

impl RuleCommand {
    fn rule_id(&self) -> RuleId {
        match self {
            RuleCommand::Enable { id }
            | RuleCommand::Disable { id }
            | RuleCommand::Limit { id, .. } => RuleId::new(id.as_str()),
        }
    }

    fn dialog(&self) -> Box<dyn Dialog> {
        match self {
            RuleCommand::Limit { value: Some(value), .. } => {
                Box::new(ScriptedDialog::always(false).with_input(Some(value)))
            }
            RuleCommand::Limit { value: None, .. } => Box::new(TerminalDialog::new()),
            _ => Box::new(ScriptedDialog::always(false)),
        }
    }

    /// The button this command presses on the rule's row.
    fn button(&self, rule: &Rule) -> Result<Node> {
        match self {
            RuleCommand::Enable { .. } | RuleCommand::Disable { .. } => {
                let enabled = matches!(self, RuleCommand::Enable { .. });
                let action = Action::RuleEnable { rule: rule.id.clone(), enabled };
                Ok(Node::button("toggle", action, true))
            }
            RuleCommand::Limit { .. } => {
                let limit = cells::rule_cell(RuleColumn::Limit, rule);
                let edit = limit.buttons().into_iter().next().map(|(action, enabled)| {
                    Node::button("edit", action.clone(), enabled)
                });
                edit.ok_or_else(|| {
                    ExitError::failure(format!("rule {} has no editable limit", rule.id)).into()
                })
            }
        }
    }
}

pub async fn list(ctx: &Context) -> Result<()> {
    let rules = ctx.client.list_rules().await.map_err(|e| fetch_failed("rule list", e))?;
    handle_list(ctx.format, &rules, "No rules", |rules, out| {
        write!(out, "{}", to_text(&panels::rules_panel(rules)))
    })
}

pub async fn handle(args: RuleArgs, ctx: &Context) -> Result<()> {
    let command = args.command;
    let sync = ctx.synchronizer();
    let dialog = command.dialog();
    match run(&command, &sync, dialog.as_ref()).await? {
        Outcome::Applied { mutation, .. } => println!("{mutation}"),
        Outcome::Failed { mutation, error } => {
            return Err(ExitError::failure(format!("{mutation} failed: {error}")).into());
        }
        Outcome::Declined => println!("Cancelled"),
        Outcome::Disabled => eprintln!("Nothing to do for rule {}", command.rule_id()),
    }
    Ok(())
}

/// Fetch the rules and press the command's button on the matching row.
pub async fn run(
    command: &RuleCommand,
    sync: &Synchronizer,
    dialog: &dyn Dialog,
) -> Result<Outcome> {
    sync.refresh_rules().await;
    let rules = sync
        .rules()
        .snapshot()
        .ok_or_else(|| unavailable("rule list", sync.rules().staleness()))?;

    let id = command.rule_id();
    let rule = rules
        .iter()
        .find(|rule| rule.id == id)
        .ok_or_else(|| ExitError::not_found(format!("rule {id} not found")))?;
    let button = command.button(rule)?;
    Ok(Workflow::new(sync, dialog, Modal::new()).press_button(&button, Panel::Rules).await)
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
