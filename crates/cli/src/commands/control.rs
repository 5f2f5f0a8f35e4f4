// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job control commands: pause, priority, chunks, reset and cancel.
//!
//! Each command presses the same button the job table shows, so guards
//! that disable a button in the table also refuse the command.

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use fv_core::{Job, JobId, Step};

use super::{unavailable, Context};
use crate::actions::{Outcome, Panel, Workflow};
use crate::dialog::{Dialog, Modal, ScriptedDialog, TerminalDialog};
use crate::exit_error::ExitError;
use crate::sync::Synchronizer;
use crate::view::{cells, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Up,
    Down,
}

impl From<Direction> for Step {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Up => Step::Up,
            Direction::Down => Step::Down,
        }
    }
}

/// Answer to the "delete backing files" question given on the command line.
#[derive(Debug, Clone, Copy, Default, clap::Args)]
pub struct ClearFlags {
    /// Delete the backing files without asking
    #[arg(long, conflicts_with = "no")]
    pub yes: bool,

    /// Keep the backing files without asking
    #[arg(long)]
    pub no: bool,
}

impl ClearFlags {
    fn dialog(self) -> Box<dyn Dialog> {
        match (self.yes, self.no) {
            (true, _) => Box::new(ScriptedDialog::always(true)),
            (_, true) => Box::new(ScriptedDialog::always(false)),
            _ => Box::new(TerminalDialog::new()),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum ControlCommand {
    /// Toggle a job between paused and waiting
    Pause {
        /// Job ID
        id: String,
    },
    /// Raise or lower a job's priority by one
    Priority {
        /// Job ID
        id: String,
        direction: Direction,
    },
    /// Grow or shrink a job's chunk size by one
    Chunks {
        /// Job ID
        id: String,
        direction: Direction,
    },
    /// Requeue a job's failed frames
    Reset {
        /// Job ID
        id: String,

        /// Requeue every frame, not only failed ones
        #[arg(long)]
        all: bool,
    },
    /// Cancel a job
    Cancel {
        /// Job ID
        id: String,

        #[command(flatten)]
        clear: ClearFlags,
    },
    /// Cancel every job
    CancelAll {
        #[command(flatten)]
        clear: ClearFlags,
    },
}

impl ControlCommand {
    fn job_id(&self) -> Option<JobId> {
        match self {
            ControlCommand::Pause { id }
            | ControlCommand::Priority { id, .. }
            | ControlCommand::Chunks { id, .. }
            | ControlCommand::Reset { id, .. }
            | ControlCommand::Cancel { id, .. } => Some(JobId::new(id.as_str())),
            ControlCommand::CancelAll { .. } => None,
        }
    }

    fn dialog(&self) -> Box<dyn Dialog> {
        match self {
            ControlCommand::Cancel { clear, .. } | ControlCommand::CancelAll { clear } => {
                clear.dialog()
            }
            _ => Box::new(ScriptedDialog::always(false)),
        }
    }

    /// The button this command presses.
    fn button(&self, jobs: &[Job]) -> Result<Node> {
        let Some(id) = self.job_id() else {
            return Ok(cells::cancel_all_control(jobs));
        };
        let job = jobs
            .iter()
            .find(|job| job.id == id)
            .ok_or_else(|| ExitError::not_found(format!("job {id} not found")))?;
        Ok(match self {
            ControlCommand::Pause { .. } => cells::pause_button(job),
            ControlCommand::Priority { direction, .. } => {
                cells::priority_button(job, (*direction).into())
            }
            ControlCommand::Chunks { direction, .. } => {
                cells::chunks_button(job, (*direction).into())
            }
            ControlCommand::Reset { all: true, .. } => cells::reset_all_button(job),
            ControlCommand::Reset { all: false, .. } => cells::reset_errors_button(job),
            ControlCommand::Cancel { .. } | ControlCommand::CancelAll { .. } => {
                cells::cancel_button(job)
            }
        })
    }
}

pub async fn handle(command: ControlCommand, ctx: &Context) -> Result<()> {
    let sync = ctx.synchronizer();
    let dialog = command.dialog();
    let outcome = run(&command, &sync, dialog.as_ref()).await?;
    report(outcome, &command)
}

/// Fetch the job list and press the command's button.
pub async fn run(
    command: &ControlCommand,
    sync: &Synchronizer,
    dialog: &dyn Dialog,
) -> Result<Outcome> {
    sync.refresh_jobs().await;
    let jobs = sync
        .jobs()
        .snapshot()
        .ok_or_else(|| unavailable("job list", sync.jobs().staleness()))?;

    let button = command.button(&jobs)?;
    if button.is_empty() {
        return Ok(Outcome::Disabled);
    }
    let workflow = Workflow::new(sync, dialog, Modal::new());
    Ok(workflow.press_button(&button, Panel::Jobs).await)
}

/// Print what happened; a rejected request is an error.
pub fn report(outcome: Outcome, command: &ControlCommand) -> Result<()> {
    match outcome {
        Outcome::Applied { mutation, .. } => println!("{mutation}"),
        Outcome::Failed { mutation, error } => {
            return Err(ExitError::failure(format!("{mutation} failed: {error}")).into());
        }
        Outcome::Declined => println!("Cancelled"),
        Outcome::Disabled => match command.job_id() {
            Some(id) => eprintln!("Nothing to do: not available for job {id}"),
            None => println!("No jobs"),
        },
    }
    Ok(())
}

#[cfg(test)]
#[path = "control_tests.rs"]
mod tests;
