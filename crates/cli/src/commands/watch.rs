// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fv watch` - Live dashboard.
//!
//! The job and slave lists are polled in the background and the screen is
//! repainted whenever a snapshot changes. Commands are read one per line
//! from stdin; repaints are held back while a dialog is waiting for input.

use std::io::{IsTerminal, Write};

use anyhow::Result;
use clap::Args;
use fv_core::{JobId, ThumbnailStrip};
use tokio::time::Instant;

use super::Context;
use crate::actions::{Outcome, Panel, Workflow};
use crate::dialog::{Modal, TerminalDialog};
use crate::output::now_secs;
use crate::sync::Synchronizer;
use crate::view::panels::{self, FRAMES_TABLE, JOBS_TABLE, SLAVES_TABLE};
use crate::view::{cells, to_text, Node, PagerLabels, Style, TableState};

const HELP: &str = "n/p page jobs or frames, N/P page slaves, j <id> open job, b back, \
t <frame> thumbnail, pause|reset|cancel <id>, r refresh, q quit";

#[derive(Args)]
pub struct WatchArgs {
    /// Open this job instead of the overview
    #[arg(long)]
    pub job: Option<String>,
}

/// One line of dashboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashCommand {
    Redraw,
    Next,
    Prev,
    NextSlaves,
    PrevSlaves,
    Open(JobId),
    Back,
    Thumb(i64),
    Pause(JobId),
    Reset(JobId),
    Cancel(JobId),
    Refresh,
    Help,
    Quit,
}

impl DashCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(DashCommand::Redraw);
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(format!("too many arguments: {}", line.trim()));
        }
        let job = |arg: Option<&str>| {
            arg.map(JobId::new).ok_or_else(|| format!("{head} needs a job id"))
        };
        match (head, arg) {
            ("n", None) => Ok(DashCommand::Next),
            ("p", None) => Ok(DashCommand::Prev),
            ("N", None) => Ok(DashCommand::NextSlaves),
            ("P", None) => Ok(DashCommand::PrevSlaves),
            ("b", None) => Ok(DashCommand::Back),
            ("r", None) => Ok(DashCommand::Refresh),
            ("h" | "?", None) => Ok(DashCommand::Help),
            ("q" | "quit", None) => Ok(DashCommand::Quit),
            ("j", _) => job(arg).map(DashCommand::Open),
            ("pause", _) => job(arg).map(DashCommand::Pause),
            ("reset", _) => job(arg).map(DashCommand::Reset),
            ("cancel", _) => job(arg).map(DashCommand::Cancel),
            ("t", Some(frame)) => {
                let parsed = frame.parse().map(DashCommand::Thumb);
                parsed.map_err(|_| format!("not a frame number: {frame}"))
            }
            ("t", None) => Err("t needs a frame number".to_string()),
            _ => Err(format!("unknown command: {}", line.trim())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    Overview,
    Job(JobId),
}

/// Whether the dashboard keeps running after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// View state of the dashboard: table windows, focus and thumbnails.
pub struct Dashboard {
    tables: TableState,
    focus: Focus,
    strip: Option<(JobId, ThumbnailStrip)>,
    status: Option<String>,
}

impl Dashboard {
    pub fn new(page_size: usize) -> Self {
        Self {
            tables: TableState::new(page_size),
            focus: Focus::Overview,
            strip: None,
            status: None,
        }
    }

    pub fn focus(&self) -> &Focus {
        &self.focus
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Build the whole screen from the current snapshots.
    pub fn render(&mut self, sync: &Synchronizer, now_secs: f64, now: Instant) -> Node {
        let header = Node::Row(vec![
            Node::styled("fv", Style::Header),
            Node::muted(format!("jobs: {}", sync.jobs().staleness().describe(now))),
            Node::muted(format!("slaves: {}", sync.slaves().staleness().describe(now))),
        ]);
        let mut screen = vec![header];

        match &self.focus {
            Focus::Overview => {
                let jobs = sync.jobs().snapshot();
                let labels = PagerLabels::new("[p] prev", "[n] next");
                screen.push(match jobs.as_deref() {
                    Some(jobs) => panels::jobs_panel(jobs, &mut self.tables, &labels),
                    None => Node::section("Jobs", vec![Node::muted("Loading jobs")]),
                });

                let slaves = sync.slaves().snapshot();
                let labels = PagerLabels::new("[P] prev", "[N] next");
                screen.push(match slaves.as_deref() {
                    Some(slaves) => {
                        panels::slaves_panel(slaves, now_secs, &mut self.tables, &labels)
                    }
                    None => Node::section("Slaves", vec![Node::muted("Loading slaves")]),
                });
            }
            Focus::Job(id) => {
                let detail = sync.detail().snapshot().filter(|d| d.job.id == *id);
                match detail {
                    Some(detail) => {
                        let strip =
                            self.strip.as_ref().filter(|(job, _)| job == id).map(|(_, s)| s);
                        let labels = PagerLabels::new("[p] prev", "[n] next");
                        let tables = &mut self.tables;
                        screen.push(panels::job_panel(&detail, now_secs, strip, tables, &labels));
                    }
                    None => {
                        let state = sync.detail().staleness().describe(now);
                        screen.push(Node::section(format!("Job {id}"), vec![Node::muted(state)]));
                    }
                }
            }
        }

        if let Some(status) = &self.status {
            screen.push(Node::styled(status, Style::Context));
        }
        screen.push(Node::muted(HELP));
        Node::Stack(screen)
    }

    /// Act on one command. Actions go through `workflow`, so they behave
    /// exactly like the buttons they stand for.
    pub async fn apply(
        &mut self,
        command: DashCommand,
        sync: &Synchronizer,
        workflow: &Workflow<'_>,
    ) -> Flow {
        self.status = None;
        match command {
            DashCommand::Quit => return Flow::Quit,
            DashCommand::Redraw => {}
            DashCommand::Help => self.status = Some(HELP.to_string()),
            DashCommand::Next | DashCommand::Prev => {
                let (table, len) = match &self.focus {
                    Focus::Overview => {
                        (JOBS_TABLE, sync.jobs().snapshot().map_or(0, |j| j.len()))
                    }
                    Focus::Job(_) => {
                        let frames = sync.detail().snapshot().map_or(0, |d| d.job.frames.len());
                        (FRAMES_TABLE, frames)
                    }
                };
                self.page(table, len, command == DashCommand::Next);
            }
            DashCommand::NextSlaves | DashCommand::PrevSlaves => {
                let len = sync.slaves().snapshot().map_or(0, |s| s.len());
                self.page(SLAVES_TABLE, len, command == DashCommand::NextSlaves);
            }
            DashCommand::Open(id) => {
                self.focus = Focus::Job(id.clone());
                self.tables.goto(FRAMES_TABLE, 0, 1);
                sync.refresh_job(&id).await;
                if let Some(detail) = sync.detail().snapshot().filter(|d| d.job.id == id) {
                    self.strip = Some((id, ThumbnailStrip::for_job(&detail.job)));
                }
            }
            DashCommand::Back => self.focus = Focus::Overview,
            DashCommand::Thumb(frame) => self.click_thumbnail(frame),
            DashCommand::Refresh => {
                let targets = match &self.focus {
                    Focus::Overview => vec![Panel::Jobs, Panel::Slaves],
                    Focus::Job(id) => vec![Panel::Job(id.clone())],
                };
                for panel in &targets {
                    sync.refresh(panel).await;
                }
            }
            DashCommand::Pause(ref id)
            | DashCommand::Reset(ref id)
            | DashCommand::Cancel(ref id) => {
                let jobs = sync.jobs().snapshot();
                let found = jobs.as_deref().and_then(|jobs| jobs.iter().find(|j| j.id == *id));
                let Some(job) = found else {
                    self.status = Some(format!("job {id} not found"));
                    return Flow::Continue;
                };
                let button = match command {
                    DashCommand::Pause(_) => cells::pause_button(job),
                    DashCommand::Reset(_) => cells::reset_errors_button(job),
                    _ => cells::cancel_button(job),
                };
                let outcome = workflow.press_button(&button, Panel::Jobs).await;
                self.status = Some(describe_outcome(&outcome, id));
            }
        }
        Flow::Continue
    }

    fn page(&mut self, table: &str, len: usize, forward: bool) {
        if forward {
            self.tables.forward(table, len);
        } else {
            self.tables.backward(table, len);
        }
    }

    fn click_thumbnail(&mut self, frame: i64) {
        let Focus::Job(id) = &self.focus else {
            self.status = Some("open a job first".to_string());
            return;
        };
        match self.strip.as_mut().filter(|(job, _)| job == id) {
            Some((_, strip)) => {
                if strip.click(frame).is_empty() {
                    self.status = Some(format!("frame {frame} has no thumbnail"));
                }
            }
            None => self.status = Some(format!("job {id} is still loading")),
        }
    }
}

fn describe_outcome(outcome: &Outcome, id: &JobId) -> String {
    match outcome {
        Outcome::Applied { mutation, .. } => mutation.to_string(),
        Outcome::Failed { error, .. } => format!("failed: {error}"),
        Outcome::Declined => "cancelled".to_string(),
        Outcome::Disabled => format!("not available for job {id}"),
    }
}

pub async fn handle(args: WatchArgs, ctx: &Context) -> Result<()> {
    let sync = ctx.synchronizer();
    let dialog = TerminalDialog::new();
    let modal = Modal::new();
    let workflow = Workflow::new(&sync, &dialog, modal.clone());
    let mut dashboard = Dashboard::new(ctx.config.page_size);
    let mut revisions = sync.subscribe();

    sync.start();
    if let Some(id) = args.job {
        dashboard.apply(DashCommand::Open(JobId::new(id.as_str())), &sync, &workflow).await;
    }
    paint(&mut dashboard, &sync)?;

    loop {
        tokio::select! {
            changed = revisions.changed() => {
                if changed.is_err() {
                    break;
                }
                if !modal.is_open() {
                    paint(&mut dashboard, &sync)?;
                }
            }
            line = dialog.read_line() => {
                let Some(line) = line else { break };
                let flow = match DashCommand::parse(&line) {
                    Ok(command) => dashboard.apply(command, &sync, &workflow).await,
                    Err(message) => {
                        dashboard.status = Some(message);
                        Flow::Continue
                    }
                };
                if flow == Flow::Quit {
                    break;
                }
                paint(&mut dashboard, &sync)?;
            }
        }
    }

    sync.shutdown().await;
    Ok(())
}

fn paint(dashboard: &mut Dashboard, sync: &Synchronizer) -> Result<()> {
    let screen = to_text(&dashboard.render(sync, now_secs(), Instant::now()));
    let mut out = std::io::stdout().lock();
    if out.is_terminal() {
        write!(out, "\x1b[2J\x1b[H")?;
    }
    write!(out, "{screen}> ")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "watch_tests.rs"]
mod tests;
