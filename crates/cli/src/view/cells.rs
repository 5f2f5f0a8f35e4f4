// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-column cell formatters. Button guards come from the `fv_core`
//! predicates so a cell can never offer an action the model forbids.

use fv_core::{
    links, Frame, FrameLinks, Job, JobId, Resolution, Rule, Slave, SlaveRef, Step, VersionInfo,
};
use fv_wire::{FileEntry, Query};

use super::node::{Node, Style};
use super::table::Column;
use crate::actions::Action;
use crate::output::format_time_ago;

macro_rules! columns {
    ($name:ident { $( $variant:ident => $label:literal ),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[ $( $name::$variant, )+ ];
        }

        impl Column for $name {
            fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }
    };
}

columns!(JobColumn {
    Id => "ID",
    Name => "NAME",
    Category => "CATEGORY",
    Status => "STATUS",
    Progress => "PROGRESS",
    Errors => "ERRORS",
    Chunks => "CHUNKS",
    Priority => "PRIORITY",
    Usage => "USAGE",
    Wait => "WAIT",
    Actions => "ACTIONS",
});

columns!(InfoColumn {
    Type => "TYPE",
    Subtype => "ENGINE",
    Tags => "TAGS",
    Queued => "QUEUED",
    Dispatched => "DISPATCHED",
    WorkTime => "WORK TIME",
    Rules => "RULES",
});

columns!(ResolutionColumn {
    Size => "SIZE",
    Effective => "RENDERED",
});

columns!(VersionColumn {
    System => "SYSTEM",
    Remote => "REMOTE",
    Working => "WORKING",
    Revision => "REVISION",
});

columns!(FrameColumn {
    Number => "FRAME",
    Status => "STATUS",
    Time => "TIME",
    Slave => "SLAVE",
    Log => "LOG",
    Result => "RESULT",
});

columns!(SlaveColumn {
    Name => "NAME",
    Address => "ADDRESS",
    Tags => "TAGS",
    Job => "JOB",
    LastSeen => "SEEN",
    Done => "DONE",
    Errors => "ERRORS",
});

columns!(RuleColumn {
    Id => "ID",
    Kind => "TYPE",
    Description => "DESCRIPTION",
    Enabled => "ENABLED",
    Limit => "LIMIT",
});

columns!(SlaveRefColumn {
    Id => "ID",
    Name => "NAME",
});

columns!(FileColumn {
    Path => "PATH",
    Size => "SIZE",
});

pub fn pause_button(job: &Job) -> Node {
    Node::button("pause", Action::Pause(job.id.clone()), job.can_pause())
}

pub fn reset_all_button(job: &Job) -> Node {
    Node::button("reset", Action::ResetAll(job.id.clone()), job.can_reset_errors())
}

pub fn reset_errors_button(job: &Job) -> Node {
    Node::button("reset", Action::ResetErrors(job.id.clone()), job.can_reset_errors())
}

pub fn cancel_button(job: &Job) -> Node {
    Node::button("cancel", Action::Cancel(job.id.clone()), true)
}

pub fn priority_button(job: &Job, step: Step) -> Node {
    let to = job.adjusted_priority(step);
    let action = Action::Priority { job: job.id.clone(), to: to.unwrap_or(job.priority) };
    Node::button(step_label(step), action, to.is_some())
}

pub fn chunks_button(job: &Job, step: Step) -> Node {
    let to = job.adjusted_chunks(step);
    let action = Action::Chunks { job: job.id.clone(), to: to.unwrap_or(job.chunks) };
    Node::button(step_label(step), action, to.is_some())
}

fn step_label(step: Step) -> &'static str {
    match step {
        Step::Up => "+",
        Step::Down => "-",
    }
}

/// Cancel-all control; absent when there is nothing to cancel.
pub fn cancel_all_control(jobs: &[Job]) -> Node {
    if jobs.is_empty() {
        Node::Empty
    } else {
        Node::button("cancel all", Action::CancelAll, true)
    }
}

pub fn job_cell(column: JobColumn, job: &Job) -> Node {
    match column {
        JobColumn::Id => Node::muted(job.id.as_str()),
        JobColumn::Name => Node::link(&job.name, Query::Job { id: job.id.clone() }.path()),
        JobColumn::Category => Node::text(job.category_display()),
        JobColumn::Status => Node::status(job.status),
        JobColumn::Progress => Node::text(format!("{}/{}", job.done, job.length)),
        JobColumn::Errors => {
            Node::Row(vec![Node::text(job.error.to_string()), reset_errors_button(job)])
        }
        JobColumn::Chunks => Node::Row(vec![
            chunks_button(job, Step::Down),
            Node::text(job.chunks.to_string()),
            chunks_button(job, Step::Up),
        ]),
        JobColumn::Priority => Node::Row(vec![
            priority_button(job, Step::Down),
            Node::text(job.priority.to_string()),
            priority_button(job, Step::Up),
        ]),
        JobColumn::Usage => Node::text(format!("{:.1}%", job.usage * 100.0)),
        JobColumn::Wait => Node::text(job.wait.to_string()),
        JobColumn::Actions => {
            Node::Row(vec![pause_button(job), reset_all_button(job), cancel_button(job)])
        }
    }
}

pub fn info_cell(column: InfoColumn, job: &Job) -> Node {
    match column {
        InfoColumn::Type => Node::text(job.job_type.to_string()),
        InfoColumn::Subtype => Node::text(if job.subtype.is_empty() { "-" } else { &job.subtype }),
        InfoColumn::Tags => Node::text(job.tags_display()),
        InfoColumn::Queued => Node::text(job.queued().to_string()),
        InfoColumn::Dispatched => Node::text(job.dispatched.to_string()),
        InfoColumn::WorkTime => Node::text(fv_core::format_seconds(job.wktime)),
        InfoColumn::Rules => {
            let mut active = Vec::new();
            if job.p_rule {
                active.push("priority");
            }
            if job.e_rule {
                active.push("exception");
            }
            if active.is_empty() {
                Node::muted("-")
            } else {
                Node::styled(active.join(", "), Style::Status)
            }
        }
    }
}

pub fn resolution_cell(column: ResolutionColumn, resolution: &Resolution) -> Node {
    match column {
        ResolutionColumn::Size => Node::text(resolution.to_string()),
        ResolutionColumn::Effective => {
            let (w, h) = resolution.effective();
            Node::text(format!("{w}x{h}"))
        }
    }
}

pub fn version_cell(column: VersionColumn, info: &VersionInfo) -> Node {
    match column {
        VersionColumn::System => Node::text(&info.system),
        VersionColumn::Remote => Node::text(&info.remote_path),
        VersionColumn::Working => Node::text(&info.working_path),
        VersionColumn::Revision => Node::muted(&info.revision),
    }
}

/// Frame cells need the owning job to build artifact links.
pub fn frame_cell(job: &JobId, column: FrameColumn, frame: &Frame) -> Node {
    match column {
        FrameColumn::Number => Node::text(frame.number.to_string()),
        FrameColumn::Status => Node::status(frame.status),
        FrameColumn::Time if frame.has_log() => Node::text(fv_core::format_seconds(frame.time)),
        FrameColumn::Time => Node::muted("-"),
        FrameColumn::Slave => match &frame.slave {
            Some(slave) => Node::text(slave.as_str()),
            None => Node::muted("-"),
        },
        FrameColumn::Log => match FrameLinks::for_frame(job, frame).log {
            Some(href) => Node::link("log", href),
            None => Node::Empty,
        },
        FrameColumn::Result => match FrameLinks::for_frame(job, frame).result {
            Some(href) => Node::link("exr", href),
            None => Node::Empty,
        },
    }
}

/// Slave cells; `now` is the current unix time for the last-seen age.
pub fn slave_cell(column: SlaveColumn, slave: &Slave, now: f64) -> Node {
    match column {
        SlaveColumn::Name => Node::text(&slave.name),
        SlaveColumn::Address => Node::text(slave.display_address()),
        SlaveColumn::Tags => Node::text(slave.tags_display()),
        SlaveColumn::Job => match &slave.job {
            Some(job) => Node::link(&job.name, Query::Job { id: job.id.clone() }.path()),
            None => Node::muted(slave.job_display()),
        },
        SlaveColumn::LastSeen => Node::text(format_time_ago(slave.last_seen, now)),
        SlaveColumn::Done => Node::text(slave.total_done.to_string()),
        SlaveColumn::Errors => Node::text(slave.total_error.to_string()),
    }
}

pub fn rule_cell(column: RuleColumn, rule: &Rule) -> Node {
    match column {
        RuleColumn::Id => Node::muted(rule.id.as_str()),
        RuleColumn::Kind => Node::text(&rule.kind),
        RuleColumn::Description => Node::styled(&rule.description, Style::Context),
        RuleColumn::Enabled => {
            let (state, label) = if rule.enabled { ("on", "disable") } else { ("off", "enable") };
            let toggle = Action::RuleEnable { rule: rule.id.clone(), enabled: !rule.enabled };
            Node::Row(vec![Node::text(state), Node::button(label, toggle, true)])
        }
        RuleColumn::Limit => {
            let value = Node::text(rule.limit_display());
            if rule.editable {
                let edit = Action::RuleLimit { rule: rule.id.clone(), current: rule.limit_input() };
                Node::Row(vec![value, Node::button("edit", edit, true)])
            } else {
                value
            }
        }
    }
}

pub fn slave_ref_cell(column: SlaveRefColumn, slave: &SlaveRef) -> Node {
    match column {
        SlaveRefColumn::Id => Node::muted(slave.id.as_str()),
        SlaveRefColumn::Name => Node::text(&slave.name),
    }
}

pub fn file_cell(column: FileColumn, file: &FileEntry) -> Node {
    match column {
        FileColumn::Path => Node::text(&file.path),
        FileColumn::Size => Node::text(file.size.to_string()),
    }
}

/// Link to the archive of every rendered frame of a job.
pub fn result_archive_link(job: &JobId) -> Node {
    Node::link("results", links::result_archive(job))
}

#[cfg(test)]
#[path = "cells_tests.rs"]
mod tests;
