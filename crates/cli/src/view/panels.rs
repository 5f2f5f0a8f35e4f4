// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whole panels: the jobs, slaves and rules lists and the job detail view.

use fv_core::{Job, Rule, Slave, ThumbnailStrip};
use fv_wire::FileKind;

use super::cells::{self, FileColumn, FrameColumn, InfoColumn, JobColumn, ResolutionColumn};
use super::cells::{RuleColumn, SlaveColumn, SlaveRefColumn, VersionColumn};
use super::node::Node;
use super::table::{render_full, render_paged, PagerLabels, TableState};
use crate::client::JobDetail;

pub const JOBS_TABLE: &str = "jobs";
pub const SLAVES_TABLE: &str = "slaves";
pub const RULES_TABLE: &str = "rules";
pub const FRAMES_TABLE: &str = "frames";

pub fn jobs_panel(jobs: &[Job], state: &mut TableState, labels: &PagerLabels) -> Node {
    if jobs.is_empty() {
        return Node::section("Jobs", vec![Node::muted("No jobs")]);
    }
    let pager = state.pager(JOBS_TABLE, jobs.len());
    Node::section(
        "Jobs",
        vec![
            render_paged(JOBS_TABLE, JobColumn::ALL, jobs, cells::job_cell, &pager, labels),
            cells::cancel_all_control(jobs),
        ],
    )
}

pub fn slaves_panel(
    slaves: &[Slave],
    now: f64,
    state: &mut TableState,
    labels: &PagerLabels,
) -> Node {
    if slaves.is_empty() {
        return Node::section("Slaves", vec![Node::muted("No slaves")]);
    }
    let pager = state.pager(SLAVES_TABLE, slaves.len());
    let cell = |column, slave: &Slave| cells::slave_cell(column, slave, now);
    Node::section(
        "Slaves",
        vec![render_paged(SLAVES_TABLE, SlaveColumn::ALL, slaves, cell, &pager, labels)],
    )
}

pub fn rules_panel(rules: &[Rule]) -> Node {
    if rules.is_empty() {
        return Node::section("Rules", vec![Node::muted("No rules")]);
    }
    Node::section("Rules", vec![render_full(RULES_TABLE, RuleColumn::ALL, rules, cells::rule_cell)])
}

/// Job detail: general info, version info, frames, and every side panel.
pub fn job_panel(
    detail: &JobDetail,
    now: f64,
    strip: Option<&ThumbnailStrip>,
    state: &mut TableState,
    labels: &PagerLabels,
) -> Node {
    let job = &detail.job;
    let one = std::slice::from_ref(job);
    let mut sections = vec![Node::section(
        format!("Job {}: {}", job.id, job.name),
        vec![
            render_full("job", JobColumn::ALL, one, cells::job_cell),
            render_full("info", InfoColumn::ALL, one, cells::info_cell),
            render_full(
                "resolution",
                ResolutionColumn::ALL,
                std::slice::from_ref(&job.resolution),
                cells::resolution_cell,
            ),
            cells::result_archive_link(&job.id),
        ],
    )];

    if let Some(info) = job.version_info() {
        sections.push(Node::section(
            "Version",
            vec![render_full(
                "version",
                VersionColumn::ALL,
                std::slice::from_ref(info),
                cells::version_cell,
            )],
        ));
    }

    let frames = if job.frames.is_empty() {
        Node::muted("No frames")
    } else {
        let pager = state.pager(FRAMES_TABLE, job.frames.len());
        let cell = |column, frame: &fv_core::Frame| cells::frame_cell(&job.id, column, frame);
        render_paged(FRAMES_TABLE, FrameColumn::ALL, job.frames.as_slice(), cell, &pager, labels)
    };
    sections.push(Node::section("Frames", vec![frames]));

    if let Some(strip) = strip.filter(|s| !s.visible().is_empty()) {
        sections.push(thumbnails(strip));
    }

    let blend = match &detail.blend_file {
        Some(file) => match file.size {
            Some(size) => Node::text(format!("{} ({} bytes)", file.path, size)),
            None => Node::text(&file.path),
        },
        None => Node::muted("Unknown"),
    };
    sections.push(Node::section("Blend file", vec![blend]));

    let blacklist = if detail.blacklist.is_empty() {
        Node::muted("None")
    } else {
        let rows = detail.blacklist.as_slice();
        render_full("blacklist", SlaveRefColumn::ALL, rows, cells::slave_ref_cell)
    };
    sections.push(Node::section("Blacklist", vec![blacklist]));

    let slaves = if detail.slaves.is_empty() {
        Node::muted("None")
    } else {
        let cell = |column, slave: &Slave| cells::slave_cell(column, slave, now);
        render_full("job-slaves", SlaveColumn::ALL, detail.slaves.as_slice(), cell)
    };
    sections.push(Node::section("Slaves", vec![slaves]));

    for kind in FileKind::ALL {
        let files = detail.files.of_kind(kind);
        let body = if files.is_empty() {
            Node::muted("None")
        } else {
            render_full(&format!("{kind}-files"), FileColumn::ALL, files, cells::file_cell)
        };
        let heading = format!("{} files", capitalize(&kind.to_string()));
        sections.push(Node::section(heading, vec![body]));
    }

    Node::Stack(sections)
}

/// Visible thumbnails of a strip, in frame order.
pub fn thumbnails(strip: &ThumbnailStrip) -> Node {
    let rows = strip
        .visible()
        .into_iter()
        .filter_map(|frame| {
            let src = strip.source(frame)?;
            Some(Node::Row(vec![
                Node::text(format!("#{frame}")),
                Node::Image { src: src.to_string() },
            ]))
        })
        .collect();
    Node::section("Thumbnails", rows)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
