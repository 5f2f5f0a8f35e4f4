// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read endpoints of the coordinator.

use std::fmt;

use fv_core::JobId;

/// Category of auxiliary files a job ships to slaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Cache,
    Fluid,
    Other,
}

impl FileKind {
    pub const ALL: [FileKind; 3] = [FileKind::Cache, FileKind::Fluid, FileKind::Other];
}

fv_core::simple_display! {
    FileKind {
        Cache => "cache",
        Fluid => "fluid",
        Other => "other",
    }
}

/// A GET against the coordinator. Every query returns the full collection
/// or record; there is no server-side paging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Jobs,
    Slaves,
    Rules,
    Job { id: JobId },
    BlendFile { id: JobId },
    Blacklist { id: JobId },
    SlavesForJob { id: JobId },
    Files { id: JobId, kind: FileKind },
}

impl Query {
    pub fn path(&self) -> String {
        match self {
            Query::Jobs => "/html/jobs".to_string(),
            Query::Slaves => "/html/slaves".to_string(),
            Query::Rules => "/html/rules".to_string(),
            Query::Job { id } => format!("/html/job_{id}"),
            Query::BlendFile { id } => format!("/html/blendfile_{id}"),
            Query::Blacklist { id } => format!("/html/blacklist_{id}"),
            Query::SlavesForJob { id } => format!("/html/slavesjob_{id}"),
            Query::Files { id, kind } => format!("/html/{kind}files_{id}"),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
