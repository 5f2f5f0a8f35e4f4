// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Query and command methods for FarmClient.

use fv_core::{Job, JobId, Rule, Slave, SlaveRef};
use fv_wire::{BlendFile, FileEntry, FileKind, Mutation, Query};
use serde::Serialize;

use super::{ClientError, FarmClient};

/// Auxiliary files shipped with a job, by kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobFiles {
    pub cache: Vec<FileEntry>,
    pub fluid: Vec<FileEntry>,
    pub other: Vec<FileEntry>,
}

impl JobFiles {
    pub fn of_kind(&self, kind: FileKind) -> &[FileEntry] {
        match kind {
            FileKind::Cache => &self.cache,
            FileKind::Fluid => &self.fluid,
            FileKind::Other => &self.other,
        }
    }
}

/// A job with every side panel of its detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobDetail {
    pub job: Job,
    pub blend_file: Option<BlendFile>,
    pub blacklist: Vec<SlaveRef>,
    pub slaves: Vec<Slave>,
    pub files: JobFiles,
}

impl FarmClient {
    pub async fn list_jobs(&self) -> Result<Vec<Job>, ClientError> {
        self.fetch("job list", Query::Jobs).await
    }

    pub async fn list_slaves(&self) -> Result<Vec<Slave>, ClientError> {
        self.fetch("slave list", Query::Slaves).await
    }

    pub async fn list_rules(&self) -> Result<Vec<Rule>, ClientError> {
        self.fetch("rule list", Query::Rules).await
    }

    /// A single job including its frames
    pub async fn get_job(&self, id: &JobId) -> Result<Job, ClientError> {
        self.fetch("job", Query::Job { id: id.clone() }).await
    }

    pub async fn blend_file(&self, id: &JobId) -> Result<BlendFile, ClientError> {
        self.fetch("blend file", Query::BlendFile { id: id.clone() }).await
    }

    pub async fn blacklist(&self, id: &JobId) -> Result<Vec<SlaveRef>, ClientError> {
        self.fetch("blacklist", Query::Blacklist { id: id.clone() }).await
    }

    pub async fn slaves_for_job(&self, id: &JobId) -> Result<Vec<Slave>, ClientError> {
        self.fetch("job slaves", Query::SlavesForJob { id: id.clone() }).await
    }

    pub async fn files(&self, id: &JobId, kind: FileKind) -> Result<Vec<FileEntry>, ClientError> {
        self.fetch("file list", Query::Files { id: id.clone(), kind }).await
    }

    /// Fetch a job and its side panels concurrently.
    ///
    /// Only the job itself is required; a side panel that fails to load is
    /// logged and shown empty.
    pub async fn job_detail(&self, id: &JobId) -> Result<JobDetail, ClientError> {
        let (job, blend_file, blacklist, slaves, cache, fluid, other) = tokio::join!(
            self.get_job(id),
            self.blend_file(id),
            self.blacklist(id),
            self.slaves_for_job(id),
            self.files(id, FileKind::Cache),
            self.files(id, FileKind::Fluid),
            self.files(id, FileKind::Other),
        );
        Ok(JobDetail {
            job: job?,
            blend_file: side_panel("blend file", blend_file),
            blacklist: side_panel("blacklist", blacklist).unwrap_or_default(),
            slaves: side_panel("job slaves", slaves).unwrap_or_default(),
            files: JobFiles {
                cache: side_panel("cache files", cache).unwrap_or_default(),
                fluid: side_panel("fluid files", fluid).unwrap_or_default(),
                other: side_panel("other files", other).unwrap_or_default(),
            },
        })
    }

    /// Send a mutation. The reply is only checked to be an acknowledgement.
    pub async fn mutate(&self, mutation: &Mutation) -> Result<(), ClientError> {
        tracing::debug!(%mutation, "POST");
        let body = self.coordinator.post(mutation).await?;
        fv_wire::decode_reply(&body)?;
        tracing::info!(%mutation, "mutation applied");
        Ok(())
    }
}

fn side_panel<T>(what: &str, result: Result<T, ClientError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(panel = what, error = %e, "side panel unavailable");
            None
        }
    }
}
