// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP client for the render-farm coordinator.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use fv_wire::{Mutation, ProtocolError, Query};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::env::Config;

#[path = "client_queries.rs"]
mod queries;

pub use queries::{JobDetail, JobFiles};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{path} returned HTTP {status}")]
    Status { path: String, status: u16 },

    #[error(transparent)]
    Decode(#[from] ProtocolError),
}

impl ClientError {
    pub fn transport(
        path: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Transport { path: path.into(), source: source.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status: 404, .. })
    }
}

/// Raw request/response exchange with a coordinator.
///
/// Bodies are returned undecoded; [`FarmClient`] decodes them.
#[async_trait]
pub trait Coordinator: Send + Sync {
    async fn get(&self, query: &Query) -> Result<Vec<u8>, ClientError>;

    async fn post(&self, mutation: &Mutation) -> Result<Vec<u8>, ClientError>;
}

/// [`Coordinator`] over HTTP.
pub struct HttpCoordinator {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCoordinator {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let base_url = base_url.into();
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::transport(base_url.clone(), e))?;
        Ok(Self { http, base_url })
    }

    async fn read(path: String, response: reqwest::Response) -> Result<Vec<u8>, ClientError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { path, status: status.as_u16() });
        }
        let body = response.bytes().await.map_err(|e| ClientError::transport(path, e))?;
        Ok(body.to_vec())
    }
}

#[async_trait]
impl Coordinator for HttpCoordinator {
    async fn get(&self, query: &Query) -> Result<Vec<u8>, ClientError> {
        let path = query.path();
        let url = format!("{}{}", self.base_url, path);
        let response =
            self.http.get(&url).send().await.map_err(|e| ClientError::transport(&path, e))?;
        Self::read(path, response).await
    }

    async fn post(&self, mutation: &Mutation) -> Result<Vec<u8>, ClientError> {
        let path = mutation.path();
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.post(&url);
        if let Some(body) = mutation.body() {
            request = request.json(&body);
        }
        let response = request.send().await.map_err(|e| ClientError::transport(&path, e))?;
        Self::read(path, response).await
    }
}

/// Typed access to the coordinator. Cheap to clone.
#[derive(Clone)]
pub struct FarmClient {
    coordinator: Arc<dyn Coordinator>,
}

impl FarmClient {
    pub fn new(coordinator: Arc<dyn Coordinator>) -> Self {
        Self { coordinator }
    }

    /// Client for the coordinator named in `config`.
    pub fn connect(config: &Config) -> Result<Self, ClientError> {
        let http = HttpCoordinator::new(config.url.clone(), config.timeout)?;
        Ok(Self::new(Arc::new(http)))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        what: &'static str,
        query: Query,
    ) -> Result<T, ClientError> {
        tracing::debug!(%query, "GET");
        let body = self.coordinator.get(&query).await?;
        Ok(fv_wire::decode(what, &body)?)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
