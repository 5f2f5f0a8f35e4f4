// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory coordinator for unit tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use fv_wire::{Mutation, Query};
use parking_lot::Mutex;
use serde::Serialize;

use crate::client::{ClientError, Coordinator, FarmClient};

#[derive(Debug, Clone)]
enum Reply {
    Body(Vec<u8>),
    Status(u16),
    Unreachable,
}

/// Canned replies keyed by request path. Unknown GETs answer 404; unknown
/// POSTs answer with an empty acknowledgement.
#[derive(Default)]
pub struct FakeCoordinator {
    replies: Mutex<HashMap<String, Reply>>,
    gets: Mutex<Vec<String>>,
    posts: Mutex<Vec<Mutation>>,
    latency: Mutex<Option<Duration>>,
}

impl FakeCoordinator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn client(self: &Arc<Self>) -> FarmClient {
        FarmClient::new(Arc::clone(self) as Arc<dyn Coordinator>)
    }

    pub fn respond(&self, path: &str, body: impl Serialize) {
        let bytes = serde_json::to_vec(&body).unwrap_or_default();
        self.replies.lock().insert(path.to_string(), Reply::Body(bytes));
    }

    pub fn respond_raw(&self, path: &str, body: &[u8]) {
        self.replies.lock().insert(path.to_string(), Reply::Body(body.to_vec()));
    }

    pub fn fail(&self, path: &str, status: u16) {
        self.replies.lock().insert(path.to_string(), Reply::Status(status));
    }

    pub fn unreachable(&self, path: &str) {
        self.replies.lock().insert(path.to_string(), Reply::Unreachable);
    }

    /// Hold every GET for `latency` before answering.
    pub fn slow(&self, latency: Duration) {
        *self.latency.lock() = Some(latency);
    }

    pub fn gets(&self) -> Vec<String> {
        self.gets.lock().clone()
    }

    pub fn get_count(&self, path: &str) -> usize {
        self.gets.lock().iter().filter(|p| *p == path).count()
    }

    pub fn posts(&self) -> Vec<Mutation> {
        self.posts.lock().clone()
    }

    fn reply(&self, path: &str, default: Reply) -> Result<Vec<u8>, ClientError> {
        let reply = self.replies.lock().get(path).cloned().unwrap_or(default);
        match reply {
            Reply::Body(bytes) => Ok(bytes),
            Reply::Status(status) => Err(ClientError::Status { path: path.to_string(), status }),
            Reply::Unreachable => Err(ClientError::transport(path, "connection refused")),
        }
    }
}

#[async_trait]
impl Coordinator for FakeCoordinator {
    async fn get(&self, query: &Query) -> Result<Vec<u8>, ClientError> {
        let path = query.path();
        self.gets.lock().push(path.clone());
        let latency = *self.latency.lock();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        self.reply(&path, Reply::Status(404))
    }

    async fn post(&self, mutation: &Mutation) -> Result<Vec<u8>, ClientError> {
        self.posts.lock().push(mutation.clone());
        self.reply(&mutation.path(), Reply::Body(Vec::new()))
    }
}
