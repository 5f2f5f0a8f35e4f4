// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP surface of the render-farm coordinator.
//!
//! Reads are `GET /html/...` returning JSON; writes are `POST` with a small
//! JSON body whose reply only acknowledges the change.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod query;
mod request;
mod response;
mod wire;

pub use query::{FileKind, Query};
pub use request::{parse_limit, Mutation};
pub use response::{BlendFile, FileEntry};
pub use wire::{decode, decode_reply, ProtocolError};
