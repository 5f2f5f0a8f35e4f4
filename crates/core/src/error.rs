// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// An enum ordinal the coordinator sent that this client does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown {kind} ordinal: {value}")]
pub struct OrdinalError {
    pub kind: &'static str,
    pub value: u8,
}
