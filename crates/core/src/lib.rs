// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fv-core: Snapshot model and client-local state for the farmview (fv) CLI

pub mod macros;

pub mod error;
pub mod frame;
pub mod id;
pub mod job;
pub mod links;
pub mod pager;
pub mod rule;
pub mod slave;
pub mod thumbs;
pub mod time_fmt;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::OrdinalError;
#[cfg(any(test, feature = "test-support"))]
pub use frame::FrameBuilder;
pub use frame::{Frame, FrameStatus};
#[cfg(any(test, feature = "test-support"))]
pub use job::JobBuilder;
pub use job::{Job, JobId, JobStatus, JobType, Resolution, Step, VersionInfo, WaitTime};
pub use links::FrameLinks;
pub use pager::Pager;
#[cfg(any(test, feature = "test-support"))]
pub use rule::RuleBuilder;
pub use rule::{Rule, RuleId};
#[cfg(any(test, feature = "test-support"))]
pub use slave::SlaveBuilder;
pub use slave::{JobRef, Slave, SlaveId, SlaveRef};
pub use thumbs::{Selection, ThumbEffect, ThumbnailStrip};
pub use time_fmt::{format_elapsed, format_seconds};
