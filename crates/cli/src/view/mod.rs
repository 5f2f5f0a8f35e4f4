// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Panels as structured node trees, and their text rendering.

pub mod cells;
mod node;
pub mod panels;
mod render;
mod table;

pub use node::{Node, PagerControls, Style, Table};
pub use render::{escape, to_text};
pub use table::{render_full, render_paged, Column, PagerLabels, TableState};

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
