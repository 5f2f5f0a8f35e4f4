// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Paginated table rendering.

use std::collections::HashMap;

use fv_core::Pager;

use super::node::{Node, PagerControls, Table};

/// A column of a table over rows of some record type.
pub trait Column: Copy {
    fn label(&self) -> &'static str;
}

/// Captions of the paging controls, e.g. the dashboard keys that drive them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerLabels {
    pub back: String,
    pub forward: String,
}

impl PagerLabels {
    pub fn new(back: impl Into<String>, forward: impl Into<String>) -> Self {
        Self { back: back.into(), forward: forward.into() }
    }
}

impl Default for PagerLabels {
    fn default() -> Self {
        Self::new("prev", "next")
    }
}

/// Render the rows inside `pager`'s window. Controls appear only when the
/// rows overflow one page.
pub fn render_paged<R, C: Column>(
    id: &str,
    columns: &[C],
    rows: &[R],
    cell: impl Fn(C, &R) -> Node,
    pager: &Pager,
    labels: &PagerLabels,
) -> Node {
    let window = pager.slice(rows);
    let controls = pager.has_controls(rows.len()).then(|| PagerControls {
        page: pager.page_number(),
        pages: pager.page_count(rows.len()),
        first: pager.current_min() + 1,
        last: pager.current_max(),
        total: rows.len(),
        back: labels.back.clone(),
        forward: labels.forward.clone(),
    });
    Node::Table(Table {
        id: id.to_string(),
        headers: headers(columns),
        rows: build_rows(columns, window, &cell),
        controls,
    })
}

/// Render every row; for fixed-size detail tables.
pub fn render_full<R, C: Column>(
    id: &str,
    columns: &[C],
    rows: &[R],
    cell: impl Fn(C, &R) -> Node,
) -> Node {
    Node::Table(Table {
        id: id.to_string(),
        headers: headers(columns),
        rows: build_rows(columns, rows, &cell),
        controls: None,
    })
}

fn headers<C: Column>(columns: &[C]) -> Vec<String> {
    columns.iter().map(|c| c.label().to_string()).collect()
}

fn build_rows<R, C: Column>(
    columns: &[C],
    rows: &[R],
    cell: &impl Fn(C, &R) -> Node,
) -> Vec<Vec<Node>> {
    rows.iter().map(|row| columns.iter().map(|&c| cell(c, row)).collect()).collect()
}

/// Pager per table id, owned by the view.
#[derive(Debug, Clone)]
pub struct TableState {
    page_size: usize,
    pagers: HashMap<String, Pager>,
}

impl TableState {
    pub fn new(page_size: usize) -> Self {
        Self { page_size: page_size.max(1), pagers: HashMap::new() }
    }

    /// Window for `id` clamped to a collection of `len` rows.
    pub fn pager(&mut self, id: &str, len: usize) -> Pager {
        let page_size = self.page_size;
        let pager = self.pagers.entry(id.to_string()).or_insert_with(|| Pager::new(page_size, len));
        pager.resize(len);
        *pager
    }

    pub fn forward(&mut self, id: &str, len: usize) -> Pager {
        let mut pager = self.pager(id, len);
        pager.forward(len);
        self.pagers.insert(id.to_string(), pager);
        pager
    }

    pub fn backward(&mut self, id: &str, len: usize) -> Pager {
        let mut pager = self.pager(id, len);
        pager.backward(len);
        self.pagers.insert(id.to_string(), pager);
        pager
    }

    /// Jump to the 1-based `page`.
    pub fn goto(&mut self, id: &str, len: usize, page: usize) -> Pager {
        let pager = Pager::at_page(self.page_size, len, page);
        self.pagers.insert(id.to_string(), pager);
        pager
    }
}
