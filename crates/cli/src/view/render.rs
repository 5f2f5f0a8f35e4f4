// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal text rendering of a [`Node`] tree.
//!
//! Columns are aligned on the unstyled text, then colour is applied, so
//! escape sequences never count towards widths. Control characters in any
//! leaf are escaped.

use super::node::{Node, PagerControls, Style, Table};
use crate::color;

const GAP: &str = "  ";

/// Render `node` as lines of text, each ending in a newline.
pub fn to_text(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Empty => {}
        Node::Table(table) => write_table(table, out),
        Node::Stack(children) => {
            for child in children {
                write_node(child, out);
            }
        }
        Node::Section { title, body } => {
            out.push_str(&color::header(&escape(title)));
            out.push('\n');
            for child in body {
                write_node(child, out);
            }
            out.push('\n');
        }
        inline => {
            let cell = Cell::of(inline);
            if !cell.plain.is_empty() {
                out.push_str(&cell.styled);
                out.push('\n');
            }
        }
    }
}

/// One inline fragment: text for measuring and text for printing.
struct Cell {
    plain: String,
    styled: String,
}

impl Cell {
    fn new(plain: String, styled: String) -> Self {
        Self { plain, styled }
    }

    fn unstyled(plain: String) -> Self {
        Self { styled: plain.clone(), plain }
    }

    fn of(node: &Node) -> Self {
        match node {
            Node::Empty | Node::Table(_) | Node::Stack(_) | Node::Section { .. } => {
                Self::unstyled(String::new())
            }
            Node::Text { text, style } => {
                let plain = escape(text);
                let styled = apply(*style, &plain);
                Self::new(plain, styled)
            }
            Node::Button { label, enabled: true, .. } => {
                Self::unstyled(format!("[{}]", escape(label)))
            }
            Node::Button { label, enabled: false, .. } => {
                let plain = format!("({})", escape(label));
                let styled = color::muted(&plain);
                Self::new(plain, styled)
            }
            Node::Link { label, .. } => Self::unstyled(escape(label)),
            Node::Image { src } => Self::unstyled(format!("<{}>", escape(src))),
            Node::Row(children) => {
                let parts: Vec<Cell> =
                    children.iter().map(Cell::of).filter(|c| !c.plain.is_empty()).collect();
                let plain = parts.iter().map(|c| c.plain.as_str()).collect::<Vec<_>>().join(" ");
                let styled = parts.iter().map(|c| c.styled.as_str()).collect::<Vec<_>>().join(" ");
                Self::new(plain, styled)
            }
        }
    }

    fn width(&self) -> usize {
        self.plain.chars().count()
    }
}

fn apply(style: Style, text: &str) -> String {
    match style {
        Style::Plain => text.to_string(),
        Style::Header => color::header(text),
        Style::Context => color::context(text),
        Style::Muted => color::muted(text),
        Style::Status => color::status(text),
    }
}

fn write_table(table: &Table, out: &mut String) {
    let headers: Vec<Cell> = table
        .headers
        .iter()
        .map(|h| {
            let plain = escape(h);
            Cell::new(plain.clone(), color::header(&plain))
        })
        .collect();
    let rows: Vec<Vec<Cell>> =
        table.rows.iter().map(|row| row.iter().map(Cell::of).collect()).collect();

    let columns =
        rows.iter().map(Vec::len).chain(std::iter::once(headers.len())).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for line in std::iter::once(&headers).chain(rows.iter()) {
        for (i, cell) in line.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    if !headers.is_empty() {
        write_line(&headers, &widths, out);
    }
    for row in &rows {
        write_line(row, &widths, out);
    }
    if let Some(controls) = &table.controls {
        out.push_str(&color::muted(&controls_line(controls)));
        out.push('\n');
    }
}

fn write_line(cells: &[Cell], widths: &[usize], out: &mut String) {
    let mut line = String::new();
    let mut pending = 0;
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            pending += GAP.len();
        }
        if !cell.plain.is_empty() {
            line.push_str(&" ".repeat(pending));
            line.push_str(&cell.styled);
            pending = 0;
        }
        pending += widths[i] - cell.width();
    }
    out.push_str(&line);
    out.push('\n');
}

fn controls_line(controls: &PagerControls) -> String {
    format!(
        "page {}/{} (rows {}-{} of {})  {}  {}",
        controls.page,
        controls.pages,
        controls.first,
        controls.last,
        controls.total,
        escape(&controls.back),
        escape(&controls.forward),
    )
}

/// Replace control characters with their escaped form.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            escaped.extend(c.escape_default());
        } else {
            escaped.push(c);
        }
    }
    escaped
}
