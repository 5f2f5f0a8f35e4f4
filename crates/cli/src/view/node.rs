// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured view tree. Every panel renders to a [`Node`]; turning nodes
//! into terminal text happens only in [`super::render`].

use crate::actions::Action;

/// Text emphasis, mapped to the terminal palette by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    #[default]
    Plain,
    Header,
    Context,
    Muted,
    /// Coloured by the status word it holds
    Status,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Empty,
    Text {
        text: String,
        style: Style,
    },
    /// Control that triggers exactly one action; disabled buttons do nothing
    Button {
        label: String,
        action: Action,
        enabled: bool,
    },
    Link {
        label: String,
        href: String,
    },
    Image {
        src: String,
    },
    /// Inline sequence separated by single spaces
    Row(Vec<Node>),
    /// Blocks rendered one after another
    Stack(Vec<Node>),
    Table(Table),
    Section {
        title: String,
        body: Vec<Node>,
    },
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text { text: text.into(), style: Style::Plain }
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        Node::Text { text: text.into(), style }
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::styled(text, Style::Muted)
    }

    pub fn status(text: impl ToString) -> Self {
        Self::styled(text.to_string(), Style::Status)
    }

    pub fn button(label: impl Into<String>, action: Action, enabled: bool) -> Self {
        Node::Button { label: label.into(), action, enabled }
    }

    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Node::Link { label: label.into(), href: href.into() }
    }

    pub fn section(title: impl Into<String>, body: Vec<Node>) -> Self {
        Node::Section { title: title.into(), body }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Every button in the tree, depth first.
    pub fn buttons(&self) -> Vec<(&Action, bool)> {
        let mut found = Vec::new();
        self.collect_buttons(&mut found);
        found
    }

    fn collect_buttons<'a>(&'a self, found: &mut Vec<(&'a Action, bool)>) {
        match self {
            Node::Button { action, enabled, .. } => found.push((action, *enabled)),
            Node::Row(children) | Node::Stack(children) => {
                children.iter().for_each(|c| c.collect_buttons(found))
            }
            Node::Section { body, .. } => body.iter().for_each(|c| c.collect_buttons(found)),
            Node::Table(table) => {
                for row in &table.rows {
                    row.iter().for_each(|c| c.collect_buttons(found));
                }
            }
            Node::Empty | Node::Text { .. } | Node::Link { .. } | Node::Image { .. } => {}
        }
    }
}

/// Paging footer of a windowed table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerControls {
    pub page: usize,
    pub pages: usize,
    /// 1-based index of the first row shown
    pub first: usize,
    /// 1-based index of the last row shown
    pub last: usize,
    pub total: usize,
    pub back: String,
    pub forward: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub id: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Node>>,
    pub controls: Option<PagerControls>,
}
