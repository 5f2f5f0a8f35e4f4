// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! User prompts for confirmed actions and value editors.

use std::collections::VecDeque;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

#[async_trait]
pub trait Dialog: Send + Sync {
    /// Yes/no question; exactly one answer comes back.
    async fn confirm(&self, prompt: &str) -> bool;

    /// Single-field editor showing `initial`. `None` means cancelled.
    async fn input(&self, prompt: &str, initial: &str) -> Option<String>;
}

/// Whether a dialog is currently open. Repaints wait while it is.
#[derive(Debug, Clone, Default)]
pub struct Modal(Arc<AtomicBool>);

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self) -> ModalGuard {
        self.0.store(true, Ordering::SeqCst);
        ModalGuard(Arc::clone(&self.0))
    }

    pub fn is_open(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Closes the modal when dropped, on every exit path.
#[derive(Debug)]
pub struct ModalGuard(Arc<AtomicBool>);

impl Drop for ModalGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Dialog on the controlling terminal. Prompts go to stderr so stdout
/// stays parseable.
pub struct TerminalDialog {
    lines: tokio::sync::Mutex<Lines<BufReader<Stdin>>>,
}

impl Default for TerminalDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalDialog {
    pub fn new() -> Self {
        Self { lines: tokio::sync::Mutex::new(BufReader::new(tokio::io::stdin()).lines()) }
    }

    /// Next line of input, `None` at end of input.
    pub async fn read_line(&self) -> Option<String> {
        match self.lines.lock().await.next_line().await {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read stdin");
                None
            }
        }
    }

    fn prompt(text: &str) {
        let mut err = std::io::stderr().lock();
        let _ = write!(err, "{text}");
        let _ = err.flush();
    }
}

#[async_trait]
impl Dialog for TerminalDialog {
    async fn confirm(&self, prompt: &str) -> bool {
        loop {
            Self::prompt(&format!("{prompt} [y/n] "));
            // End of input answers "no"
            let Some(line) = self.read_line().await else {
                eprintln!();
                return false;
            };
            match parse_answer(&line) {
                Some(answer) => return answer,
                None => eprintln!("Please answer y or n."),
            }
        }
    }

    async fn input(&self, prompt: &str, initial: &str) -> Option<String> {
        Self::prompt(&format!("{prompt} (current: {initial}, empty to cancel): "));
        let line = self.read_line().await?;
        let value = line.trim();
        (!value.is_empty()).then(|| value.to_string())
    }
}

pub fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Dialog with answers decided up front, for `--yes` / `--no` and tests.
#[derive(Debug, Default)]
pub struct ScriptedDialog {
    confirms: Mutex<VecDeque<bool>>,
    inputs: Mutex<VecDeque<Option<String>>>,
    fallback: bool,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedDialog {
    /// Answer every confirmation with `answer` and cancel every editor.
    pub fn always(answer: bool) -> Self {
        Self { fallback: answer, ..Self::default() }
    }

    pub fn with_input(self, value: Option<&str>) -> Self {
        self.inputs.lock().push_back(value.map(str::to_string));
        self
    }

    pub fn with_confirm(self, answer: bool) -> Self {
        self.confirms.lock().push_back(answer);
        self
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl Dialog for ScriptedDialog {
    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().push(prompt.to_string());
        self.confirms.lock().pop_front().unwrap_or(self.fallback)
    }

    async fn input(&self, prompt: &str, initial: &str) -> Option<String> {
        self.prompts.lock().push(format!("{prompt} [{initial}]"));
        self.inputs.lock().pop_front().flatten()
    }
}

#[cfg(test)]
#[path = "dialog_tests.rs"]
mod tests;
