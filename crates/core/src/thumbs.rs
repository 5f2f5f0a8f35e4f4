// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thumbnail strip with click-driven range selection.
//!
//! Each frame of a job has a thumbnail that is hidden by default. Clicking
//! frames opens a contiguous run of visible thumbnails:
//!
//! - From idle, a click shows that single frame.
//! - With one frame shown, clicking it again hides it; clicking another
//!   frame shows every frame between the two.
//! - With a run shown, clicking outside it extends the run up to the click;
//!   clicking anywhere inside hides the whole run.
//!
//! A thumbnail's image source is only set while it is visible, so showing a
//! frame again fetches its image again.

use std::collections::BTreeMap;

use crate::job::{Job, JobId};
use crate::links;

/// Selection state of the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nothing selected
    #[default]
    Idle,
    /// Exactly one frame shown
    Single { last: i64 },
    /// The inclusive run `[min, max]` is shown; `last` is the latest click
    Run { last: i64, min: i64, max: i64 },
}

/// Image-source change produced by a click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbEffect {
    Show { frame: i64, src: String },
    Hide { frame: i64 },
}

impl ThumbEffect {
    pub fn frame(&self) -> i64 {
        match self {
            ThumbEffect::Show { frame, .. } | ThumbEffect::Hide { frame } => *frame,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ThumbnailStrip {
    job: JobId,
    /// Frame number to image source, `Some` while visible
    thumbs: BTreeMap<i64, Option<String>>,
    selection: Selection,
}

impl ThumbnailStrip {
    pub fn new(job: JobId, frames: impl IntoIterator<Item = i64>) -> Self {
        let thumbs = frames.into_iter().map(|f| (f, None)).collect();
        Self { job, thumbs, selection: Selection::Idle }
    }

    pub fn for_job(job: &Job) -> Self {
        Self::new(job.id.clone(), job.frames.iter().map(|f| f.number))
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Image source for a frame, set only while it is visible.
    pub fn source(&self, frame: i64) -> Option<&str> {
        self.thumbs.get(&frame).and_then(|src| src.as_deref())
    }

    /// Visible frames in ascending order.
    pub fn visible(&self) -> Vec<i64> {
        self.thumbs.iter().filter(|(_, src)| src.is_some()).map(|(f, _)| *f).collect()
    }

    pub fn frames(&self) -> impl Iterator<Item = i64> + '_ {
        self.thumbs.keys().copied()
    }

    /// Apply a click on `frame`. Clicks on frames outside the strip are ignored.
    pub fn click(&mut self, frame: i64) -> Vec<ThumbEffect> {
        let mut effects = Vec::new();
        if !self.thumbs.contains_key(&frame) {
            return effects;
        }

        self.selection = match self.selection {
            Selection::Idle => {
                self.toggle(frame, &mut effects);
                Selection::Single { last: frame }
            }
            Selection::Single { last } if frame == last => {
                self.toggle(frame, &mut effects);
                Selection::Idle
            }
            Selection::Single { last } if frame < last => {
                self.toggle_range(frame, last - 1, &mut effects);
                Selection::Run { last: frame, min: frame, max: last }
            }
            Selection::Single { last } => {
                self.toggle_range(last + 1, frame, &mut effects);
                Selection::Run { last: frame, min: last, max: frame }
            }
            Selection::Run { min, max, .. } if (min..=max).contains(&frame) => {
                self.toggle_range(min, max, &mut effects);
                Selection::Idle
            }
            Selection::Run { min, max, .. } if frame > max => {
                self.toggle_range(max + 1, frame, &mut effects);
                Selection::Run { last: frame, min, max: frame }
            }
            Selection::Run { min, max, .. } => {
                self.toggle_range(frame, min - 1, &mut effects);
                Selection::Run { last: frame, min: frame, max }
            }
        };
        effects
    }

    fn toggle_range(&mut self, from: i64, to: i64, effects: &mut Vec<ThumbEffect>) {
        if from > to {
            return;
        }
        let frames: Vec<i64> = self.thumbs.range(from..=to).map(|(frame, _)| *frame).collect();
        for frame in frames {
            self.toggle(frame, effects);
        }
    }

    fn toggle(&mut self, frame: i64, effects: &mut Vec<ThumbEffect>) {
        let Some(src) = self.thumbs.get_mut(&frame) else {
            return;
        };
        if src.take().is_some() {
            effects.push(ThumbEffect::Hide { frame });
        } else {
            let url = links::thumbnail(&self.job, frame);
            *src = Some(url.clone());
            effects.push(ThumbEffect::Show { frame, src: url });
        }
    }
}

#[cfg(test)]
#[path = "thumbs_tests.rs"]
mod tests;
