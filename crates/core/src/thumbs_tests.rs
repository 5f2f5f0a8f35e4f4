// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use proptest::prelude::*;

fn strip() -> ThumbnailStrip {
    ThumbnailStrip::new(JobId::new("j1"), 0..10)
}

#[test]
fn first_click_shows_single_frame() {
    let mut s = strip();
    let effects = s.click(5);
    assert_eq!(s.visible(), vec![5]);
    assert_eq!(s.selection(), Selection::Single { last: 5 });
    assert_eq!(effects, vec![ThumbEffect::Show { frame: 5, src: "/thumb_j1_5.jpg".into() }]);
}

#[test]
fn second_click_on_same_frame_returns_to_idle() {
    let mut s = strip();
    s.click(5);
    let effects = s.click(5);
    assert!(s.visible().is_empty());
    assert_eq!(s.selection(), Selection::Idle);
    assert_eq!(effects, vec![ThumbEffect::Hide { frame: 5 }]);
}

#[test]
fn click_sequence_extends_run_both_ways() {
    let mut s = strip();

    s.click(5);
    assert_eq!(s.visible(), vec![5]);

    s.click(8);
    assert_eq!(s.visible(), vec![5, 6, 7, 8]);
    assert_eq!(s.selection(), Selection::Run { last: 8, min: 5, max: 8 });

    s.click(3);
    assert_eq!(s.visible(), vec![3, 4, 5, 6, 7, 8]);
    assert_eq!(s.selection(), Selection::Run { last: 3, min: 3, max: 8 });
}

#[test]
fn click_below_single_frame_opens_run() {
    let mut s = strip();
    s.click(6);
    let effects = s.click(2);
    assert_eq!(s.visible(), vec![2, 3, 4, 5, 6]);
    assert_eq!(s.selection(), Selection::Run { last: 2, min: 2, max: 6 });
    let shown: Vec<i64> = effects.iter().map(ThumbEffect::frame).collect();
    assert_eq!(shown, vec![2, 3, 4, 5]);
}

#[yare::parameterized(
    lower_edge = { 3 },
    interior   = { 5 },
    upper_edge = { 7 },
)]
fn click_inside_run_collapses_everything(frame: i64) {
    let mut s = strip();
    s.click(3);
    s.click(7);
    assert_eq!(s.visible(), vec![3, 4, 5, 6, 7]);

    let effects = s.click(frame);
    assert!(s.visible().is_empty());
    assert_eq!(s.selection(), Selection::Idle);
    assert_eq!(effects.len(), 5);
    assert!(effects.iter().all(|e| matches!(e, ThumbEffect::Hide { .. })));
}

#[test]
fn source_is_cleared_when_hidden_and_restored_when_shown() {
    let mut s = strip();
    s.click(4);
    assert_eq!(s.source(4), Some("/thumb_j1_4.jpg"));
    s.click(4);
    assert_eq!(s.source(4), None);
    let effects = s.click(4);
    assert_eq!(effects, vec![ThumbEffect::Show { frame: 4, src: "/thumb_j1_4.jpg".into() }]);
}

#[test]
fn click_outside_strip_is_ignored() {
    let mut s = strip();
    s.click(2);
    assert!(s.click(42).is_empty());
    assert_eq!(s.selection(), Selection::Single { last: 2 });
}

#[test]
fn non_zero_based_frames() {
    let mut s = ThumbnailStrip::new(JobId::new("j"), 101..=110);
    s.click(101);
    s.click(104);
    assert_eq!(s.visible(), vec![101, 102, 103, 104]);
}

#[test]
fn sparse_frames_only_toggle_existing_thumbnails() {
    let mut s = ThumbnailStrip::new(JobId::new("j"), [1, 500, 1_000_000_000]);
    s.click(1);
    let effects = s.click(1_000_000_000);
    let shown: Vec<i64> = effects.iter().map(ThumbEffect::frame).collect();
    assert_eq!(shown, vec![500, 1_000_000_000]);
    assert_eq!(s.visible(), vec![1, 500, 1_000_000_000]);

    let hidden = s.click(500);
    assert_eq!(hidden.len(), 3);
    assert_eq!(s.selection(), Selection::Idle);
}

#[test]
fn for_job_uses_frame_numbers() {
    use crate::frame::Frame;
    let job = Job::builder()
        .frames(vec![Frame::builder().number(10).build(), Frame::builder().number(11).build()])
        .build();
    let s = ThumbnailStrip::for_job(&job);
    assert_eq!(s.frames().collect::<Vec<_>>(), vec![10, 11]);
}

proptest! {
    /// Visible frames always form the run the selection describes.
    #[test]
    fn visible_set_matches_selection(clicks in proptest::collection::vec(0i64..20, 0..30)) {
        let mut s = ThumbnailStrip::new(JobId::new("p"), 0..20);
        for frame in clicks {
            s.click(frame);
            let expected: Vec<i64> = match s.selection() {
                Selection::Idle => vec![],
                Selection::Single { last } => vec![last],
                Selection::Run { min, max, .. } => (min..=max).collect(),
            };
            prop_assert_eq!(s.visible(), expected);
        }
    }
}
