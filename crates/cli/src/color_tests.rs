// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

fn force_color() {
    std::env::set_var("COLOR", "1");
    std::env::remove_var("NO_COLOR");
}

fn disable_color() {
    std::env::set_var("NO_COLOR", "1");
    std::env::remove_var("COLOR");
}

#[test]
#[serial]
fn styles_returns_plain_when_no_color() {
    disable_color();
    assert_eq!(format!("{:?}", styles()), format!("{:?}", Styles::plain()));
}

#[test]
#[serial]
fn styles_returns_styled_when_color_forced() {
    force_color();
    assert_ne!(format!("{:?}", styles()), format!("{:?}", Styles::plain()));
}

#[test]
#[serial]
fn header_produces_ansi_when_color_forced() {
    force_color();
    let result = header("foo");
    assert!(result.contains("\x1b[38;5;74m"), "expected ANSI header color");
    assert!(result.ends_with("\x1b[0m"), "expected ANSI reset");
}

#[test]
#[serial]
fn no_color_leaves_text_untouched() {
    disable_color();
    assert_eq!(muted("bar"), "bar");
    assert_eq!(status("Error"), "Error");
}

#[yare::parameterized(
    finished   = { "Finished",   Some(codes::GOOD) },
    done       = { "Done",       Some(codes::GOOD) },
    paused     = { "Paused",     Some(codes::WARN) },
    dispatched = { "Dispatched", Some(codes::WARN) },
    error      = { "Error",      Some(codes::BAD) },
    queued     = { "Queued",     None },
)]
#[serial]
fn status_colors(word: &str, code: Option<u8>) {
    force_color();
    let painted = status(word);
    match code {
        Some(c) => assert!(painted.starts_with(&format!("\x1b[38;5;{c}m"))),
        None => assert_eq!(painted, word),
    }
}
