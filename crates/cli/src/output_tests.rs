// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;

use super::{format_time_ago, write_list, OutputFormat};

#[derive(Debug, Clone, Serialize)]
struct FakeEntry {
    name: String,
}

fn render(format: OutputFormat, items: &[FakeEntry]) -> String {
    let mut buf = Vec::new();
    write_list(&mut buf, format, items, "No entries", |items, out| {
        for item in items {
            writeln!(out, "- {}", item.name)?;
        }
        Ok(())
    })
    .unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn empty_text_list_prints_message() {
    assert_eq!(render(OutputFormat::Text, &[]), "No entries\n");
}

#[test]
fn empty_json_list_is_an_empty_array() {
    assert_eq!(render(OutputFormat::Json, &[]), "[]\n");
}

#[test]
fn text_list_uses_renderer() {
    let items = vec![FakeEntry { name: "a".into() }, FakeEntry { name: "b".into() }];
    assert_eq!(render(OutputFormat::Text, &items), "- a\n- b\n");
}

#[test]
fn json_list_is_valid_json() {
    let items = vec![FakeEntry { name: "a".into() }];
    let json = render(OutputFormat::Json, &items);
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["name"], "a");
}

#[yare::parameterized(
    never     = { 0.0,    1000.0, "-" },
    seconds   = { 995.0,  1000.0, "5s" },
    minutes   = { 880.0,  1000.0, "2m" },
    future    = { 1010.0, 1000.0, "0s" },
)]
fn time_ago(epoch: f64, now: f64, expected: &str) {
    assert_eq!(format_time_ago(epoch, now), expected);
}
