// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[test]
fn rule_decodes_raw_and_display_limit() {
    let rule: Rule = serde_json::from_value(json!({
        "id": "ratio",
        "type": "exception",
        "enabled": true,
        "description": "Too many errors",
        "limit": 0.1,
        "limit_str": "10%",
        "editable": true
    }))
    .unwrap();

    assert_eq!(rule.kind, "exception");
    assert_eq!(rule.limit_display(), "10%");
    assert_eq!(rule.limit_input(), "0.1");
}

#[yare::parameterized(
    number = { json!(5),      "5",   "5" },
    text   = { json!("1h"),   "1h",  "1h" },
    null   = { json!(null),   "n/a", "n/a" },
)]
fn limit_input_prefill(limit: Value, limit_str: &str, expected: &str) {
    let rule = Rule::builder().limit(limit).limit_str(limit_str).build();
    assert_eq!(rule.limit_input(), expected);
}

#[test]
fn missing_limit_display_is_dash() {
    let rule = Rule::builder().limit_str("").build();
    assert_eq!(rule.limit_display(), "-");
}
