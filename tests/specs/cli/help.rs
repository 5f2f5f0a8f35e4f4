// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn fv_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn fv_help_lists_commands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("jobs")
        .stdout_has("cancel-all")
        .stdout_has("watch");
}

#[test]
fn fv_rule_help_shows_subcommands() {
    cli()
        .args(&["rule", "--help"])
        .passes()
        .stdout_has("enable")
        .stdout_has("disable")
        .stdout_has("limit");
}

#[test]
fn fv_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}
