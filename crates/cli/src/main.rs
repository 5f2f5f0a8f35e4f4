// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fv: monitor and control a render farm coordinator

mod actions;
mod client;
mod color;
mod commands;
mod dialog;
mod env;
mod exit_error;
mod logging;
mod output;
mod sync;
mod view;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::client::FarmClient;
use crate::commands::{control, job, jobs, links, rules, slaves, thumbs, watch, Context};
use crate::env::{Config, Overrides};
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "fv",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("FV_BUILD_COMMIT"), ")"),
    about = "Monitor and control a render farm",
    styles = color::styles()
)]
struct Cli {
    /// Coordinator base URL (overrides FV_URL and the config file)
    #[arg(long, global = true)]
    url: Option<String>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t, global = true)]
    output: OutputFormat,

    /// Rows per table page
    #[arg(long, global = true)]
    page_size: Option<usize>,

    /// Log to stderr at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List jobs
    Jobs(jobs::JobsArgs),
    /// Show a job with its frames and files
    Job(job::JobArgs),
    /// List render slaves
    Slaves(slaves::SlavesArgs),
    /// List load-balancing rules
    Rules,
    /// Change a load-balancing rule
    Rule(rules::RuleArgs),
    #[command(flatten)]
    Control(control::ControlCommand),
    /// Replay clicks on a job's thumbnail strip
    Thumbs(thumbs::ThumbsArgs),
    /// Print the download links of a frame
    Links(links::LinksArgs),
    /// Live dashboard
    Watch(watch::WatchArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let guard = logging::init(cli.verbose);

    let code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => match e.downcast_ref::<ExitError>() {
            Some(exit) => {
                eprintln!("Error: {}", exit.message);
                exit.code
            }
            None => {
                eprintln!("Error: {e:#}");
                1
            }
        },
    };

    drop(guard);
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    let config = Config::load(&Overrides { url: cli.url, page_size: cli.page_size })?;
    tracing::debug!(url = %config.url, page_size = config.page_size, "resolved config");
    let client = FarmClient::connect(&config)?;
    let ctx = Context::new(config, client, cli.output);

    match command {
        Commands::Jobs(args) => jobs::handle(args, &ctx).await,
        Commands::Job(args) => job::handle(args, &ctx).await,
        Commands::Slaves(args) => slaves::handle(args, &ctx).await,
        Commands::Rules => rules::list(&ctx).await,
        Commands::Rule(args) => rules::handle(args, &ctx).await,
        Commands::Control(command) => control::handle(command, &ctx).await,
        Commands::Thumbs(args) => thumbs::handle(args, &ctx).await,
        Commands::Links(args) => links::handle(args, &ctx).await,
        Commands::Watch(args) => watch::handle(args, &ctx).await,
    }
}
