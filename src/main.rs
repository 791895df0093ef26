// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Team-Scout CLI
//!
//! Takes a multi-search link, gathers stats for every player in it and prints
//! the report as JSON on stdout. Logs go to stderr.

use clap::Parser;
use team_scout::{config::Config, scout, ScoutContext};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "team-scout", about = "Ranked stats for every player in a multi-search link")]
struct Cli {
    /// Multi-search link, e.g. https://www.op.gg/multisearch/na?summoners=...
    multi_link: String,

    /// Team name recorded in the report
    #[arg(long)]
    team: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(region = %config.region, season = config.season_id, "Starting Team-Scout");

    let ctx = ScoutContext::new(config)?;
    tracing::info!(champions = ctx.champions.len(), "Champion table loaded");

    let team = cli.team.map(|t| t.trim().replace(' ', "_"));
    let report = scout(&ctx, &cli.multi_link, team).await?;

    if !report.failures.is_empty() {
        tracing::warn!(
            failed = report.failures.len(),
            completed = report.records.len(),
            "Some players could not be scouted"
        );
    }

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Initialize structured JSON logging on stderr.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("team_scout=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
