// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Team-Scout: ranked stats for every player in a multi-search link
//!
//! This crate resolves each player's rank, main role, champion mastery and
//! ranked champion pools from several public stats sites, concurrently, and
//! folds them into one report.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

use config::Config;
use error::{Result, ScoutError};
use models::ScoutReport;
use services::{
    parse_multi_link, resolve_session, AggregationScheduler, ChampionTable, RecordAssembler,
    SourceClient, WebSources,
};
use std::sync::Arc;

/// Shared state for a run.
pub struct ScoutContext {
    pub config: Config,
    pub client: SourceClient,
    pub champions: Arc<ChampionTable>,
}

impl ScoutContext {
    /// Build the HTTP client and load the champion table named by `config`.
    pub fn new(config: Config) -> Result<Self> {
        let champions = match &config.champions_file {
            Some(path) => ChampionTable::load_from_file(path)?,
            None => ChampionTable::bundled()?,
        };
        let client = SourceClient::new(&config)?;

        Ok(Self {
            config,
            client,
            champions: Arc::new(champions),
        })
    }
}

/// Scout every player in a multi-search link.
///
/// Fails outright only for a malformed link or when the session cannot be
/// resolved; per-player failures are listed in the report.
pub async fn scout(
    ctx: &ScoutContext,
    multi_link: &str,
    team: Option<String>,
) -> Result<ScoutReport> {
    let identifiers = parse_multi_link(multi_link)?;
    if identifiers.is_empty() {
        return Err(ScoutError::MalformedInput(
            "link contains no player identifiers".to_string(),
        ));
    }
    tracing::info!(count = identifiers.len(), "Parsed multi-search link");

    let session = resolve_session(&ctx.client, &ctx.config).await?;

    let sources = Arc::new(WebSources::new(ctx.client.clone(), ctx.config.clone()));
    let assembler = Arc::new(RecordAssembler::new(
        sources,
        Arc::clone(&ctx.champions),
        session,
        ctx.config.profile_link_base(),
    ));

    let mut report = AggregationScheduler::new(assembler, ctx.config.sort_order)
        .run(identifiers)
        .await;
    report.team = team;
    report.multi_link = Some(multi_link.to_string());
    Ok(report)
}
