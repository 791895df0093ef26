// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Concurrent fan-out of per-player pipelines.
//!
//! Every identifier goes from pending to in-flight at once (one task each, no
//! cap), and the scheduler waits for all of them to complete or fail before
//! reading any result. Completion order is arbitrary; the configured sort is
//! applied after the join.

use crate::config::SortOrder;
use crate::error::ScoutError;
use crate::models::{PlayerFailure, PlayerIdentifier, PlayerRecord, ScoutReport};
use crate::services::assembler::RecordAssembler;
use crate::services::sources::StatsSource;
use std::sync::Arc;

/// Runs one [`RecordAssembler`] pipeline per identifier.
pub struct AggregationScheduler<S> {
    assembler: Arc<RecordAssembler<S>>,
    sort_order: SortOrder,
}

impl<S: StatsSource + 'static> AggregationScheduler<S> {
    pub fn new(assembler: Arc<RecordAssembler<S>>, sort_order: SortOrder) -> Self {
        Self {
            assembler,
            sort_order,
        }
    }

    /// Assemble every identifier concurrently and collect the outcomes.
    ///
    /// Each identifier appears exactly once in the result, as a record or as
    /// a failure. Failures are listed in input order.
    pub async fn run(&self, identifiers: Vec<PlayerIdentifier>) -> ScoutReport {
        tracing::info!(count = identifiers.len(), "Launching player pipelines");

        let handles: Vec<_> = identifiers
            .iter()
            .cloned()
            .map(|identifier| {
                let assembler = Arc::clone(&self.assembler);
                tokio::spawn(async move { assembler.assemble(&identifier).await })
            })
            .collect();

        // Barrier: nothing below runs until every pipeline is terminal.
        let outcomes = futures_util::future::join_all(handles).await;

        let mut completed: Vec<(usize, PlayerRecord)> = Vec::new();
        let mut failures: Vec<PlayerFailure> = Vec::new();

        for (index, (identifier, outcome)) in identifiers.into_iter().zip(outcomes).enumerate() {
            let result = outcome.unwrap_or_else(|join_err| {
                Err(ScoutError::Internal(anyhow::anyhow!(
                    "pipeline task did not finish: {}",
                    join_err
                )))
            });

            match result {
                Ok(record) => completed.push((index, record)),
                Err(e) => {
                    tracing::warn!(player = %identifier, error = %e, "Player pipeline failed");
                    failures.push(PlayerFailure::new(identifier, &e));
                }
            }
        }

        let records = sort_records(completed, self.sort_order);

        tracing::info!(
            completed = records.len(),
            failed = failures.len(),
            "All player pipelines finished"
        );

        ScoutReport::new(records, failures)
    }
}

/// Apply the final ordering; input position breaks ties.
fn sort_records(mut completed: Vec<(usize, PlayerRecord)>, order: SortOrder) -> Vec<PlayerRecord> {
    match order {
        SortOrder::Role => completed.sort_by_key(|(index, record)| {
            let priority = record.role.map_or(u8::MAX, |role| role.priority());
            (priority, *index)
        }),
        SortOrder::Input => completed.sort_by_key(|(index, _)| *index),
    }
    completed.into_iter().map(|(_, record)| record).collect()
}
