// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - fetching, parsing and aggregation.

pub mod assembler;
pub mod champion_pool;
pub mod champion_table;
pub mod client;
pub mod encoding;
pub mod identifiers;
pub mod mastery;
pub mod profile;
pub mod role_usage;
pub mod scheduler;
pub mod session;
pub mod sources;

pub use assembler::RecordAssembler;
pub use champion_table::ChampionTable;
pub use client::SourceClient;
pub use encoding::encode_mastery_id;
pub use identifiers::parse_multi_link;
pub use profile::ProfileData;
pub use scheduler::AggregationScheduler;
pub use session::resolve_session;
pub use sources::{StatsSource, WebSources};
