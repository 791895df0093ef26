// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-player record assembly.
//!
//! Handles the fixed pipeline for one identifier:
//! 1. Fetch profile (rank, internal id); not-found ends the pipeline
//! 2. Derive the public profile link
//! 3. Fetch most-played role
//! 4. Fetch mastery table
//! 5. Fetch solo and flex champion pools, resolving champion names
//!
//! A failure at any stage aborts the pipeline; no partial record is produced.

use crate::error::Result;
use crate::models::{
    ChampionCounters, ChampionStat, PlayerIdentifier, PlayerRecord, QueueType, Role, SessionToken,
};
use crate::services::champion_table::ChampionTable;
use crate::services::profile::profile_link;
use crate::services::sources::StatsSource;
use std::sync::Arc;

/// Builds one [`PlayerRecord`] per identifier from a [`StatsSource`].
pub struct RecordAssembler<S> {
    source: Arc<S>,
    champions: Arc<ChampionTable>,
    session: SessionToken,
    link_base: String,
}

impl<S: StatsSource> RecordAssembler<S> {
    pub fn new(
        source: Arc<S>,
        champions: Arc<ChampionTable>,
        session: SessionToken,
        link_base: impl Into<String>,
    ) -> Self {
        Self {
            source,
            champions,
            session,
            link_base: link_base.into(),
        }
    }

    /// Run the pipeline for one identifier.
    pub async fn assemble(&self, identifier: &PlayerIdentifier) -> Result<PlayerRecord> {
        tracing::info!(player = %identifier, "Gathering stats");

        // 1. Profile gates everything else
        let profile = self.source.fetch_profile(&self.session, identifier).await?;
        let rank = profile.rank()?;

        // 2. Link
        let link = profile_link(&self.link_base, identifier);

        // 3. Role
        let role_label = self.source.fetch_role_label(identifier).await?;
        let role = role_label.as_deref().and_then(Role::from_label);
        if role.is_none() {
            tracing::debug!(player = %identifier, label = ?role_label, "Role label not mapped");
        }

        // 4. Mastery
        let masteries = self.source.fetch_masteries(identifier).await?;

        // 5. Champion pools
        let solo = self
            .source
            .fetch_champion_pool(&profile.summoner_id, QueueType::Solo)
            .await?;
        let solo_champions = self.resolve_pool(&solo)?;

        let flex = self
            .source
            .fetch_champion_pool(&profile.summoner_id, QueueType::Flex)
            .await?;
        let flex_champions = self.resolve_pool(&flex)?;

        tracing::info!(
            player = %identifier,
            tier = %rank.tier,
            role = ?role,
            solo = solo_champions.len(),
            flex = flex_champions.len(),
            "Finished"
        );

        Ok(PlayerRecord {
            identifier: identifier.clone(),
            summoner_id: profile.summoner_id,
            rank,
            role,
            role_label,
            solo_champions,
            flex_champions,
            masteries,
            profile_link: link,
        })
    }

    /// Name each champion and compute its derived stats.
    fn resolve_pool(&self, counters: &[ChampionCounters]) -> Result<Vec<ChampionStat>> {
        counters
            .iter()
            .map(|c| {
                let name = self.champions.name(c.id)?;
                Ok(ChampionStat::from_counters(name.to_string(), c))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScoutError;
    use crate::models::{MasteryEntry, RankStats, MASTERY_SLOTS};
    use crate::services::profile::{LeagueStat, ProfileData, TierInfo};
    use std::sync::Mutex;

    /// Records the order sources are called in.
    struct ScriptedSource {
        calls: Mutex<Vec<&'static str>>,
        champion_id: u32,
        profile_missing: bool,
    }

    impl ScriptedSource {
        fn new(champion_id: u32) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                champion_id,
                profile_missing: false,
            }
        }

        fn log(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }
    }

    #[async_trait::async_trait]
    impl StatsSource for ScriptedSource {
        async fn fetch_profile(
            &self,
            _session: &SessionToken,
            identifier: &PlayerIdentifier,
        ) -> Result<ProfileData> {
            self.log("profile");
            if self.profile_missing {
                return Err(ScoutError::NotFound(identifier.to_string()));
            }
            Ok(ProfileData {
                summoner_id: "sid".to_string(),
                league_stats: vec![LeagueStat {
                    queue_info: None,
                    tier_info: TierInfo {
                        tier: None,
                        division: None,
                        lp: None,
                    },
                    win: None,
                    lose: None,
                }],
            })
        }

        async fn fetch_role_label(&self, _identifier: &PlayerIdentifier) -> Result<Option<String>> {
            self.log("role");
            Ok(Some("BOTTOM".to_string()))
        }

        async fn fetch_masteries(
            &self,
            _identifier: &PlayerIdentifier,
        ) -> Result<Vec<MasteryEntry>> {
            self.log("mastery");
            Ok(vec![
                MasteryEntry {
                    name: "Annie".to_string(),
                    level: "5".to_string(),
                    points: "1,000".to_string(),
                };
                MASTERY_SLOTS
            ])
        }

        async fn fetch_champion_pool(
            &self,
            summoner_id: &str,
            queue: QueueType,
        ) -> Result<Vec<ChampionCounters>> {
            assert_eq!(summoner_id, "sid");
            self.log(match queue {
                QueueType::Solo => "solo",
                QueueType::Flex => "flex",
            });
            Ok(vec![ChampionCounters {
                id: self.champion_id,
                play: 3,
                win: 1,
                kill: 5,
                death: 0,
                assist: 5,
                minion_kill: 120,
                neutral_minion_kill: 0,
                game_length_second: 600,
            }])
        }
    }

    fn assembler(source: Arc<ScriptedSource>) -> RecordAssembler<ScriptedSource> {
        let champions: ChampionTable = [(1, "Annie".to_string())].into_iter().collect();
        RecordAssembler::new(
            source,
            Arc::new(champions),
            SessionToken::new("build"),
            "https://www.op.gg/summoners/na",
        )
    }

    #[tokio::test]
    async fn test_pipeline_order_and_record() {
        let source = Arc::new(ScriptedSource::new(1));
        let record = assembler(source.clone())
            .assemble(&PlayerIdentifier::new("Lisk#Lisk"))
            .await
            .unwrap();

        assert_eq!(
            *source.calls.lock().unwrap(),
            vec!["profile", "role", "mastery", "solo", "flex"]
        );
        assert_eq!(record.rank, RankStats::unranked());
        assert_eq!(record.role, None);
        assert_eq!(record.role_label.as_deref(), Some("BOTTOM"));
        assert_eq!(record.profile_link, "https://www.op.gg/summoners/na/Lisk-Lisk");
        assert_eq!(record.masteries.len(), MASTERY_SLOTS);

        let stat = &record.solo_champions[0];
        assert_eq!(stat.name, "Annie");
        assert_eq!(stat.win_rate, 33);
        assert_eq!(stat.kda, 10.0);
        assert_eq!(stat.cspm, 12.0);
    }

    #[tokio::test]
    async fn test_not_found_stops_pipeline() {
        let mut source = ScriptedSource::new(1);
        source.profile_missing = true;
        let source = Arc::new(source);

        let err = assembler(source.clone())
            .assemble(&PlayerIdentifier::new("Ghost#NA1"))
            .await
            .unwrap_err();

        assert!(matches!(err, ScoutError::NotFound(_)));
        assert_eq!(*source.calls.lock().unwrap(), vec!["profile"]);
    }

    #[tokio::test]
    async fn test_unknown_champion_is_schema_error() {
        let source = Arc::new(ScriptedSource::new(4242));
        let err = assembler(source)
            .assemble(&PlayerIdentifier::new("Lisk#Lisk"))
            .await
            .unwrap_err();

        assert!(matches!(err, ScoutError::SchemaMismatch(_)));
    }
}
