// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use team_scout::config::Config;
use team_scout::error::{Result, ScoutError};
use team_scout::models::{
    ChampionCounters, MasteryEntry, PlayerIdentifier, QueueType, SessionToken, MASTERY_SLOTS,
};
use team_scout::services::profile::{LeagueStat, ProfileData, TierInfo};
use team_scout::services::{ChampionTable, StatsSource};
use tokio::sync::Barrier;

/// Build id embedded in `fixtures/session_page.html`.
#[allow(dead_code)]
pub const FIXTURE_BUILD_ID: &str = "Xk2pQ8vR1m_aZ9cT4bN7d";

/// Summoner id in `fixtures/profile_ranked.json`.
#[allow(dead_code)]
pub const RANKED_SUMMONER_ID: &str = "gH7x2kLmQp9RtVw3YzAb";

/// Champion table covering every id the fakes and fixtures use.
#[allow(dead_code)]
pub fn test_champions() -> Arc<ChampionTable> {
    Arc::new(ChampionTable::bundled().expect("bundled champion table"))
}

// ─── In-memory source ────────────────────────────────────────

/// Lookup stage after the profile that a [`FakeSource`] can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum Stage {
    Role,
    Mastery,
    SoloPool,
    FlexPool,
}

impl Stage {
    /// Error this stage fails with, one kind per source.
    fn error(self) -> ScoutError {
        match self {
            Stage::Role => ScoutError::Transport("HTTP 502 from role source".to_string()),
            Stage::Mastery => {
                ScoutError::SchemaMismatch("expected 10 mastery rows, found 4".to_string())
            }
            Stage::SoloPool => {
                ScoutError::SchemaMismatch("champion_stats[0]: missing field `win`".to_string())
            }
            Stage::FlexPool => ScoutError::Transport("request timed out".to_string()),
        }
    }
}

/// Scriptable [`StatsSource`] that never touches the network.
#[derive(Default)]
#[allow(dead_code)]
pub struct FakeSource {
    missing: HashSet<String>,
    failing: HashMap<String, Stage>,
    roles: HashMap<String, String>,
    barrier: Option<Barrier>,
    pub profile_calls: AtomicUsize,
}

#[allow(dead_code)]
impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Profile lookup for `id` reports the account as missing.
    pub fn missing(mut self, id: &str) -> Self {
        self.missing.insert(id.to_string());
        self
    }

    /// The given stage fails for `id`.
    pub fn failing(mut self, id: &str, stage: Stage) -> Self {
        self.failing.insert(id.to_string(), stage);
        self
    }

    fn check(&self, id: &str, stage: Stage) -> Result<()> {
        match self.failing.get(id) {
            Some(&failing) if failing == stage => Err(stage.error()),
            _ => Ok(()),
        }
    }

    pub fn role(mut self, id: &str, label: &str) -> Self {
        self.roles.insert(id.to_string(), label.to_string());
        self
    }

    /// Hold every profile lookup until `parties` of them are waiting at once.
    pub fn with_barrier(mut self, parties: usize) -> Self {
        self.barrier = Some(Barrier::new(parties));
        self
    }
}

#[async_trait::async_trait]
impl StatsSource for FakeSource {
    async fn fetch_profile(
        &self,
        _session: &SessionToken,
        identifier: &PlayerIdentifier,
    ) -> Result<ProfileData> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        if self.missing.contains(identifier.as_str()) {
            return Err(ScoutError::NotFound(identifier.to_string()));
        }

        Ok(ProfileData {
            summoner_id: format!("sid-{}", identifier),
            league_stats: vec![LeagueStat {
                queue_info: None,
                tier_info: TierInfo {
                    tier: Some("GOLD".to_string()),
                    division: Some(1),
                    lp: Some(50),
                },
                win: Some(2),
                lose: Some(1),
            }],
        })
    }

    async fn fetch_role_label(&self, identifier: &PlayerIdentifier) -> Result<Option<String>> {
        self.check(identifier.as_str(), Stage::Role)?;
        Ok(self.roles.get(identifier.as_str()).cloned())
    }

    async fn fetch_masteries(&self, identifier: &PlayerIdentifier) -> Result<Vec<MasteryEntry>> {
        self.check(identifier.as_str(), Stage::Mastery)?;

        Ok((0..MASTERY_SLOTS)
            .map(|i| MasteryEntry {
                name: "Annie".to_string(),
                level: "5".to_string(),
                points: format!("{},000", 100 - i),
            })
            .collect())
    }

    async fn fetch_champion_pool(
        &self,
        summoner_id: &str,
        queue: QueueType,
    ) -> Result<Vec<ChampionCounters>> {
        let identifier = summoner_id.trim_start_matches("sid-");
        let stage = match queue {
            QueueType::Solo => Stage::SoloPool,
            QueueType::Flex => Stage::FlexPool,
        };
        self.check(identifier, stage)?;

        match queue {
            QueueType::Solo => Ok(vec![ChampionCounters {
                id: 1,
                play: 3,
                win: 2,
                kill: 12,
                death: 3,
                assist: 9,
                minion_kill: 540,
                neutral_minion_kill: 60,
                game_length_second: 3600,
            }]),
            QueueType::Flex => Ok(Vec::new()),
        }
    }
}

// ─── Local fixture server ────────────────────────────────────

/// How the fixture renewal endpoint answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(dead_code)]
pub enum RenewalMode {
    Accept,
    Fail,
    Hang,
}

#[derive(Clone)]
struct ServerState {
    renewals: Arc<AtomicUsize>,
    renewal_mode: RenewalMode,
}

/// Local stand-in for all four web sources.
#[allow(dead_code)]
pub struct FixtureServer {
    pub base: String,
    pub renewals: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl FixtureServer {
    /// Config pointing every source at this server.
    pub fn config(&self) -> Config {
        Config {
            request_timeout: Duration::from_secs(5),
            opgg_web_base: self.base.clone(),
            opgg_api_base: format!("{}/api", self.base),
            role_api_url: format!("{}/graphql", self.base),
            mastery_base: self.base.clone(),
            ..Config::default()
        }
    }
}

/// Serve the fixtures on an ephemeral local port.
#[allow(dead_code)]
pub async fn spawn_fixture_server(renewal_mode: RenewalMode) -> FixtureServer {
    let state = ServerState {
        renewals: Arc::new(AtomicUsize::new(0)),
        renewal_mode,
    };
    let renewals = state.renewals.clone();

    let app = Router::new()
        .route("/summoners/{region}/{profile}", get(session_page))
        .route(
            "/_next/data/{build}/en_US/summoners/{region}/{slug}/champions.json",
            get(profile_data),
        )
        .route("/api/summoners/{region}/{summoner_id}/renewal", post(renewal))
        .route(
            "/api/summoners/{region}/{summoner_id}/most-champions/rank",
            get(champion_pool),
        )
        .route("/graphql", post(role_usage))
        .route("/player", get(mastery_page))
        .route("/slow", get(slow))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fixture server");
    let addr = listener.local_addr().expect("fixture server address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fixture server");
    });

    FixtureServer {
        base: format!("http://{}", addr),
        renewals,
    }
}

fn json_body(body: &'static str) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], body)
}

async fn session_page() -> Html<&'static str> {
    Html(include_str!("../fixtures/session_page.html"))
}

async fn profile_data(
    Path((build, _region, slug)): Path<(String, String, String)>,
) -> axum::response::Response {
    if build != FIXTURE_BUILD_ID {
        return StatusCode::NOT_FOUND.into_response();
    }

    let body = match slug.as_str() {
        "Lisk-Lisk" => include_str!("../fixtures/profile_ranked.json"),
        "Fresh-NA1" => include_str!("../fixtures/profile_unranked.json"),
        _ => include_str!("../fixtures/profile_not_found.json"),
    };
    json_body(body).into_response()
}

async fn renewal(State(state): State<ServerState>) -> axum::response::Response {
    state.renewals.fetch_add(1, Ordering::SeqCst);
    match state.renewal_mode {
        RenewalMode::Accept => Json(json!({"message": "renewal requested"})).into_response(),
        RenewalMode::Fail => {
            (StatusCode::INTERNAL_SERVER_ERROR, "renewal unavailable").into_response()
        }
        RenewalMode::Hang => {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Json(json!({"message": "renewal requested"})).into_response()
        }
    }
}

async fn champion_pool(
    Path((_region, summoner_id)): Path<(String, String)>,
    Query(params): Query<HashMap<String, String>>,
) -> axum::response::Response {
    let solo = params.get("game_type").map(String::as_str) == Some("SOLORANKED");
    if summoner_id == RANKED_SUMMONER_ID && solo {
        json_body(include_str!("../fixtures/champions_solo.json")).into_response()
    } else {
        json_body(include_str!("../fixtures/champions_empty.json")).into_response()
    }
}

async fn role_usage(Json(body): Json<Value>) -> Json<Value> {
    if body["variables"]["gameName"] == "Lisk" {
        let fixture = include_str!("../fixtures/role_usage.json");
        return Json(serde_json::from_str(fixture).expect("role fixture"));
    }
    Json(json!({
        "data": {"lol": {"player": {"roleStats": {"filters": {"actual": {"rolename": null}}}}}}
    }))
}

async fn mastery_page(Query(params): Query<HashMap<String, String>>) -> axum::response::Response {
    match params.get("riotId") {
        Some(_) => Html(include_str!("../fixtures/mastery_page.html")).into_response(),
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}

async fn slow() -> &'static str {
    tokio::time::sleep(Duration::from_secs(3)).await;
    "too late"
}
