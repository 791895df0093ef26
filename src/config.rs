// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Run configuration loaded from environment variables.
//!
//! Every value has a production default, so an empty environment is valid.
//! Base URLs are overridable so the sources can be pointed at a local server.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

/// Final ordering applied to completed records after all pipelines join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Role priority (top, jungle, mid, adc, support, unknown), then input order.
    #[default]
    Role,
    /// Order in which identifiers appeared in the multi-search link.
    Input,
}

impl std::str::FromStr for SortOrder {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "role" => Ok(SortOrder::Role),
            "input" => Ok(SortOrder::Input),
            _ => Err(ConfigError::Invalid("SCOUT_SORT_ORDER")),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Region slug used in every source path (e.g. "na")
    pub region: String,
    /// Season id for champion-pool queries
    pub season_id: u32,
    /// Per-request deadline
    pub request_timeout: Duration,
    /// Deadline for the best-effort renewal call
    pub renewal_timeout: Duration,
    /// User-Agent sent with every request
    pub user_agent: String,
    /// Profile used to resolve the session build id ("name-tag")
    pub reference_profile: String,
    pub sort_order: SortOrder,
    /// Optional champion table overriding the bundled one
    pub champions_file: Option<PathBuf>,

    // --- Source endpoints ---
    /// Profile website root
    pub opgg_web_base: String,
    /// Profile internal API root (renewal, champion pools)
    pub opgg_api_base: String,
    /// Role-usage GraphQL endpoint
    pub role_api_url: String,
    /// Mastery website root
    pub mastery_base: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: "na".to_string(),
            season_id: 27,
            request_timeout: Duration::from_secs(30),
            renewal_timeout: Duration::from_secs(5),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            reference_profile: "Lisk-Lisk".to_string(),
            sort_order: SortOrder::Role,
            champions_file: None,
            opgg_web_base: "https://www.op.gg".to_string(),
            opgg_api_base: "https://lol-web-api.op.gg/api/v1.0/internal/bypass".to_string(),
            role_api_url: "https://mobalytics.gg/api/lol/graphql/v1/query".to_string(),
            mastery_base: "https://championmastery.gg".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let defaults = Self::default();

        Ok(Self {
            region: env::var("SCOUT_REGION")
                .map(|v| v.trim().to_ascii_lowercase())
                .unwrap_or(defaults.region),
            season_id: parse_var("SCOUT_SEASON_ID")?.unwrap_or(defaults.season_id),
            request_timeout: parse_var::<u64>("SCOUT_REQUEST_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            renewal_timeout: parse_var::<u64>("SCOUT_RENEWAL_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.renewal_timeout),
            user_agent: env::var("SCOUT_USER_AGENT").unwrap_or(defaults.user_agent),
            reference_profile: env::var("SCOUT_REFERENCE_PROFILE")
                .unwrap_or(defaults.reference_profile),
            sort_order: parse_var("SCOUT_SORT_ORDER")?.unwrap_or(defaults.sort_order),
            champions_file: env::var("SCOUT_CHAMPIONS_FILE").ok().map(PathBuf::from),
            opgg_web_base: base_var("SCOUT_OPGG_WEB_BASE").unwrap_or(defaults.opgg_web_base),
            opgg_api_base: base_var("SCOUT_OPGG_API_BASE").unwrap_or(defaults.opgg_api_base),
            role_api_url: base_var("SCOUT_ROLE_API_URL").unwrap_or(defaults.role_api_url),
            mastery_base: base_var("SCOUT_MASTERY_BASE").unwrap_or(defaults.mastery_base),
        })
    }

    /// Public profile page root for a player, e.g. `https://www.op.gg/summoners/na`.
    pub fn profile_link_base(&self) -> String {
        format!("{}/summoners/{}", self.opgg_web_base, self.region)
    }
}

/// Read and parse an optional variable; present-but-unparsable is an error.
fn parse_var<T: std::str::FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(None),
    }
}

/// Base URLs are stored without a trailing slash.
fn base_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().trim_end_matches('/').to_string())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
