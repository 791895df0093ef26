// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Champion id to name reference table.

use crate::error::{Result, ScoutError};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const BUNDLED_TABLE: &str = include_str!("../../data/champions.json");

/// Read-only lookup of champion names by numeric id.
#[derive(Debug, Default, Clone)]
pub struct ChampionTable {
    names: HashMap<u32, String>,
}

impl ChampionTable {
    /// The table shipped with the crate.
    pub fn bundled() -> Result<Self> {
        Self::load_from_json(BUNDLED_TABLE)
    }

    /// Load a table from a JSON file of the form `{"<id>": "<name>"}`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json_data = fs::read_to_string(path.as_ref()).map_err(|e| {
            ScoutError::Internal(anyhow::anyhow!(
                "Failed to read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::load_from_json(&json_data)
    }

    /// Load a table from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_str(json_data)?;

        let names = raw
            .into_iter()
            .map(|(id, name)| {
                id.trim()
                    .parse::<u32>()
                    .map(|id| (id, name))
                    .map_err(|_| ScoutError::schema(format!("champion id {:?} is not numeric", id)))
            })
            .collect::<Result<HashMap<_, _>>>()?;

        tracing::debug!(count = names.len(), "Loaded champion table");
        Ok(Self { names })
    }

    /// Resolve a champion name. Unknown ids are a schema defect, not a blank.
    pub fn name(&self, id: u32) -> Result<&str> {
        self.names
            .get(&id)
            .map(String::as_str)
            .ok_or_else(|| ScoutError::schema(format!("unknown champion id {}", id)))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(u32, String)> for ChampionTable {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
