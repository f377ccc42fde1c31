use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use crictrumps_core::{Card, GameConfig, GameData};

/// A card row as the stats store exports it: a name, an optional team and
/// any number of stat columns holding numbers or numeric text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardRecord {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(rename = "Player_Name", alias = "name")]
    pub name: String,
    #[serde(default)]
    pub team: Option<String>,
    #[serde(flatten)]
    pub columns: BTreeMap<String, serde_json::Value>,
}

/// One row of the boosters table. A row may carry the cap holders, a team
/// ranking, or both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoosterRecord {
    #[serde(rename = "Orange_Cap", default)]
    pub orange_cap: Option<String>,
    #[serde(rename = "Purple_Cap", default)]
    pub purple_cap: Option<String>,
    /// Any JSON number; rows whose rank is not a positive whole number are
    /// skipped when the ranking table is built.
    #[serde(rename = "RANK", default)]
    pub rank: Option<f64>,
    #[serde(default)]
    pub team_ranking: Option<String>,
}

/// How stat columns missing from a record are filled in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatFill {
    #[default]
    Zero,
    /// Use the stats store's stand-in values for missing or zero columns.
    ProviderDefaults,
}
