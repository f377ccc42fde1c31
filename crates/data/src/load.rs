use crate::schema::{BoosterRecord, CardRecord, StatFill};
use anyhow::Context;
use crictrumps_core::{parse_stat_text, Card, GameConfig, GameData, RawStat, KNOWN_STATS};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

const GAME_CONFIG_FILE: &str = "game.json";
const CARDS_FILE: &str = "cards.json";
const BOOSTERS_FILE: &str = "boosters.json";

pub const UNKNOWN_TEAM: &str = "Unknown Team";
pub const DEFAULT_ORANGE_CAP: &str = "Virat Kohli";
pub const DEFAULT_PURPLE_CAP: &str = "Jasprit Bumrah";

const DEFAULT_TEAM_RANKINGS: [(&str, u32); 4] = [
    ("Mumbai Indians", 1),
    ("Chennai Super Kings", 2),
    ("Royal Challengers Bangalore", 3),
    ("Delhi Capitals", 4),
];

const PROVIDER_DEFAULTS: [(&str, f64); 14] = [
    ("Runs_Scored", 100.0),
    ("Batting_Average", 35.5),
    ("Batting_Strike_Rate", 140.2),
    ("Centuries", 2.0),
    ("Half_Centuries", 5.0),
    ("Sixes", 10.0),
    ("Fours", 20.0),
    ("Highest_Score", 75.0),
    ("Wickets_Taken", 15.0),
    ("Economy_Rate", 7.8),
    ("Bowling_Average", 25.3),
    ("Bowling_Strike_Rate", 18.5),
    ("Four_Wicket_Hauls", 1.0),
    ("Five_Wicket_Hauls", 0.0),
];

/// Everything a table needs before the first deal.
#[derive(Debug, Clone)]
pub struct Assets {
    pub config: GameConfig,
    pub cards: Vec<Card>,
    pub game_data: GameData,
}

pub fn load_assets(dir: &Path, fill: StatFill) -> anyhow::Result<Assets> {
    let config = load_game_config(dir)?;
    let cards = load_catalog(&dir.join(CARDS_FILE), fill)?;
    let boosters_path = dir.join(BOOSTERS_FILE);
    let game_data = if boosters_path.exists() {
        load_game_data(&boosters_path)?
    } else {
        warn!("{} missing, using default boosters", boosters_path.display());
        default_game_data()
    };
    Ok(Assets {
        config,
        cards,
        game_data,
    })
}

pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let path = dir.join(GAME_CONFIG_FILE);
    if !path.exists() {
        debug!("{} missing, using default config", path.display());
        return Ok(GameConfig::default());
    }
    load_json(&path)
}

pub fn load_catalog(path: &Path, fill: StatFill) -> anyhow::Result<Vec<Card>> {
    let records: Vec<CardRecord> = load_json(path)?;
    let cards = normalize_catalog(records, fill);
    debug!("loaded {} cards from {}", cards.len(), path.display());
    Ok(cards)
}

pub fn load_game_data(path: &Path) -> anyhow::Result<GameData> {
    let records: Vec<BoosterRecord> = load_json(path)?;
    Ok(game_data_from_records(&records))
}

pub fn normalize_catalog(records: Vec<CardRecord>, fill: StatFill) -> Vec<Card> {
    records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| card_from_record(idx, record, fill))
        .collect()
}

/// Converts a raw row into a typed card. Stat text is parsed once here so
/// the engine only ever sees numbers; unreadable values become 0.
pub fn card_from_record(index: usize, record: CardRecord, fill: StatFill) -> Card {
    let id = record
        .id
        .filter(|id| !id.trim().is_empty())
        .unwrap_or_else(|| format!("card-{index}"));
    let team = record
        .team
        .filter(|team| !team.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_TEAM.to_string());

    let mut stats = HashMap::new();
    for (column, value) in record.columns {
        if let serde_json::Value::Object(nested) = value {
            for (nested_column, nested_value) in nested {
                if let Some(stat) = column_value(&nested_value) {
                    stats.insert(nested_column, stat);
                }
            }
        } else if let Some(stat) = column_value(&value) {
            stats.insert(column, stat);
        }
    }

    for stat in KNOWN_STATS {
        let current = stats.get(stat).copied();
        let value = match fill {
            StatFill::Zero => current.unwrap_or(0.0),
            StatFill::ProviderDefaults => match current {
                Some(value) if value != 0.0 => value,
                _ => provider_default(stat),
            },
        };
        stats.insert(stat.to_string(), value);
    }

    Card {
        id,
        name: record.name,
        team,
        stats,
    }
}

fn column_value(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(number) => {
            Some(RawStat::Number(number.as_f64().unwrap_or(0.0)).to_value())
        }
        serde_json::Value::String(text) => Some(parse_stat_text(text)),
        _ => None,
    }
}

fn provider_default(stat: &str) -> f64 {
    PROVIDER_DEFAULTS
        .iter()
        .find(|(name, _)| *name == stat)
        .map(|(_, value)| *value)
        .unwrap_or(0.0)
}

/// The first rows naming an orange and a purple cap holder win; every row
/// with a team and a non-zero rank adds to the ranking table. No rows at
/// all falls back to the stock season data.
pub fn game_data_from_records(records: &[BoosterRecord]) -> GameData {
    if records.is_empty() {
        return default_game_data();
    }
    let orange_cap = records
        .iter()
        .filter_map(|record| record.orange_cap.clone())
        .find(|name| !name.is_empty());
    let purple_cap = records
        .iter()
        .filter_map(|record| record.purple_cap.clone())
        .find(|name| !name.is_empty());
    let mut team_rankings = HashMap::new();
    for record in records {
        let rank = record.rank.and_then(whole_rank);
        if let (Some(team), Some(rank)) = (&record.team_ranking, rank) {
            if !team.is_empty() {
                team_rankings.insert(team.clone(), rank);
            }
        }
    }
    GameData {
        orange_cap,
        purple_cap,
        team_rankings,
    }
}

fn whole_rank(rank: f64) -> Option<u32> {
    if rank.fract() == 0.0 && rank >= 1.0 && rank <= f64::from(u32::MAX) {
        Some(rank as u32)
    } else {
        None
    }
}

pub fn default_game_data() -> GameData {
    GameData::new(
        DEFAULT_ORANGE_CAP,
        DEFAULT_PURPLE_CAP,
        DEFAULT_TEAM_RANKINGS
            .iter()
            .map(|(team, rank)| (team.to_string(), *rank))
            .collect(),
    )
}

fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> CardRecord {
        serde_json::from_value(value).expect("record")
    }

    #[test]
    fn string_and_number_stats_normalize() {
        let card = card_from_record(
            0,
            record(json!({
                "_id": "abc",
                "Player_Name": "Shubman Gill",
                "team": "Gujarat Titans",
                "Runs_Scored": 890,
                "Batting_Average": "59.33",
                "Highest_Score": "129*",
                "Economy_Rate": "-",
            })),
            StatFill::Zero,
        );
        assert_eq!(card.id, "abc");
        assert_eq!(card.team, "Gujarat Titans");
        assert_eq!(card.stat("Runs_Scored"), 890.0);
        assert_eq!(card.stat("Batting_Average"), 59.33);
        assert_eq!(card.stat("Highest_Score"), 129.0);
        assert_eq!(card.stat("Economy_Rate"), 0.0);
        assert_eq!(card.stat("Sixes"), 0.0);
        assert!(card.stats.contains_key("Sixes"));
    }

    #[test]
    fn missing_id_and_team_get_placeholders() {
        let card = card_from_record(
            7,
            record(json!({ "Player_Name": "Nobody", "team": "" })),
            StatFill::Zero,
        );
        assert_eq!(card.id, "card-7");
        assert_eq!(card.team, UNKNOWN_TEAM);
    }

    #[test]
    fn nested_stats_object_is_flattened() {
        let card = card_from_record(
            0,
            record(json!({
                "id": "n1",
                "name": "Nested",
                "stats": { "Sixes": "12", "Fours": 30 },
            })),
            StatFill::Zero,
        );
        assert_eq!(card.stat("Sixes"), 12.0);
        assert_eq!(card.stat("Fours"), 30.0);
    }

    #[test]
    fn provider_defaults_fill_missing_and_zero() {
        let card = card_from_record(
            0,
            record(json!({ "Player_Name": "Sparse", "Runs_Scored": 0, "Sixes": 4 })),
            StatFill::ProviderDefaults,
        );
        assert_eq!(card.stat("Runs_Scored"), 100.0);
        assert_eq!(card.stat("Sixes"), 4.0);
        assert_eq!(card.stat("Economy_Rate"), 7.8);
        assert_eq!(card.stat("Five_Wicket_Hauls"), 0.0);
    }

    #[test]
    fn booster_rows_build_game_data() {
        let records: Vec<BoosterRecord> = serde_json::from_value(json!([
            { "Orange_Cap": "Sai Sudharsan", "Purple_Cap": "Prasidh Krishna", "RANK": 1, "team_ranking": "Gujarat Titans" },
            { "Orange_Cap": "Someone Else", "RANK": 2, "team_ranking": "Punjab Kings" },
            { "RANK": 0, "team_ranking": "Ignored" },
            { "team_ranking": "No Rank" },
        ]))
        .expect("records");
        let data = game_data_from_records(&records);
        assert_eq!(data.orange_cap.as_deref(), Some("Sai Sudharsan"));
        assert_eq!(data.purple_cap.as_deref(), Some("Prasidh Krishna"));
        assert_eq!(data.team_rank("Gujarat Titans"), Some(1));
        assert_eq!(data.team_rank("Punjab Kings"), Some(2));
        assert_eq!(data.team_rankings.len(), 2);
    }

    #[test]
    fn odd_ranks_skip_the_row_instead_of_failing() {
        let records: Vec<BoosterRecord> = serde_json::from_value(json!([
            { "Orange_Cap": "Sai Sudharsan", "RANK": 1.0, "team_ranking": "Gujarat Titans" },
            { "RANK": -2, "team_ranking": "Punjab Kings" },
            { "RANK": 2.5, "team_ranking": "Delhi Capitals" },
            { "RANK": 3, "team_ranking": "Lucknow Super Giants" },
        ]))
        .expect("records");
        let data = game_data_from_records(&records);
        assert_eq!(data.team_rank("Gujarat Titans"), Some(1));
        assert_eq!(data.team_rank("Lucknow Super Giants"), Some(3));
        assert_eq!(data.team_rank("Punjab Kings"), None);
        assert_eq!(data.team_rank("Delhi Capitals"), None);
        assert_eq!(data.orange_cap.as_deref(), Some("Sai Sudharsan"));
    }

    #[test]
    fn empty_booster_rows_use_defaults() {
        let data = game_data_from_records(&[]);
        assert_eq!(data.orange_cap.as_deref(), Some(DEFAULT_ORANGE_CAP));
        assert_eq!(data.purple_cap.as_deref(), Some(DEFAULT_PURPLE_CAP));
        assert_eq!(data.team_rank("Delhi Capitals"), Some(4));
    }
}
