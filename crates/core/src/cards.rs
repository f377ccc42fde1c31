use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type CardId = String;
pub type PlayerId = String;

pub const RUNS_SCORED: &str = "Runs_Scored";
pub const BATTING_AVERAGE: &str = "Batting_Average";
pub const BATTING_STRIKE_RATE: &str = "Batting_Strike_Rate";
pub const CENTURIES: &str = "Centuries";
pub const HALF_CENTURIES: &str = "Half_Centuries";
pub const SIXES: &str = "Sixes";
pub const FOURS: &str = "Fours";
pub const HIGHEST_SCORE: &str = "Highest_Score";
pub const WICKETS_TAKEN: &str = "Wickets_Taken";
pub const ECONOMY_RATE: &str = "Economy_Rate";
pub const BOWLING_AVERAGE: &str = "Bowling_Average";
pub const BOWLING_STRIKE_RATE: &str = "Bowling_Strike_Rate";
pub const FOUR_WICKET_HAULS: &str = "Four_Wicket_Hauls";
pub const FIVE_WICKET_HAULS: &str = "Five_Wicket_Hauls";

/// Stat columns every card in the bundled catalogs carries, in display order.
pub const KNOWN_STATS: [&str; 14] = [
    RUNS_SCORED,
    BATTING_AVERAGE,
    BATTING_STRIKE_RATE,
    CENTURIES,
    HALF_CENTURIES,
    SIXES,
    FOURS,
    HIGHEST_SCORE,
    WICKETS_TAKEN,
    ECONOMY_RATE,
    BOWLING_AVERAGE,
    BOWLING_STRIKE_RATE,
    FOUR_WICKET_HAULS,
    FIVE_WICKET_HAULS,
];

/// A dealt player card. Stats are already normalized to numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub team: String,
    #[serde(default)]
    pub stats: HashMap<String, f64>,
}

impl Card {
    pub fn new(id: impl Into<CardId>, name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team: team.into(),
            stats: HashMap::new(),
        }
    }

    pub fn with_stat(mut self, stat: impl Into<String>, value: f64) -> Self {
        self.stats.insert(stat.into(), value);
        self
    }

    /// Raw value of `stat`, `0.0` when the card does not carry it.
    pub fn stat(&self, stat: &str) -> f64 {
        self.stats.get(stat).copied().unwrap_or(0.0)
    }
}

/// A stat as it arrives from upstream: either a number or numeric text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawStat {
    Number(f64),
    Text(String),
}

impl RawStat {
    pub fn to_value(&self) -> f64 {
        match self {
            RawStat::Number(value) if value.is_finite() => *value,
            RawStat::Number(_) => 0.0,
            RawStat::Text(text) => parse_stat_text(text),
        }
    }
}

/// Reads the leading decimal number of `text`, ignoring trailing junk
/// ("75*" reads as 75). Anything without a numeric prefix reads as 0.
pub fn parse_stat_text(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if frac_end > frac_start || digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    match trimmed[..end].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_text_parses_leading_number() {
        assert_eq!(parse_stat_text("42"), 42.0);
        assert_eq!(parse_stat_text("  7.85 "), 7.85);
        assert_eq!(parse_stat_text("113*"), 113.0);
        assert_eq!(parse_stat_text("-3.5e1x"), -35.0);
        assert_eq!(parse_stat_text(".5"), 0.5);
        assert_eq!(parse_stat_text("4/17"), 4.0);
    }

    #[test]
    fn junk_text_reads_as_zero() {
        assert_eq!(parse_stat_text(""), 0.0);
        assert_eq!(parse_stat_text("-"), 0.0);
        assert_eq!(parse_stat_text("n/a"), 0.0);
        assert_eq!(parse_stat_text("."), 0.0);
        assert_eq!(parse_stat_text("1e999"), 0.0);
    }

    #[test]
    fn raw_stat_accepts_numbers_and_strings() {
        let raw: Vec<RawStat> = serde_json::from_str(r#"[12.5, "30", "abc"]"#).expect("parse");
        let values: Vec<f64> = raw.iter().map(RawStat::to_value).collect();
        assert_eq!(values, vec![12.5, 30.0, 0.0]);
    }

    #[test]
    fn missing_stat_is_zero() {
        let card = Card::new("c1", "Someone", "Team").with_stat(SIXES, 9.0);
        assert_eq!(card.stat(SIXES), 9.0);
        assert_eq!(card.stat(FOURS), 0.0);
    }
}
