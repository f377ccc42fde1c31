use crate::cards::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Multiplier applied by the orange and purple boosters.
pub const CAP_MULTIPLIER: f64 = 1.2;

/// Stats the orange cap boosts.
pub const BATTING_STATS: [&str; 7] = [
    BATTING_AVERAGE,
    BATTING_STRIKE_RATE,
    RUNS_SCORED,
    CENTURIES,
    HALF_CENTURIES,
    SIXES,
    FOURS,
];

/// Stats the purple cap boosts.
pub const BOWLING_STATS: [&str; 6] = [
    BOWLING_AVERAGE,
    BOWLING_STRIKE_RATE,
    ECONOMY_RATE,
    WICKETS_TAKEN,
    FOUR_WICKET_HAULS,
    FIVE_WICKET_HAULS,
];

/// Stats where the smallest value takes the hand.
pub const LOWER_IS_BETTER: [&str; 3] = [ECONOMY_RATE, BOWLING_AVERAGE, BOWLING_STRIKE_RATE];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Booster {
    Orange,
    Purple,
    TeamRank,
}

impl Booster {
    pub const ALL: [Booster; 3] = [Booster::Orange, Booster::Purple, Booster::TeamRank];

    pub fn id(self) -> &'static str {
        match self {
            Booster::Orange => "orange",
            Booster::Purple => "purple",
            Booster::TeamRank => "teamrank",
        }
    }

    pub fn from_keyword(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "orange" | "o" | "orange_cap" => Some(Booster::Orange),
            "purple" | "p" | "purple_cap" => Some(Booster::Purple),
            "teamrank" | "t" | "team" | "team_rank" => Some(Booster::TeamRank),
            _ => None,
        }
    }
}

/// Which boosters a player may still invoke.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoosterEntitlements {
    pub orange: bool,
    pub purple: bool,
    pub teamrank: bool,
}

impl Default for BoosterEntitlements {
    fn default() -> Self {
        Self {
            orange: true,
            purple: true,
            teamrank: true,
        }
    }
}

impl BoosterEntitlements {
    pub fn available(&self, booster: Booster) -> bool {
        match booster {
            Booster::Orange => self.orange,
            Booster::Purple => self.purple,
            Booster::TeamRank => self.teamrank,
        }
    }

    pub fn consume(&mut self, booster: Booster) {
        match booster {
            Booster::Orange => self.orange = false,
            Booster::Purple => self.purple = false,
            Booster::TeamRank => self.teamrank = false,
        }
    }
}

/// Booster and ranking metadata supplied by the catalog provider.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GameData {
    #[serde(default)]
    pub orange_cap: Option<String>,
    #[serde(default)]
    pub purple_cap: Option<String>,
    #[serde(default)]
    pub team_rankings: HashMap<String, u32>,
}

impl GameData {
    pub fn new(
        orange_cap: impl Into<String>,
        purple_cap: impl Into<String>,
        team_rankings: HashMap<String, u32>,
    ) -> Self {
        Self {
            orange_cap: Some(orange_cap.into()),
            purple_cap: Some(purple_cap.into()),
            team_rankings,
        }
    }

    pub fn team_rank(&self, team: &str) -> Option<u32> {
        self.team_rankings.get(team).copied()
    }

    pub fn is_orange_cap(&self, player_name: &str) -> bool {
        self.orange_cap.as_deref() == Some(player_name)
    }

    pub fn is_purple_cap(&self, player_name: &str) -> bool {
        self.purple_cap.as_deref() == Some(player_name)
    }
}

pub fn is_batting_stat(stat: &str) -> bool {
    BATTING_STATS.contains(&stat)
}

pub fn is_bowling_stat(stat: &str) -> bool {
    BOWLING_STATS.contains(&stat)
}

pub fn lower_is_better(stat: &str) -> bool {
    LOWER_IS_BETTER.contains(&stat)
}

/// Team-rank booster factor; ranks outside 1..=4 give no bonus.
pub fn team_rank_factor(rank: u32) -> f64 {
    match rank {
        1 => 1.4,
        2 => 1.3,
        3 => 1.2,
        4 => 1.1,
        _ => 1.0,
    }
}
