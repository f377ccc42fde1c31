use crate::{
    is_batting_stat, is_bowling_stat, lower_is_better, team_rank_factor, Booster, Card, GameData,
    PlayedCard, CAP_MULTIPLIER,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StatScore {
    pub base: f64,
    pub multiplier: f64,
}

impl StatScore {
    pub fn value(&self) -> f64 {
        self.base * self.multiplier
    }
}

/// Base stat and compounded booster multiplier for one card on one stat.
///
/// The orange step fires once whether it comes from an explicit booster or
/// from the card being the orange cap holder on a batting stat, so the two
/// triggers never stack. Purple works the same way on bowling stats. The
/// team-rank step only applies when explicitly requested.
pub fn score_breakdown(
    card: &Card,
    stat: &str,
    booster: Option<Booster>,
    data: &GameData,
) -> StatScore {
    let base = card.stat(stat);
    let mut multiplier = 1.0;

    if booster == Some(Booster::Orange) || (data.is_orange_cap(&card.name) && is_batting_stat(stat))
    {
        multiplier *= CAP_MULTIPLIER;
    }
    if booster == Some(Booster::Purple) || (data.is_purple_cap(&card.name) && is_bowling_stat(stat))
    {
        multiplier *= CAP_MULTIPLIER;
    }
    if booster == Some(Booster::TeamRank) {
        if let Some(rank) = data.team_rank(&card.team) {
            multiplier *= team_rank_factor(rank);
        }
    }

    StatScore { base, multiplier }
}

pub fn score_value(card: &Card, stat: &str, booster: Option<Booster>, data: &GameData) -> f64 {
    score_breakdown(card, stat, booster, data).value()
}

/// Index of the winning play. Earliest play wins ties.
pub fn winning_play(plays: &[PlayedCard], stat: &str) -> Option<usize> {
    let lower = lower_is_better(stat);
    let mut best: Option<(usize, f64)> = None;
    for (idx, play) in plays.iter().enumerate() {
        let value = play.final_value;
        best = match best {
            None => Some((idx, value)),
            Some((_, best_value))
                if (lower && value < best_value) || (!lower && value > best_value) =>
            {
                Some((idx, value))
            }
            keep => keep,
        };
    }
    best.map(|(idx, _)| idx)
}
