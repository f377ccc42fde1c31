use crate::PlayerId;
use serde::{Deserialize, Serialize};

pub const DEFAULT_HAND_SIZE: usize = 5;

/// Whether a booster entitlement survives being used.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BoosterPolicy {
    #[default]
    Reusable,
    ConsumedOnUse,
}

/// Who may play the next card of a hand.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TurnOrder {
    /// Any seated player may play; the table enforces order (hot-seat play).
    #[default]
    Open,
    /// Only the expected player may play: the leader first, then clockwise.
    Strict,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    #[serde(default = "default_players")]
    pub players: Vec<PlayerId>,
    #[serde(default = "default_hand_size")]
    pub hand_size: usize,
    #[serde(default)]
    pub booster_policy: BoosterPolicy,
    #[serde(default)]
    pub turn_order: TurnOrder,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: default_players(),
            hand_size: DEFAULT_HAND_SIZE,
            booster_policy: BoosterPolicy::default(),
            turn_order: TurnOrder::default(),
        }
    }
}

impl GameConfig {
    pub fn with_players<I, S>(players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<PlayerId>,
    {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}

fn default_players() -> Vec<PlayerId> {
    (1..=4).map(|n| format!("Player {n}")).collect()
}

fn default_hand_size() -> usize {
    DEFAULT_HAND_SIZE
}
