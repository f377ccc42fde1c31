use crate::{BoosterEntitlements, Card, PlayerId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Waiting,
    StatSelection,
    CardSelection,
    Resolution,
    GameOver,
}

impl Phase {
    pub fn id(self) -> &'static str {
        match self {
            Phase::Waiting => "waiting",
            Phase::StatSelection => "stat_selection",
            Phase::CardSelection => "card_selection",
            Phase::Resolution => "resolution",
            Phase::GameOver => "game_over",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerState {
    pub id: PlayerId,
    pub score: u32,
    pub hand: Vec<Card>,
    pub boosters: BoosterEntitlements,
}

impl PlayerState {
    pub fn new(id: impl Into<PlayerId>) -> Self {
        Self {
            id: id.into(),
            score: 0,
            hand: Vec::new(),
            boosters: BoosterEntitlements::default(),
        }
    }

    pub fn holds(&self, card_id: &str) -> bool {
        self.hand.iter().any(|card| card.id == card_id)
    }

    /// Removes the card from hand, returning it if it was there.
    pub fn take_card(&mut self, card_id: &str) -> Option<Card> {
        let idx = self.hand.iter().position(|card| card.id == card_id)?;
        Some(self.hand.remove(idx))
    }
}
