use crate::{Booster, Card, PlayerId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayedCard {
    pub player: PlayerId,
    pub card: Card,
    #[serde(default)]
    pub booster: Option<Booster>,
    pub final_value: f64,
}

/// One round: a card from every player compared on a single stat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Hand {
    pub initiator: PlayerId,
    pub stat: String,
    pub plays: Vec<PlayedCard>,
    #[serde(default)]
    pub winner: Option<PlayerId>,
}

impl Hand {
    pub fn open(initiator: impl Into<PlayerId>, stat: impl Into<String>) -> Self {
        Self {
            initiator: initiator.into(),
            stat: stat.into(),
            plays: Vec::new(),
            winner: None,
        }
    }

    pub fn has_played(&self, player: &str) -> bool {
        self.plays.iter().any(|play| play.player == player)
    }

    /// True once every player in `players` has exactly one play on record.
    pub fn is_complete(&self, players: &[PlayerId]) -> bool {
        players.iter().all(|player| {
            self.plays
                .iter()
                .filter(|play| &play.player == player)
                .count()
                == 1
        })
    }

    pub fn winning_play(&self) -> Option<&PlayedCard> {
        let winner = self.winner.as_deref()?;
        self.plays.iter().find(|play| play.player == winner)
    }

    pub fn contains_card(&self, card_id: &str) -> bool {
        self.plays.iter().any(|play| play.card.id == card_id)
    }
}
