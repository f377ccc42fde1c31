use crate::{Booster, CardId, Phase, PlayerId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    PlayersChanged {
        players: Vec<PlayerId>,
    },
    Dealt {
        hand_size: usize,
        dealt: usize,
        dropped: usize,
    },
    StatSelected {
        stat: String,
        phase: Phase,
    },
    CardPlayed {
        player: PlayerId,
        card: CardId,
        booster: Option<Booster>,
        final_value: f64,
    },
    HandResolved {
        winner: PlayerId,
        stat: String,
        value: f64,
    },
    GameOver {
        leader: Option<PlayerId>,
    },
    NewHandStarted,
    TurnPassed {
        current: usize,
    },
    GameDataUpdated,
    Reset,
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
