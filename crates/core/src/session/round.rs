use super::*;
use crate::*;
use log::{debug, warn};
use std::collections::HashSet;

impl GameSession {
    /// Deals `hand_size` cards to each seat in roster order, replacing any
    /// hands, pending hand and history. Cards past the last seat are dropped;
    /// a catalog that cannot fill every seat is rejected.
    pub fn deal(&mut self, cards: Vec<Card>, events: &mut EventBus) -> Result<(), SessionError> {
        if cards.is_empty() {
            return Err(rejected(SessionError::EmptyCatalog));
        }
        let hand_size = self.config.hand_size;
        let needed = hand_size * self.players.len();
        if cards.len() < needed {
            return Err(rejected(SessionError::ShortDeal {
                needed,
                got: cards.len(),
            }));
        }
        let outcome = Deck::new(cards).deal(self.players.len(), hand_size);

        let mut seen = HashSet::new();
        for card in outcome.hands.iter().flatten() {
            if !seen.insert(card.id.as_str()) {
                return Err(rejected(SessionError::DuplicateCard(card.id.clone())));
            }
        }

        if !outcome.dropped.is_empty() {
            warn!(
                "catalog larger than the table, dropping {} cards",
                outcome.dropped.len()
            );
        }

        let dealt = seen.len();
        for (player, hand) in self.players.iter_mut().zip(outcome.hands) {
            player.hand = hand;
        }
        self.current_player = 0;
        self.selected_stat = None;
        self.selected_card = None;
        self.current_hand = None;
        self.completed_hands.clear();
        self.phase = Phase::StatSelection;
        debug!("dealt {dealt} cards to {} seats", self.players.len());
        events.push(Event::Dealt {
            hand_size,
            dealt,
            dropped: outcome.dropped.len(),
        });
        Ok(())
    }

    pub fn shuffle_and_deal(
        &mut self,
        cards: Vec<Card>,
        rng: &mut RngState,
        events: &mut EventBus,
    ) -> Result<(), SessionError> {
        let mut deck = Deck::new(cards);
        deck.shuffle(rng);
        debug!("shuffled {} cards with seed {}", deck.len(), rng.seed());
        self.deal(deck.cards, events)
    }

    /// Records the stat to play on. Only moves the game forward when a stat
    /// is being waited for.
    pub fn select_stat(&mut self, stat: impl Into<String>, events: &mut EventBus) {
        let stat = stat.into();
        if self.phase == Phase::StatSelection {
            self.phase = Phase::CardSelection;
        }
        debug!("stat {stat} selected, phase {}", self.phase.id());
        events.push(Event::StatSelected {
            stat: stat.clone(),
            phase: self.phase,
        });
        self.selected_stat = Some(stat);
    }

    /// Highlights a card for the acting player. Has no effect on hands.
    pub fn select_card(&mut self, card: Card) {
        self.selected_card = Some(card);
    }

    pub fn start_new_hand(&mut self, events: &mut EventBus) {
        self.selected_stat = None;
        self.selected_card = None;
        self.phase = Phase::StatSelection;
        debug!("new hand started");
        events.push(Event::NewHandStarted);
    }

    /// Plays `card_id` from `player`'s hand onto the current hand, opening
    /// the hand if this is its first card. Returns the boosted stat value.
    pub fn play_card(
        &mut self,
        player: &str,
        card_id: &str,
        booster: Option<Booster>,
        events: &mut EventBus,
    ) -> Result<f64, SessionError> {
        if !matches!(self.phase, Phase::StatSelection | Phase::CardSelection) {
            return Err(rejected(SessionError::InvalidPhase(self.phase)));
        }
        let seat = self.player_index(player).map_err(rejected)?;
        if let Some(hand) = &self.current_hand {
            if hand.has_played(player) {
                return Err(rejected(SessionError::AlreadyPlayed(player.to_string())));
            }
        }
        if self.config.turn_order == TurnOrder::Strict {
            let expected = &self.expected_player().id;
            if expected != player {
                return Err(rejected(SessionError::OutOfTurn {
                    expected: expected.clone(),
                    got: player.to_string(),
                }));
            }
        }
        if !self.players[seat].holds(card_id) {
            return Err(rejected(SessionError::CardNotInHand {
                player: player.to_string(),
                card: card_id.to_string(),
            }));
        }
        if let Some(booster) = booster {
            if !self.players[seat].boosters.available(booster) {
                return Err(rejected(SessionError::BoosterUnavailable {
                    player: player.to_string(),
                    booster: booster.id().to_string(),
                }));
            }
        }

        let stat = match &self.current_hand {
            Some(hand) => hand.stat.clone(),
            None => self.selected_stat.clone().unwrap_or_default(),
        };
        let seat_state = &mut self.players[seat];
        let Some(card) = seat_state.take_card(card_id) else {
            return Err(rejected(SessionError::CardNotInHand {
                player: player.to_string(),
                card: card_id.to_string(),
            }));
        };
        if let Some(booster) = booster {
            if self.config.booster_policy == BoosterPolicy::ConsumedOnUse {
                seat_state.boosters.consume(booster);
            }
        }
        let final_value = score_value(&card, &stat, booster, &self.game_data);
        debug!(
            "{player} plays {} ({}) on {stat} for {final_value}",
            card.id, card.name
        );
        events.push(Event::CardPlayed {
            player: player.to_string(),
            card: card.id.clone(),
            booster,
            final_value,
        });

        let hand = self
            .current_hand
            .get_or_insert_with(|| Hand::open(player, stat));
        hand.plays.push(PlayedCard {
            player: player.to_string(),
            card,
            booster,
            final_value,
        });
        self.selected_card = None;
        self.phase = if hand.is_complete(&self.config.players) {
            Phase::Resolution
        } else {
            Phase::CardSelection
        };
        debug!("phase now {}", self.phase.id());
        Ok(final_value)
    }
}
