use crate::{Card, RngState};

#[derive(Debug, Default, Clone)]
pub struct Deck {
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Default)]
pub struct DealOutcome {
    /// One hand per seat, in seat order.
    pub hands: Vec<Vec<Card>>,
    /// Cards beyond `seats * hand_size` that nobody received.
    pub dropped: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn shuffle(&mut self, rng: &mut RngState) {
        rng.shuffle(&mut self.cards);
    }

    /// Seat `i` gets cards `[i * hand_size, (i + 1) * hand_size)`. Short
    /// catalogs leave the trailing seats with fewer cards, or none.
    pub fn deal(self, seats: usize, hand_size: usize) -> DealOutcome {
        let mut remaining = self.cards.into_iter();
        let mut hands = Vec::with_capacity(seats);
        for _ in 0..seats {
            hands.push(remaining.by_ref().take(hand_size).collect());
        }
        DealOutcome {
            hands,
            dropped: remaining.collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> Vec<Card> {
        (0..count)
            .map(|n| Card::new(format!("c{n}"), format!("Card {n}"), "Team"))
            .collect()
    }

    fn ids(hand: &[Card]) -> Vec<&str> {
        hand.iter().map(|card| card.id.as_str()).collect()
    }

    #[test]
    fn deal_splits_contiguously_and_drops_remainder() {
        let outcome = Deck::new(numbered(22)).deal(4, 5);
        assert_eq!(outcome.hands.len(), 4);
        assert_eq!(ids(&outcome.hands[0]), vec!["c0", "c1", "c2", "c3", "c4"]);
        assert_eq!(ids(&outcome.hands[3]), vec!["c15", "c16", "c17", "c18", "c19"]);
        assert_eq!(ids(&outcome.dropped), vec!["c20", "c21"]);
    }

    #[test]
    fn short_deck_leaves_trailing_seats_short() {
        let outcome = Deck::new(numbered(7)).deal(3, 5);
        assert_eq!(outcome.hands[0].len(), 5);
        assert_eq!(outcome.hands[1].len(), 2);
        assert!(outcome.hands[2].is_empty());
        assert!(outcome.dropped.is_empty());
    }

    #[test]
    fn shuffle_is_deterministic_for_seed() {
        let mut first = Deck::new(numbered(20));
        let mut second = Deck::new(numbered(20));
        first.shuffle(&mut RngState::from_seed(11));
        second.shuffle(&mut RngState::from_seed(11));
        assert_eq!(ids(&first.cards), ids(&second.cards));
        assert_eq!(first.len(), 20);
    }
}
