use super::*;
use crate::*;
use log::info;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Standing {
    pub player: PlayerId,
    pub score: u32,
}

impl GameSession {
    /// Settles the current hand: the best boosted value wins a point and
    /// leads the next hand, unless every hand is now empty.
    pub fn resolve_hand(&mut self, events: &mut EventBus) -> Result<PlayerId, SessionError> {
        if self.current_hand.is_none() {
            return Err(rejected(SessionError::NoCurrentHand));
        }
        if self.phase != Phase::Resolution {
            return Err(rejected(SessionError::InvalidPhase(self.phase)));
        }
        let Some(mut hand) = self.current_hand.take() else {
            return Err(rejected(SessionError::NoCurrentHand));
        };
        let Some(best) = winning_play(&hand.plays, &hand.stat) else {
            self.current_hand = Some(hand);
            return Err(rejected(SessionError::NoCurrentHand));
        };
        let winner = hand.plays[best].player.clone();
        let value = hand.plays[best].final_value;
        let seat = match self.player_index(&winner) {
            Ok(seat) => seat,
            Err(err) => {
                self.current_hand = Some(hand);
                return Err(rejected(err));
            }
        };

        hand.winner = Some(winner.clone());
        self.players[seat].score += 1;
        info!("{winner} wins the hand on {} with {value}", hand.stat);
        events.push(Event::HandResolved {
            winner: winner.clone(),
            stat: hand.stat.clone(),
            value,
        });
        self.completed_hands.push(hand);

        if self.players.iter().all(|player| player.hand.is_empty()) {
            self.phase = Phase::GameOver;
            let leader = self.leader().map(|standing| standing.player);
            info!("game over, leader {leader:?}");
            events.push(Event::GameOver { leader });
        } else {
            self.phase = Phase::StatSelection;
            self.current_player = seat;
        }
        Ok(winner)
    }

    /// Scores from best to worst; equal scores keep roster order.
    pub fn standings(&self) -> Vec<Standing> {
        let mut table: Vec<Standing> = self
            .players
            .iter()
            .map(|player| Standing {
                player: player.id.clone(),
                score: player.score,
            })
            .collect();
        table.sort_by(|a, b| b.score.cmp(&a.score));
        table
    }

    /// The first seat holding the top score.
    pub fn leader(&self) -> Option<Standing> {
        self.standings().into_iter().next()
    }
}
