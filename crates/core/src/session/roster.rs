use super::*;
use crate::*;
use log::debug;

impl GameSession {
    /// Seats a new roster. Only allowed before cards are dealt.
    pub fn set_players(
        &mut self,
        players: Vec<PlayerId>,
        events: &mut EventBus,
    ) -> Result<(), SessionError> {
        if self.phase != Phase::Waiting {
            return Err(rejected(SessionError::InvalidPhase(self.phase)));
        }
        validate_roster(&players).map_err(rejected)?;
        self.players = players.iter().map(PlayerState::new).collect();
        self.config.players = players.clone();
        self.current_player = 0;
        debug!("roster set to {players:?}");
        events.push(Event::PlayersChanged { players });
        Ok(())
    }

    /// Passes the lead to the next seat, wrapping around.
    pub fn next_player(&mut self, events: &mut EventBus) {
        self.current_player = (self.current_player + 1) % self.players.len();
        debug!("turn passed to {}", self.players[self.current_player].id);
        events.push(Event::TurnPassed {
            current: self.current_player,
        });
    }

    pub fn set_game_data(&mut self, data: GameData, events: &mut EventBus) {
        debug!(
            "game data: orange={:?} purple={:?} ranked_teams={}",
            data.orange_cap,
            data.purple_cap,
            data.team_rankings.len()
        );
        self.game_data = data;
        events.push(Event::GameDataUpdated);
    }

    /// Back to the lobby: scores zeroed, boosters restored, every card
    /// (in hand, on the table or in history) cleared until the next deal.
    pub fn reset(&mut self, events: &mut EventBus) {
        for player in &mut self.players {
            player.score = 0;
            player.hand.clear();
            player.boosters = BoosterEntitlements::default();
        }
        self.current_player = 0;
        self.selected_stat = None;
        self.selected_card = None;
        self.current_hand = None;
        self.completed_hands.clear();
        self.phase = Phase::Waiting;
        debug!("session reset");
        events.push(Event::Reset);
    }
}
