use crate::{Card, GameConfig, GameData, Hand, Phase, PlayerId, PlayerState};
use log::warn;
use serde::Serialize;
use thiserror::Error;

mod resolve;
mod round;
mod roster;

pub use resolve::Standing;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("cannot deal an empty catalog")]
    EmptyCatalog,
    #[error("catalog has {got} cards, a full deal needs {needed}")]
    ShortDeal { needed: usize, got: usize },
    #[error("card {0} appears more than once in the deal")]
    DuplicateCard(String),
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),
    #[error("card {card} is not in {player}'s hand")]
    CardNotInHand { player: PlayerId, card: String },
    #[error("{0} already played a card this hand")]
    AlreadyPlayed(PlayerId),
    #[error("out of turn: expected {expected}, got {got}")]
    OutOfTurn { expected: PlayerId, got: PlayerId },
    #[error("{player} has no {booster} booster left")]
    BoosterUnavailable { player: PlayerId, booster: String },
    #[error("no hand in progress")]
    NoCurrentHand,
    #[error("invalid roster: {0}")]
    InvalidRoster(String),
}

/// One game at one table. Every mutation goes through an action method,
/// each of which either applies completely or returns an error and leaves
/// the session as it was.
#[derive(Debug, Clone, Serialize)]
pub struct GameSession {
    config: GameConfig,
    players: Vec<PlayerState>,
    current_player: usize,
    phase: Phase,
    selected_stat: Option<String>,
    selected_card: Option<Card>,
    current_hand: Option<Hand>,
    completed_hands: Vec<Hand>,
    game_data: GameData,
}

impl Default for GameSession {
    fn default() -> Self {
        let config = GameConfig::default();
        let players = config.players.iter().map(PlayerState::new).collect();
        Self::from_parts(config, players)
    }
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self, SessionError> {
        validate_roster(&config.players)?;
        if config.hand_size == 0 {
            return Err(SessionError::InvalidRoster("hand size must be positive".to_string()));
        }
        let players = config.players.iter().map(PlayerState::new).collect();
        Ok(Self::from_parts(config, players))
    }

    fn from_parts(config: GameConfig, players: Vec<PlayerState>) -> Self {
        Self {
            config,
            players,
            current_player: 0,
            phase: Phase::Waiting,
            selected_stat: None,
            selected_card: None,
            current_hand: None,
            completed_hands: Vec::new(),
            game_data: GameData::default(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[PlayerState] {
        &self.players
    }

    pub fn player_ids(&self) -> &[PlayerId] {
        &self.config.players
    }

    pub fn player(&self, id: &str) -> Option<&PlayerState> {
        self.players.iter().find(|player| player.id == id)
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player
    }

    pub fn current_player(&self) -> &PlayerState {
        &self.players[self.current_player]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected_stat(&self) -> Option<&str> {
        self.selected_stat.as_deref()
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.selected_card.as_ref()
    }

    pub fn current_hand(&self) -> Option<&Hand> {
        self.current_hand.as_ref()
    }

    pub fn completed_hands(&self) -> &[Hand] {
        &self.completed_hands
    }

    pub fn game_data(&self) -> &GameData {
        &self.game_data
    }

    pub fn hand_of(&self, id: &str) -> Option<&[Card]> {
        self.player(id).map(|player| player.hand.as_slice())
    }

    pub fn score_of(&self, id: &str) -> Option<u32> {
        self.player(id).map(|player| player.score)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The seat whose card the current hand is waiting on: the seat that
    /// opened the hand, then the first following seat in roster order that
    /// has not played yet. With no hand open it is the leader.
    pub fn expected_player(&self) -> &PlayerState {
        let Some(hand) = &self.current_hand else {
            return &self.players[self.current_player];
        };
        let start = self
            .player_index(&hand.initiator)
            .unwrap_or(self.current_player);
        let seats = self.players.len();
        (0..seats)
            .map(|offset| &self.players[(start + offset) % seats])
            .find(|player| !hand.has_played(&player.id))
            .unwrap_or(&self.players[start])
    }

    fn player_index(&self, id: &str) -> Result<usize, SessionError> {
        self.players
            .iter()
            .position(|player| player.id == id)
            .ok_or_else(|| SessionError::UnknownPlayer(id.to_string()))
    }
}

fn validate_roster(players: &[PlayerId]) -> Result<(), SessionError> {
    if players.is_empty() {
        return Err(SessionError::InvalidRoster("no players".to_string()));
    }
    for (idx, player) in players.iter().enumerate() {
        if player.trim().is_empty() {
            return Err(SessionError::InvalidRoster("blank player name".to_string()));
        }
        if players[..idx].contains(player) {
            return Err(SessionError::InvalidRoster(format!("duplicate player {player}")));
        }
    }
    Ok(())
}

fn rejected(err: SessionError) -> SessionError {
    warn!("action rejected: {err}");
    err
}
