use crate::cards::{Card, CardId, PlayerId, Suit, Value};
use crate::notify::NotificationBoard;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    RoundStart,
    Draw,
    DrawKitty,
    MakeKitty,
    DeclareFriend,
    ExposeTrump,
    Play,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Play {
    pub player_id: PlayerId,
    pub card_ids: Vec<CardId>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Trick {
    #[serde(default)]
    pub start_player_id: Option<PlayerId>,
    #[serde(default)]
    pub plays: Vec<Play>,
    #[serde(default)]
    pub winning_player_id: Option<PlayerId>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    pub ordinal: usize,
    pub value: Value,
    pub suit: Suit,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FriendDeclaration {
    pub declarations: Vec<Declaration>,
}

/// Mirror of the authoritative room and round state. Only `ViewStore` may
/// mutate this; everything else reads a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GameView {
    pub player_names: HashMap<PlayerId, String>,
    pub player_ids: Vec<PlayerId>,
    pub ai_controllers: Vec<PlayerId>,
    pub human_controllers: Vec<PlayerId>,
    pub num_decks: usize,
    pub find_a_friend: bool,
    pub kitty_size: usize,
    pub round_number: Option<u32>,
    pub declarer_player_index: Option<usize>,
    pub player_rank_scores: HashMap<PlayerId, Value>,
    pub winning_player_ids: Vec<PlayerId>,
    pub status: Phase,
    pub current_player_index: Option<usize>,
    pub is_declaring_team: HashMap<PlayerId, bool>,
    pub deck: Vec<CardId>,
    pub cards_by_id: HashMap<CardId, Card>,
    pub player_hands: HashMap<PlayerId, Vec<CardId>>,
    pub declared_cards: Vec<Play>,
    pub kitty: Vec<CardId>,
    pub exposed_bottom_cards: Vec<CardId>,
    pub find_a_friend_declaration: Option<FriendDeclaration>,
    pub past_tricks: Vec<Trick>,
    pub current_trick: Option<Trick>,
    pub current_round_scores: HashMap<PlayerId, i32>,
    pub current_round_penalties: HashMap<PlayerId, i32>,
    pub current_trump: Option<Card>,
    pub player_ready_for_play: HashMap<PlayerId, bool>,
}

impl GameView {
    pub fn new() -> Self {
        Self {
            player_names: HashMap::new(),
            player_ids: Vec::new(),
            ai_controllers: Vec::new(),
            human_controllers: Vec::new(),
            num_decks: 2,
            find_a_friend: false,
            kitty_size: 8,
            round_number: None,
            declarer_player_index: None,
            player_rank_scores: HashMap::new(),
            winning_player_ids: Vec::new(),
            status: Phase::RoundStart,
            current_player_index: None,
            is_declaring_team: HashMap::new(),
            deck: Vec::new(),
            cards_by_id: HashMap::new(),
            player_hands: HashMap::new(),
            declared_cards: Vec::new(),
            kitty: Vec::new(),
            exposed_bottom_cards: Vec::new(),
            find_a_friend_declaration: None,
            past_tricks: Vec::new(),
            current_trick: None,
            current_round_scores: HashMap::new(),
            current_round_penalties: HashMap::new(),
            current_trump: None,
            player_ready_for_play: HashMap::new(),
        }
    }

    /// Clears every round-scoped fragment. Room-scoped fields (seat ring,
    /// names, controllers, configuration, rank scores) survive.
    pub fn reset_round(&mut self) {
        self.declarer_player_index = None;
        self.winning_player_ids.clear();
        self.current_player_index = None;
        self.is_declaring_team.clear();
        self.deck.clear();
        self.cards_by_id.clear();
        self.player_hands.clear();
        self.declared_cards.clear();
        self.kitty.clear();
        self.exposed_bottom_cards.clear();
        self.find_a_friend_declaration = None;
        self.past_tricks.clear();
        self.current_trick = None;
        self.current_round_scores.clear();
        self.current_round_penalties.clear();
        self.current_trump = None;
        self.player_ready_for_play.clear();
    }

    pub fn name_of(&self, player_id: &str) -> String {
        self.player_names
            .get(player_id)
            .cloned()
            .unwrap_or_else(|| player_id.to_string())
    }

    pub fn current_player(&self) -> Option<&PlayerId> {
        self.current_player_index
            .and_then(|index| self.player_ids.get(index))
    }

    pub fn declarer(&self) -> Option<&PlayerId> {
        self.declarer_player_index
            .and_then(|index| self.player_ids.get(index))
    }

    /// Hand as rendered: while declarations are being contested, the most
    /// recent declared batch is shown fronted rather than in hand. Earlier
    /// batches reappear in the hand; authoritative hand updates supersede
    /// this filtering anyway.
    pub fn hand_for_display(&self, player_id: &str) -> Vec<CardId> {
        let hand = match self.player_hands.get(player_id) {
            Some(hand) => hand,
            None => return Vec::new(),
        };
        if self.status == Phase::Play || self.declared_cards.is_empty() {
            return hand.clone();
        }
        let fronted = &self.declared_cards[self.declared_cards.len() - 1].card_ids;
        hand.iter()
            .filter(|card_id| !fronted.contains(card_id))
            .copied()
            .collect()
    }

    pub fn opponents_points(&self) -> i32 {
        self.player_ids
            .iter()
            .filter(|id| !self.is_declaring_team.get(*id).copied().unwrap_or(false))
            .map(|id| self.current_round_scores.get(id).copied().unwrap_or(0))
            .sum()
    }

    pub fn num_players_ready(&self) -> usize {
        self.player_ready_for_play
            .values()
            .filter(|ready| **ready)
            .count()
    }

    /// Seats listed in the ring but driven by neither a human nor an AI
    /// controller, i.e. candidates for rejoining.
    pub fn unclaimed_seats(&self) -> Vec<&PlayerId> {
        self.player_ids
            .iter()
            .filter(|id| !self.ai_controllers.contains(id) && !self.human_controllers.contains(id))
            .collect()
    }
}

impl Default for GameView {
    fn default() -> Self {
        Self::new()
    }
}

/// Local-only UI state. Kept disjoint from `GameView` so that no server
/// merge, including a full room snapshot, can clobber it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LocalPanel {
    pub selected_card_ids: BTreeSet<CardId>,
    pub show_kitty: bool,
    pub show_previous_trick: bool,
    pub sound_volume: u8,
    pub name_edit: Option<String>,
    pub confirm_special_play: Option<Vec<CardId>>,
    pub notifications: NotificationBoard,
}

impl LocalPanel {
    pub fn new() -> Self {
        Self {
            selected_card_ids: BTreeSet::new(),
            show_kitty: false,
            show_previous_trick: false,
            sound_volume: 3,
            name_edit: None,
            confirm_special_play: None,
            notifications: NotificationBoard::default(),
        }
    }

    pub fn reset_round(&mut self) {
        self.selected_card_ids.clear();
        self.confirm_special_play = None;
    }

    pub fn selected_list(&self) -> Vec<CardId> {
        self.selected_card_ids.iter().copied().collect()
    }
}

impl Default for LocalPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ViewState {
    pub viewer_id: Option<PlayerId>,
    pub game: GameView,
    pub local: LocalPanel,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn viewer_is_current(&self) -> bool {
        match (&self.viewer_id, self.game.current_player()) {
            (Some(viewer), Some(current)) => viewer == current,
            _ => false,
        }
    }

    pub fn viewer_is_ready(&self) -> bool {
        self.viewer_id
            .as_ref()
            .and_then(|id| self.game.player_ready_for_play.get(id))
            .copied()
            .unwrap_or(false)
    }

    pub fn viewer_on_declaring_team(&self) -> bool {
        self.viewer_id
            .as_ref()
            .and_then(|id| self.game.is_declaring_team.get(id))
            .copied()
            .unwrap_or(false)
    }
}
