use crate::cards::{Card, CardId, PlayerId, Value};
use crate::state::{FriendDeclaration, GameView, Phase, Play, Trick};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Partial update to `GameView`. Every field is optional; the store merges
/// only the fields the server actually sent, mirroring the wire protocol's
/// shallow patches.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GamePatch {
    pub player_names: Option<HashMap<PlayerId, String>>,
    pub player_ids: Option<Vec<PlayerId>>,
    pub ai_controllers: Option<Vec<PlayerId>>,
    pub human_controllers: Option<Vec<PlayerId>>,
    pub num_decks: Option<usize>,
    pub find_a_friend: Option<bool>,
    pub kitty_size: Option<usize>,
    pub round_number: Option<u32>,
    pub declarer_player_index: Option<usize>,
    pub player_rank_scores: Option<HashMap<PlayerId, Value>>,
    pub winning_player_ids: Option<Vec<PlayerId>>,
    pub status: Option<Phase>,
    pub current_player_index: Option<usize>,
    pub is_declaring_team: Option<HashMap<PlayerId, bool>>,
    pub deck: Option<Vec<CardId>>,
    pub player_hands: Option<HashMap<PlayerId, Vec<CardId>>>,
    pub declared_cards: Option<Vec<Play>>,
    pub kitty: Option<Vec<CardId>>,
    pub exposed_bottom_cards: Option<Vec<CardId>>,
    pub find_a_friend_declaration: Option<FriendDeclaration>,
    pub past_tricks: Option<Vec<Trick>>,
    pub current_trick: Option<Trick>,
    pub current_round_scores: Option<HashMap<PlayerId, i32>>,
    pub current_round_penalties: Option<HashMap<PlayerId, i32>>,
    pub current_trump: Option<Card>,
    pub player_ready_for_play: Option<HashMap<PlayerId, bool>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardInfoPayload {
    pub cards_by_id: HashMap<CardId, Card>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinishTrickPayload {
    #[serde(default)]
    pub do_declarers_win: Option<bool>,
    #[serde(flatten)]
    pub patch: GamePatch,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinishRoundPayload {
    #[serde(default)]
    pub do_declarers_win: Option<bool>,
    #[serde(flatten)]
    pub patch: GamePatch,
}

/// Payload for events attributed to a single player (friend joined, take
/// back, presence changes, invalid special play), carrying an arbitrary
/// state patch alongside.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEventPayload {
    pub player_id: PlayerId,
    #[serde(flatten)]
    pub patch: GamePatch,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ForfeitPayload {
    pub player_id: PlayerId,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub patch: GamePatch,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmSpecialPlayPayload {
    pub card_ids: Vec<CardId>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvalidActionPayload {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RejoinPayload {
    pub player_id: PlayerId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LeaveRoomPayload {}

/// The closed catalogue of server events. Adding a tag here is a
/// compile-time-checked addition: `ViewStore::apply` matches exhaustively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    RoomState(GameView),
    UpdatePlayers(GamePatch),
    UpdateControllers(GamePatch),
    GameConfiguration(GamePatch),
    StartRound(GamePatch),
    CardInfo(CardInfoPayload),
    Draw(GamePatch),
    Declare(GamePatch),
    ReadyForPlay(GamePatch),
    ExposeTrump(GamePatch),
    TakeKitty(GamePatch),
    FriendDeclare(GamePatch),
    MakeKitty(GamePatch),
    Play(GamePatch),
    FinishTrick(FinishTrickPayload),
    FinishRound(FinishRoundPayload),
    ConfirmSpecialPlay(ConfirmSpecialPlayPayload),
    InvalidSpecialPlay(PlayerEventPayload),
    FriendJoined(PlayerEventPayload),
    TakeBack(PlayerEventPayload),
    Forfeit(ForfeitPayload),
    Reconnect(PlayerEventPayload),
    Disconnect(PlayerEventPayload),
    InvalidAction(InvalidActionPayload),
    Rejoin(RejoinPayload),
    LeaveRoom(LeaveRoomPayload),
}

pub const KNOWN_TAGS: [&str; 26] = [
    "ROOM_STATE",
    "UPDATE_PLAYERS",
    "UPDATE_CONTROLLERS",
    "GAME_CONFIGURATION",
    "START_ROUND",
    "CARD_INFO",
    "DRAW",
    "DECLARE",
    "READY_FOR_PLAY",
    "EXPOSE_TRUMP",
    "TAKE_KITTY",
    "FRIEND_DECLARE",
    "MAKE_KITTY",
    "PLAY",
    "FINISH_TRICK",
    "FINISH_ROUND",
    "CONFIRM_SPECIAL_PLAY",
    "INVALID_SPECIAL_PLAY",
    "FRIEND_JOINED",
    "TAKE_BACK",
    "FORFEIT",
    "RECONNECT",
    "DISCONNECT",
    "INVALID_ACTION",
    "REJOIN",
    "LEAVE_ROOM",
];

impl Event {
    pub fn tag(&self) -> &'static str {
        match self {
            Event::RoomState(_) => "ROOM_STATE",
            Event::UpdatePlayers(_) => "UPDATE_PLAYERS",
            Event::UpdateControllers(_) => "UPDATE_CONTROLLERS",
            Event::GameConfiguration(_) => "GAME_CONFIGURATION",
            Event::StartRound(_) => "START_ROUND",
            Event::CardInfo(_) => "CARD_INFO",
            Event::Draw(_) => "DRAW",
            Event::Declare(_) => "DECLARE",
            Event::ReadyForPlay(_) => "READY_FOR_PLAY",
            Event::ExposeTrump(_) => "EXPOSE_TRUMP",
            Event::TakeKitty(_) => "TAKE_KITTY",
            Event::FriendDeclare(_) => "FRIEND_DECLARE",
            Event::MakeKitty(_) => "MAKE_KITTY",
            Event::Play(_) => "PLAY",
            Event::FinishTrick(_) => "FINISH_TRICK",
            Event::FinishRound(_) => "FINISH_ROUND",
            Event::ConfirmSpecialPlay(_) => "CONFIRM_SPECIAL_PLAY",
            Event::InvalidSpecialPlay(_) => "INVALID_SPECIAL_PLAY",
            Event::FriendJoined(_) => "FRIEND_JOINED",
            Event::TakeBack(_) => "TAKE_BACK",
            Event::Forfeit(_) => "FORFEIT",
            Event::Reconnect(_) => "RECONNECT",
            Event::Disconnect(_) => "DISCONNECT",
            Event::InvalidAction(_) => "INVALID_ACTION",
            Event::Rejoin(_) => "REJOIN",
            Event::LeaveRoom(_) => "LEAVE_ROOM",
        }
    }
}
