use crate::cards::{CardId, PlayerId};
use crate::state::FriendDeclaration;
use serde::{Deserialize, Serialize};

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// User intents sent to the authority. Fire-and-forget: the store never
/// waits for an acknowledgement, it just applies whatever event comes back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    #[serde(rename_all = "camelCase")]
    JoinRoom { room_code: String },
    CreateRoom {},
    #[serde(rename_all = "camelCase")]
    Rejoin { player_id: PlayerId },
    SetName { name: String },
    #[serde(rename_all = "camelCase")]
    PlayerOrder { player_ids: Vec<PlayerId> },
    #[serde(rename_all = "camelCase")]
    PlayerScore { player_id: PlayerId, increment: bool },
    #[serde(rename_all = "camelCase")]
    RemovePlayer { player_id: PlayerId },
    #[serde(rename_all = "camelCase")]
    GameConfiguration {
        num_decks: usize,
        find_a_friend: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        kitty_size: Option<usize>,
    },
    AddAi {},
    ReadyForPlay { ready: bool },
    #[serde(rename_all = "camelCase")]
    Declare { card_ids: Vec<CardId> },
    FriendDeclare { declaration: FriendDeclaration },
    #[serde(rename_all = "camelCase")]
    MakeKitty { card_ids: Vec<CardId> },
    #[serde(rename_all = "camelCase")]
    Play {
        card_ids: Vec<CardId>,
        #[serde(default, skip_serializing_if = "is_false")]
        confirm_special_play: bool,
    },
    TakeBack {},
    Forfeit {},
}
