use crate::cards::{CardId, PlayerId};
use crate::events::{Event, GamePatch};
use crate::notify::{AudioCue, MAX_VOLUME_LEVEL};
use crate::state::{GameView, Phase, ViewState};

/// Side effects of applying one event: audio intents for the sound
/// collaborator and, for REJOIN / LEAVE_ROOM, a signal for the room
/// membership collaborator. State changes themselves land in the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Applied {
    pub cues: Vec<AudioCue>,
    pub membership: Option<MembershipSignal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipSignal {
    Rejoined { player_id: PlayerId },
    LeftRoom,
}

/// Single owner of the mirrored state. `apply` is the only entry point for
/// server events; the local mutators below only ever touch `LocalPanel`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewStore {
    state: ViewState,
}

impl ViewStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_viewer_id(&mut self, player_id: PlayerId) {
        self.state.viewer_id = Some(player_id);
    }

    /// Applies one inbound event. Synchronous, total for well-formed
    /// events, and idempotent with respect to re-merging the same payload.
    pub fn apply(&mut self, event: Event, now_ms: u64) -> Applied {
        let mut applied = Applied::default();
        tracing::debug!(tag = event.tag(), "applying event");
        match event {
            Event::RoomState(game) => {
                // Total overwrite of server-derived state; local panel is
                // untouched by construction.
                self.state.game = game;
            }
            Event::UpdatePlayers(patch)
            | Event::UpdateControllers(patch)
            | Event::GameConfiguration(patch)
            | Event::Draw(patch)
            | Event::Declare(patch)
            | Event::ReadyForPlay(patch)
            | Event::TakeKitty(patch) => {
                merge_patch(&mut self.state.game, patch);
            }
            Event::StartRound(patch) => {
                self.state.game.reset_round();
                self.state.local.reset_round();
                merge_patch(&mut self.state.game, patch);
                applied.cues.push(AudioCue::RoundStartFanfare);
            }
            Event::CardInfo(payload) => {
                // Disclosed card identities accumulate; they are never
                // retracted within a round.
                self.state.game.cards_by_id.extend(payload.cards_by_id);
            }
            Event::ExposeTrump(patch) => {
                merge_patch(&mut self.state.game, patch);
                applied.cues.push(AudioCue::TrumpExposed);
            }
            Event::MakeKitty(patch) | Event::FriendDeclare(patch) => {
                let was_play = self.state.game.status == Phase::Play;
                merge_patch(&mut self.state.game, patch);
                if !was_play && self.state.game.status == Phase::Play {
                    applied.cues.push(AudioCue::FadeBackgroundMusic);
                }
            }
            Event::Play(patch) => {
                let was_play = self.state.game.status == Phase::Play;
                merge_patch(&mut self.state.game, patch);
                if was_play && self.state.viewer_is_current() {
                    applied.cues.push(AudioCue::YourTurnChime);
                }
            }
            Event::FinishTrick(payload) => {
                let viewer_declaring = self.state.viewer_on_declaring_team();
                merge_patch(&mut self.state.game, payload.patch);
                if self.state.game.status == Phase::RoundStart {
                    if let Some(declarers_win) = payload.do_declarers_win {
                        self.notify_at(
                            now_ms,
                            if declarers_win {
                                "Declarers win!"
                            } else {
                                "Opponents win!"
                            },
                        );
                        applied.cues.push(if declarers_win == viewer_declaring {
                            AudioCue::VictoryJingle
                        } else {
                            AudioCue::DefeatJingle
                        });
                    }
                } else if self.state.game.status == Phase::Play && self.state.viewer_is_current() {
                    applied.cues.push(AudioCue::YourTurnChime);
                }
            }
            Event::FinishRound(payload) => {
                let winners = payload.patch.winning_player_ids.clone().unwrap_or_default();
                merge_patch(&mut self.state.game, payload.patch);
                if let Some(viewer) = self.state.viewer_id.clone() {
                    let viewer_wins = winners.contains(&viewer);
                    self.notify_at(now_ms, if viewer_wins { "You win!" } else { "You lose." });
                    applied.cues.push(if viewer_wins {
                        AudioCue::VictoryJingle
                    } else {
                        AudioCue::DefeatJingle
                    });
                }
            }
            Event::ConfirmSpecialPlay(payload) => {
                self.state.local.confirm_special_play = Some(payload.card_ids);
            }
            Event::InvalidSpecialPlay(payload) => {
                let name = self.state.game.name_of(&payload.player_id);
                self.notify_at(now_ms, format!("{name} made an invalid special play."));
                merge_patch(&mut self.state.game, payload.patch);
            }
            Event::FriendJoined(payload) => {
                let name = self.state.game.name_of(&payload.player_id);
                self.notify_at(now_ms, format!("{name} has joined the declaring team!"));
                merge_patch(&mut self.state.game, payload.patch);
            }
            Event::TakeBack(payload) => {
                let name = self.state.game.name_of(&payload.player_id);
                self.notify_at(now_ms, format!("{name} took back their cards"));
                merge_patch(&mut self.state.game, payload.patch);
            }
            Event::Forfeit(payload) => {
                let name = self.state.game.name_of(&payload.player_id);
                let verb = payload.message.as_deref().unwrap_or("forfeited");
                self.notify_at(now_ms, format!("{name} {verb}."));
                merge_patch(&mut self.state.game, payload.patch);
            }
            Event::Reconnect(payload) => {
                let name = self.state.game.name_of(&payload.player_id);
                self.notify_at(now_ms, format!("{name} reconnected."));
                merge_patch(&mut self.state.game, payload.patch);
            }
            Event::Disconnect(payload) => {
                let name = self.state.game.name_of(&payload.player_id);
                self.notify_at(now_ms, format!("{name} disconnected."));
                merge_patch(&mut self.state.game, payload.patch);
            }
            Event::InvalidAction(payload) => {
                self.notify_at(now_ms, payload.message);
            }
            Event::Rejoin(payload) => {
                applied.membership = Some(MembershipSignal::Rejoined {
                    player_id: payload.player_id,
                });
            }
            Event::LeaveRoom(_) => {
                applied.membership = Some(MembershipSignal::LeftRoom);
            }
        }
        applied
    }

    fn notify_at(&mut self, now_ms: u64, message: impl Into<String>) {
        self.state.local.notifications.insert(now_ms, message);
    }

    // Local-only mutators. None of these touch server-derived fields.

    pub fn toggle_card_selection(&mut self, card_id: CardId) {
        if !self.state.local.selected_card_ids.remove(&card_id) {
            self.state.local.selected_card_ids.insert(card_id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.state.local.selected_card_ids.clear();
    }

    pub fn set_show_kitty(&mut self, show: bool) {
        self.state.local.show_kitty = show;
    }

    pub fn set_show_previous_trick(&mut self, show: bool) {
        self.state.local.show_previous_trick = show;
    }

    pub fn set_sound_volume(&mut self, level: u8) {
        self.state.local.sound_volume = level.min(MAX_VOLUME_LEVEL);
    }

    pub fn begin_name_edit(&mut self) {
        let current = self
            .state
            .viewer_id
            .as_ref()
            .map(|id| self.state.game.name_of(id))
            .unwrap_or_default();
        self.state.local.name_edit = Some(current);
    }

    pub fn set_name_input(&mut self, input: impl Into<String>) {
        if self.state.local.name_edit.is_some() {
            self.state.local.name_edit = Some(input.into());
        }
    }

    pub fn take_name_edit(&mut self) -> Option<String> {
        self.state.local.name_edit.take()
    }

    pub fn take_confirm_special_play(&mut self) -> Option<Vec<CardId>> {
        self.state.local.confirm_special_play.take()
    }

    pub fn cancel_special_play(&mut self) {
        self.state.local.confirm_special_play = None;
    }

    pub fn expire_notification(&mut self, key: u64) {
        self.state.local.notifications.expire_up_to(key);
    }

    pub fn prune_notifications(&mut self, now_ms: u64) {
        self.state.local.notifications.prune(now_ms);
    }
}

/// Shallow merge: only the fields the server sent replace the mirror's.
fn merge_patch(game: &mut GameView, patch: GamePatch) {
    if let Some(v) = patch.player_names {
        game.player_names = v;
    }
    if let Some(v) = patch.player_ids {
        game.player_ids = v;
    }
    if let Some(v) = patch.ai_controllers {
        game.ai_controllers = v;
    }
    if let Some(v) = patch.human_controllers {
        game.human_controllers = v;
    }
    if let Some(v) = patch.num_decks {
        game.num_decks = v;
    }
    if let Some(v) = patch.find_a_friend {
        game.find_a_friend = v;
    }
    if let Some(v) = patch.kitty_size {
        game.kitty_size = v;
    }
    if let Some(v) = patch.round_number {
        game.round_number = Some(v);
    }
    if let Some(v) = patch.declarer_player_index {
        game.declarer_player_index = Some(v);
    }
    if let Some(v) = patch.player_rank_scores {
        game.player_rank_scores = v;
    }
    if let Some(v) = patch.winning_player_ids {
        game.winning_player_ids = v;
    }
    if let Some(v) = patch.status {
        game.status = v;
    }
    if let Some(v) = patch.current_player_index {
        game.current_player_index = Some(v);
    }
    if let Some(v) = patch.is_declaring_team {
        game.is_declaring_team = v;
    }
    if let Some(v) = patch.deck {
        game.deck = v;
    }
    if let Some(v) = patch.player_hands {
        game.player_hands = v;
    }
    if let Some(v) = patch.declared_cards {
        game.declared_cards = v;
    }
    if let Some(v) = patch.kitty {
        game.kitty = v;
    }
    if let Some(v) = patch.exposed_bottom_cards {
        game.exposed_bottom_cards = v;
    }
    if let Some(v) = patch.find_a_friend_declaration {
        game.find_a_friend_declaration = Some(v);
    }
    if let Some(v) = patch.past_tricks {
        game.past_tricks = v;
    }
    if let Some(v) = patch.current_trick {
        game.current_trick = Some(v);
    }
    if let Some(v) = patch.current_round_scores {
        game.current_round_scores = v;
    }
    if let Some(v) = patch.current_round_penalties {
        game.current_round_penalties = v;
    }
    if let Some(v) = patch.current_trump {
        game.current_trump = Some(v);
    }
    if let Some(v) = patch.player_ready_for_play {
        game.player_ready_for_play = v;
    }
}
