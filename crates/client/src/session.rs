use crate::connection::{AudioSink, Connection};
use crate::persistence::{save_name, truncate_name};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tractor_core::{
    decode_event, gain_for, into_intent, resolve, Affordance, Applied, CardId, Event, Intent,
    MembershipSignal, Phase, ViewState, ViewStore, WireError,
};

/// One connected room: owns the mirrored state and the outbound half of the
/// transport. Inbound envelopes arrive through `handle_message`, one at a
/// time, in delivery order.
pub struct RoomSession<C: Connection> {
    store: ViewStore,
    conn: C,
    saved_name: Option<String>,
    name_path: Option<PathBuf>,
    rejoin_attempted: bool,
}

impl<C: Connection> RoomSession<C> {
    pub fn new(conn: C, saved_name: Option<String>, name_path: Option<PathBuf>) -> Self {
        Self {
            store: ViewStore::new(),
            conn,
            saved_name,
            name_path,
            rejoin_attempted: false,
        }
    }

    pub fn state(&self) -> &ViewState {
        self.store.state()
    }

    pub fn store(&self) -> &ViewStore {
        &self.store
    }

    pub fn connection(&self) -> &C {
        &self.conn
    }

    /// Decodes and applies one inbound envelope. Unknown tags and malformed
    /// payloads are logged and dropped; they never take the session down.
    pub fn handle_message(&mut self, raw: &str, now_ms: u64) -> Option<Applied> {
        let event = match decode_event(raw) {
            Ok(event) => event,
            Err(WireError::UnknownTag(_)) => return None,
            Err(err) => {
                tracing::warn!(error = %err, "dropping undecodable envelope");
                return None;
            }
        };
        let roster_changed = matches!(
            event,
            Event::RoomState(_) | Event::UpdatePlayers(_) | Event::UpdateControllers(_)
        );
        let applied = self.store.apply(event, now_ms);
        match &applied.membership {
            Some(MembershipSignal::Rejoined { player_id }) => {
                tracing::debug!(%player_id, "seat claimed");
                self.store.set_viewer_id(player_id.clone());
            }
            Some(MembershipSignal::LeftRoom) => self.conn.disconnect(),
            None => {}
        }
        if roster_changed {
            self.maybe_auto_rejoin();
        }
        Some(applied)
    }

    /// One-shot automatic rejoin: if the saved display name matches an
    /// unclaimed seat in the roster, ask for that seat back.
    fn maybe_auto_rejoin(&mut self) {
        if self.rejoin_attempted || self.store.state().viewer_id.is_some() {
            return;
        }
        let name = match &self.saved_name {
            Some(name) => name,
            None => return,
        };
        let game = &self.store.state().game;
        let seat = game
            .unclaimed_seats()
            .into_iter()
            .find(|id| game.player_names.get(*id) == Some(name))
            .cloned();
        if let Some(player_id) = seat {
            tracing::debug!(%player_id, "attempting automatic rejoin");
            self.rejoin_attempted = true;
            if let Err(err) = self.conn.send(&Intent::Rejoin { player_id }) {
                tracing::warn!(error = %err, "rejoin send failed");
            }
        }
    }

    /// Submits the currently resolved primary action, if one is enabled.
    /// The selection clears synchronously, before the send, regardless of
    /// what the authority later says. A pending special-play confirmation
    /// is not submittable from here.
    pub fn submit_primary(&mut self) -> Result<bool> {
        let affordance = resolve(self.store.state());
        if matches!(affordance, Affordance::ConfirmSpecialPlay { .. }) {
            return Ok(false);
        }
        let intent = match into_intent(&affordance) {
            Some(intent) => intent,
            None => return Ok(false),
        };
        self.store.clear_selection();
        self.conn.send(&intent).context("submit primary action")?;
        Ok(true)
    }

    /// Confirms a pending special play, re-submitting it with the
    /// confirmation flag set.
    pub fn confirm_special_play(&mut self) -> Result<bool> {
        let card_ids = match self.store.take_confirm_special_play() {
            Some(card_ids) => card_ids,
            None => return Ok(false),
        };
        self.conn
            .send(&Intent::Play {
                card_ids,
                confirm_special_play: true,
            })
            .context("confirm special play")?;
        Ok(true)
    }

    /// Discards the pending special-play marker; nothing is sent.
    pub fn cancel_special_play(&mut self) {
        self.store.cancel_special_play();
    }

    pub fn toggle_card_selection(&mut self, card_id: CardId) {
        self.store.toggle_card_selection(card_id);
    }

    pub fn set_show_kitty(&mut self, show: bool) {
        self.store.set_show_kitty(show);
    }

    pub fn set_show_previous_trick(&mut self, show: bool) {
        self.store.set_show_previous_trick(show);
    }

    /// Steps the volume 0-3-and-wrap and pushes the curved gain to the
    /// audio collaborator.
    pub fn cycle_sound_volume(&mut self, audio: &mut dyn AudioSink) -> u8 {
        let level = (self.store.state().local.sound_volume + 1) % 4;
        self.store.set_sound_volume(level);
        audio.set_gain(gain_for(level));
        level
    }

    /// Forwards the cues from one applied event to the audio collaborator.
    /// Muted players get nothing at all.
    pub fn dispatch_cues(&self, applied: &Applied, audio: &mut dyn AudioSink) {
        if self.store.state().local.sound_volume == 0 {
            return;
        }
        for cue in &applied.cues {
            audio.play(*cue);
        }
    }

    pub fn begin_name_edit(&mut self) {
        self.store.begin_name_edit();
    }

    pub fn set_name_input(&mut self, input: impl Into<String>) {
        self.store.set_name_input(input);
    }

    /// Ends name editing: truncates, sends SET_NAME, and persists the name
    /// for future auto-rejoin.
    pub fn commit_name(&mut self) -> Result<bool> {
        let input = match self.store.take_name_edit() {
            Some(input) => input,
            None => return Ok(false),
        };
        let name = truncate_name(input.trim());
        if name.is_empty() {
            return Ok(false);
        }
        self.conn
            .send(&Intent::SetName { name: name.clone() })
            .context("set name")?;
        if let Some(path) = &self.name_path {
            if let Err(err) = save_name(path, &name) {
                tracing::warn!(error = %err, "could not persist display name");
            }
        }
        self.saved_name = Some(name);
        Ok(true)
    }

    /// Lobby seat shuffle: swaps the viewer with the neighbor above or
    /// below and proposes the new order.
    pub fn move_viewer(&mut self, up: bool) -> Result<bool> {
        let state = self.store.state();
        if state.game.status != Phase::RoundStart {
            return Ok(false);
        }
        let viewer = match &state.viewer_id {
            Some(viewer) => viewer,
            None => return Ok(false),
        };
        let mut player_ids = state.game.player_ids.clone();
        let index = match player_ids.iter().position(|id| id == viewer) {
            Some(index) => index,
            None => return Ok(false),
        };
        let target = if up {
            match index.checked_sub(1) {
                Some(target) => target,
                None => return Ok(false),
            }
        } else if index + 1 < player_ids.len() {
            index + 1
        } else {
            return Ok(false);
        };
        player_ids.swap(index, target);
        self.conn
            .send(&Intent::PlayerOrder { player_ids })
            .context("reorder players")?;
        Ok(true)
    }

    /// Lobby ready toggle (the start-round button).
    pub fn toggle_ready(&mut self) -> Result<()> {
        let ready = !self.store.state().viewer_is_ready();
        self.conn
            .send(&Intent::ReadyForPlay { ready })
            .context("toggle ready")
    }

    pub fn set_game_configuration(&mut self, num_decks: usize, find_a_friend: bool) -> Result<()> {
        self.conn
            .send(&Intent::GameConfiguration {
                num_decks,
                find_a_friend,
                kitty_size: None,
            })
            .context("configure game")
    }

    pub fn add_ai(&mut self) -> Result<bool> {
        if self.store.state().game.status != Phase::RoundStart {
            return Ok(false);
        }
        self.conn.send(&Intent::AddAi {}).context("add ai")?;
        Ok(true)
    }

    pub fn take_back(&mut self) -> Result<()> {
        self.conn.send(&Intent::TakeBack {}).context("take back")
    }

    pub fn forfeit(&mut self) -> Result<()> {
        self.conn.send(&Intent::Forfeit {}).context("forfeit")
    }

    /// Timer callback for one notification's scheduled expiry.
    pub fn expire_notification(&mut self, key: u64) {
        self.store.expire_notification(key);
    }

    pub fn leave(&mut self) {
        self.conn.disconnect();
    }
}
