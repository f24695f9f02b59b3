use crate::cards::CardId;
use crate::intents::Intent;
use crate::state::{Phase, ViewState};

/// The single primary action available to the viewer right now, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Affordance {
    None,
    ToggleReady { ready: bool },
    Declare { card_ids: Vec<CardId> },
    MakeKitty { card_ids: Vec<CardId> },
    Play { card_ids: Vec<CardId> },
    /// A risky multi-component play is awaiting confirmation; the primary
    /// action is suspended until the viewer confirms or cancels.
    ConfirmSpecialPlay { card_ids: Vec<CardId> },
}

/// Pure function of the snapshot; mirrors the phase table exactly. Branch
/// order matters: the confirmation sub-state wins over everything, then
/// ready/declare, then turn-gated actions.
pub fn resolve(state: &ViewState) -> Affordance {
    let viewer = match state.viewer_id.as_deref() {
        Some(viewer) => viewer,
        None => return Affordance::None,
    };
    if let Some(card_ids) = &state.local.confirm_special_play {
        return Affordance::ConfirmSpecialPlay {
            card_ids: card_ids.clone(),
        };
    }

    let game = &state.game;
    let selected = state.local.selected_list();
    let ready = state.viewer_is_ready();

    if game.status == Phase::DrawKitty && selected.is_empty() {
        return Affordance::ToggleReady { ready: !ready };
    }

    if matches!(game.status, Phase::Draw | Phase::DrawKitty) && !selected.is_empty() && !ready {
        let mut card_ids = selected;
        // The viewer's fronted declaration rides along so an overturned
        // declare can be strengthened rather than replaced.
        if let Some(last) = game.declared_cards.last() {
            if last.player_id == viewer {
                card_ids.extend(last.card_ids.iter().copied());
            }
        }
        return Affordance::Declare { card_ids };
    }

    if !state.viewer_is_current() {
        return Affordance::None;
    }

    if game.status == Phase::MakeKitty
        && game.kitty.is_empty()
        && selected.len() == game.kitty_size
    {
        return Affordance::MakeKitty { card_ids: selected };
    }

    if game.status == Phase::Play && !selected.is_empty() {
        return Affordance::Play { card_ids: selected };
    }

    Affordance::None
}

/// Outbound message for an affordance. Confirming a special play re-submits
/// the same cards with the confirmation flag set.
pub fn into_intent(affordance: &Affordance) -> Option<Intent> {
    match affordance {
        Affordance::None => None,
        Affordance::ToggleReady { ready } => Some(Intent::ReadyForPlay { ready: *ready }),
        Affordance::Declare { card_ids } => Some(Intent::Declare {
            card_ids: card_ids.clone(),
        }),
        Affordance::MakeKitty { card_ids } => Some(Intent::MakeKitty {
            card_ids: card_ids.clone(),
        }),
        Affordance::Play { card_ids } => Some(Intent::Play {
            card_ids: card_ids.clone(),
            confirm_special_play: false,
        }),
        Affordance::ConfirmSpecialPlay { card_ids } => Some(Intent::Play {
            card_ids: card_ids.clone(),
            confirm_special_play: true,
        }),
    }
}
