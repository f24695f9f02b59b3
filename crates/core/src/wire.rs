use crate::events::{Event, KNOWN_TAGS};
use crate::intents::Intent;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("malformed envelope: {0}")]
    Malformed(#[from] serde_json::Error),
    /// A well-formed single-key envelope with a tag outside the catalogue.
    /// Callers log and drop it; future event kinds must never crash us.
    #[error("unknown event tag: {0}")]
    UnknownTag(String),
}

/// Decodes one inbound envelope, `{ "<TAG>": { ...payload } }`.
pub fn decode_event(raw: &str) -> Result<Event, WireError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    let tag = value.as_object().and_then(|object| {
        if object.len() == 1 {
            object.keys().next().cloned()
        } else {
            None
        }
    });
    match serde_json::from_value::<Event>(value) {
        Ok(event) => Ok(event),
        Err(err) => {
            if let Some(tag) = tag {
                if !KNOWN_TAGS.contains(&tag.as_str()) {
                    tracing::warn!(%tag, "ignoring unknown event tag");
                    return Err(WireError::UnknownTag(tag));
                }
            }
            Err(WireError::Malformed(err))
        }
    }
}

/// Encodes an outbound intent envelope, symmetric to the inbound shape.
pub fn encode_intent(intent: &Intent) -> Result<String, serde_json::Error> {
    serde_json::to_string(intent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::GamePatch;
    use crate::state::Phase;

    #[test]
    fn decodes_a_tagged_event() {
        let raw = r#"{"DRAW":{"status":"DRAW","currentPlayerIndex":1}}"#;
        let event = decode_event(raw).expect("decode");
        match event {
            Event::Draw(patch) => {
                assert_eq!(patch.status, Some(Phase::Draw));
                assert_eq!(patch.current_player_index, Some(1));
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn unknown_tag_is_diagnosed_not_fatal() {
        let err = decode_event(r#"{"SHINY_NEW_THING":{"x":1}}"#).unwrap_err();
        match err {
            WireError::UnknownTag(tag) => assert_eq!(tag, "SHINY_NEW_THING"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn malformed_body_is_malformed() {
        assert!(matches!(
            decode_event("not json at all"),
            Err(WireError::Malformed(_))
        ));
        // Known tag, wrong payload shape.
        assert!(matches!(
            decode_event(r#"{"INVALID_ACTION":{"message":42}}"#),
            Err(WireError::Malformed(_))
        ));
    }

    #[test]
    fn event_envelopes_round_trip() {
        let event = Event::StartRound(GamePatch {
            status: Some(Phase::Draw),
            kitty_size: Some(8),
            ..GamePatch::default()
        });
        let raw = serde_json::to_string(&event).expect("encode");
        assert!(raw.starts_with(r#"{"START_ROUND":"#));
        assert_eq!(decode_event(&raw).expect("decode"), event);
    }

    #[test]
    fn play_intent_omits_unset_confirmation_flag() {
        let plain = encode_intent(&Intent::Play {
            card_ids: vec![7],
            confirm_special_play: false,
        })
        .expect("encode");
        assert_eq!(plain, r#"{"PLAY":{"cardIds":[7]}}"#);

        let confirmed = encode_intent(&Intent::Play {
            card_ids: vec![7],
            confirm_special_play: true,
        })
        .expect("encode");
        assert!(confirmed.contains(r#""confirmSpecialPlay":true"#));
    }

    #[test]
    fn ready_intent_wire_shape() {
        let raw = encode_intent(&Intent::ReadyForPlay { ready: true }).expect("encode");
        assert_eq!(raw, r#"{"READY_FOR_PLAY":{"ready":true}}"#);
    }
}
