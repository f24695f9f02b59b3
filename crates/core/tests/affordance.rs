use tractor_core::{
    into_intent, resolve, Affordance, Event, GamePatch, GameView, Intent, Phase, Play, ViewStore,
};

const NOW: u64 = 50_000;

fn store_in(status: Phase, viewer: &str, current: Option<usize>) -> ViewStore {
    let mut game = GameView::new();
    game.player_ids = vec!["a".into(), "b".into(), "c".into(), "d".into()];
    game.status = status;
    game.current_player_index = current;
    let mut store = ViewStore::new();
    store.set_viewer_id(viewer.to_string());
    store.apply(Event::RoomState(game), NOW);
    store
}

#[test]
fn play_with_selection_resolves_to_submit_play() {
    let mut store = store_in(Phase::Play, "b", Some(1));
    store.toggle_card_selection(7);
    let affordance = resolve(store.state());
    assert_eq!(
        affordance,
        Affordance::Play {
            card_ids: vec![7]
        }
    );
    assert_eq!(
        into_intent(&affordance),
        Some(Intent::Play {
            card_ids: vec![7],
            confirm_special_play: false,
        })
    );
}

#[test]
fn play_without_the_turn_resolves_to_nothing() {
    let mut store = store_in(Phase::Play, "b", Some(2));
    store.toggle_card_selection(7);
    assert_eq!(resolve(store.state()), Affordance::None);
}

#[test]
fn play_with_empty_selection_resolves_to_nothing() {
    let store = store_in(Phase::Play, "b", Some(1));
    assert_eq!(resolve(store.state()), Affordance::None);
}

#[test]
fn make_kitty_needs_the_exact_kitty_size() {
    let mut store = store_in(Phase::MakeKitty, "a", Some(0));
    for card_id in 0..7 {
        store.toggle_card_selection(card_id);
    }
    // Seven of eight selected: disabled.
    assert_eq!(resolve(store.state()), Affordance::None);

    store.toggle_card_selection(7);
    assert_eq!(
        resolve(store.state()),
        Affordance::MakeKitty {
            card_ids: (0..8).collect()
        }
    );
}

#[test]
fn make_kitty_is_gated_on_an_empty_kitty() {
    let mut store = store_in(Phase::MakeKitty, "a", Some(0));
    store.apply(
        Event::MakeKitty(GamePatch {
            kitty: Some(vec![90, 91, 92, 93, 94, 95, 96, 97]),
            ..GamePatch::default()
        }),
        NOW,
    );
    for card_id in 0..8 {
        store.toggle_card_selection(card_id);
    }
    assert_eq!(resolve(store.state()), Affordance::None);
}

#[test]
fn draw_kitty_with_empty_selection_toggles_ready() {
    let store = store_in(Phase::DrawKitty, "c", None);
    assert_eq!(
        resolve(store.state()),
        Affordance::ToggleReady { ready: true }
    );
}

#[test]
fn draw_kitty_when_already_ready_toggles_back() {
    let mut store = store_in(Phase::DrawKitty, "c", None);
    store.apply(
        Event::ReadyForPlay(GamePatch {
            player_ready_for_play: Some([("c".to_string(), true)].into_iter().collect()),
            ..GamePatch::default()
        }),
        NOW,
    );
    assert_eq!(
        resolve(store.state()),
        Affordance::ToggleReady { ready: false }
    );
}

#[test]
fn declaring_includes_the_fronted_batch() {
    let mut store = store_in(Phase::Draw, "a", None);
    store.apply(
        Event::Declare(GamePatch {
            declared_cards: Some(vec![Play {
                player_id: "a".into(),
                card_ids: vec![11],
            }]),
            ..GamePatch::default()
        }),
        NOW,
    );
    store.toggle_card_selection(12);
    assert_eq!(
        resolve(store.state()),
        Affordance::Declare {
            card_ids: vec![12, 11]
        }
    );
}

#[test]
fn another_players_declaration_does_not_ride_along() {
    let mut store = store_in(Phase::Draw, "a", None);
    store.apply(
        Event::Declare(GamePatch {
            declared_cards: Some(vec![Play {
                player_id: "b".into(),
                card_ids: vec![11],
            }]),
            ..GamePatch::default()
        }),
        NOW,
    );
    store.toggle_card_selection(12);
    assert_eq!(
        resolve(store.state()),
        Affordance::Declare {
            card_ids: vec![12]
        }
    );
}

#[test]
fn ready_players_cannot_declare() {
    let mut store = store_in(Phase::DrawKitty, "c", None);
    store.apply(
        Event::ReadyForPlay(GamePatch {
            player_ready_for_play: Some([("c".to_string(), true)].into_iter().collect()),
            ..GamePatch::default()
        }),
        NOW,
    );
    store.toggle_card_selection(5);
    assert_eq!(resolve(store.state()), Affordance::None);
}

#[test]
fn pending_confirmation_suspends_the_primary_action() {
    let mut store = store_in(Phase::Play, "b", Some(1));
    store.toggle_card_selection(7);
    store.apply(
        Event::ConfirmSpecialPlay(tractor_core::ConfirmSpecialPlayPayload {
            card_ids: vec![7, 8],
        }),
        NOW,
    );
    let affordance = resolve(store.state());
    assert_eq!(
        affordance,
        Affordance::ConfirmSpecialPlay {
            card_ids: vec![7, 8]
        }
    );
    // Confirming re-submits the same play with the flag set.
    assert_eq!(
        into_intent(&affordance),
        Some(Intent::Play {
            card_ids: vec![7, 8],
            confirm_special_play: true,
        })
    );
    // Canceling discards only the pending marker.
    store.cancel_special_play();
    assert_eq!(
        resolve(store.state()),
        Affordance::Play {
            card_ids: vec![7]
        }
    );
}

#[test]
fn no_viewer_means_no_affordance() {
    let mut game = GameView::new();
    game.player_ids = vec!["a".into()];
    game.status = Phase::Play;
    game.current_player_index = Some(0);
    let mut store = ViewStore::new();
    store.apply(Event::RoomState(game), NOW);
    store.toggle_card_selection(1);
    assert_eq!(resolve(store.state()), Affordance::None);
}
