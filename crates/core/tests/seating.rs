use std::collections::BTreeSet;
use tractor_core::{
    card_offsets, fan_offsets, point_in_front_of, position_for, upright_angle, LabelLayout,
    PlayerId, SeatAnchor, SeatingError, SELECTED_CARD_LIFT, TABLE_HEIGHT, TABLE_WIDTH,
};

fn ring(names: &[&str]) -> Vec<PlayerId> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn viewer_is_always_unrotated() {
    for n in 2..=6 {
        let ids: Vec<PlayerId> = (0..n).map(|i| format!("p{i}")).collect();
        for viewer in &ids {
            let anchor = position_for(&ids, viewer, Some(viewer.as_str()), 0.6).expect("anchor");
            assert_eq!(anchor.angle, 0.0, "viewer {viewer} of {n}");
            // Bottom of the table, on the vertical centerline.
            assert!((anchor.x - TABLE_WIDTH / 2.0).abs() < 1e-9);
            assert!(anchor.y > TABLE_HEIGHT / 2.0);
        }
    }
}

#[test]
fn angles_are_uniformly_spaced() {
    let ids = ring(&["a", "b", "c", "d", "e"]);
    let mut angles: Vec<f64> = ids
        .iter()
        .map(|id| {
            position_for(&ids, id, Some("a"), 1.0)
                .expect("anchor")
                .angle
                .rem_euclid(360.0)
        })
        .collect();
    angles.sort_by(|x, y| x.partial_cmp(y).unwrap());
    for (k, angle) in angles.iter().enumerate() {
        assert!((angle - 360.0 * k as f64 / 5.0).abs() < 1e-9);
    }
}

#[test]
fn seat_opposite_the_viewer_is_at_180_degrees() {
    let ids = ring(&["A", "B", "C", "D"]);
    let anchor = position_for(&ids, "A", Some("C"), 1.0).expect("anchor");
    assert_eq!(anchor.angle, 180.0);
    // Opposite seat sits at the top of the table.
    assert!((anchor.x - TABLE_WIDTH / 2.0).abs() < 1e-9);
    assert!(anchor.y < TABLE_HEIGHT / 2.0);
}

#[test]
fn unset_viewer_falls_back_to_seat_zero() {
    let ids = ring(&["A", "B", "C"]);
    let fallback = position_for(&ids, "B", None, 0.5).expect("anchor");
    let explicit = position_for(&ids, "B", Some("A"), 0.5).expect("anchor");
    assert_eq!(fallback, explicit);
}

#[test]
fn closeness_is_clamped_not_rejected() {
    let ids = ring(&["A", "B"]);
    let over = position_for(&ids, "B", Some("A"), 3.5).expect("anchor");
    let rim = position_for(&ids, "B", Some("A"), 1.0).expect("anchor");
    assert_eq!(over, rim);
    let under = position_for(&ids, "B", Some("A"), -1.0).expect("anchor");
    let center = position_for(&ids, "B", Some("A"), 0.0).expect("anchor");
    assert_eq!(under, center);
    assert!((center.x - TABLE_WIDTH / 2.0).abs() < 1e-9);
    assert!((center.y - TABLE_HEIGHT / 2.0).abs() < 1e-9);
}

#[test]
fn bad_inputs_fail_with_typed_errors() {
    let empty: Vec<PlayerId> = Vec::new();
    assert_eq!(
        position_for(&empty, "A", None, 0.5),
        Err(SeatingError::EmptyTable)
    );
    let ids = ring(&["A", "B"]);
    assert_eq!(
        position_for(&ids, "Z", Some("A"), 0.5),
        Err(SeatingError::UnknownSeat("Z".to_string()))
    );
    assert_eq!(
        position_for(&ids, "A", Some("Z"), 0.5),
        Err(SeatingError::UnknownSeat("Z".to_string()))
    );
}

#[test]
fn point_in_front_rotates_with_the_seat() {
    let ids = ring(&["A", "B", "C", "D"]);
    // Viewer's own seat: no rotation, a lift goes straight up the screen.
    let own = position_for(&ids, "C", Some("C"), 0.6).expect("anchor");
    let (x, y) = point_in_front_of(&ids, "C", Some("C"), 0.6, (0.0, -20.0)).expect("point");
    assert!((x - own.x).abs() < 1e-9);
    assert!((y - (own.y - 20.0)).abs() < 1e-9);
    // Opposite seat is rotated 180: the same local lift points down.
    let opposite = position_for(&ids, "A", Some("C"), 0.6).expect("anchor");
    let (x, y) = point_in_front_of(&ids, "A", Some("C"), 0.6, (0.0, -20.0)).expect("point");
    assert!((x - opposite.x).abs() < 1e-6);
    assert!((y - (opposite.y + 20.0)).abs() < 1e-6);
}

#[test]
fn text_never_renders_upside_down() {
    assert_eq!(upright_angle(0.0), 0.0);
    assert_eq!(upright_angle(90.0), 90.0);
    assert_eq!(upright_angle(180.0), 0.0);
    assert_eq!(upright_angle(135.0), -45.0);
    assert_eq!(upright_angle(269.0), 89.0);
    assert_eq!(upright_angle(270.0), 270.0);
    assert_eq!(upright_angle(-90.0), 270.0);
    for deg in -720..720 {
        let adjusted = upright_angle(deg as f64).rem_euclid(360.0);
        assert!(
            !(adjusted > 90.0 && adjusted < 270.0),
            "angle {deg} adjusted to {adjusted}"
        );
    }
}

#[test]
fn label_measures_exactly_once_then_places() {
    let anchor = SeatAnchor {
        x: 600.0,
        y: 40.0,
        angle: 180.0,
    };
    let mut layout = LabelLayout::new(anchor);
    assert!(layout.needs_measure());
    assert_eq!(layout.placement().shift_x, 0.0);
    assert_eq!(layout.placement().angle, 0.0);

    assert!(layout.record_width(120.0));
    assert!(!layout.needs_measure());
    assert_eq!(layout.placement().shift_x, -60.0);

    // The measurement hook is retired; a second report changes nothing.
    assert!(!layout.record_width(999.0));
    assert_eq!(layout.placement().shift_x, -60.0);
}

#[test]
fn fan_is_centered() {
    assert_eq!(fan_offsets(3, 15.0), vec![-15.0, 0.0, 15.0]);
    assert_eq!(fan_offsets(1, 15.0), vec![0.0]);
    assert_eq!(fan_offsets(0, 15.0), Vec::<f64>::new());
    let offsets = fan_offsets(4, 9.0);
    assert_eq!(offsets.iter().sum::<f64>(), 0.0);
    assert_eq!(offsets[1] - offsets[0], 9.0);
}

#[test]
fn selected_cards_lift_before_rotation() {
    let selected: BTreeSet<u32> = [8].into_iter().collect();
    let offsets = card_offsets(&[7, 8, 9], 15.0, &selected);
    assert_eq!(offsets[0], (-15.0, 0.0));
    assert_eq!(offsets[1], (0.0, -SELECTED_CARD_LIFT));
    assert_eq!(offsets[2], (15.0, 0.0));
}
