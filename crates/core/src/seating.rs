use crate::cards::{CardId, PlayerId};
use std::collections::BTreeSet;
use std::f64::consts::TAU;
use thiserror::Error;

pub const TABLE_WIDTH: f64 = 1200.0;
pub const TABLE_HEIGHT: f64 = 800.0;

pub const CARD_WIDTH: f64 = 71.0;
pub const CARD_HEIGHT: f64 = 96.0;

/// Horizontal squash of the seat ellipse relative to the table width.
pub const TABLE_ECCENTRICITY: f64 = 0.9;

pub const SELECTED_CARD_LIFT: f64 = 20.0;
pub const OWN_HAND_SPACING: f64 = 15.0;
pub const OTHER_HAND_SPACING: f64 = 9.0;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SeatingError {
    #[error("seat ring is empty")]
    EmptyTable,
    #[error("unknown seat: {0}")]
    UnknownSeat(PlayerId),
}

/// Screen anchor of a seat (or a point in front of it): position plus the
/// rotation, in degrees, that makes content face the table center. The
/// viewer's own seat is always at angle 0, at the bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeatAnchor {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

fn seat_index(ring: &[PlayerId], player_id: &str) -> Result<usize, SeatingError> {
    ring.iter()
        .position(|id| id == player_id)
        .ok_or_else(|| SeatingError::UnknownSeat(player_id.to_string()))
}

/// Anchor for `player_id` as seen by `viewer_id`. `closeness` runs from 0
/// (table center) to 1 (the seat's rim) and is clamped, not rejected. With
/// no viewer assigned yet, seat 0 is the reference.
pub fn position_for(
    ring: &[PlayerId],
    player_id: &str,
    viewer_id: Option<&str>,
    closeness: f64,
) -> Result<SeatAnchor, SeatingError> {
    if ring.is_empty() {
        return Err(SeatingError::EmptyTable);
    }
    let player_index = seat_index(ring, player_id)?;
    let viewer_index = match viewer_id {
        Some(viewer) => seat_index(ring, viewer)?,
        None => 0,
    };
    let closeness = closeness.clamp(0.0, 1.0);
    let n = ring.len() as f64;
    let theta = (player_index as f64 - viewer_index as f64) * TAU / n;
    Ok(SeatAnchor {
        x: TABLE_WIDTH * (0.5 + theta.sin() * closeness / 2.0 * TABLE_ECCENTRICITY),
        y: TABLE_HEIGHT * (0.5 + theta.cos() * closeness / 2.0),
        angle: (viewer_index as f64 - player_index as f64) * 360.0 / n,
    })
}

/// Rotates a local offset (x right, y down, in front of the seat) by the
/// seat's angle and adds it to the anchor. Used to place cards within a
/// hand or a trophy above a trick.
pub fn point_in_front_of(
    ring: &[PlayerId],
    player_id: &str,
    viewer_id: Option<&str>,
    closeness: f64,
    local: (f64, f64),
) -> Result<(f64, f64), SeatingError> {
    let anchor = position_for(ring, player_id, viewer_id, closeness)?;
    let (dx, dy) = rotate(local, anchor.angle);
    Ok((anchor.x + dx, anchor.y + dy))
}

fn rotate((dx, dy): (f64, f64), angle_deg: f64) -> (f64, f64) {
    let radians = angle_deg.to_radians();
    let (sin, cos) = radians.sin_cos();
    (dx * cos - dy * sin, dx * sin + dy * cos)
}

/// Angle adjusted so text reads upright: anything in (90, 270) flips by
/// 180.
pub fn upright_angle(angle_deg: f64) -> f64 {
    let normalized = angle_deg.rem_euclid(360.0);
    if normalized > 90.0 && normalized < 270.0 {
        normalized - 180.0
    } else {
        normalized
    }
}

/// Placement of an upright label at a seat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelPlacement {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    /// Centering shift along the local x axis, 0 until the width is known.
    pub shift_x: f64,
}

/// Two-pass measure-then-place protocol for rotated labels. The first pass
/// renders at the upright angle with no centering shift so the rendering
/// layer can measure the label; `record_width` then fixes the shift and
/// retires the measurement hook, so there is exactly one extra pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    anchor: SeatAnchor,
    measured_width: Option<f64>,
}

impl LabelLayout {
    pub fn new(anchor: SeatAnchor) -> Self {
        Self {
            anchor: SeatAnchor {
                angle: upright_angle(anchor.angle),
                ..anchor
            },
            measured_width: None,
        }
    }

    pub fn needs_measure(&self) -> bool {
        self.measured_width.is_none()
    }

    /// Returns true the first time, when the width is taken; afterwards the
    /// hook is retired and the call is a no-op.
    pub fn record_width(&mut self, width: f64) -> bool {
        if self.measured_width.is_some() {
            return false;
        }
        self.measured_width = Some(width);
        true
    }

    pub fn placement(&self) -> LabelPlacement {
        LabelPlacement {
            x: self.anchor.x,
            y: self.anchor.y,
            angle: self.anchor.angle,
            shift_x: self.measured_width.map(|w| -w / 2.0).unwrap_or(0.0),
        }
    }
}

/// Local x offsets for a fan of `count` cards with `spacing` between them,
/// centered on the seat axis.
pub fn fan_offsets(count: usize, spacing: f64) -> Vec<f64> {
    (0..count)
        .map(|j| -spacing * (count as f64 - 1.0) / 2.0 + spacing * j as f64)
        .collect()
}

/// Local (x, y) offsets for each card in a hand; selected cards lift along
/// the local y axis before rotation.
pub fn card_offsets(
    card_ids: &[CardId],
    spacing: f64,
    selected: &BTreeSet<CardId>,
) -> Vec<(f64, f64)> {
    fan_offsets(card_ids.len(), spacing)
        .into_iter()
        .zip(card_ids)
        .map(|(x, card_id)| {
            let y = if selected.contains(card_id) {
                -SELECTED_CARD_LIFT
            } else {
                0.0
            };
            (x, y)
        })
        .collect()
}
