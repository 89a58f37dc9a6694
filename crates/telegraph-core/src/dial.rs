//! Dial geometry: pointer coordinates to lever angle to engine order.
//!
//! Angles are degrees measured clockwise from north (straight up on
//! screen), matching how the lever is rotated when drawn. Screen space has
//! y growing downward.

use crate::constants::{FULL_TURN_DEG, MAX_ANGLE_DEG, MIN_ANGLE_DEG, QUARTER_TURN_DEG};
use crate::position::TelegraphPosition;
use glam::Vec2;

/// On-screen bounding box of the dial, in client pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DialRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl DialRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// False for zero-sized or non-finite boxes, e.g. an element that is
    /// detached or not laid out yet.
    #[inline]
    pub fn is_measurable(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0
    }
}

/// Result of sampling the dial at one pointer location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DialReading {
    pub angle: f32,
    pub position: TelegraphPosition,
}

#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    if angle > 180.0 {
        angle - FULL_TURN_DEG
    } else if angle <= -180.0 {
        angle + FULL_TURN_DEG
    } else {
        angle
    }
}

/// Keep the lever between its stops.
///
/// Angles in the dead arc below full astern go to whichever stop is closer
/// going around the dial, so dragging past the bottom lands on "finished
/// with engines" from one side and "full astern" from the other.
pub fn clamp_angle(angle: f32) -> f32 {
    let angle = normalize_angle(angle);
    if (MIN_ANGLE_DEG..=MAX_ANGLE_DEG).contains(&angle) {
        return angle;
    }
    let to_min = (MIN_ANGLE_DEG - angle).rem_euclid(FULL_TURN_DEG);
    let to_max = (angle - MAX_ANGLE_DEG).rem_euclid(FULL_TURN_DEG);
    if to_max < to_min {
        MAX_ANGLE_DEG
    } else {
        MIN_ANGLE_DEG
    }
}

/// Raw lever angle for a pointer, normalized but not clamped.
///
/// Returns `None` when `rect` cannot be measured; callers skip the sample.
#[inline]
pub fn pointer_angle(pointer: Vec2, rect: &DialRect) -> Option<f32> {
    if !rect.is_measurable() || !pointer.is_finite() {
        return None;
    }
    let d = pointer - rect.center();
    let raw = d.y.atan2(d.x).to_degrees() + QUARTER_TURN_DEG;
    Some(normalize_angle(raw))
}

/// Nearest engine order for a lever angle. Earlier entries win exact ties.
pub fn resolve_position(angle: f32) -> TelegraphPosition {
    let mut best = TelegraphPosition::ALL[0];
    let mut best_diff = (angle - best.angle()).abs();
    for p in TelegraphPosition::ALL.iter().skip(1) {
        let diff = (angle - p.angle()).abs();
        if diff < best_diff {
            best_diff = diff;
            best = *p;
        }
    }
    best
}

pub fn read_dial(pointer: Vec2, rect: &DialRect) -> Option<DialReading> {
    let angle = clamp_angle(pointer_angle(pointer, rect)?);
    Some(DialReading {
        angle,
        position: resolve_position(angle),
    })
}

/// Offset from the dial center of the point `radius` away at `angle`.
#[inline]
pub fn label_offset(angle: f32, radius: f32) -> Vec2 {
    let rad = angle.to_radians();
    Vec2::new(rad.sin() * radius, -rad.cos() * radius)
}
