//! Pluggable time-varying scalar fields.

use glam::Vec2;

/// A scalar field over the plane, animated by a time parameter.
///
/// The contouring pipeline assumes nothing about the field's shape beyond the
/// samples being finite.
pub trait ScalarField {
    /// Samples the field at `position` and `time`.
    fn sample(&self, position: Vec2, time: f32) -> f32;
}

impl<F: Fn(Vec2, f32) -> f32> ScalarField for F {
    fn sample(&self, position: Vec2, time: f32) -> f32 {
        self(position, time)
    }
}

/// The reference animated field: a sum of sinusoids of position and time,
/// `sin(x + 3t) + cos(y + t)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TravelingWaves;

impl ScalarField for TravelingWaves {
    fn sample(&self, position: Vec2, time: f32) -> f32 {
        (position.x + 3.0 * time).sin() + (position.y + time).cos()
    }
}
