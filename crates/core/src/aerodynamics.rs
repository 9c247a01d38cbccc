//! Drag force computation from apparent (relative-to-wind) velocity.

use crate::atmosphere::air_density;
use crate::core_types::Vec3;

/// Gravitational acceleration (m/s²)
pub const GRAVITY: f32 = 9.81;

/// Below this apparent-speed-squared the drag direction is undefined
/// and the force is treated as zero.
const MIN_APPARENT_SPEED_SQ: f32 = 1e-8;

/// Quadratic drag force opposing the apparent velocity.
///
/// `F = -0.5 · ρ(alt) · |v_rel|² · Cd · A · v̂_rel` with
/// `v_rel = velocity − wind`. Returns zero when the apparent velocity is
/// negligible (normalizing it would divide by zero).
pub fn drag_force(
    velocity: Vec3,
    wind: Vec3,
    altitude: f32,
    drag_coefficient: f32,
    surface_area: f32,
) -> Vec3 {
    let apparent = velocity - wind;
    let speed_sq = apparent.norm_squared();
    if speed_sq < MIN_APPARENT_SPEED_SQ {
        return Vec3::zeros();
    }

    let magnitude = 0.5 * air_density(altitude) * speed_sq * drag_coefficient * surface_area;
    -apparent.normalize() * magnitude
}

/// Weight force for the given mass, straight down the world Y axis.
pub fn gravity_force(mass: f32) -> Vec3 {
    Vec3::new(0.0, -mass * GRAVITY, 0.0)
}
