//! Session configuration consumed once at simulation start.

use serde::{Deserialize, Serialize};

use super::vec3::Vec3;

/// Initial parameters for a simulation session.
///
/// All values are plain floats with no cross-field validation; positivity of
/// `mass`, `drag_coefficient`, and `surface_area` is a caller precondition
/// (a non-positive mass makes the integration numerically undefined).
///
/// Only the horizontal components of `wind` are meaningful.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Jumper mass (kg, > 0)
    pub mass: f32,
    /// Freefall drag coefficient (> 0)
    pub drag_coefficient: f32,
    /// Freefall surface area (m², > 0)
    pub surface_area: f32,
    /// Steady wind (m/s), horizontal components only
    pub wind: Vec3,
    /// Aircraft velocity (m/s), held constant for the session
    pub aircraft_velocity: Vec3,
    /// Aircraft spawn point; Y is the exit altitude (m)
    pub aircraft_position: Vec3,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            mass: 80.0,
            drag_coefficient: 0.5,
            surface_area: 1.0,
            wind: Vec3::new(15.0, 0.0, 10.0),
            aircraft_velocity: Vec3::new(150.0, 0.0, 0.0),
            aircraft_position: Vec3::new(-2400.0, 3000.0, 0.0),
        }
    }
}
