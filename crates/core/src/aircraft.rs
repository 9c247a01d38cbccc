//! Constant-velocity jump aircraft.

use serde::{Deserialize, Serialize};

use crate::core_types::{SimConfig, Vec3};

/// The aircraft the jumper exits from.
///
/// Advances on a straight line every tick, independent of the jumper. Its
/// position and velocity are sampled exactly once, at the jump command, as
/// the jumper's initial condition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aircraft {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Aircraft {
    pub fn new(position: Vec3, velocity: Vec3) -> Self {
        Aircraft { position, velocity }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Aircraft::new(config.aircraft_position, config.aircraft_velocity)
    }

    /// Advance one tick of straight-line flight.
    pub fn update(&mut self, dt: f32) {
        self.position += self.velocity * dt;
    }
}
