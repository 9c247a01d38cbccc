//! Freefall body postures and their aerodynamic surface areas.

use serde::{Deserialize, Serialize};

/// Discrete body orientation during freefall.
///
/// Each posture maps to a calibrated effective surface area, which is the
/// only aerodynamic parameter that changes between postures (the drag
/// coefficient stays whatever the jumper was configured with). Postures are
/// only meaningful before canopy deployment; once the parachute is out the
/// jumper is held in [`Posture::StandUp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Posture {
    /// Classic stable arch, largest area, slowest fall
    BellyToEarth,
    /// Upright, feet first
    StandUp,
    /// Head-first dive, smallest area, fastest fall
    HeadDown,
    /// Horizontal glide posture with forward drive
    Tracking,
    /// Seated, knees up
    SitFly,
    /// Back to earth
    Backfly,
}

impl Posture {
    /// Effective surface area presented to the airflow (m²).
    ///
    /// Fixed calibration table; the values are the drag profile per body
    /// orientation, not a physical cross-section measurement.
    pub fn surface_area(self) -> f32 {
        match self {
            Posture::BellyToEarth => 1.2,
            Posture::StandUp => 0.6,
            Posture::HeadDown => 0.5,
            Posture::Tracking => 0.8,
            Posture::SitFly => 0.7,
            Posture::Backfly => 0.9,
        }
    }
}

impl Default for Posture {
    /// Exit posture before any command is given.
    fn default() -> Self {
        Posture::HeadDown
    }
}
