//! Ground-contact classification and the scripted post-landing sequence.
//!
//! A landing is classified exactly once at ground contact. Hard landings
//! terminate physics on the spot; soft landings enter a three-phase
//! run/walk/stop deceleration that is scheduled on the sequencer's own
//! simulation-time clock, independent of the force model, so the sequence
//! is deterministic across frame rates.

use tracing::info;

use crate::core_types::Vec3;

/// Sink rate below which a canopy landing is still classified hard (m/s)
pub const HARD_LANDING_SINK_RATE: f32 = -2.0;

/// Altitude nudge applied on a hard landing so the body is not left
/// intersecting the ground (m)
pub const HARD_LANDING_ALTITUDE_NUDGE: f32 = 2.0;

/// Run-out speed right after touchdown (m/s)
const RUN_SPEED: f32 = 5.0;

/// Run phase duration (s)
const RUN_DURATION: f32 = 2.0;

/// Walk speed after the run-out (m/s)
const WALK_SPEED: f32 = 1.5;

/// Walk phase duration (s)
const WALK_DURATION: f32 = 3.0;

/// Below this horizontal-speed-squared the landing heading is undefined
/// and the fixed fallback direction is used
const MIN_HEADING_SPEED_SQ: f32 = 0.01;

/// Outcome of ground contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingKind {
    /// No canopy, or sinking faster than the survivable rate
    Hard,
    /// Canopy out and descent arrested; runs out the remaining speed
    Soft,
}

/// Animation the host should play, emitted exactly once per transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationCue {
    /// Terminal failure on a hard landing
    Death,
    /// Touchdown run-out
    Run,
    /// Deceleration to a walk
    Walk,
    /// At rest
    Wave,
}

/// Classify ground contact from the state of the previous tick.
pub fn classify_landing(parachute_deployed: bool, vertical_speed: f32) -> LandingKind {
    if !parachute_deployed || vertical_speed < HARD_LANDING_SINK_RATE {
        LandingKind::Hard
    } else {
        LandingKind::Soft
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LandingPhase {
    Run,
    Walk,
    Stopped,
}

/// Scripted three-phase deceleration after a soft landing.
///
/// The heading is captured once from the pre-landing horizontal velocity
/// and every phase moves straight along it. Phase transitions are
/// time-scheduled against the elapsed time accumulated here, and each
/// fires exactly once.
#[derive(Debug, Clone)]
pub struct LandingSequencer {
    heading: Vec3,
    elapsed: f32,
    phase: LandingPhase,
}

impl LandingSequencer {
    /// Capture the landing heading and start the run phase.
    pub fn new(pre_landing_velocity: Vec3) -> Self {
        let horizontal = Vec3::new(pre_landing_velocity.x, 0.0, pre_landing_velocity.z);
        let heading = if horizontal.norm_squared() < MIN_HEADING_SPEED_SQ {
            // Landed with no horizontal speed; face a fixed direction
            Vec3::new(0.0, 0.0, 1.0)
        } else {
            horizontal.normalize()
        };
        info!(heading = ?heading, "starting landing sequence");
        LandingSequencer {
            heading,
            elapsed: 0.0,
            phase: LandingPhase::Run,
        }
    }

    /// Cue for the phase the sequencer starts in.
    pub fn initial_cue() -> AnimationCue {
        AnimationCue::Run
    }

    /// Normalized direction of travel captured at touchdown.
    pub fn heading(&self) -> Vec3 {
        self.heading
    }

    /// Whether the sequence has run to completion.
    pub fn finished(&self) -> bool {
        self.phase == LandingPhase::Stopped
    }

    /// Sequencer-dictated velocity for the current phase.
    pub fn velocity(&self) -> Vec3 {
        match self.phase {
            LandingPhase::Run => self.heading * RUN_SPEED,
            LandingPhase::Walk => self.heading * WALK_SPEED,
            LandingPhase::Stopped => Vec3::zeros(),
        }
    }

    /// Advance the sequence clock, returning the cue for a phase change.
    pub fn advance(&mut self, dt: f32) -> Option<AnimationCue> {
        if self.phase == LandingPhase::Stopped {
            return None;
        }
        self.elapsed += dt;
        match self.phase {
            LandingPhase::Run if self.elapsed >= RUN_DURATION => {
                self.phase = LandingPhase::Walk;
                Some(AnimationCue::Walk)
            }
            LandingPhase::Walk if self.elapsed >= RUN_DURATION + WALK_DURATION => {
                self.phase = LandingPhase::Stopped;
                Some(AnimationCue::Wave)
            }
            _ => None,
        }
    }
}
