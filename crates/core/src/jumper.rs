//! Jumper state machine and per-tick integration step.
//!
//! Owns all mutable physics state for the session's single jumper and is
//! the only place that advances it. Each tick combines the atmosphere
//! model, the aerodynamic profile, and (once deployed) the canopy
//! controller into a net force, then integrates with semi-implicit Euler.
//! Discrete commands arrive between ticks and either transition the
//! life-cycle phase or are silently ignored when the current phase makes
//! them meaningless.

use tracing::{debug, info};

use crate::aerodynamics::{drag_force, gravity_force};
use crate::aircraft::Aircraft;
use crate::canopy::{CanopyController, CANOPY_DRAG_COEFFICIENT, CANOPY_SURFACE_AREA};
use crate::core_types::{Posture, SimConfig, Vec3};
use crate::landing::{
    classify_landing, AnimationCue, LandingKind, LandingSequencer, HARD_LANDING_ALTITUDE_NUDGE,
};

/// Life-cycle phase of the jumper.
///
/// Invalid flag combinations of the ad hoc boolean kind (deployed but not
/// jumped, landed mid-freefall) are unrepresentable by construction; the
/// legacy-style flags are exposed as derived accessors on [`Jumper`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightPhase {
    /// In the aircraft, mirroring its position
    Aboard,
    /// Airborne under the freefall drag model
    Freefalling,
    /// Airborne under the canopy glide controller
    CanopyDeployed,
    /// On the ground; physics reduced to sequencer-dictated motion
    Landed {
        kind: LandingKind,
        /// Whether the canopy was out at ground contact
        canopy_deployed: bool,
    },
}

/// The simulation's single jumper.
#[derive(Debug, Clone)]
pub struct Jumper {
    mass: f32,
    drag_coefficient: f32,
    surface_area: f32,
    /// Snapshot restored on unflare
    default_drag_coefficient: f32,

    position: Vec3,
    velocity: Vec3,
    acceleration: Vec3,
    /// Steady wind; horizontal components are zeroed near the ground
    wind: Vec3,

    posture: Posture,
    phase: FlightPhase,
    canopy: CanopyController,
    landing: Option<LandingSequencer>,
    /// Latest unpolled animation cue
    pending_cue: Option<AnimationCue>,
}

impl Jumper {
    /// Create the jumper at the aircraft spawn point with zero velocity.
    pub fn new(config: &SimConfig) -> Self {
        Jumper {
            mass: config.mass,
            drag_coefficient: config.drag_coefficient,
            surface_area: config.surface_area,
            default_drag_coefficient: config.drag_coefficient,
            position: config.aircraft_position,
            velocity: Vec3::zeros(),
            acceleration: Vec3::zeros(),
            wind: config.wind,
            posture: Posture::default(),
            phase: FlightPhase::Aboard,
            canopy: CanopyController::default(),
            landing: None,
            pending_cue: None,
        }
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Exit the aircraft, capturing its position and velocity as the
    /// initial condition. Idempotent: a second call changes nothing.
    pub fn jump(&mut self, aircraft: &Aircraft) {
        if self.phase != FlightPhase::Aboard {
            debug!("jump ignored: already airborne");
            return;
        }
        self.position = aircraft.position;
        self.velocity = aircraft.velocity;
        self.phase = FlightPhase::Freefalling;
        info!(altitude = self.position.y, "jumped");
    }

    /// Open the canopy. Only valid mid-freefall; idempotent otherwise.
    pub fn deploy_parachute(&mut self) {
        if self.phase != FlightPhase::Freefalling {
            debug!("deploy ignored: not in freefall");
            return;
        }
        // Posture is frozen at stand-up for the rest of the flight
        self.posture = Posture::StandUp;
        self.drag_coefficient = CANOPY_DRAG_COEFFICIENT;
        self.default_drag_coefficient = CANOPY_DRAG_COEFFICIENT;
        self.surface_area = CANOPY_SURFACE_AREA;
        let fallback_yaw = self.canopy.heading_yaw();
        self.canopy.deploy(self.velocity, fallback_yaw);
        self.phase = FlightPhase::CanopyDeployed;
        info!(altitude = self.position.y, "parachute deployed");
    }

    /// Change freefall posture, updating the effective surface area.
    /// Rejected (logged, not fatal) once the canopy is out.
    pub fn set_posture(&mut self, posture: Posture) {
        if self.parachute_deployed() {
            debug!(?posture, "posture change ignored: canopy deployed");
            return;
        }
        self.posture = posture;
        self.surface_area = posture.surface_area();
    }

    /// Set the steering axis, clamped to [-1, 1]. Persists until cleared.
    pub fn set_steering_input(&mut self, axis: f32) {
        self.canopy.set_steering(axis);
    }

    /// Release the steering input.
    pub fn clear_steering(&mut self) {
        self.canopy.clear_steering();
    }

    /// Begin a flare. Valid only under canopy; idempotent.
    pub fn flare(&mut self) {
        if self.phase == FlightPhase::CanopyDeployed {
            self.canopy.flare();
        }
    }

    /// End a flare, restoring the drag coefficient snapshot. Idempotent.
    pub fn unflare(&mut self) {
        if self.phase == FlightPhase::CanopyDeployed && self.canopy.flaring() {
            self.canopy.unflare();
            self.drag_coefficient = self.default_drag_coefficient;
        }
    }

    /// Free-form tuning; takes effect on the next force computation.
    pub fn set_mass(&mut self, mass: f32) {
        self.mass = mass;
    }

    /// Free-form tuning; takes effect on the next force computation.
    pub fn set_drag_coefficient(&mut self, drag_coefficient: f32) {
        self.drag_coefficient = drag_coefficient;
    }

    /// Free-form tuning; takes effect on the next force computation.
    pub fn set_surface_area(&mut self, surface_area: f32) {
        self.surface_area = surface_area;
    }

    // ------------------------------------------------------------------
    // Per-tick update
    // ------------------------------------------------------------------

    /// While aboard, mirror the aircraft position.
    pub fn follow_aircraft(&mut self, aircraft: &Aircraft) {
        if self.phase == FlightPhase::Aboard {
            self.position = aircraft.position;
        }
    }

    /// Advance one timestep. No-op while aboard or for `dt <= 0`.
    ///
    /// The landing trigger and the near-ground wind zeroing run before the
    /// force computation, so the transition is detected with the previous
    /// tick's state.
    pub fn update_state(&mut self, dt: f32) {
        if dt <= 0.0 || self.phase == FlightPhase::Aboard {
            return;
        }

        if self.position.y <= 0.0 && !self.landed() {
            self.touch_down();
        }

        if self.landed() {
            if let Some(sequencer) = self.landing.as_mut() {
                if let Some(cue) = sequencer.advance(dt) {
                    self.pending_cue = Some(cue);
                }
                self.velocity = sequencer.velocity();
            }
            // Straight-line motion at the sequencer-dictated velocity;
            // no gravity or drag once landed
            self.position += self.velocity * dt;
            self.position.y = self.position.y.max(0.0);
            return;
        }

        // Still air near the ground
        if self.position.y <= 0.0 {
            self.wind.x = 0.0;
            self.wind.z = 0.0;
        }

        if self.phase == FlightPhase::CanopyDeployed {
            self.canopy.integrate_heading(dt);
        }

        let force = self.net_force();
        self.acceleration = force / self.mass;
        self.velocity += self.acceleration * dt;
        self.position += self.velocity * dt;

        if self.phase == FlightPhase::CanopyDeployed {
            self.canopy.update_attitude(dt);
        }
    }

    fn net_force(&self) -> Vec3 {
        let gravity = gravity_force(self.mass);
        let drag = drag_force(
            self.velocity,
            self.wind,
            self.position.y,
            self.drag_coefficient,
            self.surface_area,
        );
        if self.phase == FlightPhase::CanopyDeployed {
            gravity + self.canopy.control_force(self.mass, self.velocity, drag)
        } else {
            gravity + drag
        }
    }

    fn touch_down(&mut self) {
        let was_deployed = self.phase == FlightPhase::CanopyDeployed;
        let kind = classify_landing(was_deployed, self.velocity.y);

        self.acceleration = Vec3::zeros();
        self.drag_coefficient = 0.0;

        match kind {
            LandingKind::Hard => {
                info!(
                    vertical_speed = self.velocity.y,
                    canopy = was_deployed,
                    "hard landing"
                );
                self.position.y += HARD_LANDING_ALTITUDE_NUDGE;
                self.velocity = Vec3::zeros();
                self.pending_cue = Some(AnimationCue::Death);
            }
            LandingKind::Soft => {
                self.position.y = 0.0;
                let sequencer = LandingSequencer::new(self.velocity);
                self.velocity = sequencer.velocity();
                self.landing = Some(sequencer);
                self.pending_cue = Some(LandingSequencer::initial_cue());
            }
        }

        self.phase = FlightPhase::Landed {
            kind,
            canopy_deployed: was_deployed,
        };
    }

    // ------------------------------------------------------------------
    // Observable state
    // ------------------------------------------------------------------

    /// Take the latest unpolled animation cue, if any.
    pub fn take_animation_cue(&mut self) -> Option<AnimationCue> {
        self.pending_cue.take()
    }

    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn has_jumped(&self) -> bool {
        self.phase != FlightPhase::Aboard
    }

    pub fn parachute_deployed(&self) -> bool {
        matches!(
            self.phase,
            FlightPhase::CanopyDeployed
                | FlightPhase::Landed {
                    canopy_deployed: true,
                    ..
                }
        )
    }

    pub fn landed(&self) -> bool {
        matches!(self.phase, FlightPhase::Landed { .. })
    }

    pub fn flaring(&self) -> bool {
        self.canopy.flaring()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn acceleration(&self) -> Vec3 {
        self.acceleration
    }

    pub fn wind(&self) -> Vec3 {
        self.wind
    }

    pub fn posture(&self) -> Posture {
        self.posture
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn drag_coefficient(&self) -> f32 {
        self.drag_coefficient
    }

    pub fn surface_area(&self) -> f32 {
        self.surface_area
    }

    pub fn steering_input(&self) -> f32 {
        self.canopy.steering_input()
    }

    pub fn heading_yaw(&self) -> f32 {
        self.canopy.heading_yaw()
    }

    pub fn pitch_angle(&self) -> f32 {
        self.canopy.pitch_angle()
    }

    pub fn bank_angle(&self) -> f32 {
        self.canopy.bank_angle()
    }
}
