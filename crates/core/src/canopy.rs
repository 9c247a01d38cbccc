//! Canopy glide and steering controller.
//!
//! Active only after parachute deployment. Owns the steering input, the
//! heading yaw it integrates from that input, and the pitch/bank attitude
//! state that tracks flare and steering targets. The force law is a
//! PD-style speed controller: horizontal drag is damped so the glide-speed
//! term dominates horizontal motion, while vertical drag stays at full
//! strength so the descent rate remains physically governed.

use tracing::info;

use crate::core_types::Vec3;

/// Drag coefficient of the open canopy
pub const CANOPY_DRAG_COEFFICIENT: f32 = 1.8;

/// Surface area of the open canopy (m²)
pub const CANOPY_SURFACE_AREA: f32 = 25.0;

/// Maximum heading rate at full steering input (90°/s)
const MAX_YAW_RATE: f32 = std::f32::consts::FRAC_PI_2;

/// Desired forward glide speed (m/s)
const TARGET_GLIDE_SPEED: f32 = 14.0;

/// Forward speed-tracking gain (1/s)
const FORWARD_GAIN: f32 = 2.0;

/// Sideslip-killing gain (1/s), stronger than forward so the canopy
/// does not crab sideways
const LATERAL_GAIN: f32 = 6.0;

/// Fraction of freefall drag kept on the horizontal components
const HORIZONTAL_DRAG_FACTOR: f32 = 0.3;

/// Lateral force at full steering input (N), increases turn rate while
/// the input is held
const BANK_ASSIST_FORCE: f32 = 400.0;

/// Flare lift at target glide speed and 90° pitch (N)
const FLARE_LIFT_FORCE: f32 = 1500.0;

/// Pitch target while flaring (20°)
const FLARE_TARGET_PITCH: f32 = std::f32::consts::PI / 9.0;

/// Bank angle at full steering input (25°)
const MAX_BANK_ANGLE: f32 = std::f32::consts::PI * 25.0 / 180.0;

/// First-order smoothing rate for pitch and bank tracking (1/s)
const ATTITUDE_SMOOTHING: f32 = 5.0;

/// Below this horizontal-speed-squared the travel direction is undefined
const MIN_HORIZONTAL_SPEED_SQ: f32 = 1e-4;

/// Critically damped first-order tracking toward a target value.
///
/// `min(1, rate·dt)` clamps the step so large frame times land exactly on
/// the target instead of overshooting. Shared by pitch and bank smoothing.
pub(crate) fn track_toward(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * (rate * dt).min(1.0)
}

/// Steering and attitude state of the deployed canopy.
#[derive(Debug, Clone, Default)]
pub struct CanopyController {
    /// Latest steering command in [-1, 1]; persists until cleared
    steering_input: f32,
    /// Travel-direction angle around world Y (radians), unbounded
    heading_yaw: f32,
    /// Current pitch (radians), tracks `target_pitch`
    pitch_angle: f32,
    /// Pitch target: flare angle while flaring, 0 otherwise
    target_pitch: f32,
    /// Current bank (radians), tracks the steering input
    bank_angle: f32,
    /// Flare sub-state toggle
    flaring: bool,
}

impl CanopyController {
    /// Initialize the heading from the current travel direction.
    ///
    /// Falls back to `fallback_yaw` when the horizontal speed is too small
    /// to define a direction.
    pub fn deploy(&mut self, velocity: Vec3, fallback_yaw: f32) {
        let horizontal = Vec3::new(velocity.x, 0.0, velocity.z);
        self.heading_yaw = if horizontal.norm_squared() > MIN_HORIZONTAL_SPEED_SQ {
            horizontal.x.atan2(horizontal.z)
        } else {
            fallback_yaw
        };
    }

    /// Set the steering axis, clamped to [-1, 1].
    pub fn set_steering(&mut self, axis: f32) {
        self.steering_input = axis.clamp(-1.0, 1.0);
    }

    /// Release the steering input; the current heading is kept.
    pub fn clear_steering(&mut self) {
        self.steering_input = 0.0;
    }

    /// Begin a flare. Idempotent: a second call while already flaring
    /// does not re-apply the pitch target.
    pub fn flare(&mut self) {
        if !self.flaring {
            self.flaring = true;
            self.target_pitch = FLARE_TARGET_PITCH;
            info!("flaring");
        }
    }

    /// End a flare and let the pitch settle back to level. Idempotent.
    pub fn unflare(&mut self) {
        if self.flaring {
            self.flaring = false;
            self.target_pitch = 0.0;
            info!("unflared");
        }
    }

    /// Integrate the heading from the held steering input.
    ///
    /// The heading accumulates across full rotations; callers needing a
    /// canonical angle must wrap it themselves.
    pub fn integrate_heading(&mut self, dt: f32) {
        self.heading_yaw += self.steering_input * MAX_YAW_RATE * dt;
    }

    /// Smooth pitch and bank toward their targets.
    pub fn update_attitude(&mut self, dt: f32) {
        self.pitch_angle = track_toward(self.pitch_angle, self.target_pitch, ATTITUDE_SMOOTHING, dt);
        // Inverted so pulling the right handle banks right
        let target_bank = -self.steering_input * MAX_BANK_ANGLE;
        self.bank_angle = track_toward(self.bank_angle, target_bank, ATTITUDE_SMOOTHING, dt);
    }

    /// Unit vector along the canopy heading, horizontal.
    pub fn forward_dir(&self) -> Vec3 {
        Vec3::new(self.heading_yaw.sin(), 0.0, self.heading_yaw.cos())
    }

    /// Unit vector to the right of the heading, horizontal.
    pub fn right_dir(&self) -> Vec3 {
        self.forward_dir().cross(&Vec3::y()).normalize()
    }

    /// Aerodynamic + control force on the open canopy, excluding gravity.
    ///
    /// `drag` is the full freefall drag for the current canopy Cd/area; its
    /// horizontal component is damped to a fraction of that magnitude and
    /// the speed controller takes over horizontal motion.
    /// Gains are expressed as `mass · gain · error` so the response time is
    /// mass-independent.
    pub fn control_force(&self, mass: f32, velocity: Vec3, drag: Vec3) -> Vec3 {
        let horizontal_drag = Vec3::new(drag.x, 0.0, drag.z) * HORIZONTAL_DRAG_FACTOR;
        let vertical_drag = Vec3::new(0.0, drag.y, 0.0);

        let forward = self.forward_dir();
        let right = self.right_dir();

        let horizontal_velocity = Vec3::new(velocity.x, 0.0, velocity.z);
        let forward_speed = horizontal_velocity.dot(&forward);
        let lateral_speed = horizontal_velocity.dot(&right);

        let glide = forward * (mass * FORWARD_GAIN * (TARGET_GLIDE_SPEED - forward_speed));
        let anti_slip = right * (mass * (-LATERAL_GAIN * lateral_speed));
        let bank_assist = right * (BANK_ASSIST_FORCE * self.steering_input);
        let flare_lift = Vec3::new(
            0.0,
            FLARE_LIFT_FORCE * (forward_speed / TARGET_GLIDE_SPEED) * self.pitch_angle.sin(),
            0.0,
        );

        horizontal_drag + vertical_drag + glide + anti_slip + bank_assist + flare_lift
    }

    pub fn steering_input(&self) -> f32 {
        self.steering_input
    }

    pub fn heading_yaw(&self) -> f32 {
        self.heading_yaw
    }

    pub fn pitch_angle(&self) -> f32 {
        self.pitch_angle
    }

    pub fn bank_angle(&self) -> f32 {
        self.bank_angle
    }

    pub fn flaring(&self) -> bool {
        self.flaring
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_track_toward_converges_without_overshoot() {
        let mut value = 0.0;
        for _ in 0..200 {
            value = track_toward(value, 1.0, 5.0, 1.0 / 60.0);
            assert!(value <= 1.0);
        }
        assert_relative_eq!(value, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn test_track_toward_large_step_lands_on_target() {
        // rate*dt > 1 clamps to the target exactly
        let value = track_toward(0.0, 2.0, 5.0, 1.0);
        assert_eq!(value, 2.0);
    }

    #[test]
    fn test_steering_input_clamped() {
        let mut canopy = CanopyController::default();
        canopy.set_steering(3.0);
        assert_eq!(canopy.steering_input(), 1.0);
        canopy.set_steering(-2.5);
        assert_eq!(canopy.steering_input(), -1.0);
        canopy.set_steering(0.4);
        assert_relative_eq!(canopy.steering_input(), 0.4);
    }

    #[test]
    fn test_heading_initialized_from_velocity() {
        let mut canopy = CanopyController::default();
        canopy.deploy(Vec3::new(10.0, -20.0, 10.0), 1.5);
        assert_relative_eq!(canopy.heading_yaw(), std::f32::consts::FRAC_PI_4, epsilon = 1e-5);
    }

    #[test]
    fn test_heading_falls_back_when_horizontal_speed_negligible() {
        let mut canopy = CanopyController::default();
        canopy.deploy(Vec3::new(0.0, -50.0, 0.0), 1.5);
        assert_eq!(canopy.heading_yaw(), 1.5);
    }

    #[test]
    fn test_heading_rate_symmetric_in_steering() {
        let dt = 1.0 / 60.0;

        let mut left = CanopyController::default();
        left.set_steering(-0.7);
        left.integrate_heading(dt);

        let mut right = CanopyController::default();
        right.set_steering(0.7);
        right.integrate_heading(dt);

        assert_relative_eq!(left.heading_yaw(), -right.heading_yaw(), epsilon = 1e-6);
        assert!(right.heading_yaw() > 0.0);
    }

    #[test]
    fn test_lateral_force_symmetric_in_steering() {
        let velocity = Vec3::new(0.0, -6.0, 14.0); // gliding along +Z at target speed
        let mass = 80.0;

        let mut left = CanopyController::default();
        left.set_steering(-1.0);
        let f_left = left.control_force(mass, velocity, Vec3::zeros());

        let mut right = CanopyController::default();
        right.set_steering(1.0);
        let f_right = right.control_force(mass, velocity, Vec3::zeros());

        // Heading is +Z, right is -X in this frame; lateral components mirror
        assert_relative_eq!(f_left.x, -f_right.x, epsilon = 1e-3);
        assert_relative_eq!(f_left.y, f_right.y, epsilon = 1e-3);
        assert_relative_eq!(f_left.z, f_right.z, epsilon = 1e-3);
    }

    #[test]
    fn test_glide_force_drives_toward_target_speed() {
        let canopy = CanopyController::default(); // heading +Z
        let mass = 80.0;

        let slow = canopy.control_force(mass, Vec3::new(0.0, -6.0, 5.0), Vec3::zeros());
        let fast = canopy.control_force(mass, Vec3::new(0.0, -6.0, 20.0), Vec3::zeros());

        assert!(slow.z > 0.0, "below target speed the controller pushes forward");
        assert!(fast.z < 0.0, "above target speed the controller brakes");
    }

    #[test]
    fn test_flare_idempotent() {
        let mut canopy = CanopyController::default();
        canopy.flare();
        let target_after_first = canopy.target_pitch;
        canopy.update_attitude(0.05);
        let pitch_after_first = canopy.pitch_angle();

        canopy.flare(); // no-op
        assert_eq!(canopy.target_pitch, target_after_first);

        let mut reference = CanopyController::default();
        reference.flare();
        reference.update_attitude(0.05);
        assert_relative_eq!(pitch_after_first, reference.pitch_angle());
    }

    #[test]
    fn test_unflare_resets_pitch_target() {
        let mut canopy = CanopyController::default();
        canopy.flare();
        for _ in 0..120 {
            canopy.update_attitude(1.0 / 60.0);
        }
        assert!(canopy.pitch_angle() > 0.3);

        canopy.unflare();
        canopy.unflare(); // idempotent
        for _ in 0..240 {
            canopy.update_attitude(1.0 / 60.0);
        }
        assert_relative_eq!(canopy.pitch_angle(), 0.0, epsilon = 1e-4);
        assert!(!canopy.flaring());
    }

    #[test]
    fn test_flare_lift_scales_with_forward_speed_and_pitch() {
        let mut canopy = CanopyController::default();
        canopy.flare();
        for _ in 0..120 {
            canopy.update_attitude(1.0 / 60.0);
        }

        let at_speed = canopy.control_force(80.0, Vec3::new(0.0, -6.0, 14.0), Vec3::zeros());
        let stalled = canopy.control_force(80.0, Vec3::new(0.0, -6.0, 0.0), Vec3::zeros());
        assert!(at_speed.y > stalled.y, "lift requires forward speed");
    }

    #[test]
    fn test_bank_tracks_inverted_steering() {
        let mut canopy = CanopyController::default();
        canopy.set_steering(1.0);
        for _ in 0..120 {
            canopy.update_attitude(1.0 / 60.0);
        }
        assert_relative_eq!(canopy.bank_angle(), -MAX_BANK_ANGLE, epsilon = 1e-3);
    }
}
