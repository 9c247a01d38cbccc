//! Top-level simulation driver.
//!
//! `SkydiveSimulation` owns the aircraft, the jumper, the session clock,
//! and the command queue, and advances everything one frame at a time.
//! Single-threaded and cooperative: one `update(delta_time)` call per
//! rendered frame, commands drained before integration. Hosts read state
//! through the accessors and never mutate physics state directly.

pub mod command_queue;

pub use command_queue::JumperCommand;
pub(crate) use command_queue::CommandQueue;

use crate::aircraft::Aircraft;
use crate::core_types::SimConfig;
use crate::jumper::Jumper;
use crate::landing::AnimationCue;

/// A complete skydive session: one aircraft, one jumper.
#[derive(Debug)]
pub struct SkydiveSimulation {
    aircraft: Aircraft,
    jumper: Jumper,
    commands: CommandQueue,
    simulation_time: f32,
}

impl SkydiveSimulation {
    /// Create a session from the start-of-session configuration.
    pub fn new(config: &SimConfig) -> Self {
        SkydiveSimulation {
            aircraft: Aircraft::from_config(config),
            jumper: Jumper::new(config),
            commands: CommandQueue::new(),
            simulation_time: 0.0,
        }
    }

    /// Queue a command; it is applied before the next integration step.
    pub fn submit(&mut self, command: JumperCommand) {
        self.commands.submit(command);
    }

    /// Advance one frame. `delta_time <= 0` is a no-op.
    ///
    /// Order per frame: apply queued commands, advance the aircraft, then
    /// advance the jumper (mirroring the aircraft while still aboard).
    pub fn update(&mut self, delta_time: f32) {
        if delta_time <= 0.0 {
            return;
        }

        for command in self.commands.take_pending() {
            self.apply(command);
        }

        self.aircraft.update(delta_time);

        if self.jumper.has_jumped() {
            self.jumper.update_state(delta_time);
        } else {
            self.jumper.follow_aircraft(&self.aircraft);
        }

        self.simulation_time += delta_time;
    }

    fn apply(&mut self, command: JumperCommand) {
        match command {
            JumperCommand::Jump => self.jumper.jump(&self.aircraft),
            JumperCommand::DeployParachute => self.jumper.deploy_parachute(),
            JumperCommand::SetSteering(axis) => self.jumper.set_steering_input(axis),
            JumperCommand::ClearSteering => self.jumper.clear_steering(),
            JumperCommand::Flare => self.jumper.flare(),
            JumperCommand::Unflare => self.jumper.unflare(),
            JumperCommand::SetPosture(posture) => self.jumper.set_posture(posture),
            JumperCommand::SetMass(mass) => self.jumper.set_mass(mass),
            JumperCommand::SetDragCoefficient(cd) => self.jumper.set_drag_coefficient(cd),
            JumperCommand::SetSurfaceArea(area) => self.jumper.set_surface_area(area),
        }
    }

    /// Take the latest unpolled animation cue, if any.
    pub fn take_animation_cue(&mut self) -> Option<AnimationCue> {
        self.jumper.take_animation_cue()
    }

    pub fn jumper(&self) -> &Jumper {
        &self.jumper
    }

    pub fn aircraft(&self) -> &Aircraft {
        &self.aircraft
    }

    pub fn simulation_time(&self) -> f32 {
        self.simulation_time
    }
}
