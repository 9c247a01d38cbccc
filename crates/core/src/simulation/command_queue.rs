//! Command queue between host inputs and the integration step.
//!
//! Hosts (input handling, UI) submit commands at arbitrary times between
//! ticks; the simulation drains the queue in submission order at the start
//! of each `update`, before any integration. This keeps the per-tick state
//! advance single-writer and deterministic regardless of when the host
//! delivered its events within the frame.

use crate::core_types::Posture;

/// A discrete control command for the jumper.
///
/// Commands that are invalid for the current flight phase are applied as
/// silent no-ops, matching the jumper's own entry-point policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumperCommand {
    /// Exit the aircraft
    Jump,
    /// Open the canopy
    DeployParachute,
    /// Steering axis in [-1, 1] (clamped on apply)
    SetSteering(f32),
    /// Release the steering input
    ClearSteering,
    /// Begin a flare
    Flare,
    /// End a flare
    Unflare,
    /// Change freefall posture
    SetPosture(Posture),
    /// Tune the mass (kg)
    SetMass(f32),
    /// Tune the drag coefficient
    SetDragCoefficient(f32),
    /// Tune the surface area (m²)
    SetSurfaceArea(f32),
}

/// FIFO of commands pending application before the next tick.
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: Vec<JumperCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        CommandQueue {
            pending: Vec::with_capacity(8),
        }
    }

    /// Queue a command for the next update.
    pub fn submit(&mut self, command: JumperCommand) {
        self.pending.push(command);
    }

    /// Commands not yet applied.
    pub fn pending(&self) -> &[JumperCommand] {
        &self.pending
    }

    /// Take all pending commands for application, in submission order.
    pub fn take_pending(&mut self) -> Vec<JumperCommand> {
        std::mem::take(&mut self.pending)
    }

    /// Drop all pending commands.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
