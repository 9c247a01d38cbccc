//! Skydive Simulation Core Library
//!
//! Simulates the flight dynamics of a single skydiver from aircraft exit
//! through canopy flight to landing: altitude-banded air density, posture
//! dependent freefall drag, a PD-style canopy glide/steering controller,
//! and a scripted post-landing deceleration sequence, all advanced by a
//! frame-driven semi-implicit Euler step.
//!
//! Rendering, input devices, and UI are external hosts: they read the
//! jumper's observable state after each tick and feed commands back in
//! through [`SkydiveSimulation::submit`] or the jumper's entry points.

// Core types and utilities
pub mod core_types;

// Physics building blocks
pub mod aerodynamics;
pub mod atmosphere;

// Flight and landing control
pub mod canopy;
pub mod landing;

// Entities and the session driver
pub mod aircraft;
pub mod jumper;
pub mod simulation;

// Re-export core types
pub use core_types::{Posture, SimConfig, Vec3};

// Re-export the main simulation surface
pub use aircraft::Aircraft;
pub use jumper::{FlightPhase, Jumper};
pub use landing::{AnimationCue, LandingKind};
pub use simulation::{JumperCommand, SkydiveSimulation};
