//! Vector type alias for 3D positions and directions.

use nalgebra::Vector3;

/// 3D vector type for positions, velocities, and forces.
///
/// This is a simple alias for `nalgebra::Vector3<f32>`, used throughout
/// the simulation in the world frame with Y as altitude.
pub type Vec3 = Vector3<f32>;
