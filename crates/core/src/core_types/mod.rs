//! Core types and utilities

pub mod config;
pub mod posture;
pub mod vec3;

pub use config::SimConfig;
pub use posture::Posture;
pub use vec3::Vec3;
