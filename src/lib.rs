//! Bouncy Balls - a minimal 2D physics demonstration
//!
//! Spawns a ball inside a rectangular boundary, steps a rigid-body
//! simulation at a fixed 60 Hz timestep, and renders every shape with
//! default debug visuals.

pub mod config;
pub mod scene;
pub mod systems;
