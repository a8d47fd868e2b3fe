//! Application systems
//!
//! The frame loop is split into small systems so the fixed-step and pacing
//! logic can be tested without a window.

mod frame_clock;
mod simulation;

pub use frame_clock::FrameClock;
pub use simulation::{SimulationSystem, Step};
