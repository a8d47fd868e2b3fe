//! Fixed-timestep simulation system
//!
//! Owns the running flag and the fixed-step schedule: every frame advances
//! the world by `steps_per_frame` steps of `timestep` seconds, regardless of
//! wall-clock jitter.

use bounce_physics::World;

/// Anything that can be advanced by a fixed timestep
///
/// Implemented by the physics world; tests substitute a deterministic stub.
pub trait Step {
    fn step(&mut self, dt: f32);
}

impl Step for World {
    fn step(&mut self, dt: f32) {
        World::step(self, dt);
    }
}

/// Drives fixed-timestep advancement and the running flag
pub struct SimulationSystem {
    timestep: f32,
    steps_per_frame: u32,
    running: bool,
    elapsed: f32,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new(timestep: f32, steps_per_frame: u32) -> Self {
        Self {
            timestep,
            steps_per_frame,
            running: true,
            elapsed: 0.0,
        }
    }

    /// Whether the loop should keep iterating
    ///
    /// Checked at the top of each frame; a close event observed mid-frame
    /// takes effect on the next iteration.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Handle a window close event
    pub fn handle_close(&mut self) {
        self.running = false;
    }

    /// Total simulated time in seconds
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// The fixed timestep in seconds
    pub fn timestep(&self) -> f32 {
        self.timestep
    }

    /// Advance the world by one frame's worth of fixed steps
    pub fn advance(&mut self, world: &mut impl Step) {
        for _ in 0..self.steps_per_frame {
            world.step(self.timestep);
            self.elapsed += self.timestep;
        }
    }
}
