//! 2D rigid body physics for the bouncy balls demo
//!
//! This crate provides the simulation half of the program:
//! - Collision shapes (circles, line segments)
//! - Collision detection
//! - Rigid body dynamics with gravity, restitution and friction

pub mod body;
pub mod collision;
pub mod material;
pub mod shapes;
pub mod world;

// Re-export commonly used types
pub use body::{BodyKey, RigidBody, StaticShape};
pub use collision::{circle_vs_circle, circle_vs_segment, Contact};
pub use material::Material;
pub use shapes::{moment_for_circle, Circle, Collider, Segment};
pub use world::{PhysicsConfig, World};
