//! Collision shapes for 2D physics
//!
//! These are lightweight primitives used for collision detection. The set is
//! closed: every shape in the world is either a circle or a line segment.

use bounce_math::Vec2;

/// A circle defined by an offset from its body's center and a radius
#[derive(Clone, Copy, Debug)]
pub struct Circle {
    /// Offset from the owning body's position (body-local coordinates)
    pub offset: Vec2,
    pub radius: f32,
}

impl Circle {
    /// Create a new circle with the given body-local offset and radius
    pub fn new(offset: Vec2, radius: f32) -> Self {
        Self { offset, radius }
    }

    /// Create a circle centered on its body
    pub fn centered(radius: f32) -> Self {
        Self::new(Vec2::ZERO, radius)
    }

    /// World-space center for a body at `position` rotated by `angle`
    pub fn world_center(&self, position: Vec2, angle: f32) -> Vec2 {
        position + self.offset.rotated(angle)
    }
}

/// A line segment between two world-space endpoints
///
/// The segment can be fattened by a radius, turning it into a capsule.
/// Boundary walls use radius 0.
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub a: Vec2,
    pub b: Vec2,
    pub radius: f32,
}

impl Segment {
    /// Create a new segment between two endpoints
    pub fn new(a: Vec2, b: Vec2, radius: f32) -> Self {
        Self { a, b, radius }
    }

    /// Closest point on the segment to the given point
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        let ab = self.b - self.a;
        let len_sq = ab.length_squared();
        if len_sq <= f32::EPSILON {
            return self.a;
        }
        let t = ((point - self.a).dot(ab) / len_sq).clamp(0.0, 1.0);
        self.a + ab * t
    }
}

/// Collision shape attached to a body
///
/// Closed set of shape kinds; rendering and collision both dispatch over it.
#[derive(Clone, Copy, Debug)]
pub enum Collider {
    Circle(Circle),
    Segment(Segment),
}

/// Moment of inertia for a circle (hollow or solid) about its body's center
///
/// Uses the standard formula `m * (r_inner^2 + r_outer^2) / 2` plus the
/// parallel-axis term for circles offset from the body center. A solid
/// circle has `inner_radius` 0.
pub fn moment_for_circle(mass: f32, inner_radius: f32, outer_radius: f32, offset: Vec2) -> f32 {
    0.5 * mass * (inner_radius * inner_radius + outer_radius * outer_radius)
        + mass * offset.length_squared()
}
