//! Rigid body types for 2D physics simulation

use crate::material::Material;
use crate::shapes::{moment_for_circle, Circle, Collider, Segment};
use bounce_math::Vec2;
use slotmap::new_key_type;

// Define generational key type for rigid bodies
new_key_type! {
    /// Key to a rigid body in the physics world
    ///
    /// Uses generational indexing so a stale key returns None instead of
    /// pointing at a reused slot.
    pub struct BodyKey;
}

/// A 2D rigid body with position, velocity, and collision shape
#[derive(Clone, Debug)]
pub struct RigidBody {
    /// Position in world coordinates
    pub position: Vec2,
    /// Velocity (units per second)
    pub velocity: Vec2,
    /// Orientation in radians
    pub angle: f32,
    /// Angular velocity (radians per second)
    pub angular_velocity: f32,
    /// Mass of the body
    pub mass: f32,
    /// Moment of inertia about the body center
    pub moment: f32,
    /// Surface material for collision response
    pub material: Material,
    /// The collision shape for this body (body-local coordinates)
    pub collider: Collider,
}

impl RigidBody {
    /// Create a dynamic body with a centered circle collider
    ///
    /// The moment of inertia is derived from the mass and radius using the
    /// solid-circle formula.
    pub fn circle(position: Vec2, mass: f32, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            angle: 0.0,
            angular_velocity: 0.0,
            mass,
            moment: moment_for_circle(mass, 0.0, radius, Vec2::ZERO),
            material: Material::default(),
            collider: Collider::Circle(Circle::centered(radius)),
        }
    }

    /// Set the velocity of this body
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Set the surface material of this body
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    /// Set the angular velocity of this body
    pub fn with_angular_velocity(mut self, angular_velocity: f32) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Override the derived moment of inertia
    pub fn with_moment(mut self, moment: f32) -> Self {
        self.moment = moment;
        self
    }

    /// Apply a positional correction (from collision resolution)
    pub fn apply_correction(&mut self, correction: Vec2) {
        self.position += correction;
    }
}

/// An immovable shape anchored to the world (boundary walls)
#[derive(Clone, Copy, Debug)]
pub struct StaticShape {
    pub segment: Segment,
    pub material: Material,
}

impl StaticShape {
    /// Create a static segment with the given material
    pub fn segment(a: Vec2, b: Vec2, radius: f32, material: Material) -> Self {
        Self {
            segment: Segment::new(a, b, radius),
            material,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_body_defaults() {
        let pos = Vec2::new(100.0, 200.0);
        let body = RigidBody::circle(pos, 10.0, 50.0);

        assert_eq!(body.position, pos);
        assert_eq!(body.velocity, Vec2::ZERO);
        assert_eq!(body.angle, 0.0);
        assert_eq!(body.mass, 10.0);
        assert!((body.moment - 12_500.0).abs() < 0.001);
    }

    #[test]
    fn test_builder_methods() {
        let body = RigidBody::circle(Vec2::ZERO, 10.0, 50.0)
            .with_velocity(Vec2::new(200.0, -100.0))
            .with_material(Material::new(0.975, 0.5))
            .with_angular_velocity(1.5);

        assert_eq!(body.velocity, Vec2::new(200.0, -100.0));
        assert_eq!(body.material.elasticity, 0.975);
        assert_eq!(body.material.friction, 0.5);
        assert_eq!(body.angular_velocity, 1.5);
    }

    #[test]
    fn test_apply_correction() {
        let mut body = RigidBody::circle(Vec2::new(1.0, 0.0), 1.0, 1.0);
        body.apply_correction(Vec2::new(0.0, 0.5));
        assert_eq!(body.position, Vec2::new(1.0, 0.5));
    }

    #[test]
    fn test_static_segment() {
        let wall = StaticShape::segment(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1080.0),
            0.0,
            Material::new(0.9, 0.9),
        );
        assert_eq!(wall.segment.a, Vec2::new(0.0, 0.0));
        assert_eq!(wall.material.elasticity, 0.9);
    }
}
