//! Physics world and simulation

use crate::body::{BodyKey, RigidBody, StaticShape};
use crate::collision::{circle_vs_circle, circle_vs_segment, Contact};
use crate::shapes::Collider;
use bounce_math::Vec2;
use slotmap::SlotMap;

/// Configuration for the physics simulation
#[derive(Clone, Debug)]
pub struct PhysicsConfig {
    /// Gravity acceleration (y grows downward, so positive y = down)
    pub gravity: Vec2,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, 900.0),
        }
    }
}

impl PhysicsConfig {
    /// Create a new physics config with the given gravity
    pub fn new(gravity: Vec2) -> Self {
        Self { gravity }
    }
}

/// The physics world containing all bodies and shapes
pub struct World {
    /// All dynamic bodies in the world (using generational keys)
    bodies: SlotMap<BodyKey, RigidBody>,
    /// Static shapes (boundary walls)
    static_shapes: Vec<StaticShape>,
    /// Physics configuration
    pub config: PhysicsConfig,
}

impl World {
    /// Create a new physics world with default configuration
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// Create a new physics world with custom configuration
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self {
            bodies: SlotMap::with_key(),
            static_shapes: Vec::new(),
            config,
        }
    }

    /// Add a static shape to the world
    pub fn add_static_shape(&mut self, shape: StaticShape) {
        self.static_shapes.push(shape);
    }

    /// Get immutable access to static shapes
    pub fn static_shapes(&self) -> &[StaticShape] {
        &self.static_shapes
    }

    /// Add a body to the world and return its key
    pub fn add_body(&mut self, body: RigidBody) -> BodyKey {
        self.bodies.insert(body)
    }

    /// Remove a body from the world and return it
    pub fn remove_body(&mut self, key: BodyKey) -> Option<RigidBody> {
        self.bodies.remove(key)
    }

    /// Get an immutable reference to a body by key
    pub fn get_body(&self, key: BodyKey) -> Option<&RigidBody> {
        self.bodies.get(key)
    }

    /// Get a mutable reference to a body by key
    pub fn get_body_mut(&mut self, key: BodyKey) -> Option<&mut RigidBody> {
        self.bodies.get_mut(key)
    }

    /// Get the number of dynamic bodies in the world
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Total number of shapes in the world (static + one per body)
    pub fn shape_count(&self) -> usize {
        self.static_shapes.len() + self.bodies.len()
    }

    /// Iterate over all bodies
    pub fn bodies(&self) -> impl Iterator<Item = &RigidBody> {
        self.bodies.values()
    }

    /// Iterate over all body keys
    pub fn body_keys(&self) -> impl Iterator<Item = BodyKey> + '_ {
        self.bodies.keys()
    }

    /// Step the physics simulation forward by dt seconds
    ///
    /// This performs:
    /// 1. Gravity application and semi-implicit Euler integration
    /// 2. Static shape collision detection and resolution
    /// 3. Body-body collision detection and resolution
    pub fn step(&mut self, dt: f32) {
        // Phase 1: apply gravity, then integrate velocity into position
        for (_key, body) in &mut self.bodies {
            body.velocity += self.config.gravity * dt;
            body.position += body.velocity * dt;
            body.angle += body.angular_velocity * dt;
        }

        // Phase 2: resolve collisions against static shapes
        self.resolve_static_collisions();

        // Phase 3: resolve body-body collisions
        self.resolve_body_collisions();
    }

    /// Contact between a body's collider and a static segment
    fn check_static_collision(body: &RigidBody, shape: &StaticShape) -> Option<Contact> {
        match &body.collider {
            Collider::Circle(circle) => {
                let center = circle.world_center(body.position, body.angle);
                circle_vs_segment(center, circle.radius, &shape.segment)
            }
            // Segment colliders are only used for static shapes
            Collider::Segment(_) => None,
        }
    }

    /// Resolve collisions between bodies and static shapes
    fn resolve_static_collisions(&mut self) {
        for (_key, body) in &mut self.bodies {
            for shape in &self.static_shapes {
                let contact = Self::check_static_collision(body, shape);

                if let Some(contact) = contact {
                    if contact.is_colliding() {
                        // Push the body out of the static shape
                        let correction = contact.normal * contact.penetration;
                        body.apply_correction(correction);

                        let combined = body.material.combine(&shape.material);
                        Self::apply_contact_response(body, contact.normal, &combined);
                    }
                }
            }
        }
    }

    /// Velocity response for a body against a contact normal
    ///
    /// Reflects the normal component scaled by the combined elasticity and
    /// damps the tangential component by the combined friction.
    fn apply_contact_response(
        body: &mut RigidBody,
        normal: Vec2,
        combined: &crate::material::Material,
    ) {
        let velocity_along_normal = body.velocity.dot(normal);
        if velocity_along_normal >= 0.0 {
            // Already separating
            return;
        }

        let normal_velocity = normal * velocity_along_normal;
        body.velocity -= normal_velocity * (1.0 + combined.elasticity);

        let tangent_velocity = body.velocity - normal * body.velocity.dot(normal);
        if tangent_velocity.length_squared() > 0.0001 {
            let friction_factor = 1.0 - combined.friction;
            body.velocity = normal * body.velocity.dot(normal) + tangent_velocity * friction_factor;
        }
    }

    /// Resolve collisions between pairs of dynamic bodies
    fn resolve_body_collisions(&mut self) {
        let keys: Vec<BodyKey> = self.bodies.keys().collect();
        let key_count = keys.len();

        for i in 0..key_count {
            for j in (i + 1)..key_count {
                let key_a = keys[i];
                let key_b = keys[j];

                // Contact normal convention: points from body B toward body A
                let contact = {
                    let body_a = &self.bodies[key_a];
                    let body_b = &self.bodies[key_b];
                    match (&body_a.collider, &body_b.collider) {
                        (Collider::Circle(a), Collider::Circle(b)) => circle_vs_circle(
                            a.world_center(body_a.position, body_a.angle),
                            a,
                            b.world_center(body_b.position, body_b.angle),
                            b,
                        ),
                        // Segment colliders are only used for static shapes
                        (Collider::Segment(_), _) | (_, Collider::Segment(_)) => None,
                    }
                };

                if let Some(contact) = contact {
                    if contact.is_colliding() {
                        self.resolve_body_pair_collision(key_a, key_b, &contact);
                    }
                }
            }
        }
    }

    /// Resolve collision between two specific bodies
    fn resolve_body_pair_collision(&mut self, key_a: BodyKey, key_b: BodyKey, contact: &Contact) {
        // Split the positional correction by mass ratio
        let mass_a = self.bodies[key_a].mass;
        let mass_b = self.bodies[key_b].mass;
        let total_mass = mass_a + mass_b;

        let correction_a = contact.normal * (contact.penetration * mass_b / total_mass);
        let correction_b = -contact.normal * (contact.penetration * mass_a / total_mass);

        self.bodies[key_a].apply_correction(correction_a);
        self.bodies[key_b].apply_correction(correction_b);

        let combined = self.bodies[key_a]
            .material
            .combine(&self.bodies[key_b].material);

        // Normal points from B toward A
        Self::apply_contact_response(&mut self.bodies[key_a], contact.normal, &combined);
        Self::apply_contact_response(&mut self.bodies[key_b], -contact.normal, &combined);
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Material;

    /// Helper to create a zero-gravity world with a horizontal floor at y
    fn world_with_floor(gravity: Vec2, floor_y: f32, material: Material) -> World {
        let mut world = World::with_config(PhysicsConfig::new(gravity));
        world.add_static_shape(StaticShape::segment(
            Vec2::new(-1000.0, floor_y),
            Vec2::new(1000.0, floor_y),
            0.0,
            material,
        ));
        world
    }

    #[test]
    fn test_physics_config_default() {
        let config = PhysicsConfig::default();
        assert_eq!(config.gravity, Vec2::new(0.0, 900.0));
    }

    #[test]
    fn test_world_add_body() {
        let mut world = World::new();
        assert_eq!(world.body_count(), 0);

        let key = world.add_body(RigidBody::circle(Vec2::new(0.0, 5.0), 1.0, 0.5));
        assert!(world.get_body(key).is_some());
        assert_eq!(world.body_count(), 1);
    }

    #[test]
    fn test_shape_count() {
        let mut world = World::new();
        world.add_static_shape(StaticShape::segment(
            Vec2::ZERO,
            Vec2::new(0.0, 10.0),
            0.0,
            Material::default(),
        ));
        world.add_body(RigidBody::circle(Vec2::new(5.0, 5.0), 1.0, 0.5));
        assert_eq!(world.shape_count(), 2);
    }

    #[test]
    fn test_stale_key_returns_none() {
        let mut world = World::new();
        let key = world.add_body(RigidBody::circle(Vec2::ZERO, 1.0, 0.5));
        assert!(world.get_body(key).is_some());

        let removed = world.remove_body(key);
        assert!(removed.is_some());
        assert!(world.get_body(key).is_none());

        // A new body gets a different key; the old one stays stale
        let new_key = world.add_body(RigidBody::circle(Vec2::X, 1.0, 0.5));
        assert!(world.get_body(key).is_none());
        assert!(world.get_body(new_key).is_some());
    }

    #[test]
    fn test_gravity_application() {
        let mut world = World::new();
        let key = world.add_body(RigidBody::circle(Vec2::new(100.0, 100.0), 10.0, 5.0));

        world.step(0.1);

        let body = world.get_body(key).unwrap();
        // Velocity should have gravity applied: 0 + 900 * 0.1 = 90 (downward)
        assert!((body.velocity.y - 90.0).abs() < 0.0001);
    }

    #[test]
    fn test_velocity_integration() {
        let mut world = World::with_config(PhysicsConfig::new(Vec2::ZERO));
        let key = world.add_body(
            RigidBody::circle(Vec2::ZERO, 1.0, 0.5).with_velocity(Vec2::new(10.0, 0.0)),
        );

        world.step(1.0);

        let body = world.get_body(key).unwrap();
        assert!((body.position.x - 10.0).abs() < 0.0001);
    }

    #[test]
    fn test_angular_integration() {
        let mut world = World::with_config(PhysicsConfig::new(Vec2::ZERO));
        let key = world.add_body(
            RigidBody::circle(Vec2::ZERO, 1.0, 0.5).with_angular_velocity(2.0),
        );

        world.step(0.5);

        let body = world.get_body(key).unwrap();
        assert!((body.angle - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_floor_collision_pushes_out() {
        // Floor at y = 10 (y grows downward), ball penetrating from above
        let mut world = world_with_floor(Vec2::ZERO, 10.0, Material::default());
        let key = world.add_body(RigidBody::circle(Vec2::new(0.0, 8.0), 1.0, 5.0));

        world.step(0.016);

        let body = world.get_body(key).unwrap();
        // Ball center should be pushed up to radius distance above the floor
        assert!(body.position.y <= 5.0 + 0.001);
    }

    #[test]
    fn test_floor_collision_no_bounce() {
        let mut world = world_with_floor(Vec2::ZERO, 10.0, Material::new(0.0, 0.0));
        let key = world.add_body(
            RigidBody::circle(Vec2::new(0.0, 4.5), 1.0, 5.0)
                .with_velocity(Vec2::new(0.0, 10.0))
                .with_material(Material::new(1.0, 0.0)),
        );

        world.step(0.1);

        let body = world.get_body(key).unwrap();
        // Combined elasticity is 0 so the downward velocity is absorbed
        assert!(body.velocity.y.abs() < 0.001);
    }

    #[test]
    fn test_floor_collision_with_bounce() {
        let mut world = world_with_floor(Vec2::ZERO, 10.0, Material::new(1.0, 0.0));
        let key = world.add_body(
            RigidBody::circle(Vec2::new(0.0, 4.5), 1.0, 5.0)
                .with_velocity(Vec2::new(0.0, 10.0))
                .with_material(Material::new(1.0, 0.0)),
        );

        world.step(0.1);

        let body = world.get_body(key).unwrap();
        // Perfect restitution flips the normal velocity
        assert!(body.velocity.y < 0.0);
        assert!((body.velocity.y + 10.0).abs() < 0.001);
    }

    #[test]
    fn test_friction_slows_tangential_movement() {
        let mut world = world_with_floor(Vec2::ZERO, 10.0, Material::new(0.0, 0.9));
        let key = world.add_body(
            RigidBody::circle(Vec2::new(0.0, 6.0), 1.0, 5.0)
                .with_velocity(Vec2::new(10.0, 1.0))
                .with_material(Material::new(0.0, 0.9)),
        );

        world.step(0.016);

        let body = world.get_body(key).unwrap();
        // Combined friction 0.81 leaves 19% of the tangential velocity
        assert!(body.velocity.x < 10.0);
        assert!((body.velocity.x - 10.0 * (1.0 - 0.81)).abs() < 0.01);
    }

    #[test]
    fn test_separating_contact_keeps_velocity() {
        let mut world = world_with_floor(Vec2::ZERO, 10.0, Material::new(1.0, 0.9));
        // Overlapping the floor but already moving away from it
        let key = world.add_body(
            RigidBody::circle(Vec2::new(0.0, 6.0), 1.0, 5.0)
                .with_velocity(Vec2::new(0.0, -10.0))
                .with_material(Material::new(1.0, 0.9)),
        );

        world.step(0.016);

        let body = world.get_body(key).unwrap();
        assert!((body.velocity.y + 10.0).abs() < 0.001);
    }

    #[test]
    fn test_two_circles_separate() {
        let mut world = World::with_config(PhysicsConfig::new(Vec2::ZERO));
        let a = world.add_body(RigidBody::circle(Vec2::ZERO, 1.0, 5.0));
        let b = world.add_body(
            RigidBody::circle(Vec2::new(20.0, 0.0), 1.0, 5.0)
                .with_velocity(Vec2::new(-100.0, 0.0)),
        );

        for _ in 0..20 {
            world.step(0.016);
        }

        let pos_a = world.get_body(a).unwrap().position;
        let pos_b = world.get_body(b).unwrap().position;
        let distance = (pos_b - pos_a).length();
        assert!(distance >= 10.0 - 0.1, "circles should not interpenetrate");
    }

    #[test]
    fn test_heavier_body_moves_less_on_correction() {
        let mut world = World::with_config(PhysicsConfig::new(Vec2::ZERO));
        // Two overlapping circles, mass 1 vs mass 9
        let light = world.add_body(RigidBody::circle(Vec2::ZERO, 1.0, 5.0));
        let heavy = world.add_body(RigidBody::circle(Vec2::new(8.0, 0.0), 9.0, 5.0));

        world.step(0.016);

        let light_moved = world.get_body(light).unwrap().position.x.abs();
        let heavy_moved = (world.get_body(heavy).unwrap().position.x - 8.0).abs();
        assert!(light_moved > heavy_moved);
    }

    #[test]
    fn test_ball_stays_inside_box() {
        // A lively ball in a closed box must never escape it
        let mut world = World::new();
        let walls = Material::new(0.9, 0.9);
        world.add_static_shape(StaticShape::segment(
            Vec2::new(0.0, 0.0),
            Vec2::new(600.0, 0.0),
            0.0,
            walls,
        ));
        world.add_static_shape(StaticShape::segment(
            Vec2::new(0.0, 1080.0),
            Vec2::new(600.0, 1080.0),
            0.0,
            walls,
        ));
        world.add_static_shape(StaticShape::segment(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 1080.0),
            0.0,
            walls,
        ));
        world.add_static_shape(StaticShape::segment(
            Vec2::new(600.0, 0.0),
            Vec2::new(600.0, 1080.0),
            0.0,
            walls,
        ));

        let key = world.add_body(
            RigidBody::circle(Vec2::new(300.0, 200.0), 10.0, 50.0)
                .with_velocity(Vec2::new(200.0, -100.0))
                .with_material(Material::new(0.975, 0.5)),
        );

        for _ in 0..3600 {
            world.step(1.0 / 60.0);
        }

        let pos = world.get_body(key).unwrap().position;
        assert!(
            pos.x >= 0.0 && pos.x <= 600.0 && pos.y >= 0.0 && pos.y <= 1080.0,
            "ball escaped the box at ({}, {})",
            pos.x,
            pos.y
        );
    }
}
