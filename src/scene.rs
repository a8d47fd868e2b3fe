//! Scene construction: the boundary box and the ball
//!
//! Everything in the world is created here, exactly once. The simulation
//! never spawns or despawns entities after setup.

use bounce_math::Vec2;
use bounce_physics::{BodyKey, Material, PhysicsConfig, RigidBody, StaticShape, World};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{PhysicsConfig as PhysicsSettings, SceneConfig};

/// Build the world from config with a seeded RNG
///
/// Returns the populated world and the key of the ball body.
pub fn build_world(physics: &PhysicsSettings, scene: &SceneConfig, seed: u64) -> (World, BodyKey) {
    let mut world = World::with_config(PhysicsConfig::new(Vec2::from(physics.gravity)));

    add_boundary(&mut world, scene);
    let ball = add_ball(&mut world, scene, seed);

    (world, ball)
}

/// Add the four static boundary segments
///
/// The geometry is kept exactly as found in the arena layout: the edge at
/// y = 1080 appears twice and there is no separate edge at y = 0.
fn add_boundary(world: &mut World, scene: &SceneConfig) {
    let material = Material::new(scene.wall_elasticity, scene.wall_friction);
    let lines = [
        (Vec2::new(0.0, 1080.0), Vec2::new(607.5, 1080.0)),
        (Vec2::new(0.0, 0.0), Vec2::new(0.0, 1080.0)),
        (Vec2::new(0.0, 1080.0), Vec2::new(607.5, 1080.0)),
        (Vec2::new(607.5, 1080.0), Vec2::new(607.5, 0.0)),
    ];

    for (a, b) in lines {
        world.add_static_shape(StaticShape::segment(a, b, 0.0, material));
    }
}

/// Add the ball with a randomized spawn x coordinate
fn add_ball(world: &mut World, scene: &SceneConfig, seed: u64) -> BodyKey {
    let mut rng = Pcg32::seed_from_u64(seed);
    let x = rng.random_range(scene.spawn_x_min..=scene.spawn_x_max) as f32;

    let ball = RigidBody::circle(
        Vec2::new(x, scene.spawn_y),
        scene.ball_mass,
        scene.ball_radius,
    )
    .with_velocity(Vec2::from(scene.initial_velocity))
    .with_material(Material::new(scene.ball_elasticity, scene.ball_friction));

    log::info!("Spawned ball at ({}, {})", x, scene.spawn_y);
    world.add_body(ball)
}
