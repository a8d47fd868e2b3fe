//! Default debug visuals for physics shapes
//!
//! Iterates every shape in a physics world and emits a default visual per
//! shape kind. This is a pure function of the world: with no physics step in
//! between, repeated calls produce identical vertices.

use bounce_math::Vec2;
use bounce_physics::{Collider, World};

use crate::tessellate;
use crate::vertex::{colors, Vertex};

/// Outline thickness for circle bodies, in simulation units
const OUTLINE_WIDTH: f32 = 2.0;

/// Minimum half-width used to make zero-radius segments visible
const MIN_SEGMENT_HALF_WIDTH: f32 = 1.0;

/// Generate vertices for every shape currently in the world
pub fn world_vertices(world: &World, circle_segments: u32) -> Vec<Vertex> {
    let mut out = Vec::new();

    for shape in world.static_shapes() {
        let half_width = shape.segment.radius.max(MIN_SEGMENT_HALF_WIDTH);
        tessellate::line(
            &mut out,
            shape.segment.a,
            shape.segment.b,
            half_width,
            colors::STATIC_SHAPE,
        );
    }

    for body in world.bodies() {
        match &body.collider {
            Collider::Circle(circle) => {
                let center = circle.world_center(body.position, body.angle);
                tessellate::circle(
                    &mut out,
                    center,
                    circle.radius,
                    colors::BODY_FILL,
                    circle_segments,
                );
                tessellate::ring(
                    &mut out,
                    center,
                    circle.radius - OUTLINE_WIDTH,
                    circle.radius,
                    colors::BODY_OUTLINE,
                    circle_segments,
                );
                // Radius indicator so rotation is visible
                let rim = center + Vec2::X.rotated(body.angle) * circle.radius;
                tessellate::line(&mut out, center, rim, OUTLINE_WIDTH / 2.0, colors::BODY_OUTLINE);
            }
            Collider::Segment(segment) => {
                let half_width = segment.radius.max(MIN_SEGMENT_HALF_WIDTH);
                tessellate::line(&mut out, segment.a, segment.b, half_width, colors::STATIC_SHAPE);
            }
        }
    }

    out
}
