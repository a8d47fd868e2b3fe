//! Collision detection for 2D shapes
//!
//! Narrow-phase tests between circles and segments. Contact normals point
//! from the second shape toward the first.

use crate::shapes::{Circle, Segment};
use bounce_math::Vec2;

/// A contact point between two shapes
#[derive(Clone, Copy, Debug)]
pub struct Contact {
    /// World-space contact point
    pub point: Vec2,
    /// Contact normal (unit length)
    pub normal: Vec2,
    /// Penetration depth (positive = overlapping)
    pub penetration: f32,
}

impl Contact {
    /// Create a new contact
    pub fn new(point: Vec2, normal: Vec2, penetration: f32) -> Self {
        Self {
            point,
            normal,
            penetration,
        }
    }

    /// Whether the shapes actually overlap
    pub fn is_colliding(&self) -> bool {
        self.penetration > 0.0
    }
}

/// Circle (at a world-space center) vs segment
///
/// Returns a contact with the normal pointing from the segment toward the
/// circle center.
pub fn circle_vs_segment(center: Vec2, radius: f32, segment: &Segment) -> Option<Contact> {
    let closest = segment.closest_point(center);
    let delta = center - closest;
    let dist_sq = delta.length_squared();
    let min_dist = radius + segment.radius;

    if dist_sq >= min_dist * min_dist {
        return None;
    }

    // Center exactly on the segment: push out along the segment's normal
    let normal = if dist_sq > 0.0001 {
        delta.normalized()
    } else {
        (segment.b - segment.a).perp().normalized()
    };
    let dist = dist_sq.sqrt();
    Some(Contact::new(closest, normal, min_dist - dist))
}

/// Circle vs circle, both at world-space centers
///
/// Returns a contact with the normal pointing from `b` toward `a`.
pub fn circle_vs_circle(a_center: Vec2, a: &Circle, b_center: Vec2, b: &Circle) -> Option<Contact> {
    let delta = a_center - b_center;
    let dist_sq = delta.length_squared();
    let min_dist = a.radius + b.radius;

    if dist_sq >= min_dist * min_dist || dist_sq <= 0.0001 {
        return None;
    }

    let dist = dist_sq.sqrt();
    let normal = delta.normalized();
    let point = b_center + normal * b.radius;
    Some(Contact::new(point, normal, min_dist - dist))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vs_segment_hit() {
        // Horizontal wall at y = 10, circle of radius 5 centered at y = 7
        let wall = Segment::new(Vec2::new(0.0, 10.0), Vec2::new(100.0, 10.0), 0.0);
        let contact = circle_vs_segment(Vec2::new(50.0, 7.0), 5.0, &wall)
            .expect("circle overlaps the wall");

        assert!(contact.is_colliding());
        // Normal points from the wall up toward the circle (negative y)
        assert!((contact.normal.x - 0.0).abs() < 0.0001);
        assert!((contact.normal.y - (-1.0)).abs() < 0.0001);
        assert!((contact.penetration - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_circle_vs_segment_miss() {
        let wall = Segment::new(Vec2::new(0.0, 10.0), Vec2::new(100.0, 10.0), 0.0);
        assert!(circle_vs_segment(Vec2::new(50.0, 2.0), 5.0, &wall).is_none());
    }

    #[test]
    fn test_circle_vs_segment_endpoint() {
        // Circle past the right endpoint collides against the endpoint itself
        let wall = Segment::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), 0.0);
        let contact = circle_vs_segment(Vec2::new(13.0, 0.0), 5.0, &wall)
            .expect("circle overlaps the endpoint");

        assert_eq!(contact.point, Vec2::new(10.0, 0.0));
        assert!((contact.normal.x - 1.0).abs() < 0.0001);
        assert!((contact.penetration - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_fat_segment_extends_reach() {
        let wall = Segment::new(Vec2::new(0.0, 10.0), Vec2::new(100.0, 10.0), 3.0);
        // Distance 7 from the centerline: outside a thin wall radius 5,
        // inside a fat one (5 + 3 = 8)
        let contact = circle_vs_segment(Vec2::new(50.0, 3.0), 5.0, &wall);
        assert!(contact.is_some());
        assert!((contact.unwrap().penetration - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_circle_vs_circle_hit() {
        let a = Circle::centered(5.0);
        let b = Circle::centered(5.0);
        let contact = circle_vs_circle(Vec2::new(8.0, 0.0), &a, Vec2::ZERO, &b)
            .expect("circles overlap");

        assert!((contact.normal.x - 1.0).abs() < 0.0001);
        assert!((contact.penetration - 2.0).abs() < 0.0001);
        assert_eq!(contact.point, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn test_circle_vs_circle_miss() {
        let a = Circle::centered(5.0);
        let b = Circle::centered(5.0);
        assert!(circle_vs_circle(Vec2::new(20.0, 0.0), &a, Vec2::ZERO, &b).is_none());
    }

    #[test]
    fn test_coincident_circles_return_none() {
        // Degenerate case: identical centers have no meaningful normal
        let a = Circle::centered(5.0);
        assert!(circle_vs_circle(Vec2::ZERO, &a, Vec2::ZERO, &a).is_none());
    }
}
