//! Surface material properties for collision response

/// Surface material properties for collision response
///
/// Materials define how shapes interact during collisions: elasticity
/// (how much bounce energy is retained) and friction (how much tangential
/// velocity is lost while in contact).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Restitution coefficient (0.0 = no bounce, 1.0 = perfect bounce)
    pub elasticity: f32,
    /// Friction coefficient (0.0 = frictionless, 1.0 = maximum grip)
    pub friction: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            elasticity: 0.0,
            friction: 0.5,
        }
    }
}

impl Material {
    /// Create a new material with the given elasticity and friction
    ///
    /// Negative values are clamped to zero; elasticity above 1.0 would add
    /// energy on every contact, so both values are capped at 1.0.
    pub fn new(elasticity: f32, friction: f32) -> Self {
        Self {
            elasticity: elasticity.clamp(0.0, 1.0),
            friction: friction.clamp(0.0, 1.0),
        }
    }

    /// Combine two materials for collision response
    ///
    /// Both coefficients multiply: a perfectly dead surface kills the bounce
    /// no matter how lively the other side is, and a frictionless surface
    /// slides regardless of the other material.
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            elasticity: self.elasticity * other.elasticity,
            friction: self.friction * other.friction,
        }
    }
}
