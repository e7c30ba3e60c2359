//! Ray type and operations

use crate::core::types::{IVec3, Vec3};

/// Directions shorter than this cannot be normalized into a ray
pub const MIN_DIRECTION_LENGTH: f32 = 0.0001;

/// A ray defined by origin and unit direction
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray, normalizing `direction`.
    /// Returns None when the direction is (nearly) zero length.
    pub fn new(origin: Vec3, direction: Vec3) -> Option<Self> {
        let length = direction.length();
        if !(length >= MIN_DIRECTION_LENGTH) {
            return None;
        }
        let inv_length = 1.0 / length;
        Some(Self {
            origin,
            direction: direction * inv_length,
        })
    }

    /// Get point along ray at parameter t
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Integer cell containing the point at parameter t
    pub fn cell_at(&self, t: f32) -> IVec3 {
        self.at(t).floor().as_ivec3()
    }
}
