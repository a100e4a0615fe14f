use crate::DVec3;

/// A ray in 3D space with an origin and a direction.
///
/// The direction is not normalized. Its magnitude sets the scale of the hit
/// parameter `t`, so a primary ray built as `pixel - eye` reaches the near
/// plane at exactly `t = 1`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: DVec3, direction: DVec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray from `from` pointing at `to`.
    ///
    /// The direction is `to - from`, so `at(1.0) == to`.
    pub fn between(from: DVec3, to: DVec3) -> Self {
        Self::new(from, to - from)
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> DVec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.direction * t
    }
}
