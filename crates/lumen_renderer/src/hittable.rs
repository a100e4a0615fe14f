//! Hittable trait and Hit record for ray-object intersection.

use lumen_core::Material;
use lumen_math::{DVec3, Interval, Ray};

/// Record of a ray-object intersection.
///
/// Borrows the struck object's name and material, so a hit cannot outlive
/// the world it came from. Hits are created per traversal and dropped by
/// the caller.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Point of intersection in world space
    pub p: DVec3,
    /// Unit surface normal at intersection (always points against ray)
    pub normal: DVec3,
    /// Whether the ray hit the outside of the surface
    pub front_face: bool,
    /// Material at the intersection point
    pub material: &'a Material,
    /// Name of the struck object
    pub name: &'a str,
}

impl<'a> Hit<'a> {
    /// Orient an outward normal against the incoming ray.
    ///
    /// Returns `(front_face, normal)`; rays starting inside a closed surface
    /// see its back face and get the flipped normal.
    pub fn face_normal(ray: &Ray, outward_normal: DVec3) -> (bool, DVec3) {
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };
        (front_face, normal)
    }
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Closest intersection with `t` strictly inside `ray_t`, if any.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>>;

    /// Whether anything intersects the ray with `t` strictly inside `ray_t`.
    ///
    /// Implementations may stop at the first intersection found.
    fn occludes(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.hit(ray, ray_t).is_some()
    }
}
