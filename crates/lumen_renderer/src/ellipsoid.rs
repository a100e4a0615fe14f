//! Ellipsoid primitive for ray tracing.
//!
//! An ellipsoid is the unit sphere under a per-axis scale and a translation.
//! Rays are moved into the sphere's local space with the inverse transform,
//! intersected against the unit sphere there, and the normal is brought back
//! with the inverse-transpose so it stays correct under non-uniform scale.

use crate::hittable::{Hit, Hittable};
use lumen_core::{Material, Sphere};
use lumen_math::{scale_translation, solve_quadratic, DMat3, DMat4, DVec3, Interval, Mat4Ext, Ray};

/// World-to-local transforms, present only for invertible ellipsoids.
#[derive(Debug, Clone, Copy)]
struct LocalFrame {
    /// World-to-local transform
    to_local: DMat4,
    /// Inverse-transpose of the local-to-world linear part
    normal_matrix: DMat3,
}

/// An ellipsoid ready for intersection tests.
#[derive(Debug, Clone)]
pub struct Ellipsoid {
    name: String,
    material: Material,
    frame: Option<LocalFrame>,
}

impl Ellipsoid {
    /// Create an ellipsoid from its placement and material.
    ///
    /// The material is clamped to valid ranges. A singular transform (a zero
    /// scale component) is logged and the ellipsoid never reports a hit.
    pub fn new(name: impl Into<String>, position: DVec3, scale: DVec3, material: Material) -> Self {
        Self::from_transform(name.into(), scale_translation(scale, position), material)
    }

    /// Prepare a scene sphere for rendering.
    pub fn from_sphere(sphere: &Sphere) -> Self {
        Self::from_transform(sphere.name.clone(), sphere.model_matrix(), sphere.material)
    }

    fn from_transform(name: String, to_world: DMat4, material: Material) -> Self {
        let frame = match (to_world.try_inverse(), to_world.normal_matrix()) {
            (Some(to_local), Some(normal_matrix)) => Some(LocalFrame {
                to_local,
                normal_matrix,
            }),
            _ => {
                log::warn!("Sphere {} has a singular transform; treating it as a miss", name);
                None
            }
        };

        Self {
            name,
            material: material.clamped(),
            frame,
        }
    }

    /// Get the object's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the clamped material.
    pub fn material(&self) -> &Material {
        &self.material
    }

    /// True when the transform could not be inverted.
    pub fn is_singular(&self) -> bool {
        self.frame.is_none()
    }
}

impl Hittable for Ellipsoid {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        let frame = self.frame.as_ref()?;

        // Ray in local space: S' = M^-1 S (w=1), c' = M^-1 c (w=0)
        let s = frame.to_local.transform_point3(ray.origin());
        let c = frame.to_local.transform_vector3(ray.direction());

        let a = c.dot(c);
        let b = 2.0 * s.dot(c);
        let cc = s.dot(s) - 1.0;

        // x2 <= x1; prefer the nearer root when both are in range
        let (x1, x2) = solve_quadratic(a, b, cc)?;
        let t = if ray_t.surrounds(x2) {
            x2
        } else if ray_t.surrounds(x1) {
            x1
        } else {
            return None;
        };

        // On the unit sphere the local point is its own outward normal
        let local_normal = (s + t * c).try_normalize()?;
        let outward_normal = (frame.normal_matrix * local_normal).try_normalize()?;
        let (front_face, normal) = Hit::face_normal(ray, outward_normal);

        Some(Hit {
            t,
            p: ray.at(t),
            normal,
            front_face,
            material: &self.material,
            name: &self.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::Color;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn grey() -> Material {
        Material::new(Color::splat(0.5))
    }

    #[test]
    fn test_unit_sphere_hit() {
        let sphere = Ellipsoid::new("s", DVec3::new(0.0, 0.0, -5.0), DVec3::ONE, grey());
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0));

        let hit = sphere.hit(&ray, Interval::from_min(1e-6)).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-12); // Should hit at t=4
        assert!((hit.p - DVec3::new(0.0, 0.0, -4.0)).length() < 1e-12);
        assert!((hit.normal - DVec3::Z).length() < 1e-12);
        assert!(hit.front_face);
        assert_eq!(hit.name, "s");
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Ellipsoid::new("s", DVec3::new(0.0, 0.0, -5.0), DVec3::ONE, grey());

        // Ray pointing away from sphere
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 1.0, 0.0));
        assert!(sphere.hit(&ray, Interval::from_min(1e-6)).is_none());

        // Ray passing beside it
        let ray = Ray::new(DVec3::new(1.5, 0.0, 0.0), DVec3::new(0.0, 0.0, -1.0));
        assert!(sphere.hit(&ray, Interval::from_min(1e-6)).is_none());
    }

    #[test]
    fn test_ellipsoid_normal_uses_inverse_transpose() {
        let egg = Ellipsoid::new("egg", DVec3::ZERO, DVec3::new(2.0, 1.0, 1.0), grey());

        // Shoot down -X at the tip (2, 0, 0)
        let ray = Ray::new(DVec3::new(5.0, 0.0, 0.0), DVec3::new(-1.0, 0.0, 0.0));
        let hit = egg.hit(&ray, Interval::from_min(1e-6)).unwrap();

        assert!((hit.p - DVec3::new(2.0, 0.0, 0.0)).length() < 1e-12);
        assert!((hit.normal - DVec3::X).length() < 1e-12);
    }

    #[test]
    fn test_ellipsoid_off_axis_normal_is_perpendicular() {
        let egg = Ellipsoid::new("egg", DVec3::new(1.0, 2.0, -3.0), DVec3::new(3.0, 1.0, 0.5), grey());

        let target = DVec3::new(1.0, 2.0, -3.0) + DVec3::new(1.0, 0.5, 0.1);
        let ray = Ray::between(DVec3::new(10.0, 8.0, 4.0), target);
        let hit = egg.hit(&ray, Interval::from_min(1e-6)).unwrap();

        // Gradient of (x/a)^2 + (y/b)^2 + (z/c)^2 at the hit point
        let local = hit.p - DVec3::new(1.0, 2.0, -3.0);
        let gradient = (local / DVec3::new(9.0, 1.0, 0.25)).normalize();
        assert!((hit.normal - gradient).length() < 1e-9);
        assert!((hit.normal.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_random_ellipsoid_normals_match_gradient() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            let center = DVec3::new(
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-5.0..5.0),
                rng.gen_range(-20.0..-10.0),
            );
            let scale = DVec3::new(
                rng.gen_range(0.2..4.0),
                rng.gen_range(0.2..4.0),
                rng.gen_range(0.2..4.0),
            );
            let egg = Ellipsoid::new("egg", center, scale, grey());

            // Aim from the origin at the center, so the ray always enters
            let ray = Ray::between(DVec3::ZERO, center);
            let hit = egg.hit(&ray, Interval::from_min(1e-6)).unwrap();

            let local = hit.p - center;
            let gradient = (local / (scale * scale)).normalize();
            assert!((hit.normal - gradient).length() < 1e-8);
            assert!(hit.front_face);
        }
    }

    #[test]
    fn test_near_cutoff_skips_front_root() {
        let sphere = Ellipsoid::new("s", DVec3::new(0.0, 0.0, -2.0), DVec3::ONE, grey());
        // Roots at t=1 and t=3; t=1 is the cutoff itself
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0));

        let hit = sphere.hit(&ray, Interval::from_min(1.0)).unwrap();
        assert!((hit.t - 3.0).abs() < 1e-12);
        // Far wall seen from inside: normal flipped toward the viewer
        assert!(!hit.front_face);
        assert!((hit.normal - DVec3::Z).length() < 1e-12);

        // Both roots behind the cutoff
        assert!(sphere.hit(&ray, Interval::from_min(3.5)).is_none());
    }

    #[test]
    fn test_upper_bound_is_exclusive() {
        let sphere = Ellipsoid::new("s", DVec3::new(0.0, 0.0, -5.0), DVec3::ONE, grey());
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0));

        assert!(sphere.hit(&ray, Interval::new(1e-6, 4.0)).is_none());
        assert!(sphere.hit(&ray, Interval::new(1e-6, 4.5)).is_some());
    }

    #[test]
    fn test_singular_scale_never_hits() {
        let flat = Ellipsoid::new("flat", DVec3::new(0.0, 0.0, -5.0), DVec3::new(1.0, 0.0, 1.0), grey());
        assert!(flat.is_singular());

        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0));
        assert!(flat.hit(&ray, Interval::from_min(1e-6)).is_none());
    }

    #[test]
    fn test_material_is_clamped() {
        let hot = Material {
            kd: 3.0,
            kr: -1.0,
            ..grey()
        };
        let sphere = Ellipsoid::new("hot", DVec3::ZERO, DVec3::ONE, hot);
        assert_eq!(sphere.material().kd, 1.0);
        assert_eq!(sphere.material().kr, 0.0);
    }

    #[test]
    fn test_from_sphere() {
        let source = Sphere::new("s1", DVec3::new(0.0, 0.0, -4.0), DVec3::splat(2.0), grey());
        let ellipsoid = Ellipsoid::from_sphere(&source);

        assert_eq!(ellipsoid.name(), "s1");
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, -1.0));
        let hit = ellipsoid.hit(&ray, Interval::from_min(1e-6)).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-12);
    }
}
