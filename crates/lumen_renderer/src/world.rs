//! The renderable world: prepared ellipsoids plus lighting.
//!
//! Traversal is a linear scan over the objects in declaration order. When
//! two objects report the same `t`, the one declared first wins.

use crate::ellipsoid::Ellipsoid;
use crate::hittable::{Hit, Hittable};
use lumen_core::{Color, Light, Scene};
use lumen_math::{Interval, Ray};

/// Everything a ray can interact with.
#[derive(Debug, Clone, Default)]
pub struct World {
    objects: Vec<Ellipsoid>,
    lights: Vec<Light>,
    ambient: Color,
    background: Color,
}

impl World {
    /// Create an empty world with black background and no ambient light.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepare every sphere and light of a scene.
    pub fn from_scene(scene: &Scene) -> Self {
        let objects: Vec<Ellipsoid> = scene.spheres.iter().map(Ellipsoid::from_sphere).collect();
        let singular = objects.iter().filter(|o| o.is_singular()).count();

        log::debug!(
            "Prepared world: {} objects ({} singular), {} lights",
            objects.len(),
            singular,
            scene.lights.len()
        );

        Self {
            objects,
            lights: scene.lights.clone(),
            ambient: scene.ambient,
            background: scene.background,
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Set the ambient light intensity.
    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.ambient = ambient;
        self
    }

    /// Add an object to the world.
    pub fn add(&mut self, object: Ellipsoid) {
        self.objects.push(object);
    }

    /// Add a light to the world.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the world has no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Closest hit with `t > minimum_t`.
    pub fn nearest_hit(&self, ray: &Ray, minimum_t: f64) -> Option<Hit<'_>> {
        self.hit(ray, Interval::from_min(minimum_t))
    }

    /// Whether any object intersects the ray with `t` strictly inside
    /// `ray_t`. Stops at the first occluder.
    pub fn any_hit(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.occludes(ray, ray_t)
    }
}

impl Hittable for World {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<Hit<'_>> {
        let mut closest: Option<Hit<'_>> = None;
        let mut closest_so_far = ray_t.max;

        for object in &self.objects {
            // Strict upper bound: an equal t never replaces an earlier object
            if let Some(hit) = object.hit(ray, ray_t.with_max(closest_so_far)) {
                closest_so_far = hit.t;
                closest = Some(hit);
            }
        }

        closest
    }

    fn occludes(&self, ray: &Ray, ray_t: Interval) -> bool {
        self.objects.iter().any(|object| object.occludes(ray, ray_t))
    }
}
