//! Core Whitted-style renderer.
//!
//! Implements recursive ray tracing with:
//! - Phong local illumination with hard shadows
//! - Mirror reflection up to a fixed bounce depth
//! - Parallel rendering over image rows with rayon

use std::time::Instant;

use crate::shading::{reflect, shade};
use crate::{Camera, ImageBuffer, World};
use lumen_core::{Color, Scene};
use lumen_math::{Interval, Ray};
use rayon::prelude::*;

/// Deepest recursion level that still contributes light.
///
/// Primary rays are traced at depth 1, so three levels means a primary hit
/// plus two mirror bounces.
pub const MAX_DEPTH: u32 = 3;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum recursion depth; deeper rays return black
    pub max_depth: u32,
    /// Minimum t for primary rays (1.0 is the near plane)
    pub primary_min_t: f64,
    /// Minimum t for reflected rays, to skip the reflecting surface
    pub reflection_epsilon: f64,
    /// Minimum t for shadow rays, to skip the shaded surface
    pub shadow_epsilon: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH,
            primary_min_t: 1.0,
            reflection_epsilon: 1e-6,
            shadow_epsilon: 1e-6,
        }
    }
}

/// Compute the color seen by a ray.
///
/// Depth 1 is a primary ray and uses `primary_min_t`; deeper calls are
/// reflections and use `reflection_epsilon`. Rays beyond `max_depth`
/// contribute black, misses return the background.
pub fn ray_color(ray: &Ray, world: &World, depth: u32, config: &RenderConfig) -> Color {
    debug_assert!(depth >= 1, "primary rays start at depth 1");

    // If we've exceeded max depth, return black (no light)
    if depth > config.max_depth {
        return Color::ZERO;
    }

    let minimum_t = if depth <= 1 {
        config.primary_min_t
    } else {
        config.reflection_epsilon
    };

    let Some(hit) = world.nearest_hit(ray, minimum_t) else {
        return world.background();
    };

    let incoming = ray.direction().normalize();
    let material = hit.material;
    let local = shade(world, hit.p, hit.normal, -incoming, material, config.shadow_epsilon);

    if material.kr <= 0.0 {
        return local;
    }

    let reflected = Ray::new(hit.p, reflect(incoming, hit.normal));
    local + material.kr * ray_color(&reflected, world, depth + 1, config)
}

/// Clamp a value to [0, 1] range.
#[inline]
pub fn clamp_01(x: f64) -> f64 {
    Interval::UNIT.clamp(x)
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let r = (255.0 * clamp_01(color.x)) as u8;
    let g = (255.0 * clamp_01(color.y)) as u8;
    let b = (255.0 * clamp_01(color.z)) as u8;
    [r, g, b]
}

/// Render a single pixel.
pub fn render_pixel(camera: &Camera, world: &World, i: u32, j: u32, config: &RenderConfig) -> Color {
    let ray = camera.get_ray(i, j);
    ray_color(&ray, world, 1, config)
}

/// Render a prepared world through a camera.
///
/// Rows are rendered in parallel; each worker writes only its own row of
/// the buffer.
pub fn render_world(camera: &Camera, world: &World, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width, camera.image_height);
    let row_len = 3 * camera.image_width as usize;
    if row_len == 0 {
        return image;
    }

    image
        .pixels
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(j, row)| {
            for (i, rgb) in row.chunks_exact_mut(3).enumerate() {
                let color = render_pixel(camera, world, i as u32, j as u32, config);
                rgb.copy_from_slice(&color_to_rgb(color));
            }
        });

    image
}

/// Render the entire scene to an image buffer.
pub fn render(scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let camera = Camera::from_scene(scene);
    let world = World::from_scene(scene);

    log::info!(
        "Rendering {}x{} (max depth {}, {} threads)",
        camera.image_width,
        camera.image_height,
        config.max_depth,
        rayon::current_num_threads()
    );

    let start = Instant::now();
    let image = render_world(&camera, &world, config);
    log::info!("Rendered in {:?}", start.elapsed());

    image
}
