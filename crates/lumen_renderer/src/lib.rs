//! Lumen Renderer - CPU Whitted-style ray tracing
//!
//! A recursive ray tracer for scaled spheres (ellipsoids) lit by point
//! lights, seen through a fixed pinhole camera.

mod camera;
mod ellipsoid;
mod hittable;
mod output;
mod renderer;
mod shading;
mod world;

pub use camera::Camera;
pub use ellipsoid::Ellipsoid;
pub use hittable::{Hit, Hittable};
pub use output::ImageBuffer;
pub use renderer::{color_to_rgb, ray_color, render, render_pixel, render_world, RenderConfig, MAX_DEPTH};
pub use shading::{reflect, shade};
pub use world::World;

/// Re-export vector and ray types from lumen_math
pub use lumen_math::{DVec3, Interval, Ray};
