//! High-level scene loading.
//!
//! This module provides the main entry point for loading scene files and
//! turning the parsed directives into a validated [`Scene`].

use std::path::Path;

use thiserror::Error;

use crate::parser::{parse_scene, Directive, ParseError};
use crate::scene::{Color, Resolution, Scene, SceneError, View};

/// Sphere count the scene format was designed for.
pub const MAX_SPHERES: usize = 15;

/// Light count the scene format was designed for.
pub const MAX_LIGHTS: usize = 10;

/// Errors that can occur during scene loading.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Missing required directive: {0}")]
    Missing(&'static str),

    #[error("Invalid scene: {0}")]
    Invalid(#[from] SceneError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load a scene file from disk.
///
/// # Example
///
/// ```ignore
/// use lumen_core::load_scene;
///
/// let scene = load_scene("scenes/ambient.txt")?;
/// println!("Loaded {} spheres, {} lights",
///     scene.sphere_count(),
///     scene.light_count());
/// ```
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    log::info!("Loading scene from {}", path.display());
    load_scene_from_str(&content)
}

/// Load a scene from file contents already in memory.
pub fn load_scene_from_str(content: &str) -> LoadResult<Scene> {
    let directives = parse_scene(content)?;
    let scene = build_scene(directives)?;
    scene.validate()?;

    warn_out_of_range(&scene);
    log::info!(
        "Loaded scene: {}x{}, {} spheres, {} lights",
        scene.resolution.width,
        scene.resolution.height,
        scene.sphere_count(),
        scene.light_count()
    );

    Ok(scene)
}

/// Fold directives into a scene. Later scalar directives override earlier
/// ones; spheres and lights accumulate in file order.
fn build_scene(directives: Vec<Directive>) -> LoadResult<Scene> {
    let mut near = None;
    let mut left = None;
    let mut right = None;
    let mut bottom = None;
    let mut top = None;
    let mut res = None;

    let mut scene = Scene::default();

    for directive in directives {
        match directive {
            Directive::Near(n) => near = Some(n),
            Directive::Left(l) => left = Some(l),
            Directive::Right(r) => right = Some(r),
            Directive::Bottom(b) => bottom = Some(b),
            Directive::Top(t) => top = Some(t),
            Directive::Res(x, y) => res = Some(Resolution::new(x, y)),
            Directive::Sphere(sphere) => {
                scene.add_sphere(sphere);
            }
            Directive::Light(light) => {
                scene.add_light(light);
            }
            Directive::Back(color) => scene.background = color,
            Directive::Ambient(intensity) => scene.ambient = intensity,
            Directive::Output(name) => scene.output = Some(name),
        }
    }

    scene.view = View {
        near: near.ok_or(LoadError::Missing("NEAR"))?,
        left: left.ok_or(LoadError::Missing("LEFT"))?,
        right: right.ok_or(LoadError::Missing("RIGHT"))?,
        bottom: bottom.ok_or(LoadError::Missing("BOTTOM"))?,
        top: top.ok_or(LoadError::Missing("TOP"))?,
    };
    scene.resolution = res.ok_or(LoadError::Missing("RES"))?;

    Ok(scene)
}

/// Log values the renderer will clamp.
fn warn_out_of_range(scene: &Scene) {
    let unit = |c: Color| c.cmpge(Color::ZERO).all() && c.cmple(Color::ONE).all();

    if scene.sphere_count() > MAX_SPHERES {
        log::warn!(
            "Scene has {} spheres (format allows {})",
            scene.sphere_count(),
            MAX_SPHERES
        );
    }
    if scene.light_count() > MAX_LIGHTS {
        log::warn!(
            "Scene has {} lights (format allows {})",
            scene.light_count(),
            MAX_LIGHTS
        );
    }

    for sphere in &scene.spheres {
        if !sphere.material.is_in_range() {
            log::warn!("Sphere {} has material values outside [0, 1]; they will be clamped", sphere.name);
        }
    }
    for light in &scene.lights {
        if !unit(light.intensity) {
            log::warn!("Light {} intensity is outside [0, 1]", light.name);
        }
    }
    if !unit(scene.background) {
        log::warn!("Background color is outside [0, 1]");
    }
    if !unit(scene.ambient) {
        log::warn!("Ambient intensity is outside [0, 1]");
    }
}
