//! Scene model for Lumen.
//!
//! A scene is a fixed pinhole camera looking down -Z from the origin, a set
//! of ellipsoids (unit spheres under a per-axis scale and a translation) and
//! a set of point lights. Everything here is immutable once loaded; the
//! renderer only reads it.

use lumen_math::{scale_translation, DMat4, DVec3};
use thiserror::Error;

/// Color type alias (RGB values typically 0-1)
pub type Color = DVec3;

/// Phong material coefficients of a sphere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Diffuse color (RGB, 0-1)
    pub color: Color,

    /// Ambient weight
    pub ka: f64,

    /// Diffuse weight
    pub kd: f64,

    /// Specular weight
    pub ks: f64,

    /// Reflective weight (0 disables mirror bounces)
    pub kr: f64,

    /// Specular exponent
    pub shininess: u32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::splat(0.5), // Grey default
            ka: 0.0,
            kd: 0.0,
            ks: 0.0,
            kr: 0.0,
            shininess: 1,
        }
    }
}

impl Material {
    /// Create a material with just a color and full ambient response.
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ka: 1.0,
            ..Default::default()
        }
    }

    /// Copy with color and coefficients clamped to [0, 1] and the exponent
    /// raised to at least 1.
    pub fn clamped(&self) -> Self {
        Self {
            color: self.color.clamp(Color::ZERO, Color::ONE),
            ka: self.ka.clamp(0.0, 1.0),
            kd: self.kd.clamp(0.0, 1.0),
            ks: self.ks.clamp(0.0, 1.0),
            kr: self.kr.clamp(0.0, 1.0),
            shininess: self.shininess.max(1),
        }
    }

    /// Check whether any value lies outside its documented range.
    pub fn is_in_range(&self) -> bool {
        *self == self.clamped()
    }
}

/// An ellipsoid: the unit sphere scaled per axis and moved to `position`.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    /// Sphere name (from the scene file)
    pub name: String,

    /// World position (translation)
    pub position: DVec3,

    /// Per-axis scale
    pub scale: DVec3,

    /// Surface material
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(name: impl Into<String>, position: DVec3, scale: DVec3, material: Material) -> Self {
        Self {
            name: name.into(),
            position,
            scale,
            material,
        }
    }

    /// Object-to-world matrix: scale, then translate.
    pub fn model_matrix(&self) -> DMat4 {
        scale_translation(self.scale, self.position)
    }
}

/// A point light with constant intensity (no attenuation).
#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    /// Light name (from the scene file)
    pub name: String,

    /// World position
    pub position: DVec3,

    /// Per-channel intensity (0-1)
    pub intensity: Color,
}

impl Light {
    /// Create a new point light.
    pub fn new(name: impl Into<String>, position: DVec3, intensity: Color) -> Self {
        Self {
            name: name.into(),
            position,
            intensity,
        }
    }
}

/// Near-plane window of the camera.
///
/// The camera sits at the origin looking down -Z; the image plane is at
/// `z = -near` and spans `[left, right] x [bottom, top]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View {
    pub near: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl Default for View {
    fn default() -> Self {
        Self {
            near: 1.0,
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
        }
    }
}

/// Image resolution in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total pixel count.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Violations of the scene invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Resolution must be positive, got {width}x{height}")]
    EmptyResolution { width: u32, height: u32 },

    #[error("Near plane distance must be positive, got {0}")]
    InvalidNear(f64),

    #[error("LEFT ({left}) must be less than RIGHT ({right})")]
    InvalidHorizontalBounds { left: f64, right: f64 },

    #[error("BOTTOM ({bottom}) must be less than TOP ({top})")]
    InvalidVerticalBounds { bottom: f64, top: f64 },
}

/// A complete scene: camera window, resolution, objects and lights.
#[derive(Clone, Debug)]
pub struct Scene {
    /// Near-plane window
    pub view: View,

    /// Output resolution
    pub resolution: Resolution,

    /// Ellipsoids in declaration order
    pub spheres: Vec<Sphere>,

    /// Point lights in declaration order
    pub lights: Vec<Light>,

    /// Color returned by rays that hit nothing
    pub background: Color,

    /// Ambient light intensity
    pub ambient: Color,

    /// Output image name, if the scene names one
    pub output: Option<String>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            view: View::default(),
            resolution: Resolution::new(1, 1),
            spheres: Vec::new(),
            lights: Vec::new(),
            background: Color::ZERO,
            ambient: Color::ZERO,
            output: None,
        }
    }
}

impl Scene {
    /// Create an empty scene with the given window and resolution.
    pub fn new(view: View, resolution: Resolution) -> Self {
        Self {
            view,
            resolution,
            ..Default::default()
        }
    }

    /// Add a sphere and return its index.
    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        self.spheres.push(sphere);
        self.spheres.len() - 1
    }

    /// Add a light and return its index.
    pub fn add_light(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    /// Get sphere count.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Check the structural invariants the renderer relies on.
    ///
    /// Out-of-range colors and coefficients are not reported here; the
    /// renderer clamps them.
    pub fn validate(&self) -> Result<(), SceneError> {
        let Resolution { width, height } = self.resolution;
        if width == 0 || height == 0 {
            return Err(SceneError::EmptyResolution { width, height });
        }

        let v = &self.view;
        if !(v.near > 0.0) {
            return Err(SceneError::InvalidNear(v.near));
        }
        if !(v.left < v.right) {
            return Err(SceneError::InvalidHorizontalBounds {
                left: v.left,
                right: v.right,
            });
        }
        if !(v.bottom < v.top) {
            return Err(SceneError::InvalidVerticalBounds {
                bottom: v.bottom,
                top: v.top,
            });
        }

        Ok(())
    }
}
