//! Lumen Core - Scene model and scene file loading.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Light`, `Material`, `View`
//! - **Scene files**: line-oriented parsing and validated loading
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::load_scene;
//!
//! let scene = load_scene("scene.txt")?;
//! println!("Loaded {} spheres, {} lights",
//!     scene.sphere_count(),
//!     scene.light_count());
//! ```

pub mod loader;
pub mod parser;
pub mod scene;

// Re-export commonly used types
pub use loader::{load_scene, load_scene_from_str, LoadError, LoadResult};
pub use parser::{parse_scene, Directive, ParseError};
pub use scene::{Color, Light, Material, Resolution, Scene, SceneError, Sphere, View};
