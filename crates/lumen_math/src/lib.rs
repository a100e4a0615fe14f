// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod interval;
mod quadratic;
mod ray;
mod transform;

pub use interval::Interval;
pub use quadratic::solve_quadratic;
pub use ray::Ray;
pub use transform::{scale_translation, Mat4Ext};
