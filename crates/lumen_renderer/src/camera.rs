//! Pinhole camera for primary ray generation.

use lumen_core::{Resolution, Scene, View};
use lumen_math::{DVec3, Ray};

/// Fixed pinhole camera at the origin looking down -Z.
///
/// Pixel `(i, j)` maps to the center of its cell on the near plane; row
/// `j = 0` is the bottom of the window.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub image_width: u32,
    pub image_height: u32,

    // Cached computed values
    pixel00_loc: DVec3,
    pixel_delta_u: f64,
    pixel_delta_v: f64,
}

impl Camera {
    /// Create a camera for a near-plane window and resolution.
    pub fn new(view: View, resolution: Resolution) -> Self {
        let width = resolution.width.max(1);
        let height = resolution.height.max(1);

        let pixel_delta_u = (view.right - view.left) / width as f64;
        let pixel_delta_v = (view.top - view.bottom) / height as f64;
        let pixel00_loc = DVec3::new(
            view.left + 0.5 * pixel_delta_u,
            view.bottom + 0.5 * pixel_delta_v,
            -view.near,
        );

        Self {
            image_width: resolution.width,
            image_height: resolution.height,
            pixel00_loc,
            pixel_delta_u,
            pixel_delta_v,
        }
    }

    /// Create the camera described by a scene.
    pub fn from_scene(scene: &Scene) -> Self {
        Self::new(scene.view, scene.resolution)
    }

    /// Camera position (always the world origin).
    pub fn eye(&self) -> DVec3 {
        DVec3::ZERO
    }

    /// Near-plane point at the center of pixel (i, j).
    pub fn pixel_center(&self, i: u32, j: u32) -> DVec3 {
        self.pixel00_loc
            + DVec3::new(
                i as f64 * self.pixel_delta_u,
                j as f64 * self.pixel_delta_v,
                0.0,
            )
    }

    /// Generate the primary ray for pixel (i, j).
    ///
    /// The direction is `pixel - eye`, left un-normalized, so the near plane
    /// sits at `t = 1`.
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        Ray::between(self.eye(), self.pixel_center(i, j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(width: u32, height: u32) -> Camera {
        Camera::new(View::default(), Resolution::new(width, height))
    }

    #[test]
    fn test_pixel_centers() {
        let cam = camera(2, 2);

        assert_eq!(cam.pixel_center(0, 0), DVec3::new(-0.5, -0.5, -1.0));
        assert_eq!(cam.pixel_center(1, 0), DVec3::new(0.5, -0.5, -1.0));
        assert_eq!(cam.pixel_center(0, 1), DVec3::new(-0.5, 0.5, -1.0));
        assert_eq!(cam.pixel_center(1, 1), DVec3::new(0.5, 0.5, -1.0));
    }

    #[test]
    fn test_asymmetric_window() {
        let view = View {
            near: 2.0,
            left: 0.0,
            right: 4.0,
            bottom: -1.0,
            top: 0.0,
        };
        let cam = Camera::new(view, Resolution::new(4, 1));

        assert_eq!(cam.pixel_center(0, 0), DVec3::new(0.5, -0.5, -2.0));
        assert_eq!(cam.pixel_center(3, 0), DVec3::new(3.5, -0.5, -2.0));
    }

    #[test]
    fn test_ray_reaches_near_plane_at_t_one() {
        let cam = camera(3, 5);
        let ray = cam.get_ray(2, 4);

        assert_eq!(ray.origin(), DVec3::ZERO);
        assert_eq!(ray.at(1.0), cam.pixel_center(2, 4));
        assert!(ray.direction().z < 0.0);
    }
}
