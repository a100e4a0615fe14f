// Transform utilities for DMat4
//
// Extends glam::DMat4 with the pieces ray tracing against transformed unit
// spheres needs. glam already provides transform_point3(), transform_vector3()
// and inverse(); inverse() does not report singular input, so try_inverse()
// checks the determinant first.

use glam::{DMat3, DMat4, DQuat, DVec3};

/// Build an object-to-world matrix from a per-axis scale and a translation.
///
/// Scale is applied first, then translation.
pub fn scale_translation(scale: DVec3, translation: DVec3) -> DMat4 {
    DMat4::from_scale_rotation_translation(scale, DQuat::IDENTITY, translation)
}

/// Extension trait for DMat4 to provide additional transform utilities
pub trait Mat4Ext {
    /// Invert the matrix, or `None` if it is singular or not finite.
    fn try_inverse(&self) -> Option<DMat4>;

    /// Inverse-transpose of the linear (upper 3x3) part.
    ///
    /// Normals must be transformed by this matrix rather than the matrix
    /// itself so they stay perpendicular under non-uniform scale.
    fn normal_matrix(&self) -> Option<DMat3>;

    /// Transform a surface normal and re-normalize it.
    fn transform_normal(&self, normal: DVec3) -> Option<DVec3>;
}

impl Mat4Ext for DMat4 {
    fn try_inverse(&self) -> Option<DMat4> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let inverse = self.inverse();
        inverse.is_finite().then_some(inverse)
    }

    fn normal_matrix(&self) -> Option<DMat3> {
        let linear = DMat3::from_mat4(*self);
        let det = linear.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        Some(linear.inverse().transpose())
    }

    fn transform_normal(&self, normal: DVec3) -> Option<DVec3> {
        let n = self.normal_matrix()? * normal;
        n.try_normalize()
    }
}
