//! Local illumination: ambient, diffuse and specular with shadow tests.

use crate::World;
use lumen_core::{Color, Material};
use lumen_math::{DVec3, Interval, Ray};

/// Compute the local color at a surface point.
///
/// - `point`: world-space surface point
/// - `normal`: unit normal facing the viewer
/// - `view_dir`: unit vector from the point back toward the ray origin
/// - `shadow_epsilon`: shadow rays ignore occluders with `t <= shadow_epsilon`
///
/// Ambient is added once. Each light whose shadow ray reaches it unblocked
/// adds diffuse and specular terms. Channels are not clamped here.
pub fn shade(
    world: &World,
    point: DVec3,
    normal: DVec3,
    view_dir: DVec3,
    material: &Material,
    shadow_epsilon: f64,
) -> Color {
    let mut color = world.ambient() * material.ka * material.color;
    let exponent = i32::try_from(material.shininess).unwrap_or(i32::MAX);

    for light in world.lights() {
        let to_light = light.position - point;
        let distance = to_light.length();
        let Some(light_dir) = to_light.try_normalize() else {
            continue;
        };

        // Only occluders strictly between the point and the light count
        let shadow_ray = Ray::new(point, light_dir);
        if world.any_hit(&shadow_ray, Interval::new(shadow_epsilon, distance)) {
            continue;
        }

        let diffuse = normal.dot(light_dir).max(0.0) * material.kd * light.intensity * material.color;

        let reflected = reflect(-light_dir, normal);
        let specular = reflected.dot(view_dir).max(0.0).powi(exponent) * material.ks * light.intensity;

        color += diffuse + specular;
    }

    color
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: DVec3, n: DVec3) -> DVec3 {
    v - 2.0 * v.dot(n) * n
}
