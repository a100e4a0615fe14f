//! Simple ray tracer example.
//!
//! Builds a small scene in code, renders it and saves to PPM format.

use lumen_core::{Color, Light, Material, Resolution, Scene, Sphere, View};
use lumen_renderer::{render, DVec3, RenderConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Lumen Ray Tracer - Simple Example");
    println!("=================================");

    let scene = build_scene();
    let config = RenderConfig::default();

    let start = std::time::Instant::now();
    let image = render(&scene, &config);
    println!("Rendered in {:?}", start.elapsed());

    let filename = "simple_render.ppm";
    if let Err(e) = image.save_ppm(filename) {
        eprintln!("Failed to save image: {}", e);
        std::process::exit(1);
    }
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    let mut scene = Scene::new(View::default(), Resolution::new(600, 600));
    scene.background = Color::new(0.1, 0.1, 0.15);
    scene.ambient = Color::splat(0.2);

    // Ground: a wide, flat ellipsoid
    scene.add_sphere(Sphere::new(
        "ground",
        DVec3::new(0.0, -3.0, -10.0),
        DVec3::new(20.0, 1.0, 20.0),
        Material {
            color: Color::new(0.5, 0.5, 0.5),
            ka: 1.0,
            kd: 0.8,
            ks: 0.1,
            kr: 0.3,
            shininess: 10,
        },
    ));

    scene.add_sphere(Sphere::new(
        "red",
        DVec3::new(-1.5, -0.5, -9.0),
        DVec3::new(1.0, 1.5, 1.0),
        Material {
            color: Color::new(0.9, 0.1, 0.1),
            ka: 1.0,
            kd: 0.9,
            ks: 0.5,
            kr: 0.0,
            shininess: 50,
        },
    ));

    scene.add_sphere(Sphere::new(
        "mirror",
        DVec3::new(1.5, -0.5, -10.0),
        DVec3::splat(1.5),
        Material {
            color: Color::ONE,
            ka: 0.1,
            kd: 0.1,
            ks: 0.9,
            kr: 0.8,
            shininess: 100,
        },
    ));

    scene.add_light(Light::new("key", DVec3::new(10.0, 10.0, 0.0), Color::splat(0.8)));
    scene.add_light(Light::new("fill", DVec3::new(-10.0, 5.0, -5.0), Color::splat(0.3)));

    scene
}
