//! Example: Load and inspect a scene file.
//!
//! Run with: cargo run --example inspect_scene -- scenes/reflection.txt

use std::env;

use lumen_core::load_scene;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <path-to-scene-file>");
        println!("\nExamples:");
        println!("  cargo run --example inspect_scene -- scenes/ambient.txt");
        println!("  cargo run --example inspect_scene -- scenes/reflection.txt");
        return;
    }

    let path = &args[1];
    println!("Loading scene file: {}", path);

    match load_scene(path) {
        Ok(scene) => {
            let v = &scene.view;
            println!("\n=== Scene ===");
            println!("Resolution: {}x{}", scene.resolution.width, scene.resolution.height);
            println!(
                "Near plane: n={} l={} r={} b={} t={}",
                v.near, v.left, v.right, v.bottom, v.top
            );
            println!("Output: {}", scene.output.as_deref().unwrap_or("<none>"));

            println!("\n--- Spheres ---");
            for (i, sphere) in scene.spheres.iter().enumerate() {
                let m = &sphere.material;
                println!(
                    "  [{}] {} at ({:.2}, {:.2}, {:.2}) scale ({:.2}, {:.2}, {:.2})",
                    i,
                    sphere.name,
                    sphere.position.x,
                    sphere.position.y,
                    sphere.position.z,
                    sphere.scale.x,
                    sphere.scale.y,
                    sphere.scale.z
                );
                println!(
                    "       Ka={} Kd={} Ks={} Kr={} n={}",
                    m.ka, m.kd, m.ks, m.kr, m.shininess
                );
            }

            println!("\n--- Lights ---");
            for (i, light) in scene.lights.iter().enumerate() {
                println!(
                    "  [{}] {} at ({:.2}, {:.2}, {:.2}) intensity ({:.2}, {:.2}, {:.2})",
                    i,
                    light.name,
                    light.position.x,
                    light.position.y,
                    light.position.z,
                    light.intensity.x,
                    light.intensity.y,
                    light.intensity.z
                );
            }
        }
        Err(e) => {
            eprintln!("Error loading scene file: {}", e);
        }
    }
}
