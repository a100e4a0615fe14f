use std::env;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use lumen_core::{load_scene, Scene};
use lumen_renderer::{render, RenderConfig};

/// Where the rendered image goes: the scene's OUTPUT name, or the scene
/// file's stem with a `.ppm` extension in the current directory.
fn output_path(scene: &Scene, scene_path: &Path) -> PathBuf {
    match &scene.output {
        Some(name) => PathBuf::from(name),
        None => {
            let stem = scene_path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "output".to_string());
            PathBuf::from(format!("{stem}.ppm"))
        }
    }
}

fn run(scene_path: &Path) -> Result<()> {
    let scene = load_scene(scene_path)
        .with_context(|| format!("Failed to load scene {}", scene_path.display()))?;

    let image = render(&scene, &RenderConfig::default());

    let output = output_path(&scene, scene_path);
    image
        .save_ppm(&output)
        .with_context(|| format!("Failed to write image {}", output.display()))?;

    log::info!("Saved {}", output.display());
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        let program = args.first().map(String::as_str).unwrap_or("lumen");
        eprintln!("Usage: {} <scene-file>", program);
        process::exit(1);
    }

    run(Path::new(&args[1]))
}
