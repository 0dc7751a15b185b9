use crate::canvas::Canvas;
use crate::scene::{parse_color, Scene, Shape};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Where the icon lands when no output is given on the command line
pub const DEFAULT_OUTPUT: &str = "assets/bell_icon.png";

/// Follow-up command that turns the asset into platform launcher icons
pub const NEXT_STEP: &str = "flutter pub run flutter_launcher_icons";

/// Settings for one generation run
#[derive(Debug)]
pub struct Args {
    /// PNG file to create or overwrite; its directory must already exist
    pub output: PathBuf,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

pub fn generate_bell_icon(args: Args) -> Result<()> {
    let scene = Scene::bell()?;
    let canvas = render_scene(&scene)?;

    save_png(&canvas, &args.output)?;

    println!(
        "✓ Bell icon created successfully at {}",
        args.output.display()
    );
    println!("  Run: {NEXT_STEP}");
    Ok(())
}

/// Paint every shape of `scene`, in order, onto a fresh canvas.
pub fn render_scene(scene: &Scene) -> Result<Canvas> {
    let background =
        parse_color(&scene.background).context("Bad background colour in scene")?;
    let mut canvas = Canvas::new(scene.size, background);

    for shape in &scene.shapes {
        let fill = parse_color(shape.fill())?;

        match shape {
            Shape::Polygon { points, .. } => {
                let points: Vec<(i32, i32)> =
                    points.iter().map(|&offset| scene.absolute(offset)).collect();
                canvas.fill_polygon(&points, fill);
            }
            Shape::Circle { center, radius, .. } => {
                canvas.fill_circle(scene.absolute(*center), *radius, fill);
            }
        }
    }

    Ok(canvas)
}

/// Render the bell scene without touching the filesystem.
pub fn render_bell() -> Result<Canvas> {
    render_scene(&Scene::bell()?)
}

// The PNG is encoded before the file is opened, so a failed encode never
// leaves a truncated file behind. The parent directory is not created.
fn save_png(canvas: &Canvas, path: &Path) -> Result<()> {
    let bytes = canvas.to_png()?;
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write PNG file {}", path.display()))?;
    Ok(())
}
