use anyhow::{Context, Result};
use bell_icon::bell_gen::DEFAULT_OUTPUT;
use bell_icon::scene::{parse_color, Scene, Shape};
use image::io::Reader as ImageReader;

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let img = ImageReader::open(&path)
        .with_context(|| format!("Failed to open image {}", path))?
        .decode()
        .with_context(|| format!("Failed to decode image {}", path))?;

    let rgb_img = img.to_rgb8();
    let scene = Scene::bell()?;

    println!("Checking bell icon in: {}", path);
    println!("Image dimensions: {}x{}", img.width(), img.height());

    if img.width() != scene.size || img.height() != scene.size {
        println!(
            "⚠ Expected {}x{}, the icon may come from another scene",
            scene.size, scene.size
        );
    }

    let mut samples = vec![("background", (0, 0), parse_color(&scene.background)?)];
    for (name, shape) in ["bell body", "top knob", "clapper"].into_iter().zip(&scene.shapes) {
        samples.push((name, scene.absolute(anchor(shape)), parse_color(shape.fill())?));
    }

    let mut matched = 0;
    for (name, (x, y), expected) in &samples {
        let (x, y) = (*x as u32, *y as u32);
        if x >= rgb_img.width() || y >= rgb_img.height() {
            println!("  ⚠ {name}: ({x}, {y}) lies outside the image");
            continue;
        }

        let pixel = rgb_img.get_pixel(x, y);
        if pixel == expected {
            matched += 1;
            println!("  ✓ {name} at ({x}, {y}): RGB [{}, {}, {}]", pixel[0], pixel[1], pixel[2]);
        } else {
            println!(
                "  ⚠ {name} at ({x}, {y}): RGB [{}, {}, {}], expected [{}, {}, {}]",
                pixel[0], pixel[1], pixel[2], expected[0], expected[1], expected[2]
            );
        }
    }

    println!("\n{} out of {} samples match", matched, samples.len());
    if matched == samples.len() {
        println!("✓ Bell icon looks right!");
    } else {
        println!("⚠ Bell icon may not be drawn as expected");
    }

    Ok(())
}

/// Point inside a shape worth sampling, as an offset from the canvas centre
fn anchor(shape: &Shape) -> (i32, i32) {
    match shape {
        Shape::Circle { center, .. } => *center,
        Shape::Polygon { points, .. } => {
            let n = points.len() as i32;
            let (sx, sy) = points
                .iter()
                .fold((0, 0), |(ax, ay), (x, y)| (ax + x, ay + y));
            (sx / n, sy / n)
        }
    }
}
