//! Scene description for the bell icon
//!
//! A scene is the ordered list of filled shapes painted onto a square canvas.
//! Coordinates are offsets from the canvas centre and colours are CSS colour
//! strings, so the table below reads the same way the artwork was sketched.

use anyhow::{anyhow, bail, Context, Result};
use image::Rgb;
use serde::Deserialize;
use std::str::FromStr;

const BELL_SCENE: &str = r##"
{
  "size": 512,
  "background": "white",
  "shapes": [
    {
      "kind": "polygon",
      "fill": "#FFC107",
      "points": [[0, -100], [-80, -60], [-70, 80], [70, 80], [80, -60]]
    },
    { "kind": "circle", "fill": "#FFC107", "center": [0, -110], "radius": 20 },
    { "kind": "circle", "fill": "#FFA000", "center": [0, 60], "radius": 25 }
  ]
}
"##;

/// Root of a scene table
#[derive(Deserialize, Debug, Clone)]
pub struct Scene {
    /// Width and height of the square canvas in pixels
    pub size: u32,

    /// Colour the canvas is cleared to before any shape is drawn
    pub background: String,

    /// Shapes in painting order; later shapes cover earlier ones
    pub shapes: Vec<Shape>,
}

/// A single filled shape
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Closed polygon through `points`, each an offset from the canvas centre
    Polygon { points: Vec<(i32, i32)>, fill: String },

    /// Disc around `center` (an offset from the canvas centre)
    Circle {
        center: (i32, i32),
        radius: i32,
        fill: String,
    },
}

impl Scene {
    /// The bell: a five-point body, a knob on top and a darker clapper below.
    pub fn bell() -> Result<Self> {
        let scene: Scene =
            serde_json::from_str(BELL_SCENE).context("Failed to parse embedded bell scene")?;
        scene.validate()?;
        Ok(scene)
    }

    /// Centre of the canvas in absolute pixel coordinates
    pub fn center(&self) -> (i32, i32) {
        let half = (self.size / 2) as i32;
        (half, half)
    }

    /// Translate an offset from the canvas centre into absolute coordinates.
    /// Offsets beyond the `i32` range saturate; the canvas clips them anyway.
    pub fn absolute(&self, offset: (i32, i32)) -> (i32, i32) {
        let (cx, cy) = self.center();
        (cx.saturating_add(offset.0), cy.saturating_add(offset.1))
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            bail!("Scene size must be greater than zero");
        }
        parse_color(&self.background)?;

        for (index, shape) in self.shapes.iter().enumerate() {
            match shape {
                Shape::Polygon { points, fill } => {
                    if points.len() < 3 {
                        bail!(
                            "Shape {} is a polygon with {} points, at least 3 are required",
                            index,
                            points.len()
                        );
                    }
                    parse_color(fill)?;
                }
                Shape::Circle { radius, fill, .. } => {
                    if *radius < 0 {
                        bail!("Shape {} is a circle with negative radius {}", index, radius);
                    }
                    parse_color(fill)?;
                }
            }
        }

        Ok(())
    }
}

impl Shape {
    pub fn fill(&self) -> &str {
        match self {
            Shape::Polygon { fill, .. } | Shape::Circle { fill, .. } => fill,
        }
    }
}

/// Parse a CSS colour (`white`, `#FFC107`, `#fff`, ...) into an opaque RGB pixel.
pub fn parse_color(color: &str) -> Result<Rgb<u8>> {
    let srgb = css_color::Srgb::from_str(color)
        .map_err(|_| anyhow!("Invalid colour '{}'", color))?;

    Ok(Rgb([
        channel(srgb.red),
        channel(srgb.green),
        channel(srgb.blue),
    ]))
}

fn channel(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}
