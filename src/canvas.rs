use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageBuffer, ImageEncoder, Rgb, RgbImage,
};

/// Square RGB raster the icon is painted onto
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(size: u32, background: Rgb<u8>) -> Self {
        Self {
            image: ImageBuffer::from_pixel(size, size, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Fill a closed polygon using an even-odd scanline pass.
    ///
    /// Rows are sampled at integer coordinates with edges half-open in y.
    /// Horizontal edges and vertices are painted explicitly so the whole
    /// outline ends up in `color`, not only the interior. Coordinates are
    /// widened before any arithmetic, so points anywhere in `i32` are clipped
    /// instead of overflowing.
    pub fn fill_polygon(&mut self, points: &[(i32, i32)], color: Rgb<u8>) {
        if points.len() < 3 {
            return;
        }

        let points: Vec<(i64, i64)> = points
            .iter()
            .map(|&(x, y)| (i64::from(x), i64::from(y)))
            .collect();

        let min_y = points.iter().map(|p| p.1).min().unwrap_or(0).max(0);
        let max_y = points
            .iter()
            .map(|p| p.1)
            .max()
            .unwrap_or(0)
            .min(i64::from(self.height()) - 1);

        let mut crossings: Vec<f64> = Vec::with_capacity(points.len());

        for y in min_y..=max_y {
            crossings.clear();

            for (i, &(x0, y0)) in points.iter().enumerate() {
                let (x1, y1) = points[(i + 1) % points.len()];

                if y0 == y1 {
                    if y0 == y {
                        self.fill_span(y, x0.min(x1), x0.max(x1), color);
                    }
                    continue;
                }

                let ((top_x, top_y), (bottom_x, bottom_y)) = if y0 < y1 {
                    ((x0, y0), (x1, y1))
                } else {
                    ((x1, y1), (x0, y0))
                };

                if y >= top_y && y < bottom_y {
                    // Multiply before dividing so exact crossings stay exact
                    let rise = i128::from(y - top_y) * i128::from(bottom_x - top_x);
                    let x = top_x as f64 + rise as f64 / (bottom_y - top_y) as f64;
                    crossings.push(x);
                }
            }

            crossings.sort_by(|a, b| a.total_cmp(b));

            for pair in crossings.chunks_exact(2) {
                self.fill_span(y, pair[0].ceil() as i64, pair[1].floor() as i64, color);
            }
        }

        for &(x, y) in &points {
            self.put(x, y, color);
        }
    }

    /// Fill every pixel within `radius` of `center`, edges included.
    pub fn fill_circle(&mut self, center: (i32, i32), radius: i32, color: Rgb<u8>) {
        if radius < 0 {
            return;
        }

        let (cx, cy) = (i64::from(center.0), i64::from(center.1));
        let radius = i64::from(radius);
        let r2 = i128::from(radius) * i128::from(radius);
        let y_start = (cy - radius).max(0);
        let y_end = (cy + radius).min(i64::from(self.height()) - 1);
        let x_start = (cx - radius).max(0);
        let x_end = (cx + radius).min(i64::from(self.width()) - 1);

        for y in y_start..=y_end {
            for x in x_start..=x_end {
                let dx = i128::from(x - cx);
                let dy = i128::from(y - cy);
                if dx * dx + dy * dy <= r2 {
                    self.image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Encode the canvas as an 8-bit RGB PNG held in memory.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut buf, CompressionType::Best, PngFilterType::Adaptive);
        encoder
            .write_image(
                self.image.as_raw(),
                self.width(),
                self.height(),
                ColorType::Rgb8,
            )
            .context("Failed to encode PNG")?;
        Ok(buf)
    }

    fn fill_span(&mut self, y: i64, x_start: i64, x_end: i64, color: Rgb<u8>) {
        if y < 0 || y >= i64::from(self.height()) {
            return;
        }

        let x_start = x_start.max(0);
        let x_end = x_end.min(i64::from(self.width()) - 1);

        for x in x_start..=x_end {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height()) {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }
}
