//! CPU rasterization into an RGBA8 framebuffer.
//!
//! [`Raster`] is the concrete [`RenderSurface`] the window host presents
//! each frame; it also works headless, e.g. to pre-render a background to
//! a PNG:
//!
//! ```no_run
//! use plexus::{FieldConfig, ParticleField, Raster};
//!
//! let mut field = ParticleField::new(640.0, 360.0, FieldConfig::new().with_seed(1));
//! let mut raster = Raster::new(640, 360);
//! field.start();
//! field.frame(&mut raster);
//! raster.save_png("field.png").unwrap();
//! ```

use std::path::Path;

use glam::Vec2;

use crate::surface::{Color, RenderSurface};

/// An RGBA8 framebuffer with alpha-blended drawing.
///
/// Pixels are row-major, 4 bytes each. Coverage at circle and line edges
/// falls off over half a pixel, which is enough anti-aliasing for
/// sub-3-pixel particles and hairline connections.
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Create a framebuffer of the given size, all pixels transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    /// The pixel at (x, y), or `None` outside the framebuffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ])
    }

    /// Reallocate to a new size. Previous contents are discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width as usize * height as usize * 4];
    }

    /// Write the framebuffer to a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
        image::save_buffer(
            path,
            &self.pixels,
            self.width,
            self.height,
            image::ExtendedColorType::Rgba8,
        )
    }

    /// Intersect a floating-point box with the framebuffer, in pixel indices.
    fn clip_box(
        &self,
        min_x: f32,
        min_y: f32,
        max_x: f32,
        max_y: f32,
    ) -> Option<(i64, i64, i64, i64)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let x0 = (min_x.floor() as i64).max(0);
        let y0 = (min_y.floor() as i64).max(0);
        let x1 = (max_x.ceil() as i64).min(self.width as i64 - 1);
        let y1 = (max_y.ceil() as i64).min(self.height as i64 - 1);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some((x0, y0, x1, y1))
    }

    /// Source-over blend of `color` at the given pixel with an extra
    /// coverage factor already folded into `alpha`.
    fn blend_pixel(&mut self, x: i64, y: i64, color: Color, alpha: f32) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let a = alpha.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx] = blend_channel(self.pixels[idx], color.r, a);
        self.pixels[idx + 1] = blend_channel(self.pixels[idx + 1], color.g, a);
        self.pixels[idx + 2] = blend_channel(self.pixels[idx + 2], color.b, a);
        let dst_a = self.pixels[idx + 3] as f32 / 255.0;
        self.pixels[idx + 3] = to_byte(a + dst_a * (1.0 - a));
    }
}

impl RenderSurface for Raster {
    fn clear(&mut self, color: Color) {
        let px = [
            to_byte(color.r),
            to_byte(color.g),
            to_byte(color.b),
            to_byte(color.a),
        ];
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 || color.a <= 0.0 {
            return;
        }
        let (x0, y0, x1, y1) = match self.clip_box(
            center.x - radius - 1.0,
            center.y - radius - 1.0,
            center.x + radius + 1.0,
            center.y + radius + 1.0,
        ) {
            Some(bounds) => bounds,
            None => return,
        };
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let coverage = (radius - p.distance(center) + 0.5).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_pixel(x, y, color, color.a * coverage);
                }
            }
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        if width <= 0.0 || color.a <= 0.0 {
            return;
        }
        let half = width * 0.5;
        let (x0, y0, x1, y1) = match self.clip_box(
            from.x.min(to.x) - half - 1.0,
            from.y.min(to.y) - half - 1.0,
            from.x.max(to.x) + half + 1.0,
            from.y.max(to.y) + half + 1.0,
        ) {
            Some(bounds) => bounds,
            None => return,
        };
        let ab = to - from;
        let len_sq = ab.length_squared();
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let t = if len_sq > 0.0 {
                    ((p - from).dot(ab) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let dist = p.distance(from + ab * t);
                let coverage = (half - dist + 0.5).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend_pixel(x, y, color, color.a * coverage);
                }
            }
        }
    }
}

#[inline]
fn to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}

#[inline]
fn blend_channel(dst: u8, src: f32, alpha: f32) -> u8 {
    let d = dst as f32 / 255.0;
    to_byte(src * alpha + d * (1.0 - alpha))
}
