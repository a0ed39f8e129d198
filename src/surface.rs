//! The drawing seam between the simulation core and a concrete renderer.
//!
//! The field knows nothing about windows, canvases, or pixel formats: it
//! draws through [`RenderSurface`], and the host decides what backs it.
//! [`Raster`](crate::raster::Raster) rasterizes into a CPU framebuffer;
//! [`NullSurface`] discards everything, so a field without a real surface
//! keeps ticking without taking the host down.

use glam::Vec2;

/// An RGBA color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Color from floating-point RGBA components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from 8-bit RGB channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// The same color with a different alpha.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// A 2D drawing surface the field renders into.
///
/// Coordinates are in surface space with the origin at the top-left.
/// Implementations are free to rasterize, record, or discard the calls;
/// alpha is carried in [`Color`].
pub trait RenderSurface {
    /// Fill the whole surface with `color`.
    fn clear(&mut self, color: Color);

    /// Fill a circle of `radius` centered at `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Stroke a straight line from `from` to `to` with the given width.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);
}

/// A surface that discards every draw call.
///
/// Stands in when no real surface is available: the field stays usable and
/// the host never has to treat a missing renderer as a hard fault.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl RenderSurface for NullSurface {
    fn clear(&mut self, _color: Color) {}

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {}

    fn stroke_line(&mut self, _from: Vec2, _to: Vec2, _color: Color, _width: f32) {}
}
