// src/render/mod.rs
//
// The rendering surface figures draw onto.
//
// Canvas space has its origin at the top left corner with y growing
// downwards. Surfaces translate that into whatever the backend expects.

pub mod draw_surface;
#[cfg(test)]
pub(crate) mod recording;

pub use draw_surface::DrawSurface;

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point2 {
        pt2(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawStyle {
    pub color: Rgba,
    pub stroke_weight: f32,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            color: rgba(1.0, 0.0, 0.0, 1.0),
            stroke_weight: 3.0,
        }
    }
}

pub trait Surface {
    /// Current dimensions; read on every use since the window may resize.
    fn size(&self) -> CanvasSize;
    fn clear(&mut self, color: Rgba);
    /// Strokes a connected polyline. Fewer than two points draw nothing.
    fn stroke_polyline(&mut self, points: &[Point2], style: &DrawStyle);
    /// Global transparency applied to every following stroke.
    fn set_alpha(&mut self, alpha: f32);
}

/// Looks up a CSS-style color name ("pink", "orange", ...).
pub fn named_color(name: &str) -> Option<Rgba> {
    let color: Rgb = nannou::color::named::from_str(name)?.into_format();
    Some(rgba(color.red, color.green, color.blue, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_color() {
        let pink = named_color("pink").unwrap();
        assert!((pink.red - 1.0).abs() < 1e-6);
        assert!((pink.alpha - 1.0).abs() < 1e-6);
        assert!(named_color("black").is_some());
        assert!(named_color("no-such-color").is_none());
    }

    #[test]
    fn test_canvas_center() {
        let canvas = CanvasSize::new(800.0, 600.0);
        assert_eq!(canvas.center(), pt2(400.0, 300.0));
    }
}
