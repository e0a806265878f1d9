// src/render/draw_surface.rs
//
// Surface backed by a nannou Draw. nannou puts the origin at the window
// center with y pointing up, so every canvas point is flipped on the way in.

use nannou::prelude::*;

use super::{CanvasSize, DrawStyle, Surface};

pub struct DrawSurface<'a> {
    draw: &'a Draw,
    size: CanvasSize,
    alpha: f32,
}

impl<'a> DrawSurface<'a> {
    pub fn new(draw: &'a Draw, window_rect: Rect) -> Self {
        Self {
            draw,
            size: CanvasSize::new(window_rect.w(), window_rect.h()),
            alpha: 1.0,
        }
    }

    fn to_window(&self, point: Point2) -> Point2 {
        to_window_space(point, self.size)
    }
}

fn to_window_space(point: Point2, size: CanvasSize) -> Point2 {
    pt2(point.x - size.width / 2.0, size.height / 2.0 - point.y)
}

impl Surface for DrawSurface<'_> {
    fn size(&self) -> CanvasSize {
        self.size
    }

    fn clear(&mut self, color: Rgba) {
        self.draw.background().color(color);
    }

    fn stroke_polyline(&mut self, points: &[Point2], style: &DrawStyle) {
        if points.len() < 2 {
            return;
        }

        let c = style.color;
        let color = rgba(c.red, c.green, c.blue, c.alpha * self.alpha);

        self.draw
            .polyline()
            .weight(style.stroke_weight)
            .points(points.iter().map(|p| self.to_window(*p)))
            .color(color);
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_to_window_space() {
        let size = CanvasSize::new(100.0, 50.0);

        // top left corner of the canvas
        let p = to_window_space(pt2(0.0, 0.0), size);
        assert_eq!(p, pt2(-50.0, 25.0));

        // center of the canvas
        let p = to_window_space(pt2(50.0, 25.0), size);
        assert_eq!(p, pt2(0.0, 0.0));

        // bottom right
        let p = to_window_space(pt2(100.0, 50.0), size);
        assert_eq!(p, pt2(50.0, -25.0));
    }
}
