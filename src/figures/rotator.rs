// src/figures/rotator.rs
//
// Spins the child's trace about the child's own anchor, a little more
// every tick.

use nannou::prelude::*;
use std::borrow::Cow;

use super::{require_finite, Figure, FigureError, Wrapped};
use crate::render::{CanvasSize, Surface};

pub struct Rotator {
    inner: Wrapped,
    angle_per_tick: f32, // radians
    angle: f32,
}

impl Rotator {
    pub fn new(child: Box<dyn Figure>, angle_per_tick: f32) -> Result<Self, FigureError> {
        Ok(Self {
            inner: Wrapped::new(child),
            angle_per_tick: require_finite("angle_per_tick", angle_per_tick)?,
            angle: 0.0,
        })
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn child(&self) -> &dyn Figure {
        self.inner.child.as_ref()
    }
}

impl Figure for Rotator {
    fn transform_to_canvas(&self, local: Point2, canvas: CanvasSize) -> Point2 {
        self.inner.child.transform_to_canvas(local, canvas)
    }

    fn offset(&self) -> Point2 {
        self.inner.child.offset()
    }

    // never ends by itself, wrap it in a Fader
    fn animation_ended(&mut self, t: f32) -> bool {
        self.inner.observe_end(t);
        false
    }

    fn register_point(&mut self, t: f32, canvas: CanvasSize) {
        self.angle += self.angle_per_tick;
        self.inner.register(t, canvas);
    }

    fn points(&self) -> Cow<'_, [Point2]> {
        let center = self.inner.child.offset();
        let (sin, cos) = self.angle.sin_cos();

        self.inner
            .child
            .points()
            .iter()
            .map(|p| {
                let d = *p - center;
                pt2(d.x * cos - d.y * sin, d.x * sin + d.y * cos) + center
            })
            .collect()
    }

    fn draw(&self, surface: &mut dyn Surface, points: Option<&[Point2]>) {
        self.inner.draw_through(surface, points, || self.points());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::figures::test_support::*;
    use std::f32::consts::PI;

    #[test]
    fn test_angle_accumulates_per_tick() {
        let mut rotator = Rotator::new(Box::new(heart(0.0, 10.0)), 0.05).unwrap();
        for i in 0..10 {
            rotator.register_point(i as f32 * 0.1, CANVAS);
        }
        assert!((rotator.angle() - 0.5).abs() < 1e-5);
        assert_eq!(rotator.points().len(), 10);
    }

    #[test]
    fn test_points_rotate_about_child_offset() {
        let mut rotator = Rotator::new(Box::new(heart(0.0, 10.0)), PI / 4.0).unwrap();
        rotator.register_point(0.0, CANVAS);
        rotator.register_point(0.5, CANVAS);

        // two ticks: a quarter turn
        let center = rotator.offset();
        let rotated = rotator.points();
        let original = rotator.child().points();
        for (r, o) in rotated.iter().zip(original.iter()) {
            let d = *o - center;
            let expected = pt2(-d.y, d.x) + center;
            assert!((r.x - expected.x).abs() < 1e-3);
            assert!((r.y - expected.y).abs() < 1e-3);
        }
    }

    #[test]
    fn test_keeps_turning_after_child_ends() {
        let mut rotator = Rotator::new(Box::new(heart(0.0, 1.0)), 0.1).unwrap();

        for i in 0..40 {
            let t = i as f32 * 0.1;
            rotator.animation_ended(t);
            rotator.register_point(t, CANVAS);
        }

        // child ends once t > 1.0, i.e. from tick 11 onwards
        assert_eq!(rotator.child().points().len(), 11);
        assert!((rotator.angle() - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_draw_passes_rotated_points_to_child() {
        use crate::render::recording::RecordingSurface;

        let mut rotator = Rotator::new(Box::new(heart(0.0, 10.0)), 0.3).unwrap();
        for i in 0..4 {
            rotator.register_point(i as f32 * 0.2, CANVAS);
        }

        let mut surface = RecordingSurface::new(800.0, 600.0);
        rotator.draw(&mut surface, None);

        let drawn: Vec<_> = surface.polylines().collect();
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].0, &rotator.points()[..]);
    }

    #[test]
    fn test_rejects_non_finite_rate() {
        assert!(Rotator::new(Box::new(heart(0.0, 1.0)), f32::NAN).is_err());
    }
}
