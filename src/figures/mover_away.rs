// src/figures/mover_away.rs
//
// Pushes the child's trace radially away from a fixed point, accelerating
// as it goes.

use nannou::prelude::*;
use std::borrow::Cow;

use super::{require_finite, Figure, FigureError, Wrapped};
use crate::render::{CanvasSize, Surface};

pub struct MoverAway {
    inner: Wrapped,
    acceleration: f32,
    from: Point2,
    position: f32,
    speed: f32,
}

impl MoverAway {
    pub fn new(child: Box<dyn Figure>, acceleration: f32, from: Point2) -> Result<Self, FigureError> {
        require_finite("from.x", from.x)?;
        require_finite("from.y", from.y)?;

        Ok(Self {
            inner: Wrapped::new(child),
            acceleration: require_finite("acceleration", acceleration)?,
            from,
            position: 0.0,
            speed: 0.0,
        })
    }

    pub fn position(&self) -> f32 {
        self.position
    }

    /// Tracked alongside `position` but not part of the displacement.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn child(&self) -> &dyn Figure {
        self.inner.child.as_ref()
    }
}

impl Figure for MoverAway {
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
        self.inner.register(t, canvas);

        self.speed += self.acceleration;
        self.position += self.acceleration;
    }

    fn points(&self) -> Cow<'_, [Point2]> {
        self.inner
            .child
            .points()
            .iter()
            .map(|p| *p + (*p - self.from) * self.position)
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

    #[test]
    fn test_accumulators() {
        let mut mover = MoverAway::new(Box::new(heart(0.0, 10.0)), 0.25, CANVAS.center()).unwrap();
        for i in 0..4 {
            mover.register_point(i as f32 * 0.1, CANVAS);
        }
        assert_eq!(mover.position(), 1.0);
        assert_eq!(mover.speed(), 1.0);
    }

    #[test]
    fn test_points_move_radially() {
        let from = CANVAS.center();
        let mut mover = MoverAway::new(Box::new(heart(0.0, 10.0)), 0.5, from).unwrap();
        mover.register_point(0.0, CANVAS);
        mover.register_point(0.1, CANVAS);

        // position 1.0: every point sits twice as far from the origin
        let moved = mover.points();
        let original = mover.child().points();
        for (m, o) in moved.iter().zip(original.iter()) {
            let expected = from + (*o - from) * 2.0;
            assert!((m.x - expected.x).abs() < 1e-3);
            assert!((m.y - expected.y).abs() < 1e-3);
        }
    }

    #[test]
    fn test_unmoved_before_first_tick() {
        let mut mover = MoverAway::new(Box::new(heart(0.0, 10.0)), 0.3, CANVAS.center()).unwrap();
        mover.animation_ended(0.0);
        assert_eq!(mover.position(), 0.0);

        // the first registration already counts as one step out
        mover.register_point(0.0, CANVAS);
        let child_point = mover.child().points()[0];
        let expected = child_point + (child_point - CANVAS.center()) * 0.3;
        let moved = mover.points()[0];
        assert!((moved.x - expected.x).abs() < 1e-3);
        assert!((moved.y - expected.y).abs() < 1e-3);
    }

    #[test]
    fn test_keeps_moving_after_child_ends() {
        let mut mover = MoverAway::new(Box::new(heart(0.0, 0.5)), 0.1, CANVAS.center()).unwrap();

        for i in 0..20 {
            let t = i as f32 * 0.1;
            mover.animation_ended(t);
            mover.register_point(t, CANVAS);
        }

        // child ends once t > 0.5, i.e. from tick 6 onwards
        assert_eq!(mover.child().points().len(), 6);
        assert_eq!(mover.points().len(), 6);
        assert!((mover.position() - 2.0).abs() < 1e-4);
        assert!((mover.speed() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_rejects_non_finite_origin() {
        let result = MoverAway::new(Box::new(heart(0.0, 1.0)), 0.1, pt2(f32::NAN, 0.0));
        assert!(result.is_err());
    }
}
