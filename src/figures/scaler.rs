// src/figures/scaler.rs
//
// Grows (or shrinks) the child's trace about the child's anchor by a
// constant factor per tick.

use nannou::prelude::*;
use std::borrow::Cow;

use super::{require_positive, Figure, FigureError, Wrapped};
use crate::render::{CanvasSize, Surface};

pub struct Scaler {
    inner: Wrapped,
    scale_per_tick: f32,
    scale: f32,
}

impl Scaler {
    pub fn new(child: Box<dyn Figure>, scale_per_tick: f32) -> Result<Self, FigureError> {
        Ok(Self {
            inner: Wrapped::new(child),
            scale_per_tick: require_positive("scale_per_tick", scale_per_tick)?,
            scale: 1.0,
        })
    }

    /// Cumulative factor, `scale_per_tick` raised to the number of ticks.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn child(&self) -> &dyn Figure {
        self.inner.child.as_ref()
    }
}

impl Figure for Scaler {
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
        self.scale *= self.scale_per_tick;
        self.inner.register(t, canvas);
    }

    fn points(&self) -> Cow<'_, [Point2]> {
        let center = self.inner.child.offset();

        self.inner
            .child
            .points()
            .iter()
            .map(|p| (*p - center) * self.scale + center)
            .collect()
    }

    fn draw(&self, surface: &mut dyn Surface, points: Option<&[Point2]>) {
        self.inner.draw_through(surface, points, || self.points());
    }
}
