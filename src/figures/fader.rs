// src/figures/fader.rs
//
// The terminal decorator. Its own end is the end of the whole chain, so it
// must be the outermost wrapper; `FigureBuilder::fade` is the only way out
// of a builder for that reason.

use nannou::prelude::*;
use std::borrow::Cow;

use super::{require_finite, require_positive, Figure, FigureError, Terminating};
use crate::render::{CanvasSize, Surface};

pub struct Fader {
    child: Box<dyn Figure>,
    initial_time: f32,
    fade_time: f32,
    alpha: f32,
}

impl Fader {
    pub fn new(child: Box<dyn Figure>, initial_time: f32, fade_time: f32) -> Result<Self, FigureError> {
        Ok(Self {
            child,
            initial_time: require_finite("initial_time", initial_time)?,
            fade_time: require_positive("fade_time", fade_time)?,
            alpha: 1.0,
        })
    }

    /// Linear fade from 1 at `initial_time` to 0 after `fade_time`.
    pub fn alpha_at(&self, t: f32) -> f32 {
        1.0 - (t - self.initial_time) / self.fade_time
    }

    /// Alpha as of the last registered tick.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn child(&self) -> &dyn Figure {
        self.child.as_ref()
    }
}

impl Figure for Fader {
    fn transform_to_canvas(&self, local: Point2, canvas: CanvasSize) -> Point2 {
        self.child.transform_to_canvas(local, canvas)
    }

    fn offset(&self) -> Point2 {
        self.child.offset()
    }

    fn animation_ended(&mut self, t: f32) -> bool {
        self.alpha_at(t) <= 0.0
    }

    // the child keeps its own lifetime; once it is over the fade carries on
    // over the frozen trace
    fn register_point(&mut self, t: f32, canvas: CanvasSize) {
        if !self.child.animation_ended(t) {
            self.child.register_point(t, canvas);
        }

        self.alpha = self.alpha_at(t);
    }

    fn points(&self) -> Cow<'_, [Point2]> {
        self.child.points()
    }

    fn draw(&self, surface: &mut dyn Surface, points: Option<&[Point2]>) {
        surface.set_alpha(self.alpha);
        self.child.draw(surface, points);
        surface.set_alpha(1.0);
    }
}

impl Terminating for Fader {}
