// src/figures/mod.rs
//
// The figure object model: a curve primitive at the leaf, wrapped in any
// number of decorators that each inject one effect.
//
// Per tick the driver asks the outermost figure whether it has ended, then
// registers a new point and draws. Geometry is pulled from the leaf outwards
// (each decorator transforms its child's points), while end-of-life is pushed
// inwards: a decorator latches its child's end state but decides its own.

pub mod builder;
pub mod curve_figure;
pub mod fader;
pub mod mover_away;
pub mod rotator;
pub mod scaler;

pub use builder::FigureBuilder;
pub use curve_figure::{CurveFigure, FigureParams};
pub use fader::Fader;
pub use mover_away::MoverAway;
pub use rotator::Rotator;
pub use scaler::Scaler;

use nannou::prelude::*;
use std::borrow::Cow;
use thiserror::Error;

use crate::render::{CanvasSize, Surface};

/// Construction-time contract violations. Per-tick evaluation never fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FigureError {
    #[error("{field} must be finite and positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
}

pub(crate) fn require_positive(field: &'static str, value: f32) -> Result<f32, FigureError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(FigureError::NotPositive { field, value })
    }
}

pub(crate) fn require_finite(field: &'static str, value: f32) -> Result<f32, FigureError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FigureError::NotFinite { field, value })
    }
}

pub trait Figure {
    /// Curve-local point to canvas space, using the live canvas height.
    fn transform_to_canvas(&self, local: Point2, canvas: CanvasSize) -> Point2;

    /// The placement anchor of the underlying curve.
    fn offset(&self) -> Point2;

    /// Whether the figure is done at tick `t`. Decorators use this call to
    /// latch their child's state, hence `&mut self`.
    fn animation_ended(&mut self, t: f32) -> bool;

    /// Advances the figure by one tick.
    fn register_point(&mut self, t: f32, canvas: CanvasSize);

    /// The trace as seen through this figure, oldest point first.
    fn points(&self) -> Cow<'_, [Point2]>;

    /// Draws `points`, or this figure's own view of the trace when `None`.
    fn draw(&self, surface: &mut dyn Surface, points: Option<&[Point2]>);
}

/// A figure whose `animation_ended` eventually reports true on its own.
///
/// Only terminating figures may be handed to the scene: a Rotator, Scaler or
/// MoverAway on the outside would never be pruned.
pub trait Terminating: Figure {}

/// Child slot of the pass-through decorators.
///
/// Once the child reports ended it is never registered again, so its trace
/// freezes instead of collecting duplicate entries.
pub(crate) struct Wrapped {
    pub child: Box<dyn Figure>,
    pub child_ended: bool,
}

impl Wrapped {
    pub fn new(child: Box<dyn Figure>) -> Self {
        Self {
            child,
            child_ended: false,
        }
    }

    pub fn observe_end(&mut self, t: f32) {
        if self.child.animation_ended(t) {
            self.child_ended = true;
        }
    }

    pub fn register(&mut self, t: f32, canvas: CanvasSize) {
        if !self.child_ended {
            self.child.register_point(t, canvas);
        }
    }

    /// Draws through the child, computing this decorator's points if none
    /// were handed down from further out.
    pub fn draw_through<'a>(
        &self,
        surface: &mut dyn Surface,
        points: Option<&[Point2]>,
        own_points: impl FnOnce() -> Cow<'a, [Point2]>,
    ) {
        match points {
            Some(points) => self.child.draw(surface, Some(points)),
            None => {
                let own = own_points();
                self.child.draw(surface, Some(&own));
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn test_decorator_chain_forwards_transform() {
        let bare = heart(0.0, 10.0);
        let decorated = FigureBuilder::new(heart(0.0, 10.0))
            .rotate(0.03)
            .unwrap()
            .scale(1.01)
            .unwrap()
            .move_away(0.002, CANVAS.center())
            .unwrap()
            .fade(0.0, 5.0)
            .unwrap();

        for local in [pt2(0.0, 0.0), pt2(16.0, 4.0), pt2(-3.5, 12.25)] {
            assert_eq!(
                decorated.transform_to_canvas(local, CANVAS),
                bare.transform_to_canvas(local, CANVAS)
            );
        }
        assert_eq!(decorated.offset(), bare.offset());
    }

    #[test]
    fn test_pass_through_decorators_never_end() {
        let mut figures: Vec<Box<dyn Figure>> = vec![
            Box::new(Rotator::new(Box::new(heart(0.0, 1.0)), 0.02).unwrap()),
            Box::new(Scaler::new(Box::new(heart(0.0, 1.0)), 1.01).unwrap()),
            Box::new(MoverAway::new(Box::new(heart(0.0, 1.0)), 0.001, CANVAS.center()).unwrap()),
        ];

        for figure in figures.iter_mut() {
            for i in 0..200 {
                let t = i as f32 * 0.5 - 10.0;
                assert!(!figure.animation_ended(t));
                figure.register_point(t, CANVAS);
            }
            assert!(!figure.animation_ended(f32::MAX));
        }
    }

    #[test]
    fn test_validation_helpers() {
        assert_eq!(require_positive("scale", 2.0), Ok(2.0));
        assert!(require_positive("scale", 0.0).is_err());
        assert!(require_positive("scale", f32::NAN).is_err());
        assert_eq!(require_finite("rate", -1.0), Ok(-1.0));
        assert!(require_finite("rate", f32::INFINITY).is_err());
    }
}
