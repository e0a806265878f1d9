// src/figures/builder.rs
//
// Wraps a base figure in decorators, innermost first. A chain can only be
// finished with `fade`, so the figure handed to the scene always has a
// terminating wrapper on the outside.

use nannou::prelude::*;

use super::{Fader, Figure, FigureError, MoverAway, Rotator, Scaler};

pub struct FigureBuilder {
    figure: Box<dyn Figure>,
    depth: usize,
}

impl FigureBuilder {
    pub fn new(base: impl Figure + 'static) -> Self {
        Self {
            figure: Box::new(base),
            depth: 0,
        }
    }

    pub fn rotate(self, angle_per_tick: f32) -> Result<Self, FigureError> {
        let depth = self.depth;
        Ok(Self::wrap(Rotator::new(self.figure, angle_per_tick)?, depth))
    }

    pub fn scale(self, scale_per_tick: f32) -> Result<Self, FigureError> {
        let depth = self.depth;
        Ok(Self::wrap(Scaler::new(self.figure, scale_per_tick)?, depth))
    }

    pub fn move_away(self, acceleration: f32, from: Point2) -> Result<Self, FigureError> {
        let depth = self.depth;
        Ok(Self::wrap(MoverAway::new(self.figure, acceleration, from)?, depth))
    }

    /// Conditionally applies one wrapping step.
    pub fn maybe(
        self,
        apply: bool,
        step: impl FnOnce(Self) -> Result<Self, FigureError>,
    ) -> Result<Self, FigureError> {
        if apply {
            step(self)
        } else {
            Ok(self)
        }
    }

    /// Number of decorators applied so far.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn fade(self, initial_time: f32, fade_time: f32) -> Result<Fader, FigureError> {
        Fader::new(self.figure, initial_time, fade_time)
    }

    fn wrap(figure: impl Figure + 'static, depth: usize) -> Self {
        Self {
            figure: Box::new(figure),
            depth: depth + 1,
        }
    }
}
