// src/figures/curve_figure.rs
//
// The leaf of every figure chain: one parametric curve with its placement,
// scale, speed and lifetime, and the trace of points registered so far.

use nannou::prelude::*;
use std::borrow::Cow;

use super::{require_finite, require_positive, Figure, FigureError, Terminating};
use crate::models::Curve;
use crate::render::{CanvasSize, DrawStyle, Surface};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureParams {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub speed: f32,
    pub tmax: f32, // lifetime in relative time
    pub initial_time: f32,
}

impl FigureParams {
    pub fn validate(&self) -> Result<(), FigureError> {
        require_finite("x", self.x)?;
        require_finite("y", self.y)?;
        require_finite("initial_time", self.initial_time)?;
        require_positive("scale", self.scale)?;
        require_positive("speed", self.speed)?;
        require_positive("tmax", self.tmax)?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CurveFigure {
    params: FigureParams,
    curve: Curve,
    style: DrawStyle,
    trace: Vec<Point2>,
}

impl CurveFigure {
    pub fn new(curve: Curve, params: FigureParams, style: DrawStyle) -> Result<Self, FigureError> {
        params.validate()?;
        if let Curve::Rose { n } = curve {
            require_positive("n", n)?;
        }

        Ok(Self {
            params,
            curve,
            style,
            trace: Vec::new(),
        })
    }

    pub fn heart(params: FigureParams, style: DrawStyle) -> Result<Self, FigureError> {
        Self::new(Curve::Heart, params, style)
    }

    pub fn rose(params: FigureParams, n: f32, style: DrawStyle) -> Result<Self, FigureError> {
        Self::new(Curve::Rose { n }, params, style)
    }

    pub fn params(&self) -> &FigureParams {
        &self.params
    }

    pub fn curve(&self) -> Curve {
        self.curve
    }

    pub fn style(&self) -> &DrawStyle {
        &self.style
    }

    fn relative_time(&self, t: f32) -> f32 {
        (t - self.params.initial_time) * self.params.speed
    }
}

impl Figure for CurveFigure {
    // y is flipped against the offset here and flipped back when the point
    // is stored.
    fn transform_to_canvas(&self, local: Point2, canvas: CanvasSize) -> Point2 {
        pt2(
            local.x * self.params.scale + self.params.x,
            local.y * self.params.scale + canvas.height - self.params.y,
        )
    }

    fn offset(&self) -> Point2 {
        pt2(self.params.x, self.params.y)
    }

    fn animation_ended(&mut self, t: f32) -> bool {
        t - self.params.initial_time > self.params.tmax
    }

    fn register_point(&mut self, t: f32, canvas: CanvasSize) {
        let local = self.curve.local_point(self.relative_time(t));
        let point = self.transform_to_canvas(local, canvas);
        self.trace.push(pt2(point.x, canvas.height - point.y));
    }

    fn points(&self) -> Cow<'_, [Point2]> {
        Cow::Borrowed(self.trace.as_slice())
    }

    fn draw(&self, surface: &mut dyn Surface, points: Option<&[Point2]>) {
        surface.stroke_polyline(points.unwrap_or(self.trace.as_slice()), &self.style);
    }
}

impl Terminating for CurveFigure {}
