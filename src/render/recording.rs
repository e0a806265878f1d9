// src/render/recording.rs
//
// Surface double that records every call, for tests.

use nannou::prelude::*;

use super::{CanvasSize, DrawStyle, Surface};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Clear,
    Polyline {
        points: Vec<Point2>,
        style: DrawStyle,
        alpha: f32,
    },
    Alpha(f32),
}

pub struct RecordingSurface {
    pub size: CanvasSize,
    pub alpha: f32,
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: CanvasSize::new(width, height),
            alpha: 1.0,
            ops: Vec::new(),
        }
    }

    pub fn polylines(&self) -> impl Iterator<Item = (&[Point2], f32)> {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Polyline { points, alpha, .. } => Some((points.as_slice(), *alpha)),
            _ => None,
        })
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> CanvasSize {
        self.size
    }

    fn clear(&mut self, _color: Rgba) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn stroke_polyline(&mut self, points: &[Point2], style: &DrawStyle) {
        self.ops.push(SurfaceOp::Polyline {
            points: points.to_vec(),
            style: style.clone(),
            alpha: self.alpha,
        });
    }

    fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
        self.ops.push(SurfaceOp::Alpha(alpha));
    }
}
