// src/models/curve.rs
//
// Parametric curve families. Each maps a relative time value
// tau = (t - initial_time) * speed to a point in curve-local space.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    Heart,
    Rose { n: f32 },
}

impl Curve {
    pub fn local_point(&self, tau: f32) -> Point2 {
        match *self {
            Curve::Heart => heart_point(tau),
            Curve::Rose { n } => rose_point(n, tau),
        }
    }
}

/// x = 16 sin^3(tau), y = 13 cos(tau) - 5 cos(2 tau) - 2 cos(3 tau) - cos(4 tau)
pub fn heart_point(tau: f32) -> Point2 {
    let x = 16.0 * tau.sin().powi(3);
    let y = 13.0 * tau.cos() - 5.0 * (2.0 * tau).cos() - 2.0 * (3.0 * tau).cos() - (4.0 * tau).cos();
    pt2(x, y)
}

/// Rose with radius r = cos(n tau).
pub fn rose_point(n: f32, tau: f32) -> Point2 {
    let r = (n * tau).cos();
    pt2(r * tau.cos(), r * tau.sin())
}
