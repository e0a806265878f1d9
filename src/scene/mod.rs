// src/scene/mod.rs
//
// The scene driver. Owns the live figures and runs the per-frame protocol:
// clear, advance every live figure (dropping the ones that ended), then maybe
// spawn one new figure while under the population cap.

use log::{debug, warn};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::Rng;

use crate::figures::{Figure, FigureError, Terminating};
use crate::render::{CanvasSize, Surface};

/// Produces one fully decorated figure starting at `initial_time`.
pub trait FigureFactory {
    fn create(
        &mut self,
        initial_time: f32,
        canvas: CanvasSize,
    ) -> Result<Box<dyn Terminating>, FigureError>;
}

impl<F> FigureFactory for F
where
    F: FnMut(f32, CanvasSize) -> Result<Box<dyn Terminating>, FigureError>,
{
    fn create(
        &mut self,
        initial_time: f32,
        canvas: CanvasSize,
    ) -> Result<Box<dyn Terminating>, FigureError> {
        self(initial_time, canvas)
    }
}

pub struct Scene {
    figures: Vec<Box<dyn Terminating>>,
    entity_limit: usize,
    spawn_probability: f64,
    background: Rgba,
    rng: StdRng,
}

impl Scene {
    pub fn new(entity_limit: usize, spawn_probability: f64, background: Rgba, rng: StdRng) -> Self {
        Self {
            figures: Vec::new(),
            entity_limit,
            spawn_probability,
            background,
            rng,
        }
    }

    /// One full frame: advance, then maybe spawn a figure starting at `t`.
    pub fn tick(&mut self, t: f32, surface: &mut dyn Surface, factory: &mut dyn FigureFactory) {
        self.advance(t, surface);
        self.spawn(t, surface.size(), factory);
    }

    /// Clears the surface and moves every live figure one tick forward.
    /// Figures that report ended at `t` are dropped without being drawn.
    pub fn advance(&mut self, t: f32, surface: &mut dyn Surface) {
        surface.clear(self.background);
        let canvas = surface.size();

        let before = self.figures.len();
        self.figures.retain_mut(|figure| {
            if figure.animation_ended(t) {
                return false;
            }
            figure.register_point(t, canvas);
            figure.draw(&mut *surface, None);
            true
        });

        let pruned = before - self.figures.len();
        if pruned > 0 {
            debug!("t={:.3}: pruned {} figures, {} live", t, pruned, self.figures.len());
        }
    }

    /// Rolls for a spawn. Returns true if a figure was added.
    pub fn spawn(&mut self, t: f32, canvas: CanvasSize, factory: &mut dyn FigureFactory) -> bool {
        if self.figures.len() >= self.entity_limit {
            return false;
        }
        if self.rng.gen::<f64>() >= self.spawn_probability {
            return false;
        }
        self.spawn_now(t, canvas, factory)
    }

    /// Asks the factory for a figure regardless of the spawn roll; the
    /// population cap still applies.
    pub fn spawn_now(&mut self, t: f32, canvas: CanvasSize, factory: &mut dyn FigureFactory) -> bool {
        if self.figures.len() >= self.entity_limit {
            return false;
        }

        match factory.create(t, canvas) {
            Ok(figure) => {
                self.figures.push(figure);
                true
            }
            Err(e) => {
                warn!("Rejected spawned figure: {}", e);
                false
            }
        }
    }

    /// Adds a figure directly. Returns false when the scene is full.
    pub fn push(&mut self, figure: Box<dyn Terminating>) -> bool {
        if self.figures.len() >= self.entity_limit {
            return false;
        }
        self.figures.push(figure);
        true
    }

    pub fn clear(&mut self) {
        self.figures.clear();
    }

    pub fn figures(&self) -> &[Box<dyn Terminating>] {
        &self.figures
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    pub fn entity_limit(&self) -> usize {
        self.entity_limit
    }
}
