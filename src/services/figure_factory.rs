// src/services/figure_factory.rs
//
// Random figure generation: which curve, where, how fast, and which
// decorators go around it. Every figure comes out wrapped as
// Fader(MoverAway(Scaler(...))), roses sometimes with a Rotator inside.

use log::debug;
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{PI, TAU};

use crate::config::FigureConfig;
use crate::figures::{CurveFigure, Figure, FigureBuilder, FigureError, FigureParams, Terminating};
use crate::render::{named_color, CanvasSize, DrawStyle};
use crate::scene::FigureFactory;
use crate::utilities::{random_between, random_select, PositionSequence};

pub struct RandomFigureFactory {
    config: FigureConfig,
    stroke_weight: f32,
    rose_colors: Vec<Rgba>,
    rng: StdRng,
    positions: PositionSequence,
}

impl RandomFigureFactory {
    pub fn new(config: FigureConfig, stroke_weight: f32, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let positions = PositionSequence::from_rng(&mut rng);

        // unknown names are rejected by Config::validate; skip any that slip through
        let rose_colors = config
            .rose_colors
            .iter()
            .filter_map(|name| named_color(name))
            .collect();

        Self {
            config,
            stroke_weight,
            rose_colors,
            rng,
            positions,
        }
    }

    pub fn random_heart(
        &mut self,
        initial_time: f32,
        canvas: CanvasSize,
    ) -> Result<CurveFigure, FigureError> {
        let position = self.positions.next_position(canvas);
        let speed = random_between(&mut self.rng, self.config.heart_speed);

        let params = FigureParams {
            x: position.x,
            y: position.y,
            scale: self.config.initial_scale / 2.0,
            speed,
            tmax: TAU / speed,
            initial_time,
        };
        let style = DrawStyle {
            color: rgba(1.0, 0.0, 0.0, 1.0),
            stroke_weight: self.stroke_weight,
        };
        CurveFigure::heart(params, style)
    }

    pub fn random_rose(
        &mut self,
        initial_time: f32,
        canvas: CanvasSize,
    ) -> Result<CurveFigure, FigureError> {
        let position = self.positions.next_position(canvas);
        let speed = random_between(&mut self.rng, self.config.rose_speed);
        let color = random_select(&mut self.rng, &self.rose_colors)
            .copied()
            .unwrap_or(rgba(1.0, 1.0, 1.0, 1.0));
        let n = random_select(&mut self.rng, &self.config.rose_ns)
            .copied()
            .unwrap_or(1.0);

        let params = FigureParams {
            x: position.x,
            y: position.y,
            scale: self.config.initial_scale * 5.0,
            speed,
            tmax: rose_lifetime(n, speed),
            initial_time,
        };
        let style = DrawStyle {
            color,
            stroke_weight: self.stroke_weight,
        };
        CurveFigure::rose(params, n, style)
    }

    fn decorate(
        &mut self,
        base: CurveFigure,
        rotate: bool,
        initial_time: f32,
        canvas: CanvasSize,
    ) -> Result<Box<dyn Terminating>, FigureError> {
        let angle_per_tick = random_between(&mut self.rng, self.config.rotation_range);

        let fader = FigureBuilder::new(base)
            .maybe(rotate, |b| b.rotate(angle_per_tick))?
            .scale(self.config.scale_per_tick)?
            .move_away(self.config.mover_acceleration, canvas.center())?
            .fade(initial_time, self.config.fade_time)?;

        Ok(Box::new(fader))
    }
}

/// Integral exponents close after n full turns; the rest get ten.
fn rose_lifetime(n: f32, speed: f32) -> f32 {
    if n.fract() == 0.0 {
        TAU * n / speed
    } else {
        2.0 * PI * 10.0 / speed
    }
}

impl FigureFactory for RandomFigureFactory {
    fn create(
        &mut self,
        initial_time: f32,
        canvas: CanvasSize,
    ) -> Result<Box<dyn Terminating>, FigureError> {
        if self.rng.gen::<f32>() < self.config.heart_probability() {
            let heart = self.random_heart(initial_time, canvas)?;
            debug!("Spawning heart at {:?}", heart.offset());
            self.decorate(heart, false, initial_time, canvas)
        } else {
            let rose = self.random_rose(initial_time, canvas)?;
            let rotate = self.rng.gen::<f32>() < self.config.rotation_probability;
            debug!(
                "Spawning rose {:?} at {:?}, rotating: {}",
                rose.curve(),
                rose.offset(),
                rotate
            );
            self.decorate(rose, rotate, initial_time, canvas)
        }
    }
}
