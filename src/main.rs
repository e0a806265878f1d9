// src/main.rs
use log::{info, warn};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

use heartvis::{
    config::Config,
    render::{named_color, CanvasSize, DrawSurface},
    scene::Scene,
    services::{FrameCapture, RandomFigureFactory},
};

struct Model {
    // Core components:
    scene: Scene,
    factory: RandomFigureFactory,
    time_scale: f32,

    // Rendering components:
    draw: nannou::Draw,

    // Frame capture:
    frame_capture: FrameCapture,

    // FPS
    last_update: Instant,
    fps: f32,

    // Message
    debug_flag: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    // Create window
    app.new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .expect("Failed to build window");

    let background = named_color(&config.scene.background).unwrap_or(rgba(0.0, 0.0, 0.0, 1.0));
    let scene = Scene::new(
        config.scene.entity_limit,
        config.scene.spawn_probability,
        background,
        seeded_rng(config.scene.seed),
    );

    // the factory gets its own stream so spawn rolls don't shift figure shapes
    let factory = RandomFigureFactory::new(
        config.figures.clone(),
        config.style.stroke_weight,
        config.scene.seed.map(|seed| seed.wrapping_add(1)),
    );

    let frame_capture = FrameCapture::new(config.resolve_output_dir(), config.output.frame_limit);

    info!(
        "Scene ready: up to {} figures, spawn probability {}",
        config.scene.entity_limit, config.scene.spawn_probability
    );

    Model {
        scene,
        factory,
        time_scale: config.scene.time_scale,

        draw: nannou::Draw::new(),

        frame_capture,

        // FPS
        last_update: Instant::now(),
        fps: 0.0,

        debug_flag: false,
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::P => {
            model.debug_flag = !model.debug_flag;
        }
        // drop every live figure
        Key::C => {
            info!("Clearing {} figures", model.scene.len());
            model.scene.clear();
        }
        // spawn one figure now, skipping the probability roll
        Key::S => {
            let t = app.time * model.time_scale;
            let rect = app.window_rect();
            let canvas = CanvasSize::new(rect.w(), rect.h());
            if !model.scene.spawn_now(t, canvas, &mut model.factory) {
                warn!("Scene is full ({} figures)", model.scene.entity_limit());
            }
        }
        Key::R => model.frame_capture.toggle_recording(),
        Key::Q => {
            if model.frame_capture.is_recording() {
                model.frame_capture.toggle_recording();
            }
            app.quit();
        }
        _ => (),
    }
}

fn update(app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    // FPS calculation
    if model.debug_flag {
        model.fps = 1.0 / duration.as_secs_f32();
    }

    model.draw.reset();
    let window_rect = app.window_rect();

    /*********************  Main update for the figures **********************/
    let t = app.time * model.time_scale;
    let mut surface = DrawSurface::new(&model.draw, window_rect);
    model.scene.tick(t, &mut surface, &mut model.factory);
    /*************************************************************************/

    // Handle FPS display
    if model.debug_flag {
        let draw = &model.draw;
        draw.text(&format!(
            "FPS: {:.1}\nfigures: {}/{}",
            model.fps,
            model.scene.len(),
            model.scene.entity_limit()
        ))
        .x_y(window_rect.left() + 80.0, window_rect.top() - 30.0)
        .color(RED);
    }

    model.frame_capture.capture(&app.main_window());
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    if let Err(e) = model.draw.to_frame(app, &frame) {
        warn!("Failed to render frame: {:?}", e);
    }
}
