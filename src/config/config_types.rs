// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct WindowConfig {
    #[serde(default = "default_title")]
    pub title: String,
    pub width: u32,
    pub height: u32,
}

fn default_title() -> String {
    String::from("heartvis")
}

#[derive(Debug, Deserialize, Clone)]
pub struct SceneConfig {
    pub entity_limit: usize,
    pub spawn_probability: f64,
    #[serde(default = "default_time_scale")]
    pub time_scale: f32,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_time_scale() -> f32 {
    1.0
}

fn default_background() -> String {
    String::from("black")
}

#[derive(Debug, Deserialize, Clone)]
pub struct StyleConfig {
    pub stroke_weight: f32,
}

/************************* Figure factory tuning ********************/
#[derive(Debug, Deserialize, Clone)]
pub struct FigureConfig {
    pub initial_scale: f32,
    pub scale_per_tick: f32,
    pub fade_time: f32,
    pub rotation_probability: f32,
    pub rotation_range: [f32; 2], // radians per tick
    pub mover_acceleration: f32,
    pub heart_speed: [f32; 2],
    pub rose_speed: [f32; 2],
    pub rose_colors: Vec<String>,
    pub rose_ns: Vec<f32>,
    // when absent, one heart for every rose exponent
    #[serde(default)]
    pub heart_probability: Option<f32>,
}

impl FigureConfig {
    pub fn heart_probability(&self) -> f32 {
        self.heart_probability.unwrap_or_else(|| {
            let k = self.rose_ns.len() as f32;
            1.0 - k / (k + 1.0)
        })
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub directory: String,
    pub frame_limit: u32,
}
