// src/config/config_load.rs
//
// loading of config.toml

use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::config_types::*;
use crate::render::named_color;

/// Upper bound on live figures; every one is re-transformed each frame.
pub const MAX_ENTITY_LIMIT: usize = 10_000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub window: WindowConfig,
    pub scene: SceneConfig,
    pub style: StyleConfig,
    pub figures: FigureConfig,
    pub output: OutputConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // First try to load from the executable's directory
        let config = match Self::exe_dir_config_path() {
            Some(path) => {
                info!("Loading config from {}", path.display());
                Self::from_toml_str(&fs::read_to_string(path)?)?
            }
            // Fallback to loading from the current working directory
            None => {
                info!("Loading config from working directory");
                Self::from_toml_str(&fs::read_to_string("config.toml")?)?
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn exe_dir_config_path() -> Option<PathBuf> {
        let exe_path = std::env::current_exe().ok()?;
        let config_path = exe_path.parent()?.join("config.toml");
        config_path.exists().then_some(config_path)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Rejects values that would produce never-ending or instantly-dead figures,
    /// or that the random factory cannot sample from.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return invalid("window", "width and height must be non-zero");
        }

        let scene = &self.scene;
        if scene.entity_limit == 0 || scene.entity_limit > MAX_ENTITY_LIMIT {
            return invalid(
                "scene.entity_limit",
                format!("must lie in [1, {}], got {}", MAX_ENTITY_LIMIT, scene.entity_limit),
            );
        }
        if !(0.0..=1.0).contains(&scene.spawn_probability) {
            return invalid("scene.spawn_probability", "must lie in [0, 1]");
        }
        positive("scene.time_scale", scene.time_scale)?;
        if named_color(&scene.background).is_none() {
            return invalid(
                "scene.background",
                format!("unknown color name {:?}", scene.background),
            );
        }

        positive("style.stroke_weight", self.style.stroke_weight)?;

        let figures = &self.figures;
        positive("figures.initial_scale", figures.initial_scale)?;
        positive("figures.scale_per_tick", figures.scale_per_tick)?;
        positive("figures.fade_time", figures.fade_time)?;
        probability("figures.rotation_probability", figures.rotation_probability)?;
        probability("figures.heart_probability", figures.heart_probability())?;
        if !figures.mover_acceleration.is_finite() {
            return invalid("figures.mover_acceleration", "must be finite");
        }
        range("figures.rotation_range", figures.rotation_range, false)?;
        range("figures.heart_speed", figures.heart_speed, true)?;
        range("figures.rose_speed", figures.rose_speed, true)?;

        if figures.rose_colors.is_empty() {
            return invalid("figures.rose_colors", "at least one color is required");
        }
        if let Some(name) = figures
            .rose_colors
            .iter()
            .find(|name| named_color(name).is_none())
        {
            return invalid("figures.rose_colors", format!("unknown color name {:?}", name));
        }

        if figures.rose_ns.is_empty() {
            return invalid("figures.rose_ns", "at least one exponent is required");
        }
        if figures.rose_ns.iter().any(|n| !n.is_finite() || *n <= 0.0) {
            return invalid("figures.rose_ns", "exponents must be finite and positive");
        }

        Ok(())
    }

    pub fn resolve_output_dir(&self) -> PathBuf {
        if Path::new(&self.output.directory).is_absolute() {
            PathBuf::from(&self.output.directory)
        } else {
            // If path is relative, resolve it relative to the executable or working directory
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .map(|exe_dir| exe_dir.join(&self.output.directory))
                .unwrap_or_else(|| PathBuf::from(&self.output.directory))
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> Result<(), ConfigError> {
    Err(ConfigError::Invalid {
        field,
        reason: reason.into(),
    })
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        invalid(field, format!("must be finite and positive, got {}", value))
    }
}

fn probability(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        invalid(field, format!("must lie in [0, 1], got {}", value))
    }
}

fn range(field: &'static str, [min, max]: [f32; 2], strictly_positive: bool) -> Result<(), ConfigError> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return invalid(field, format!("expected [min, max], got [{}, {}]", min, max));
    }
    if strictly_positive && min <= 0.0 {
        return invalid(field, "lower bound must be positive");
    }
    Ok(())
}
