// src/lib.rs
//
// Short-lived parametric curves (hearts and roses) wrapped in composable
// visual decorators, and the scene driver that spawns and prunes them.

pub mod config;
pub mod figures;
pub mod models;
pub mod render;
pub mod scene;
pub mod services;
pub mod utilities;
