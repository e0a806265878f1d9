pub mod curve;

pub use curve::{heart_point, rose_point, Curve};
