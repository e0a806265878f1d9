pub mod random;

pub use random::{random_between, random_select, PositionSequence};
