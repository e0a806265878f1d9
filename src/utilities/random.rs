// src/utilities/random.rs
//
// Small sampling helpers for the figure factory.

use nannou::prelude::*;
use rand::Rng;

use crate::render::CanvasSize;

pub fn random_between<R: Rng + ?Sized>(rng: &mut R, [min, max]: [f32; 2]) -> f32 {
    rng.gen::<f32>() * (max - min) + min
}

pub fn random_select<'a, R: Rng + ?Sized, T>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.gen_range(0..items.len()))
}

const MODULUS: u64 = 1_000_000_007;

/// Scatters spawn positions over the canvas.
///
/// A linear congruential walk (`s = 997 s + 17 mod 1e9+7`) whose state is
/// read as a row-major pixel index, so consecutive figures land far apart.
#[derive(Debug, Clone)]
pub struct PositionSequence {
    state: u64,
}

impl PositionSequence {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    pub fn from_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen_range(0..MODULUS))
    }

    pub fn next_position(&mut self, canvas: CanvasSize) -> Point2 {
        self.state = (self.state * 997 + 17) % MODULUS;

        let width = (canvas.width.max(1.0)) as u64;
        let height = (canvas.height.max(1.0)) as u64;
        pt2(
            (self.state % width) as f32,
            ((self.state / width) % height) as f32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_between_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let value = random_between(&mut rng, [4.0, 10.0]);
            assert!((4.0..=10.0).contains(&value));
        }
        // degenerate range
        assert_eq!(random_between(&mut rng, [2.0, 2.0]), 2.0);
    }

    #[test]
    fn test_random_select() {
        let mut rng = StdRng::seed_from_u64(2);
        let empty: [u8; 0] = [];
        assert_eq!(random_select(&mut rng, &empty), None);

        let items = ["green", "blue", "pink"];
        for _ in 0..100 {
            let picked = random_select(&mut rng, &items).unwrap();
            assert!(items.contains(picked));
        }
    }

    #[test]
    fn test_position_sequence_steps() {
        let canvas = CanvasSize::new(100.0, 50.0);
        let mut positions = PositionSequence::new(0);

        // 0 -> 17
        assert_eq!(positions.next_position(canvas), pt2(17.0, 0.0));
        // 17 -> 17 * 997 + 17 = 16966: column 66, row 169 % 50
        assert_eq!(positions.next_position(canvas), pt2(66.0, 19.0));
    }

    #[test]
    fn test_positions_stay_on_canvas() {
        let canvas = CanvasSize::new(1280.0, 800.0);
        let mut positions = PositionSequence::new(123_456_789);
        for _ in 0..10_000 {
            let p = positions.next_position(canvas);
            assert!(p.x >= 0.0 && p.x < 1280.0);
            assert!(p.y >= 0.0 && p.y < 800.0);
        }
    }
}
