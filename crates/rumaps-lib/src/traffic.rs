//! Traffic-factor sources.
//!
//! The map builder asks a [`TrafficModel`] for one factor per block once the
//! block's geometry is final. A factor below 1 models light traffic, above 1
//! heavy traffic. Tests inject [`ConstantTraffic`] or a closure; the CLI uses
//! the seeded [`GaussianTraffic`] so runs are reproducible.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::block::Block;

/// Lower bound applied to generated traffic factors.
pub const MIN_TRAFFIC_FACTOR: f64 = 0.5;
/// Upper bound applied to generated traffic factors.
pub const MAX_TRAFFIC_FACTOR: f64 = 1.5;

const MEAN: f64 = 1.0;
const STD_DEV: f64 = 0.2;

/// Source of per-block traffic factors.
pub trait TrafficModel {
    fn traffic_factor(&mut self, block: &Block) -> f64;
}

impl<F> TrafficModel for F
where
    F: FnMut(&Block) -> f64,
{
    fn traffic_factor(&mut self, block: &Block) -> f64 {
        self(block)
    }
}

/// Same factor for every block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantTraffic(pub f64);

impl Default for ConstantTraffic {
    fn default() -> Self {
        Self(MEAN)
    }
}

impl TrafficModel for ConstantTraffic {
    fn traffic_factor(&mut self, _block: &Block) -> f64 {
        self.0
    }
}

/// Normally distributed factors around 1.0 (σ = 0.2), clamped to
/// `[MIN_TRAFFIC_FACTOR, MAX_TRAFFIC_FACTOR]`.
#[derive(Debug, Clone)]
pub struct GaussianTraffic {
    rng: ChaCha8Rng,
}

impl GaussianTraffic {
    /// Deterministic generator: identical seeds yield identical factors.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    fn sample(&mut self) -> f64 {
        // Box-Muller; u1 is kept in (0, 1] so ln(u1) is finite.
        let u1: f64 = 1.0 - self.rng.gen::<f64>();
        let u2: f64 = self.rng.gen::<f64>();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        MEAN + STD_DEV * z
    }
}

impl TrafficModel for GaussianTraffic {
    fn traffic_factor(&mut self, _block: &Block) -> f64 {
        self.sample().clamp(MIN_TRAFFIC_FACTOR, MAX_TRAFFIC_FACTOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::Coordinate;

    fn block() -> Block {
        Block::new(
            "George St".into(),
            1,
            1.0,
            vec![Coordinate::new(0, 0), Coordinate::new(0, 10)],
        )
    }

    #[test]
    fn gaussian_factors_stay_in_range() {
        let mut model = GaussianTraffic::seeded(7);
        let block = block();
        for _ in 0..10_000 {
            let factor = model.traffic_factor(&block);
            assert!((MIN_TRAFFIC_FACTOR..=MAX_TRAFFIC_FACTOR).contains(&factor));
        }
    }

    #[test]
    fn gaussian_is_reproducible_per_seed() {
        let block = block();
        let mut a = GaussianTraffic::seeded(42);
        let mut b = GaussianTraffic::seeded(42);
        let first: Vec<f64> = (0..16).map(|_| a.traffic_factor(&block)).collect();
        let second: Vec<f64> = (0..16).map(|_| b.traffic_factor(&block)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn gaussian_mean_is_near_one() {
        let mut model = GaussianTraffic::seeded(1);
        let block = block();
        let samples = 20_000;
        let total: f64 = (0..samples).map(|_| model.traffic_factor(&block)).sum();
        let mean = total / samples as f64;
        assert!((mean - 1.0).abs() < 0.02, "mean was {mean}");
    }

    #[test]
    fn closures_are_traffic_models() {
        let mut model = |block: &Block| block.block_number as f64;
        assert_eq!(model.traffic_factor(&block()), 1.0);
    }
}
