//! Injectable randomness for the simulated bandwidth counters and the
//! ambient effect.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait RandomSource {
    /// Uniform sample in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform sample in `[min, min + spread)`.
    fn spread(&mut self, min: f64, spread: f64) -> f64 {
        min + self.unit() * spread
    }
}

pub struct ThreadRandom(StdRng);

impl ThreadRandom {
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for ThreadRandom {
    fn unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a fixed sequence of samples, cycling when exhausted.
#[cfg(test)]
pub struct Sequence {
    values: Vec<f64>,
    next: usize,
}

#[cfg(test)]
impl Sequence {
    pub fn new(values: &[f64]) -> Self {
        Self { values: values.to_vec(), next: 0 }
    }

    pub fn constant(v: f64) -> Self {
        Self::new(&[v])
    }
}

#[cfg(test)]
impl RandomSource for Sequence {
    fn unit(&mut self) -> f64 {
        let v = self.values[self.next % self.values.len()];
        self.next += 1;
        v
    }
}
