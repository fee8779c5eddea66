use crate::prelude::*;

/// A source of initial parameter values.
pub trait ParamInit {
    /// Should return exactly `n` values, or fail if it cannot supply them.
    ///
    /// # Arguments
    /// * `n` - The amount of values to draw.
    fn sample(&mut self, n: usize) -> Result<Params>;
}

/// Draws values from a standard normal distribution (mean 0, variance 1).
pub struct NormalInit<R: Rng = StdRng> {
    rng: R,
}

impl NormalInit<StdRng> {
    /// Seeds the generator from system entropy, so every run differs.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// A reproducible source: the same seed always yields the same values.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> NormalInit<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ParamInit for NormalInit<R> {
    fn sample(&mut self, n: usize) -> Result<Params> {
        Ok(normal_array!(n, &mut self.rng))
    }
}

/// Hands out a fixed list of values, then reports exhaustion.
pub struct ConstInit {
    values: Vec<f64>,
}

impl ConstInit {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl ParamInit for ConstInit {
    fn sample(&mut self, n: usize) -> Result<Params> {
        if n > self.values.len() {
            return Err(TrainError::InitExhausted {
                requested: n,
                remaining: self.values.len(),
            });
        }

        let rest = self.values.split_off(n);
        let sample = std::mem::replace(&mut self.values, rest);
        Ok(Params::from_vec(sample))
    }
}
