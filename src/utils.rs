use crate::prelude::*;

/// Draws an array of the given length from a standard normal distribution,
/// sampling from the given `Rng`.
#[macro_export]
macro_rules! normal_array {
    ($n:expr, $rng:expr) => {
        Array1::<f64>::random_using($n, StandardNormal, $rng)
    };
}

#[macro_export]
macro_rules! params {
    ($weight:expr, $bias:expr) => {
        Params::from_vec(vec![$weight, $bias])
    };
}

/// Trainable parameters of a neuron, laid out as `[weight, bias]`.
pub type Params = Array1<f64>;

pub const WEIGHT: usize = 0;
pub const BIAS: usize = 1;
