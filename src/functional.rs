/// Squared error of a single prediction, neither halved nor averaged.
pub fn squared_error(output: f64, target: f64) -> f64 {
    (output - target).powi(2)
}

/// Derivative of [`squared_error`] with respect to `output`.
pub fn squared_error_prime(output: f64, target: f64) -> f64 {
    2. * (output - target)
}
