use crate::prelude::*;

/// Moves parameters from step `t` to `t + 1` given their gradient.
pub trait Optimize {
    fn update(&mut self, params: &mut Params, grad: &Params);
}

/// Plain gradient descent: no momentum, no adaptive step.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f64,
}

impl GradientDescent {
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }
}

impl Optimize for GradientDescent {
    fn update(&mut self, params: &mut Params, grad: &Params) {
        params.scaled_add(-self.learning_rate, grad);
    }
}
