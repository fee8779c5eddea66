use crate::prelude::*;

/// A single linear unit: `output = weight * x + bias`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neuron {
    params: Params,
}

impl Neuron {
    pub fn new(weight: f64, bias: f64) -> Self {
        Self {
            params: params![weight, bias],
        }
    }

    /// Draws weight and bias independently from `init`.
    pub fn from_init<I: ParamInit>(init: &mut I) -> Result<Self> {
        let params = init.sample(2)?;
        Ok(Self { params })
    }

    pub fn weight(&self) -> f64 {
        self.params[WEIGHT]
    }

    pub fn bias(&self) -> f64 {
        self.params[BIAS]
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut Params {
        &mut self.params
    }

    pub fn forward(&self, x: f64) -> f64 {
        self.weight() * x + self.bias()
    }

    /// Chains `d_loss_d_output` through the forward pass.
    ///
    /// # Returns
    /// The gradient `[dL/dw, dL/db]`, where `d_output/d_weight = x` and
    /// `d_output/d_bias = 1`.
    pub fn backward(&self, x: f64, d_loss_d_output: f64) -> Params {
        let d_output_d_params = params![x, 1.];
        d_output_d_params * d_loss_d_output
    }
}

impl fmt::Display for Neuron {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Neuron(weight={}, bias={})", self.weight(), self.bias())
    }
}
