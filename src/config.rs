use crate::prelude::*;

/// Everything a training run needs, fixed before the first step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainConfig {
    pub input: f64,
    pub target: f64,
    pub learning_rate: f64,
    pub steps: usize,
    /// A status line is written whenever `step % log_every == 0`.
    pub log_every: usize,
    /// `None` draws the initial parameters from system entropy.
    pub seed: Option<u64>,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            input: 0.5,
            target: 1.0,
            learning_rate: 0.1,
            steps: 1000,
            log_every: 100,
            seed: None,
        }
    }
}

impl TrainConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.steps == 0 {
            return Err(TrainError::InvalidConfig("steps must be positive".into()));
        }

        if self.log_every == 0 {
            return Err(TrainError::InvalidConfig(
                "log_every must be positive".into(),
            ));
        }

        let scalars = [
            ("input", self.input),
            ("target", self.target),
            ("learning_rate", self.learning_rate),
        ];

        match scalars.iter().find(|(_, value)| !value.is_finite()) {
            Some((name, value)) => Err(TrainError::InvalidConfig(format!(
                "{name} must be finite, got {value}"
            ))),
            None => Ok(()),
        }
    }
}
