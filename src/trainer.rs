use log::{debug, info, trace};

use crate::prelude::*;

/// What happened during one training step.
///
/// Every value is taken before the parameters were updated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepReport {
    pub step: usize,
    pub output: f64,
    pub loss: f64,
    pub d_loss_d_output: f64,
    pub d_output_d_weight: f64,
    pub d_output_d_bias: f64,
}

impl StepReport {
    pub fn status_line(&self) -> String {
        format!(
            "Step {}: loss={:.4}, output={:.4}",
            self.step, self.loss, self.output
        )
    }
}

/// State at the end of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub weight: f64,
    pub bias: f64,
    pub output: f64,
    pub loss: f64,
    /// Steps taken by the `run` call that produced this summary.
    pub steps: usize,
    pub status_lines: usize,
}

/// Fits a single neuron to one `(input, target)` pair by gradient descent.
pub struct Trainer<O: Optimize = GradientDescent> {
    config: TrainConfig,
    neuron: Neuron,
    optimizer: O,
    step: usize,
}

impl Trainer<GradientDescent> {
    /// Validates `config` and draws the initial parameters from a standard
    /// normal distribution, seeded by `config.seed` when present.
    pub fn from_config(config: TrainConfig) -> Result<Self> {
        config.validate()?;
        let neuron = Neuron::from_init(&mut NormalInit::from_seed(config.seed))?;
        Ok(Self::new(config, neuron))
    }

    pub fn new(config: TrainConfig, neuron: Neuron) -> Self {
        let optimizer = GradientDescent::new(config.learning_rate);
        Self::with_optimizer(config, neuron, optimizer)
    }
}

impl<O: Optimize> Trainer<O> {
    pub fn with_optimizer(config: TrainConfig, neuron: Neuron, optimizer: O) -> Self {
        Self {
            config,
            neuron,
            optimizer,
            step: 0,
        }
    }

    pub fn config(&self) -> &TrainConfig {
        &self.config
    }

    pub fn neuron(&self) -> &Neuron {
        &self.neuron
    }

    /// The index of the next step to run.
    pub fn current_step(&self) -> usize {
        self.step
    }

    pub fn is_done(&self) -> bool {
        self.step >= self.config.steps
    }

    /// Runs one forward pass, loss, backward pass and parameter update.
    pub fn step(&mut self) -> StepReport {
        let (input, target) = (self.config.input, self.config.target);

        let output = self.neuron.forward(input);
        let loss = squared_error(output, target);
        let d_loss_d_output = squared_error_prime(output, target);
        let grad = self.neuron.backward(input, d_loss_d_output);

        let report = StepReport {
            step: self.step,
            output,
            loss,
            d_loss_d_output,
            d_output_d_weight: input,
            d_output_d_bias: 1.,
        };

        trace!(
            "step {}: d_loss/d_output={}, grad=[{}, {}]",
            self.step,
            d_loss_d_output,
            grad[WEIGHT],
            grad[BIAS]
        );

        self.optimizer.update(self.neuron.params_mut(), &grad);
        self.step += 1;
        report
    }

    /// Runs every remaining step, writing a status line to `out` on each
    /// step that is a multiple of `log_every`.
    ///
    /// # Returns
    /// An error if the config is invalid or a status line can't be written.
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<Summary> {
        self.config.validate()?;

        let first_step = self.step;
        info!(
            "training from weight={}, bias={} for {} steps",
            self.neuron.weight(),
            self.neuron.bias(),
            self.config.steps.saturating_sub(first_step)
        );

        let mut status_lines = 0;
        while !self.is_done() {
            let report = self.step();
            if report.step % self.config.log_every == 0 {
                debug!("{report:?}");
                writeln!(out, "{}", report.status_line())?;
                status_lines += 1;
            }
        }
        out.flush()?;

        let output = self.neuron.forward(self.config.input);
        let summary = Summary {
            weight: self.neuron.weight(),
            bias: self.neuron.bias(),
            output,
            loss: squared_error(output, self.config.target),
            steps: self.step - first_step,
            status_lines,
        };

        info!(
            "finished: {}, output={}, loss={}",
            self.neuron, summary.output, summary.loss
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trainer(weight: f64, bias: f64) -> Trainer {
        Trainer::new(TrainConfig::default(), Neuron::new(weight, bias))
    }

    #[test]
    fn known_first_step() {
        let mut trainer = trainer(1., 0.);
        let report = trainer.step();

        assert_eq!(report.step, 0);
        assert!((report.output - 0.5).abs() < 1e-6);
        assert!((report.loss - 0.25).abs() < 1e-6);
        assert!((report.d_loss_d_output + 1.).abs() < 1e-6);
        assert_eq!(report.d_output_d_weight, 0.5);
        assert_eq!(report.d_output_d_bias, 1.);

        assert!((trainer.neuron().weight() - 1.05).abs() < 1e-6);
        assert!((trainer.neuron().bias() - 0.1).abs() < 1e-6);
        assert_eq!(trainer.current_step(), 1);
    }

    #[test]
    fn bias_update_uses_pre_update_output() {
        let mut trainer = trainer(-1.3, 0.8);
        let (w0, b0) = (trainer.neuron().weight(), trainer.neuron().bias());
        let report = trainer.step();
        let lr = trainer.config().learning_rate;

        assert_eq!(report.output, w0 * 0.5 + b0);

        let expected_w = w0 - lr * report.d_loss_d_output * report.d_output_d_weight;
        let expected_b = b0 - lr * report.d_loss_d_output * report.d_output_d_bias;
        assert!((trainer.neuron().weight() - expected_w).abs() < 1e-6);
        assert!((trainer.neuron().bias() - expected_b).abs() < 1e-6);

        // Recomputing the output with the new weight would give a different bias.
        let stale = squared_error_prime(trainer.neuron().weight() * 0.5 + b0, 1.);
        assert!((trainer.neuron().bias() - (b0 - lr * stale)).abs() > 1e-4);
    }

    #[test]
    fn status_line_format() {
        let report = StepReport {
            step: 300,
            output: 0.987654,
            loss: 0.000152,
            d_loss_d_output: 0.,
            d_output_d_weight: 0.5,
            d_output_d_bias: 1.,
        };
        assert_eq!(report.status_line(), "Step 300: loss=0.0002, output=0.9877");
    }

    #[test]
    fn run_writes_every_log_interval() {
        let config = TrainConfig {
            steps: 25,
            log_every: 10,
            ..Default::default()
        };
        let mut trainer = Trainer::new(config, Neuron::new(0., 0.));
        let mut out = Vec::new();
        let summary = trainer.run(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let steps: Vec<_> = text
            .lines()
            .map(|line| line.split(':').next().unwrap().to_string())
            .collect();
        assert_eq!(steps, ["Step 0", "Step 10", "Step 20"]);
        assert_eq!(summary.status_lines, 3);
        assert_eq!(summary.steps, 25);
        assert!(trainer.is_done());
    }

    #[test]
    fn run_after_done_is_a_no_op() {
        let config = TrainConfig {
            steps: 3,
            ..Default::default()
        };
        let mut trainer = Trainer::new(config, Neuron::new(0., 0.));
        trainer.run(&mut std::io::sink()).unwrap();
        let params = trainer.neuron().params().clone();

        let mut out = Vec::new();
        let summary = trainer.run(&mut out).unwrap();
        assert!(out.is_empty());
        assert_eq!(summary.steps, 0);
        assert_eq!(summary.status_lines, 0);
        assert_eq!(trainer.neuron().params(), &params);
    }

    #[test]
    fn from_config_rejects_invalid_config() {
        let config = TrainConfig {
            log_every: 0,
            ..Default::default()
        };
        assert!(matches!(
            Trainer::from_config(config),
            Err(TrainError::InvalidConfig(_))
        ));
    }

    #[test]
    fn run_rejects_zero_log_interval() {
        let config = TrainConfig {
            log_every: 0,
            ..Default::default()
        };
        let mut trainer = Trainer::new(config, Neuron::new(1., 0.));
        let mut out = Vec::new();

        assert!(matches!(
            trainer.run(&mut out),
            Err(TrainError::InvalidConfig(_))
        ));
        assert!(out.is_empty());
        assert_eq!(trainer.current_step(), 0);
    }

    #[test]
    fn summary_counts_steps_of_its_own_run() {
        let config = TrainConfig {
            steps: 10,
            ..Default::default()
        };
        let mut trainer = Trainer::new(config, Neuron::new(0., 0.));
        for _ in 0..4 {
            trainer.step();
        }

        let summary = trainer.run(&mut std::io::sink()).unwrap();
        assert_eq!(summary.steps, 6);
        assert_eq!(trainer.current_step(), 10);
    }

    #[test]
    fn status_line_rounds_in_double_precision() {
        let mut trainer = trainer(1., -0.99995);
        assert_eq!(
            trainer.step().status_line(),
            "Step 0: loss=2.2499, output=-0.5000"
        );
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_reported() {
        let mut trainer = trainer(0., 0.);
        match trainer.run(&mut FailingWriter) {
            Err(TrainError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
