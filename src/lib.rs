pub mod prelude;

pub mod config;
pub mod error;
pub mod functional;
pub mod init;
pub mod nn;
pub mod optimizers;
pub mod trainer;
pub mod utils;

#[allow(unused_imports)]
use crate::prelude::*;

#[test]
fn converges_from_standard_normal_starts() {
    for seed in 0..50 {
        let config = TrainConfig::default().with_seed(seed);
        let mut trainer = Trainer::from_config(config).unwrap();
        let summary = trainer.run(&mut std::io::sink()).unwrap();

        assert_eq!(summary.steps, 1000);
        assert!(
            (summary.output - 1.).abs() < 0.01,
            "seed {seed}: output = {}",
            summary.output
        );
    }
}

#[test]
fn converges_from_wide_start() {
    let mut trainer = Trainer::new(TrainConfig::default(), Neuron::new(4., -4.));
    let summary = trainer.run(&mut std::io::sink()).unwrap();
    assert!((summary.output - 1.).abs() < 0.01);
}

#[test]
fn loss_never_increases_near_target() {
    let mut trainer = Trainer::new(TrainConfig::default(), Neuron::new(0.9, 0.52));
    let mut prev = trainer.step().loss;

    for _ in 1..30 {
        let report = trainer.step();
        assert!(report.loss <= prev, "step {}: {} > {prev}", report.step, report.loss);
        prev = report.loss;
    }
}

#[test]
fn ten_status_lines_per_default_run() {
    let mut trainer = Trainer::from_config(TrainConfig::default().with_seed(42)).unwrap();
    let mut out = Vec::new();
    let summary = trainer.run(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines.len(), 10);
    assert_eq!(summary.status_lines, 10);

    for (i, line) in lines.iter().enumerate() {
        let prefix = format!("Step {}: loss=", i * 100);
        assert!(line.starts_with(&prefix), "{line}");

        let (loss, output) = line[prefix.len()..].split_once(", output=").unwrap();
        for value in [loss, output] {
            let (_, decimals) = value.split_once('.').unwrap();
            assert_eq!(decimals.len(), 4, "{line}");
            assert!(value.parse::<f64>().is_ok(), "{line}");
        }
    }
}

#[test]
fn same_seed_same_run() {
    let run = |seed| {
        let mut trainer = Trainer::from_config(TrainConfig::default().with_seed(seed)).unwrap();
        let mut out = Vec::new();
        let summary = trainer.run(&mut out).unwrap();
        (out, summary)
    };

    assert_eq!(run(9), run(9));
    assert_ne!(run(9).0, run(10).0);
}

#[test]
fn entropy_seeded_run_still_converges() {
    let mut trainer = Trainer::from_config(TrainConfig::default()).unwrap();
    let summary = trainer.run(&mut std::io::sink()).unwrap();
    assert!((summary.output - 1.).abs() < 0.01);
}
