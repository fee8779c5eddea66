use std::io;
use std::process;

use log::error;
use perceptron::prelude::*;

fn run() -> Result<Summary> {
    let mut trainer = Trainer::from_config(TrainConfig::default())?;
    let stdout = io::stdout();
    trainer.run(&mut stdout.lock())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("training aborted: {e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
