//! Trains the perceptron on the synthetic digit glyphs and prints what it
//! predicts for each of them.
//!
//! Run with:
//!   cargo run --release -- --epochs 200
//! Set `RUST_LOG=debug` for per-epoch detail.

use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use glyph_nn::data::demo_samples;
use glyph_nn::{EpochStats, NetworkConfig, Result, TrainConfig, TrainingSession};

#[derive(Parser, Debug)]
#[command(name = "glyph-nn")]
#[command(about = "Train a tiny perceptron on synthetic digit glyphs")]
#[command(version)]
struct Cli {
    /// Architecture JSON (input_size, hidden_size, output_size, learning_rate)
    #[arg(short, long)]
    config: Option<String>,

    /// Number of epochs
    #[arg(short, long, default_value = "200")]
    epochs: usize,

    /// Hidden layer size (overrides the config file)
    #[arg(long)]
    hidden: Option<usize>,

    /// Learning rate (overrides the config file)
    #[arg(short, long)]
    learning_rate: Option<f64>,

    /// Epochs between progress reports
    #[arg(short, long, default_value = "5")]
    report_every: usize,

    /// Length of the rolling loss history
    #[arg(long, default_value = "100")]
    history: usize,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut net_config = match &cli.config {
        Some(path) => NetworkConfig::load_json(path)?,
        None => NetworkConfig::default(),
    };
    if let Some(hidden) = cli.hidden {
        net_config.hidden_size = hidden;
    }
    if let Some(lr) = cli.learning_rate {
        net_config.learning_rate = lr;
    }
    info!(?net_config, "building network");

    let samples = demo_samples();
    let mut session = TrainingSession::new(net_config.build()?, cli.history);

    // Progress is printed from its own thread so the loop only pays for a send.
    let (tx, rx) = mpsc::channel();
    let printer = spawn_printer(rx);

    let train_config = TrainConfig {
        progress_tx: Some(tx),
        ..TrainConfig::new(cli.epochs, cli.report_every)
    };
    let result = session.run(&samples, &train_config);
    drop(train_config);
    join_printer(printer);
    let final_loss = result?;

    info!(final_loss, epochs = session.epochs_trained(), "done");
    for (digit, sample) in samples.iter().enumerate() {
        let probs = session.predict(&sample.input)?;
        let shown: Vec<String> = probs.iter().map(|p| format!("{:.0}%", p * 100.0)).collect();
        println!("digit {digit}: [{}]", shown.join(", "));
    }

    Ok(())
}

/// Prints each report as a JSON line until every sender is gone.
/// Yields the number of lines printed.
fn spawn_printer(rx: mpsc::Receiver<EpochStats>) -> JoinHandle<usize> {
    thread::spawn(move || {
        let mut printed = 0;
        for stats in rx {
            match serde_json::to_string(&stats) {
                Ok(line) => {
                    println!("{line}");
                    printed += 1;
                }
                Err(e) => warn!(error = %e, "could not encode progress"),
            }
        }
        printed
    })
}

/// Waits for the printer; a panic on its thread is logged, not swallowed.
fn join_printer(printer: JoinHandle<usize>) -> Option<usize> {
    match printer.join() {
        Ok(printed) => Some(printed),
        Err(_) => {
            warn!("progress printer thread panicked; some progress lines may be missing");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printer_counts_every_report() {
        let (tx, rx) = mpsc::channel();
        let printer = spawn_printer(rx);
        for epoch in 1..=3 {
            tx.send(EpochStats { epoch, total_epochs: 3, mean_loss: 0.1, elapsed_ms: 0 }).unwrap();
        }
        drop(tx);
        assert_eq!(join_printer(printer), Some(3));
    }

    #[test]
    fn panicked_printer_is_reported() {
        let printer: JoinHandle<usize> = thread::spawn(|| panic!("printer failed"));
        assert_eq!(join_printer(printer), None);
    }

    #[test]
    fn cli_defaults_match_the_demo_loop() {
        let cli = Cli::parse_from(["glyph-nn"]);
        assert_eq!((cli.epochs, cli.report_every, cli.history), (200, 5, 100));
        assert!(cli.config.is_none() && cli.hidden.is_none() && cli.learning_rate.is_none());
    }
}
