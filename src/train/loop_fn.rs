use std::sync::atomic::Ordering;
use std::time::Instant;

use tracing::{debug, info};

use crate::data::sample::Sample;
use crate::error::{NnError, Result};
use crate::network::network::Network;
use crate::train::epoch_stats::EpochStats;
use crate::train::history::LossHistory;
use crate::train::train_config::TrainConfig;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Trains `network` for `config.epochs` epochs and returns the mean training
/// loss of the **last completed epoch** (0.0 when no epoch ran).
///
/// Each epoch calls `Network::train` once per sample, in order, and pushes
/// the epoch's mean loss onto `history`.
///
/// Epochs run in batches of `config.report_every`. Between batches the loop
/// hands control back to its observers: it sends an `EpochStats` over
/// `progress_tx` and checks `stop_flag`. The loop breaks early if the
/// receiver has been dropped or the flag is set.
///
/// # Errors
/// `InvalidArgument` if `samples` is empty or any sample's input/target
/// length disagrees with the network. Every sample is checked before the
/// first update, so a rejected call leaves the network untouched.
pub fn train_loop(
    network: &mut Network,
    samples: &[Sample],
    config: &TrainConfig,
    history: &mut LossHistory,
) -> Result<f64> {
    validate_samples(network, samples)?;

    let report_every = config.report_every.max(1);
    let mut last_loss = 0.0;
    let mut batch_start = Instant::now();

    for epoch in 1..=config.epochs {
        let mean_loss = run_one_epoch(network, samples)?;
        history.push(mean_loss);
        last_loss = mean_loss;

        if epoch % report_every != 0 && epoch != config.epochs {
            continue;
        }

        // ── Batch boundary: report and yield ──────────────────────────────
        let stats = EpochStats {
            epoch,
            total_epochs: config.epochs,
            mean_loss,
            elapsed_ms: batch_start.elapsed().as_millis() as u64,
        };
        info!(epoch, total_epochs = config.epochs, mean_loss, "epoch complete");

        if let Some(ref tx) = config.progress_tx {
            if tx.send(stats).is_err() {
                info!(epoch, "progress receiver dropped, stopping");
                break;
            }
        }

        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                info!(epoch, "stop requested");
                break;
            }
        }

        batch_start = Instant::now();
    }

    Ok(last_loss)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// One online-SGD pass over `samples`. Returns the mean per-sample loss.
fn run_one_epoch(network: &mut Network, samples: &[Sample]) -> Result<f64> {
    let mut total_loss = 0.0;
    for sample in samples {
        total_loss += network.train(&sample.input, &sample.target)?;
    }
    let mean = total_loss / samples.len() as f64;
    debug!(mean_loss = mean, "epoch pass");
    Ok(mean)
}

fn validate_samples(network: &Network, samples: &[Sample]) -> Result<()> {
    if samples.is_empty() {
        return Err(NnError::InvalidArgument { name: "samples", expected: 1, actual: 0 });
    }
    for sample in samples {
        if sample.input.len() != network.input_nodes() {
            return Err(NnError::InvalidArgument {
                name: "input",
                expected: network.input_nodes(),
                actual: sample.input.len(),
            });
        }
        if sample.target.len() != network.output_nodes() {
            return Err(NnError::InvalidArgument {
                name: "target",
                expected: network.output_nodes(),
                actual: sample.target.len(),
            });
        }
    }
    Ok(())
}
