use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};
use crate::train::epoch_stats::EpochStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`       — full passes over the samples
/// - `report_every` — epochs per batch; after each batch (and after the last
///                    epoch) one `EpochStats` is sent and the stop flag is
///                    checked. `0` is treated as `1`.
/// - `progress_tx`  — optional channel sender.  If the receiver is dropped
///                    the loop terminates at the next report.
/// - `stop_flag`    — optional atomic flag; when set to `true` the loop
///                    terminates at the next report.
pub struct TrainConfig {
    pub epochs: usize,
    pub report_every: usize,
    pub progress_tx: Option<mpsc::Sender<EpochStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel and no stop flag.
    pub fn new(epochs: usize, report_every: usize) -> Self {
        TrainConfig {
            epochs,
            report_every,
            progress_tx: None,
            stop_flag: None,
        }
    }
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig::new(200, 5)
    }
}
