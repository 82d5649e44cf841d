use serde::{Serialize, Deserialize};

/// Progress report emitted by `train_loop` at each report interval.
///
/// Receivers (a loss chart, a progress line in the CLI) use this to redraw
/// between batches of epochs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpochStats {
    /// 1-based epoch number.
    pub epoch: usize,
    /// Total epochs requested for this run.
    pub total_epochs: usize,
    /// Mean per-sample training loss over this epoch.
    pub mean_loss: f64,
    /// Wall-clock time spent in the epochs since the previous report.
    pub elapsed_ms: u64,
}
