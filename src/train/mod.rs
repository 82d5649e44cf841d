pub mod epoch_stats;
pub mod history;
pub mod loop_fn;
pub mod session;
pub mod train_config;

pub use epoch_stats::EpochStats;
pub use history::LossHistory;
pub use loop_fn::train_loop;
pub use session::TrainingSession;
pub use train_config::TrainConfig;
