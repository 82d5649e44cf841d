pub mod error;
pub mod math;
pub mod activation;
pub mod loss;
pub mod network;
pub mod data;
pub mod train;

// Convenience re-exports
pub use error::{NnError, Result};
pub use math::matrix::{Matrix, Operand};
pub use activation::sigmoid::{sigmoid, sigmoid_bounded, dsigmoid};
pub use loss::mse::MseLoss;
pub use network::network::Network;
pub use network::config::NetworkConfig;
pub use data::sample::Sample;
pub use train::{train_loop, EpochStats, LossHistory, TrainConfig, TrainingSession};
