use tracing::info;

use crate::data::sample::Sample;
use crate::error::Result;
use crate::network::network::Network;
use crate::train::history::LossHistory;
use crate::train::loop_fn::train_loop;
use crate::train::train_config::TrainConfig;

/// Everything a front end needs to drive training and draw the results:
/// the network, its recent loss curve and how many epochs it has seen.
///
/// The session is owned by the caller and passed by reference to whatever
/// schedules training and rendering. Nothing in it is global. Runs take
/// `&mut self`, so two runs on one session can never overlap.
#[derive(Debug)]
pub struct TrainingSession {
    network: Network,
    history: LossHistory,
    epochs_trained: usize,
}

impl TrainingSession {
    pub fn new(network: Network, history_len: usize) -> TrainingSession {
        TrainingSession {
            network,
            history: LossHistory::new(history_len),
            epochs_trained: 0,
        }
    }

    /// Runs `config.epochs` epochs over `samples` and returns the last mean loss.
    ///
    /// A run cut short by the stop flag or a dropped progress receiver still
    /// counts the epochs it completed.
    pub fn run(&mut self, samples: &[Sample], config: &TrainConfig) -> Result<f64> {
        let recorded_before = self.history.total_recorded();
        let loss = train_loop(&mut self.network, samples, config, &mut self.history)?;
        self.epochs_trained += self.history.total_recorded() - recorded_before;

        info!(epochs_trained = self.epochs_trained, last_loss = loss, "training run finished");
        Ok(loss)
    }

    /// Single training step outside the epoch loop.
    pub fn train_step(&mut self, input: &[f64], target: &[f64]) -> Result<f64> {
        self.network.train(input, target)
    }

    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        self.network.predict(input)
    }

    /// Read-only view of the network, e.g. for drawing its weights.
    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn history(&self) -> &LossHistory {
        &self.history
    }

    pub fn epochs_trained(&self) -> usize {
        self.epochs_trained
    }

    pub fn into_network(self) -> Network {
        self.network
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::patterns::demo_samples;

    #[test]
    fn run_counts_epochs_beyond_history_capacity() {
        let net = Network::new(784, 8, 3).unwrap();
        let mut session = TrainingSession::new(net, 4);
        session.run(&demo_samples(), &TrainConfig::new(10, 5)).unwrap();
        session.run(&demo_samples(), &TrainConfig::new(3, 5)).unwrap();
        assert_eq!(session.epochs_trained(), 13);
        assert_eq!(session.history().len(), 4);
    }

    #[test]
    fn rejected_run_counts_nothing() {
        let net = Network::new(2, 2, 1).unwrap();
        let mut session = TrainingSession::new(net, 10);
        assert!(session.run(&demo_samples(), &TrainConfig::new(1, 1)).is_err());
        assert_eq!(session.epochs_trained(), 0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn predict_and_step_delegate_to_network() {
        let net = Network::new(2, 2, 1).unwrap();
        let mut session = TrainingSession::new(net, 10);
        let before = session.predict(&[0.5, 0.5]).unwrap();
        assert_eq!(before, session.network().predict(&[0.5, 0.5]).unwrap());
        let loss = session.train_step(&[0.5, 0.5], &[1.0]).unwrap();
        assert!(loss.is_finite() && loss >= 0.0);
        assert_ne!(session.predict(&[0.5, 0.5]).unwrap(), before);
    }
}
