use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::network::network::{Network, DEFAULT_LEARNING_RATE};

/// Serializable architecture description: layer sizes and learning rate.
///
/// Only the shape of a network is stored here. Trained weights are not part
/// of the config and a network built from it always starts freshly
/// randomized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
}

fn default_learning_rate() -> f64 {
    DEFAULT_LEARNING_RATE
}

impl Default for NetworkConfig {
    /// 28x28 pixel input, 48 hidden units, three digit classes.
    fn default() -> Self {
        NetworkConfig {
            input_size: 784,
            hidden_size: 48,
            output_size: 3,
            learning_rate: DEFAULT_LEARNING_RATE,
        }
    }
}

impl NetworkConfig {
    /// Builds a randomly initialized network with this shape.
    pub fn build(&self) -> Result<Network> {
        Network::with_learning_rate(
            self.input_size,
            self.hidden_size,
            self.output_size,
            self.learning_rate,
        )
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a `NetworkConfig` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NnError;

    #[test]
    fn learning_rate_defaults_when_absent() {
        let cfg: NetworkConfig =
            serde_json::from_str(r#"{"input_size": 2, "hidden_size": 4, "output_size": 1}"#).unwrap();
        assert_eq!(cfg.learning_rate, DEFAULT_LEARNING_RATE);
        let net = cfg.build().unwrap();
        assert_eq!((net.input_nodes(), net.hidden_nodes(), net.output_nodes()), (2, 4, 1));
    }

    #[test]
    fn build_propagates_invalid_dimension() {
        let cfg = NetworkConfig { hidden_size: 0, ..NetworkConfig::default() };
        assert!(matches!(cfg.build(), Err(NnError::InvalidDimension { .. })));
    }

    #[test]
    fn json_file_round_trip() {
        let path = std::env::temp_dir().join(format!("glyph-nn-config-{}.json", std::process::id()));
        let path = path.to_str().unwrap();
        let cfg = NetworkConfig { learning_rate: 0.3, ..NetworkConfig::default() };
        cfg.save_json(path).unwrap();
        let loaded = NetworkConfig::load_json(path).unwrap();
        std::fs::remove_file(path).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = NetworkConfig::load_json("/nonexistent/glyph-nn.json").unwrap_err();
        assert!(matches!(err, NnError::Io(_)));
    }
}
