use serde::{Deserialize, Serialize};

/// One supervised example: an input vector and the output it should produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl Sample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> Sample {
        Sample { input, target }
    }

    /// Sample whose target is the one-hot encoding of `class` over `classes` outputs.
    /// Returns `None` when `class >= classes`.
    pub fn one_hot(input: Vec<f64>, class: usize, classes: usize) -> Option<Sample> {
        if class >= classes {
            return None;
        }
        let mut target = vec![0.0; classes];
        target[class] = 1.0;
        Some(Sample { input, target })
    }
}
