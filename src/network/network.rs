use tracing::debug;

use crate::{
    activation::sigmoid::{dsigmoid, sigmoid_bounded},
    error::{NnError, Result},
    loss::mse::MseLoss,
    math::matrix::Matrix,
};

pub const DEFAULT_LEARNING_RATE: f64 = 0.15;

/// Input → hidden → output perceptron with logistic activations.
///
/// Weights are stored neuron-major: `weights_ih` is `hidden x input` and
/// `weights_ho` is `output x hidden`, so a forward step is `W · x + b` on
/// column vectors.
#[derive(Debug, Clone)]
pub struct Network {
    input_nodes: usize,
    hidden_nodes: usize,
    output_nodes: usize,
    weights_ih: Matrix,
    weights_ho: Matrix,
    bias_h: Matrix,
    bias_o: Matrix,
    learning_rate: f64,
}

impl Network {
    /// Builds a network with the default learning rate.
    pub fn new(input_nodes: usize, hidden_nodes: usize, output_nodes: usize) -> Result<Network> {
        Network::with_learning_rate(input_nodes, hidden_nodes, output_nodes, DEFAULT_LEARNING_RATE)
    }

    /// Builds a network and Xavier-randomizes every weight and bias.
    pub fn with_learning_rate(
        input_nodes: usize,
        hidden_nodes: usize,
        output_nodes: usize,
        learning_rate: f64,
    ) -> Result<Network> {
        let mut weights_ih = Matrix::new(hidden_nodes, input_nodes)?;
        let mut weights_ho = Matrix::new(output_nodes, hidden_nodes)?;
        let mut bias_h = Matrix::new(hidden_nodes, 1)?;
        let mut bias_o = Matrix::new(output_nodes, 1)?;

        weights_ih.randomize_uniform();
        weights_ho.randomize_uniform();
        bias_h.randomize_uniform();
        bias_o.randomize_uniform();

        debug!(input_nodes, hidden_nodes, output_nodes, learning_rate, "network initialized");

        Ok(Network {
            input_nodes,
            hidden_nodes,
            output_nodes,
            weights_ih,
            weights_ho,
            bias_h,
            bias_o,
            learning_rate,
        })
    }

    pub fn input_nodes(&self) -> usize {
        self.input_nodes
    }

    pub fn hidden_nodes(&self) -> usize {
        self.hidden_nodes
    }

    pub fn output_nodes(&self) -> usize {
        self.output_nodes
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    /// Input → hidden weights (`hidden x input`), read-only.
    pub fn weights_ih(&self) -> &Matrix {
        &self.weights_ih
    }

    /// Hidden → output weights (`output x hidden`), read-only.
    pub fn weights_ho(&self) -> &Matrix {
        &self.weights_ho
    }

    pub fn bias_h(&self) -> &Matrix {
        &self.bias_h
    }

    pub fn bias_o(&self) -> &Matrix {
        &self.bias_o
    }

    /// Inference. Returns one activation in (0, 1) per output neuron and
    /// never touches the network's parameters.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        check_len("input", self.input_nodes, input)?;
        let inputs = Matrix::from_vec(input)?;
        let (_, outputs) = self.feed_forward(&inputs)?;
        Ok(outputs.to_vec())
    }

    /// One forward + backward pass on a single (input, target) pair.
    ///
    /// Updates both weight matrices and both bias vectors in place and
    /// returns the mean squared error of the outputs before the update.
    /// Shape errors are reported before any parameter is modified.
    pub fn train(&mut self, input: &[f64], target: &[f64]) -> Result<f64> {
        check_len("input", self.input_nodes, input)?;
        check_len("target", self.output_nodes, target)?;

        let inputs = Matrix::from_vec(input)?;
        let targets = Matrix::from_vec(target)?;
        let (hidden, outputs) = self.feed_forward(&inputs)?;

        let output_errors = Matrix::subtract(&targets, &outputs)?;

        let mut gradients = outputs.map_to_new(dsigmoid);
        gradients.multiply_in_place(&output_errors)?;
        gradients.multiply_in_place(self.learning_rate)?;
        let weight_ho_deltas = Matrix::multiply(&gradients, &hidden.transpose())?;

        // Blame is routed through the output weights that produced `outputs`,
        // so this must read weights_ho before it is updated.
        let hidden_errors = Matrix::multiply(&self.weights_ho.transpose(), &output_errors)?;

        let mut hidden_gradient = hidden.map_to_new(dsigmoid);
        hidden_gradient.multiply_in_place(&hidden_errors)?;
        hidden_gradient.multiply_in_place(self.learning_rate)?;
        let weight_ih_deltas = Matrix::multiply(&hidden_gradient, &inputs.transpose())?;

        self.weights_ho.add_in_place(&weight_ho_deltas)?;
        self.bias_o.add_in_place(&gradients)?;
        self.weights_ih.add_in_place(&weight_ih_deltas)?;
        self.bias_h.add_in_place(&hidden_gradient)?;

        Ok(MseLoss::from_errors(&output_errors.to_vec()))
    }

    /// Returns the (hidden, output) activation columns for `inputs`.
    /// Every activation lies strictly inside (0, 1), even when `W·x + b`
    /// overflows for extreme inputs.
    fn feed_forward(&self, inputs: &Matrix) -> Result<(Matrix, Matrix)> {
        let mut hidden = Matrix::multiply(&self.weights_ih, inputs)?;
        hidden.add_in_place(&self.bias_h)?;
        hidden.map_in_place(sigmoid_bounded);

        let mut outputs = Matrix::multiply(&self.weights_ho, &hidden)?;
        outputs.add_in_place(&self.bias_o)?;
        outputs.map_in_place(sigmoid_bounded);

        Ok((hidden, outputs))
    }
}

fn check_len(name: &'static str, expected: usize, values: &[f64]) -> Result<()> {
    if values.len() != expected {
        return Err(NnError::InvalidArgument { name, expected, actual: values.len() });
    }
    Ok(())
}
