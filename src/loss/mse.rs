pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let errors: Vec<f64> = expected.iter().zip(predicted.iter())
            .map(|(y, p)| y - p)
            .collect();
        MseLoss::from_errors(&errors)
    }

    /// MSE from already-computed per-output errors: sum(e²) / n.
    /// An empty slice has zero loss.
    pub fn from_errors(errors: &[f64]) -> f64 {
        if errors.is_empty() {
            return 0.0;
        }
        errors.iter().map(|e| e * e).sum::<f64>() / errors.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn loss_is_mean_of_squares() {
        let l = MseLoss::loss(&[0.5, 0.0, 1.0], &[1.0, 0.0, 0.0]);
        assert_abs_diff_eq!(l, (0.25 + 0.0 + 1.0) / 3.0, epsilon = 1e-15);
    }

    #[test]
    fn from_errors_ignores_sign() {
        assert_eq!(MseLoss::from_errors(&[-2.0, 2.0]), 4.0);
        assert_eq!(MseLoss::from_errors(&[]), 0.0);
    }
}
