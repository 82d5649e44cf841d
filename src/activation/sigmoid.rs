/// Logistic activation: `1 / (1 + e^-x)`, mapping any real into (0, 1).
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Smallest and largest activation `sigmoid_bounded` will return.
pub const MIN_ACTIVATION: f64 = f64::MIN_POSITIVE;
pub const MAX_ACTIVATION: f64 = 1.0 - f64::EPSILON;

/// `sigmoid` kept strictly inside (0, 1).
///
/// Large pre-activations round the logistic to exactly 0.0 or 1.0 in `f64`,
/// and an overflowed `W·x + b` can be NaN (`inf + -inf`). NaN is treated as
/// a zero pre-activation; everything else is clamped to
/// `[MIN_ACTIVATION, MAX_ACTIVATION]`.
pub fn sigmoid_bounded(z: f64) -> f64 {
    let z = if z.is_nan() { 0.0 } else { z };
    sigmoid(z).clamp(MIN_ACTIVATION, MAX_ACTIVATION)
}

/// Derivative of the logistic function expressed through its output.
///
/// `y` must already be an activation (`y = sigmoid(z)`), not the raw
/// pre-activation `z`: `sigmoid'(z) = y * (1 - y)`.
pub fn dsigmoid(y: f64) -> f64 {
    y * (1.0 - y)
}
