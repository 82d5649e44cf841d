pub mod patterns;
pub mod sample;

pub use patterns::{demo_samples, digit_pattern, PATTERN_SIDE};
pub use sample::Sample;
