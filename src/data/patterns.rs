//! Synthetic 28x28 glyphs for the digits 0, 1 and 2.
//!
//! Pixels are either 0.0 or 1.0 and stored row-major, so pixel `(r, c)`
//! lives at index `r * PATTERN_SIDE + c`.

use crate::data::sample::Sample;

pub const PATTERN_SIDE: usize = 28;
const CENTER: f64 = 14.0;

/// Renders the glyph for `digit`, or `None` for digits without a pattern.
pub fn digit_pattern(digit: u8) -> Option<Vec<f64>> {
    let mut p = vec![0.0; PATTERN_SIDE * PATTERN_SIDE];
    let mut set = |r: usize, c: usize| p[r * PATTERN_SIDE + c] = 1.0;

    match digit {
        0 => {
            // Ring between radius 5 and 8 (exclusive) around the centre.
            for r in 6..22 {
                for c in 6..22 {
                    let dist = ((r as f64 - CENTER).powi(2) + (c as f64 - CENTER).powi(2)).sqrt();
                    if dist > 5.0 && dist < 8.0 {
                        set(r, c);
                    }
                }
            }
        }
        1 => {
            for r in 4..24 {
                set(r, 14);
                set(r, 15);
            }
        }
        2 => {
            for c in 8..20 {
                set(6, c);
                set(22, c);
            }
            for i in 0..16 {
                set(6 + i, 19 - i);
            }
        }
        _ => return None,
    }

    Some(p)
}

/// The three digit glyphs paired with one-hot targets over three classes.
pub fn demo_samples() -> Vec<Sample> {
    (0..3u8)
        .filter_map(|d| digit_pattern(d).and_then(|p| Sample::one_hot(p, d as usize, 3)))
        .collect()
}
