use thiserror::Error;

/// Result alias used by every fallible operation in the crate.
pub type Result<T> = std::result::Result<T, NnError>;

#[derive(Error, Debug)]
pub enum NnError {
    /// A matrix or layer was requested with a zero-sized dimension.
    #[error("invalid dimension {rows}x{cols}: both must be at least 1")]
    InvalidDimension { rows: usize, cols: usize },

    /// Two operands had shapes the operation cannot combine.
    #[error("dimension mismatch in {op}: {left_rows}x{left_cols} vs {right_rows}x{right_cols}")]
    DimensionMismatch {
        op: &'static str,
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    /// A caller-supplied vector did not match the configured layer size.
    #[error("invalid argument `{name}`: expected length {expected}, got {actual}")]
    InvalidArgument {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
