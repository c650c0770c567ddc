use thiserror::Error;

/// Out-of-domain input values.
///
/// Unreachable from the bounded form widgets, but the prediction boundary
/// revalidates every record before the model sees it, and free-form callers
/// (tests, future CLI surfaces) go through the same check.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field} out of range: {value} (expected {min} to {max})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Errors surfaced by the prediction boundary.
///
/// All of these are rendered inline in the UI; none terminate the process.
#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("Prediction model is unavailable (artifact missing or unreadable)")]
    ModelUnavailable,

    #[error("Invalid feature record: {0}")]
    InvalidRecord(#[from] ValidationError),

    #[error("Prediction failed: {reason}")]
    Inference { reason: String },

    #[error("Prediction timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}
