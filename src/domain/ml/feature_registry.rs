use crate::domain::clinical::features::FeatureRecord;

/// Ordered list of feature names.
/// This order MUST match exactly the column order the model artifact was
/// trained on. Any change here is a breaking change for deployed models.
pub const FEATURE_NAMES: &[&str] = &[
    "age", "thalach", "oldpeak", "cp", "exang", "slope", "ca", "thal",
];

/// Converts a validated record into the numeric vector the predictor
/// expects, in `FEATURE_NAMES` order.
pub fn record_to_vector(record: &FeatureRecord) -> Vec<f64> {
    vec![
        record.age as f64,
        record.thalach as f64,
        record.oldpeak,
        record.cp.code() as f64,
        record.exang.code() as f64,
        record.slope.code() as f64,
        record.ca as f64,
        record.thal.code() as f64,
    ]
}
