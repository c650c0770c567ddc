pub mod onnx_predictor;
pub mod predictor;
pub mod service;
pub mod smartcore_predictor;

use crate::config::{Config, PredictorBackend};
use predictor::RiskPredictor;
use std::sync::Arc;
use tracing::info;

/// Builds the process-wide predictor from configuration.
///
/// Called once at startup; the result is shared read-only for the life of
/// the process. A failed load yields an unloaded predictor, never an error.
pub fn build_predictor(config: &Config) -> Arc<dyn RiskPredictor> {
    let backend = match config.model_backend {
        PredictorBackend::Auto => {
            if config.model_path.extension().and_then(|e| e.to_str()) == Some("onnx") {
                PredictorBackend::Onnx
            } else {
                PredictorBackend::SmartCore
            }
        }
        other => other,
    };

    let predictor: Arc<dyn RiskPredictor> = match backend {
        PredictorBackend::Onnx => {
            Arc::new(onnx_predictor::OnnxPredictor::new(config.model_path.clone()))
        }
        _ => Arc::new(smartcore_predictor::SmartCorePredictor::new(
            config.model_path.clone(),
        )),
    };

    info!(
        "Predictor backend: {} {} (loaded: {})",
        predictor.name(),
        predictor.version(),
        predictor.is_loaded()
    );
    predictor
}
