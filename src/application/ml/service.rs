use super::predictor::RiskPredictor;
use crate::domain::clinical::assessment::RiskAssessment;
use crate::domain::clinical::features::FeatureRecord;
use crate::domain::errors::PredictionError;
use crate::domain::ml::feature_registry::record_to_vector;
use crossbeam_channel::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Boundary between collected input and the loaded predictor.
///
/// Every failure inside the predictor call is caught here and surfaced as a
/// `PredictionError`; nothing below this layer reaches the display layer as
/// a panic.
pub struct PredictionService {
    predictor: Arc<dyn RiskPredictor>,
    timeout: Duration,
}

impl PredictionService {
    pub fn new(predictor: Arc<dyn RiskPredictor>, timeout: Duration) -> Self {
        Self { predictor, timeout }
    }

    /// Whether the underlying artifact loaded. `false` is permanent for the
    /// life of the process.
    pub fn is_available(&self) -> bool {
        self.predictor.is_loaded()
    }

    pub fn predictor_name(&self) -> &str {
        self.predictor.name()
    }

    /// Runs both predictor capabilities against one record and maps the
    /// outcome to a risk assessment.
    pub fn predict(&self, record: &FeatureRecord) -> Result<RiskAssessment, PredictionError> {
        record.validate()?;

        if !self.predictor.is_loaded() {
            return Err(PredictionError::ModelUnavailable);
        }

        let features = record_to_vector(record);
        debug!("Running prediction on encoded record {:?}", features);

        // The predictor call is synchronous and external; run it on a worker
        // thread with a bounded wait so a wedged artifact cannot hang the
        // triggering action.
        let (tx, rx) = crossbeam_channel::bounded(1);
        let predictor = Arc::clone(&self.predictor);
        std::thread::spawn(move || {
            let outcome = predictor.predict(&features).and_then(|class| {
                predictor
                    .predict_probability(&features)
                    .map(|distribution| (class, distribution))
            });
            let _ = tx.send(outcome);
        });

        match rx.recv_timeout(self.timeout) {
            Ok(Ok((class, distribution))) => {
                Ok(RiskAssessment::from_prediction(class, distribution[1]))
            }
            Ok(Err(reason)) => {
                warn!("Predictor error: {}", reason);
                Err(PredictionError::Inference { reason })
            }
            Err(RecvTimeoutError::Timeout) => {
                let timeout_ms = self.timeout.as_millis() as u64;
                warn!("Predictor did not answer within {}ms", timeout_ms);
                Err(PredictionError::Timeout { timeout_ms })
            }
            // The worker dropped its sender without answering, i.e. the
            // predictor panicked. That is an invocation failure, not a
            // timeout.
            Err(RecvTimeoutError::Disconnected) => {
                warn!("Predictor worker terminated without answering");
                Err(PredictionError::Inference {
                    reason: "predictor terminated unexpectedly".to_string(),
                })
            }
        }
    }
}
