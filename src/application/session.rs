use crate::application::ml::service::PredictionService;
use crate::domain::clinical::assessment::RiskAssessment;
use crate::domain::clinical::features::{
    ChestPainType, ExerciseAngina, FeatureRecord, StSlope, Thalassemia,
};
use crate::domain::errors::PredictionError;
use crossbeam_channel::Receiver;

/// Current state of the bounded input widgets.
///
/// Defaults match the original clinical intake form: a 55-year-old with a
/// max heart rate of 150 and 1.0 ST depression, all categoricals at their
/// first option.
pub struct PatientForm {
    pub age: u32,
    pub thalach: u32,
    pub oldpeak: f64,
    pub cp: ChestPainType,
    pub exang: ExerciseAngina,
    pub slope: StSlope,
    pub ca: u8,
    pub thal: Thalassemia,
}

impl Default for PatientForm {
    fn default() -> Self {
        Self {
            age: 55,
            thalach: 150,
            oldpeak: 1.0,
            cp: ChestPainType::TypicalAngina,
            exang: ExerciseAngina::No,
            slope: StSlope::Upsloping,
            ca: 0,
            thal: Thalassemia::Normal,
        }
    }
}

impl PatientForm {
    /// Snapshots the widget state into a Feature Record. Infallible: the
    /// bounded widgets cannot leave their domains, and collection never
    /// depends on model state.
    pub fn collect(&self) -> FeatureRecord {
        FeatureRecord {
            age: self.age,
            thalach: self.thalach,
            oldpeak: self.oldpeak,
            cp: self.cp,
            exang: self.exang,
            slope: self.slope,
            ca: self.ca,
            thal: self.thal,
        }
    }
}

/// UI-facing session state: the form, the prediction boundary, the log feed
/// and the outcome of the last explicit prediction request.
pub struct PatientSession {
    pub form: PatientForm,
    pub service: PredictionService,
    pub log_rx: Receiver<String>,
    pub log_history: Vec<String>,
    pub last_outcome: Option<Result<RiskAssessment, PredictionError>>,
}

impl PatientSession {
    pub fn new(service: PredictionService, log_rx: Receiver<String>) -> Self {
        Self {
            form: PatientForm::default(),
            service,
            log_rx,
            log_history: Vec::new(),
            last_outcome: None,
        }
    }

    /// Explicit user action; prediction is never triggered on input change.
    /// After a failure the form stays usable for retry.
    pub fn run_prediction(&mut self) {
        self.last_outcome = Some(self.service.predict(&self.form.collect()));
    }

    /// Drain pending log lines into the visible history.
    pub fn drain_logs(&mut self) {
        while let Ok(msg) = self.log_rx.try_recv() {
            self.log_history.push(msg);
        }

        // Keep history manageable
        if self.log_history.len() > 1000 {
            self.log_history.drain(0..100);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ml::predictor::RiskPredictor;
    use std::sync::Arc;
    use std::time::Duration;

    struct FixedPredictor;

    impl RiskPredictor for FixedPredictor {
        fn is_loaded(&self) -> bool {
            true
        }
        fn predict(&self, _features: &[f64]) -> Result<u8, String> {
            Ok(1)
        }
        fn predict_probability(&self, _features: &[f64]) -> Result<[f64; 2], String> {
            Ok([0.25, 0.75])
        }
        fn name(&self) -> &str {
            "Fixed"
        }
        fn version(&self) -> &str {
            "test"
        }
    }

    fn session() -> PatientSession {
        let (_tx, rx) = crossbeam_channel::unbounded();
        let service = PredictionService::new(Arc::new(FixedPredictor), Duration::from_secs(2));
        PatientSession::new(service, rx)
    }

    #[test]
    fn test_default_form_collects_valid_record() {
        let record = PatientForm::default().collect();
        assert!(record.validate().is_ok());
        assert_eq!(record.age, 55);
        assert_eq!(record.thalach, 150);
    }

    #[test]
    fn test_prediction_only_on_explicit_action() {
        let mut session = session();
        assert!(session.last_outcome.is_none());

        // Mutating the form alone never produces an outcome.
        session.form.age = 70;
        assert!(session.last_outcome.is_none());

        session.run_prediction();
        assert!(matches!(session.last_outcome, Some(Ok(_))));
    }
}
