use super::predictor::RiskPredictor;
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;
use tracing::{error, info, warn};

/// Serves predictions from a serde-serialized smartcore random forest.
///
/// The artifact is a forest regressed on the binary disease target, so its
/// raw output is the positive-class score in [0, 1]; the class label is the
/// score thresholded at 0.5 and the distribution is `[1 - s, s]`.
pub struct SmartCorePredictor {
    model: Option<RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>>,
    model_path: PathBuf,
}

impl SmartCorePredictor {
    pub fn new(model_path: PathBuf) -> Self {
        let mut predictor = Self {
            model: None,
            model_path,
        };
        predictor.load_model();
        predictor
    }

    fn load_model(&mut self) {
        if !self.model_path.exists() {
            warn!(
                "Model file not found at {:?}. Prediction will be unavailable.",
                self.model_path
            );
            return;
        }

        match File::open(&self.model_path) {
            Ok(mut file) => {
                let mut buffer = Vec::new();
                if let Err(e) = file.read_to_end(&mut buffer) {
                    error!("Failed to read model file: {}", e);
                    return;
                }

                match serde_json::from_reader(std::io::Cursor::new(&buffer)) {
                    Ok(model) => {
                        info!("Successfully loaded model from {:?}", self.model_path);
                        self.model = Some(model);
                    }
                    Err(e) => {
                        // A corrupt artifact disables prediction exactly like
                        // a missing one.
                        error!("Failed to deserialize model: {}", e);
                    }
                }
            }
            Err(e) => {
                error!("Failed to open model file: {}", e);
            }
        }
    }

    fn score(&self, features: &[f64]) -> Result<f64, String> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| "model not loaded".to_string())?;

        let input_matrix = DenseMatrix::from_2d_vec(&vec![features.to_vec()])
            .map_err(|e| format!("Matrix creation failed: {}", e))?;

        match model.predict(&input_matrix) {
            Ok(predictions) => predictions
                .first()
                .map(|s| s.clamp(0.0, 1.0))
                .ok_or_else(|| "No prediction returned".to_string()),
            Err(e) => Err(format!("Prediction failed: {}", e)),
        }
    }
}

impl RiskPredictor for SmartCorePredictor {
    fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    fn predict(&self, features: &[f64]) -> Result<u8, String> {
        Ok(u8::from(self.score(features)? >= 0.5))
    }

    fn predict_probability(&self, features: &[f64]) -> Result<[f64; 2], String> {
        let p = self.score(features)?;
        Ok([1.0 - p, p])
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }

    fn version(&self) -> &str {
        "v1.0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact_stays_unloaded() {
        let predictor = SmartCorePredictor::new(PathBuf::from("non_existent_model.json"));
        assert!(!predictor.is_loaded());

        let result = predictor.predict(&[55.0, 150.0, 1.0, 0.0, 0.0, 0.0, 0.0, 3.0]);
        assert!(result.is_err());
    }
}
