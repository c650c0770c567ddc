use super::predictor::RiskPredictor;
use ort::session::Session;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::{error, info, warn};

/// Serves predictions from an exported ONNX classifier.
///
/// Exported classifiers emit their probabilities either as a `[p0, p1]`
/// tensor or as a single positive-class score; both shapes are accepted.
pub struct OnnxPredictor {
    session: Option<Mutex<Session>>,
    model_path: PathBuf,
}

impl OnnxPredictor {
    pub fn new(model_path: PathBuf) -> Self {
        let mut predictor = Self {
            session: None,
            model_path,
        };
        predictor.load_model();
        predictor
    }

    fn load_model(&mut self) {
        if !self.model_path.exists() {
            warn!(
                "ONNX model file not found at {:?}. Prediction will be unavailable.",
                self.model_path
            );
            return;
        }

        match Session::builder() {
            Ok(mut builder) => match builder.commit_from_file(&self.model_path) {
                Ok(session) => {
                    info!("Successfully loaded ONNX model from {:?}", self.model_path);
                    self.session = Some(Mutex::new(session));
                }
                Err(e) => {
                    error!("Failed to load ONNX model: {}", e);
                }
            },
            Err(e) => {
                error!("Failed to create ONNX session builder: {}", e);
            }
        }
    }

    fn run_distribution(&self, features: &[f64]) -> Result<[f64; 2], String> {
        let mut session = match &self.session {
            Some(m) => m.lock().map_err(|e| format!("Mutex lock failed: {}", e))?,
            None => return Err("model not loaded".to_string()),
        };

        let data: Vec<f32> = features.iter().map(|v| *v as f32).collect();
        let shape = vec![1, features.len()];

        let input_value = ort::value::Value::from_array((shape.as_slice(), data))
            .map_err(|e| format!("Input value creation failed: {}", e))?;
        let inputs = ort::inputs![input_value];

        match session.run(inputs) {
            Ok(outputs) => {
                // Skip non-float outputs (e.g. an integer label tensor) and
                // take the first tensor that looks like a distribution.
                for (_, value) in outputs.iter() {
                    if let Ok(tensor) = value.try_extract_tensor::<f32>() {
                        let values: Vec<f32> = tensor.1.iter().copied().collect();
                        match values.as_slice() {
                            [p0, p1, ..] => return Ok([*p0 as f64, *p1 as f64]),
                            [score] => {
                                let p = (*score as f64).clamp(0.0, 1.0);
                                return Ok([1.0 - p, p]);
                            }
                            [] => continue,
                        }
                    }
                }
                Err("No probability output found".to_string())
            }
            Err(e) => Err(e.to_string()),
        }
    }
}

impl RiskPredictor for OnnxPredictor {
    fn is_loaded(&self) -> bool {
        self.session.is_some()
    }

    fn predict(&self, features: &[f64]) -> Result<u8, String> {
        let distribution = self.run_distribution(features)?;
        Ok(u8::from(distribution[1] >= distribution[0]))
    }

    fn predict_probability(&self, features: &[f64]) -> Result<[f64; 2], String> {
        self.run_distribution(features)
    }

    fn name(&self) -> &str {
        "ONNX Runtime"
    }

    fn version(&self) -> &str {
        "v2.0"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_artifact_stays_unloaded() {
        let predictor = OnnxPredictor::new(PathBuf::from("non_existent.onnx"));
        assert!(!predictor.is_loaded());

        let result = predictor.predict_probability(&[55.0, 150.0, 1.0, 0.0, 0.0, 0.0, 0.0, 3.0]);
        assert!(result.is_err());
    }
}
