//! Configuration module for CardioRisk.
//!
//! Loads from environment variables (`.env` support is wired in `main`).
//! The prediction surface itself takes no CLI flags.

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Which model runtime serves predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictorBackend {
    /// Pick by artifact file extension (`.onnx` vs anything else).
    Auto,
    SmartCore,
    Onnx,
}

impl FromStr for PredictorBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(PredictorBackend::Auto),
            "smartcore" => Ok(PredictorBackend::SmartCore),
            "onnx" => Ok(PredictorBackend::Onnx),
            _ => anyhow::bail!(
                "Invalid MODEL_BACKEND: {}. Must be 'auto', 'smartcore', or 'onnx'",
                s
            ),
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the predictor artifact, loaded once at process start.
    pub model_path: PathBuf,
    pub model_backend: PredictorBackend,
    /// Bounded wait for a single predictor call.
    pub prediction_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let model_path =
            env::var("MODEL_PATH").unwrap_or_else(|_| "models/heart_model.json".to_string());

        let backend_str = env::var("MODEL_BACKEND").unwrap_or_else(|_| "auto".to_string());
        let model_backend = PredictorBackend::from_str(&backend_str)?;

        let prediction_timeout_ms = env::var("PREDICTION_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2_000);

        Ok(Self {
            model_path: PathBuf::from(model_path),
            model_backend,
            prediction_timeout_ms,
        })
    }

    pub fn prediction_timeout(&self) -> Duration {
        Duration::from_millis(self.prediction_timeout_ms)
    }
}
