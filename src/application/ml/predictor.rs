/// Interface for loaded classifier artifacts.
///
/// Implementations wrap one externally trained binary classifier. Backend
/// errors stay `String` at this seam; the prediction boundary wraps them
/// into the domain error taxonomy.
pub trait RiskPredictor: Send + Sync {
    /// Whether a model artifact was successfully loaded. A predictor that
    /// failed to load stays unloaded for the life of the process.
    fn is_loaded(&self) -> bool;

    /// Predicted class for an encoded record: 0 = no disease, 1 = disease.
    fn predict(&self, features: &[f64]) -> Result<u8, String>;

    /// Class probability distribution `[p(class=0), p(class=1)]`.
    fn predict_probability(&self, features: &[f64]) -> Result<[f64; 2], String>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
