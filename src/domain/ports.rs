use crate::domain::errors::InferenceError;
use crate::domain::features::FeatureVector;

/// Interface for a loaded binary classifier.
///
/// Implementations are immutable after load and shared read-only.
pub trait BinaryClassifier: Send + Sync {
    /// Predicted class index (0 or 1)
    fn predict(&self, features: &FeatureVector) -> Result<i64, InferenceError>;

    /// Per-class probabilities, indexed by class
    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>, InferenceError>;

    /// Get model name/type
    fn name(&self) -> &str;
}
