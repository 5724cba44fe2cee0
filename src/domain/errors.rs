use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the model artifact from disk
#[derive(Debug, Clone, Error)]
pub enum ModelLoadError {
    #[error("Model file not found at {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to load model from {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },
}

/// Errors raised by a loaded model while classifying one feature vector
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("Prediction failed: {reason}")]
    PredictionFailed { reason: String },

    #[error("Model returned unexpected class {class}, expected 0 or 1")]
    UnexpectedClass { class: i64 },

    #[error("Model returned {len} probabilities, expected 2")]
    ProbabilityShape { len: usize },

    #[error("Model returned invalid probability {value} for class {class}")]
    InvalidProbability { class: usize, value: f64 },
}

/// Outcome of a submission that did not produce a prediction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassificationError {
    #[error("Model is not loaded")]
    ModelUnavailable,

    #[error(transparent)]
    Inference(#[from] InferenceError),
}
