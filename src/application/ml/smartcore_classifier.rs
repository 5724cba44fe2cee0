use super::linear_classifier::sigmoid;
use crate::domain::errors::InferenceError;
use crate::domain::features::{FEATURE_COUNT, FeatureVector};
use crate::domain::ports::BinaryClassifier;
use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::logistic_regression::LogisticRegression;

pub type SmartCoreModel = LogisticRegression<f64, i32, DenseMatrix<f64>, Vec<i32>>;

/// SmartCore logistic regression deserialized with serde_json.
///
/// SmartCore has no probability output for this model, so the binary
/// probability is recomputed from the fitted coefficients, the same way
/// `predict` thresholds it.
pub struct SmartCoreClassifier {
    model: SmartCoreModel,
    weights: [f64; FEATURE_COUNT],
    intercept: f64,
}

impl SmartCoreClassifier {
    pub fn from_model(model: SmartCoreModel) -> Result<Self, String> {
        let coefficients = model.coefficients();
        let (rows, cols) = coefficients.shape();
        if rows != 1 {
            return Err(format!(
                "model has {} coefficient rows, only binary models are supported",
                rows
            ));
        }
        if cols != FEATURE_COUNT {
            return Err(format!(
                "model expects {} features, this application provides {}",
                cols, FEATURE_COUNT
            ));
        }

        let weights = [*coefficients.get((0, 0)), *coefficients.get((0, 1))];
        let intercept = *model.intercept().get((0, 0));

        Ok(Self {
            model,
            weights,
            intercept,
        })
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, String> {
        let model: SmartCoreModel = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
        Self::from_model(model)
    }

    fn to_matrix(features: &FeatureVector) -> Result<DenseMatrix<f64>, InferenceError> {
        DenseMatrix::from_2d_vec(&vec![features.to_row().to_vec()]).map_err(|e| {
            InferenceError::PredictionFailed {
                reason: format!("Matrix creation failed: {}", e),
            }
        })
    }
}

impl BinaryClassifier for SmartCoreClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<i64, InferenceError> {
        let input_matrix = Self::to_matrix(features)?;

        match self.model.predict(&input_matrix) {
            Ok(predictions) => predictions.first().map(|c| i64::from(*c)).ok_or_else(|| {
                InferenceError::PredictionFailed {
                    reason: "No prediction returned".to_string(),
                }
            }),
            Err(e) => Err(InferenceError::PredictionFailed {
                reason: e.to_string(),
            }),
        }
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>, InferenceError> {
        let row = features.to_row();
        let z = self.weights[0] * row[0] + self.weights[1] * row[1] + self.intercept;
        if !z.is_finite() {
            return Err(InferenceError::PredictionFailed {
                reason: format!("decision value is {}", z),
            });
        }
        let p1 = sigmoid(z);
        Ok(vec![1.0 - p1, p1])
    }

    fn name(&self) -> &str {
        "SmartCore Logistic Regression"
    }
}
