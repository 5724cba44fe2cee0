use crate::domain::errors::InferenceError;
use crate::domain::features::{FEATURE_COUNT, FeatureVector};
use crate::domain::ports::BinaryClassifier;
use serde::{Deserialize, Serialize};

/// Portable export of a fitted logistic regression: the coefficient row,
/// the intercept and the class labels in column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticExport {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_classes")]
    pub classes: [i64; 2],
}

fn default_classes() -> [i64; 2] {
    [0, 1]
}

/// Logistic regression evaluated directly from exported coefficients
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    weights: [f64; FEATURE_COUNT],
    intercept: f64,
    classes: [i64; 2],
}

impl LinearClassifier {
    pub fn from_export(export: LogisticExport) -> Result<Self, String> {
        if export.coefficients.len() != FEATURE_COUNT {
            return Err(format!(
                "model expects {} features, this application provides {}",
                export.coefficients.len(),
                FEATURE_COUNT
            ));
        }
        if !export.intercept.is_finite() || export.coefficients.iter().any(|w| !w.is_finite()) {
            return Err("model parameters contain non-finite values".to_string());
        }
        // Probabilities come back in column order, so labels must be the column indices.
        if export.classes != [0, 1] {
            return Err(format!(
                "model classes must be [0, 1], found {:?}",
                export.classes
            ));
        }

        Ok(Self {
            weights: [export.coefficients[0], export.coefficients[1]],
            intercept: export.intercept,
            classes: export.classes,
        })
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, String> {
        let export: LogisticExport = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
        Self::from_export(export)
    }

    fn decision(&self, features: &FeatureVector) -> f64 {
        let row = features.to_row();
        self.weights
            .iter()
            .zip(row.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.intercept
    }

    fn positive_probability(&self, features: &FeatureVector) -> Result<f64, InferenceError> {
        let z = self.decision(features);
        if !z.is_finite() {
            return Err(InferenceError::PredictionFailed {
                reason: format!("decision value is {}", z),
            });
        }
        Ok(sigmoid(z))
    }
}

/// Logistic function, split on sign so `exp` never overflows.
pub(crate) fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl BinaryClassifier for LinearClassifier {
    fn predict(&self, features: &FeatureVector) -> Result<i64, InferenceError> {
        let p1 = self.positive_probability(features)?;
        Ok(if p1 > 0.5 {
            self.classes[1]
        } else {
            self.classes[0]
        })
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<Vec<f64>, InferenceError> {
        let p1 = self.positive_probability(features)?;
        Ok(vec![1.0 - p1, p1])
    }

    fn name(&self) -> &str {
        "Logistic Regression (coefficients)"
    }
}
