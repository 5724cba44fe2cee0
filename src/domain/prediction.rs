use crate::domain::errors::{ClassificationError, InferenceError};
use serde::{Deserialize, Serialize};

/// Binary label produced by the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceClass {
    /// Class 0
    Normal,
    /// Class 1
    OutOfPattern,
}

impl PriceClass {
    pub fn from_index(class: i64) -> Result<Self, InferenceError> {
        match class {
            0 => Ok(PriceClass::Normal),
            1 => Ok(PriceClass::OutOfPattern),
            other => Err(InferenceError::UnexpectedClass { class: other }),
        }
    }

    pub fn index(&self) -> usize {
        match self {
            PriceClass::Normal => 0,
            PriceClass::OutOfPattern => 1,
        }
    }
}

/// A successful classification: the class and the probability mass
/// (as a percentage) the model assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub class: PriceClass,
    confidence_pct: f64,
}

impl Prediction {
    /// Pairs the predicted class with its own entry of the probability vector.
    pub fn from_probabilities(
        class: PriceClass,
        probabilities: &[f64],
    ) -> Result<Self, InferenceError> {
        if probabilities.len() != 2 {
            return Err(InferenceError::ProbabilityShape {
                len: probabilities.len(),
            });
        }

        for (idx, p) in probabilities.iter().enumerate() {
            if !p.is_finite() || !(0.0..=1.0).contains(p) {
                return Err(InferenceError::InvalidProbability {
                    class: idx,
                    value: *p,
                });
            }
        }

        Ok(Self {
            class,
            confidence_pct: probabilities[class.index()] * 100.0,
        })
    }

    /// Always within `[0, 100]`.
    pub fn confidence_pct(&self) -> f64 {
        self.confidence_pct
    }
}

/// What the result panel shows after an interaction.
///
/// Exactly one of these holds at a time; a confidence only exists inside
/// `Classified`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Outcome {
    #[default]
    Unclassified,
    Classified(Prediction),
    Failed(String),
    Unavailable,
}

impl From<Result<Prediction, ClassificationError>> for Outcome {
    fn from(result: Result<Prediction, ClassificationError>) -> Self {
        match result {
            Ok(prediction) => Outcome::Classified(prediction),
            Err(ClassificationError::ModelUnavailable) => Outcome::Unavailable,
            Err(ClassificationError::Inference(e)) => Outcome::Failed(e.to_string()),
        }
    }
}
