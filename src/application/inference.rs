//! Inference adapter: turns one form submission into one model call.

use crate::domain::errors::ClassificationError;
use crate::domain::features::FeatureVector;
use crate::domain::ports::BinaryClassifier;
use crate::domain::prediction::{Outcome, Prediction, PriceClass};
use tracing::{error, info, warn};

/// Classifies `[price, ratio]` with the loaded model.
///
/// Inputs are assumed already clamped by the form. Without a model nothing
/// is called. A single attempt is made; failures are returned, never retried.
pub fn classify(
    model: Option<&dyn BinaryClassifier>,
    price: f64,
    ratio: f64,
) -> Result<Prediction, ClassificationError> {
    let Some(model) = model else {
        return Err(ClassificationError::ModelUnavailable);
    };

    let features = FeatureVector::new(price, ratio);
    let class = PriceClass::from_index(model.predict(&features)?)?;
    let probabilities = model.predict_proba(&features)?;

    Ok(Prediction::from_probabilities(class, &probabilities)?)
}

/// Runs [`classify`] and logs the result as the panel will show it.
pub fn submit(model: Option<&dyn BinaryClassifier>, price: f64, ratio: f64) -> Outcome {
    info!("Classifying price={} price_ratio_category={}", price, ratio);

    let result = classify(model, price, ratio);
    match &result {
        Ok(prediction) => info!(
            "Predicted {:?} with confidence {:.1}%",
            prediction.class,
            prediction.confidence_pct()
        ),
        Err(ClassificationError::ModelUnavailable) => {
            warn!("Submission ignored: no model loaded")
        }
        Err(ClassificationError::Inference(e)) => error!("Inference failed: {}", e),
    }

    Outcome::from(result)
}
