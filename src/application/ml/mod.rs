pub mod linear_classifier;
pub mod smartcore_classifier;

pub use linear_classifier::{LinearClassifier, LogisticExport};
pub use smartcore_classifier::SmartCoreClassifier;
