use price_outlier::application::inference::{classify, submit};
use price_outlier::application::ml::LogisticExport;
use price_outlier::config::ModelFormat;
use price_outlier::domain::errors::{ClassificationError, InferenceError, ModelLoadError};
use price_outlier::domain::features::FeatureVector;
use price_outlier::domain::ports::BinaryClassifier;
use price_outlier::domain::prediction::{Outcome, PriceClass};
use price_outlier::infrastructure::i18n::I18nService;
use price_outlier::infrastructure::model_store::ModelStore;
use price_outlier::interfaces::view_models::{NoticeLevel, ResultView};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::logistic_regression::{LogisticRegression, LogisticRegressionParameters};
use std::fs;
use std::path::PathBuf;

fn scratch_file(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("price-outlier-flow-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn write_linear_artifact(name: &str) -> PathBuf {
    // Out of pattern once the ratio passes 10.
    let export = LogisticExport {
        coefficients: vec![0.0, 0.5],
        intercept: -5.0,
        classes: [0, 1],
    };
    let path = scratch_file(name);
    fs::write(&path, serde_json::to_vec_pretty(&export).unwrap()).unwrap();
    path
}

struct BrokenModel;

impl BinaryClassifier for BrokenModel {
    fn predict(&self, _features: &FeatureVector) -> Result<i64, InferenceError> {
        Err(InferenceError::PredictionFailed {
            reason: "X has 3 features, but the model expects 2".to_string(),
        })
    }

    fn predict_proba(&self, _features: &FeatureVector) -> Result<Vec<f64>, InferenceError> {
        unreachable!("predict failed first")
    }

    fn name(&self) -> &str {
        "broken"
    }
}

#[test]
fn test_linear_artifact_end_to_end() {
    let path = write_linear_artifact("linear.json");
    let store = ModelStore::new(&path, ModelFormat::Linear);
    let model = store.load().expect("model should load");
    let i18n = I18nService::default();

    let outcome = submit(Some(model.as_ref()), 735.0, 1.48);
    let view = ResultView::from_outcome(&outcome, &i18n, false);
    assert_eq!(view.label, "Normal price");
    assert!(view.confidence_text().is_some());

    let outcome = submit(Some(model.as_ref()), 9000.0, 50.0);
    let view = ResultView::from_outcome(&outcome, &i18n, false);
    assert_eq!(view.label, "Price out of pattern");
}

#[test]
fn test_deleted_artifact_disables_classification() {
    let path = scratch_file("deleted.json");
    let _ = fs::remove_file(&path);

    let store = ModelStore::new(&path, ModelFormat::Linear);
    let model = store.load();
    assert!(model.is_none());
    assert!(matches!(
        store.load_error(),
        Some(ModelLoadError::NotFound { .. })
    ));

    let i18n = I18nService::default();
    for (price, ratio) in [(735.0, 1.48), (9000.0, 50.0), (0.0, 0.0)] {
        let outcome = submit(model.as_deref(), price, ratio);
        assert_eq!(outcome, Outcome::Unavailable);

        let view = ResultView::from_outcome(&outcome, &i18n, false);
        assert_eq!(view.confidence_text(), None);
        assert_eq!(view.notice.unwrap().level, NoticeLevel::Warning);
    }
}

#[test]
fn test_failing_model_shows_classification_error() {
    let model = BrokenModel;
    let i18n = I18nService::default();

    let outcome = submit(Some(&model), 735.0, 1.48);
    let view = ResultView::from_outcome(&outcome, &i18n, false);
    assert_eq!(view.label, "Classification error");
    assert_eq!(view.confidence_text(), None);
    assert!(view.notice.unwrap().message.contains("expects 2"));

    // A later submission is still attempted
    assert!(matches!(
        classify(Some(&model), 735.0, 1.48),
        Err(ClassificationError::Inference(_))
    ));
}

#[test]
fn test_every_submission_has_one_state() {
    let path = write_linear_artifact("grid.json");
    let store = ModelStore::new(&path, ModelFormat::Linear);
    let model = store.load().unwrap();
    let i18n = I18nService::default();

    for price in [0.0, 0.1, 735.0, 5000.0, 10_000.0] {
        for ratio in [0.0, 1.48, 9.9, 10.1, 25.0, 100.0] {
            let first = submit(Some(model.as_ref()), price, ratio);
            let second = submit(Some(model.as_ref()), price, ratio);
            assert_eq!(first, second, "not idempotent at {} / {}", price, ratio);

            let Outcome::Classified(prediction) = first else {
                panic!("expected a classification at {} / {}", price, ratio);
            };
            let pct = prediction.confidence_pct();
            assert!((0.0..=100.0).contains(&pct));
            // The predicted class always carries at least half the mass
            assert!(pct >= 50.0);

            let view = ResultView::from_outcome(&Outcome::Classified(prediction), &i18n, false);
            let text = view.confidence_text().unwrap();
            let digits = text.trim_end_matches('%').split('.').nth(1).unwrap();
            assert_eq!(digits.len(), 1, "{}", text);

            let expected = if ratio > 10.0 {
                PriceClass::OutOfPattern
            } else {
                PriceClass::Normal
            };
            assert_eq!(prediction.class, expected);
        }
    }
}

#[test]
fn test_smartcore_artifact_through_store() {
    let x = DenseMatrix::from_2d_vec(&vec![
        vec![700.0, 1.0],
        vec![735.0, 1.5],
        vec![760.0, 1.2],
        vec![810.0, 3.0],
        vec![720.0, 7.0],
        vec![5000.0, 2.0],
        vec![8000.0, 9.0],
        vec![9000.0, 8.0],
        vec![7500.0, 6.0],
        vec![6500.0, 1.1],
    ])
    .unwrap();
    let y: Vec<i32> = vec![0, 0, 0, 0, 1, 0, 1, 1, 1, 1];
    let fitted = LogisticRegression::fit(&x, &y, LogisticRegressionParameters::default()).unwrap();

    let path = scratch_file("smartcore.json");
    fs::write(&path, serde_json::to_vec(&fitted).unwrap()).unwrap();

    let store = ModelStore::new(&path, ModelFormat::SmartCore);
    let model = store.load().expect("smartcore model should load");

    let outcome = submit(Some(model.as_ref()), 735.0, 1.48);
    assert!(matches!(outcome, Outcome::Classified(_)));

    // The same file is not a valid coefficient export
    let store = ModelStore::new(&path, ModelFormat::Linear);
    assert!(matches!(
        store.load_error(),
        Some(ModelLoadError::Corrupt { .. })
    ));
}

#[test]
fn test_three_feature_artifact_is_rejected() {
    let path = scratch_file("three.json");
    fs::write(
        &path,
        br#"{"coefficients": [0.1, 0.2, 0.3], "intercept": 0.0, "classes": [0, 1]}"#,
    )
    .unwrap();

    let store = ModelStore::new(&path, ModelFormat::Linear);
    match store.load_error() {
        Some(ModelLoadError::Corrupt { reason, .. }) => assert!(reason.contains("3 features")),
        other => panic!("expected corrupt error, got {:?}", other),
    }
}

#[test]
fn test_swapped_class_labels_are_rejected() {
    let path = scratch_file("swapped.json");
    fs::write(
        &path,
        br#"{"coefficients": [0.0, 0.5], "intercept": -5.0, "classes": [1, 0]}"#,
    )
    .unwrap();

    let store = ModelStore::new(&path, ModelFormat::Linear);
    assert!(store.load().is_none());
    match store.load_error() {
        Some(ModelLoadError::Corrupt { reason, .. }) => assert!(reason.contains("[1, 0]")),
        other => panic!("expected corrupt error, got {:?}", other),
    }
}
