use crate::application::ml::{LinearClassifier, SmartCoreClassifier};
use crate::config::ModelFormat;
use crate::domain::errors::ModelLoadError;
use crate::domain::ports::BinaryClassifier;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};
use tracing::{error, info};

pub type SharedModel = Arc<dyn BinaryClassifier>;

/// Loads the model artifact once and hands out the cached result.
///
/// The first call to [`ModelStore::load`] reads the file; every later call
/// returns the same model (or the same failure) without touching storage.
pub struct ModelStore {
    path: PathBuf,
    format: ModelFormat,
    cell: OnceLock<Result<SharedModel, ModelLoadError>>,
}

impl ModelStore {
    pub fn new(path: impl Into<PathBuf>, format: ModelFormat) -> Self {
        Self {
            path: path.into(),
            format,
            cell: OnceLock::new(),
        }
    }

    /// Returns the model, or `None` if it could not be loaded.
    pub fn load(&self) -> Option<SharedModel> {
        self.outcome().as_ref().ok().cloned()
    }

    /// Why the model is missing, if it is.
    pub fn load_error(&self) -> Option<&ModelLoadError> {
        self.outcome().as_ref().err()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    fn outcome(&self) -> &Result<SharedModel, ModelLoadError> {
        self.cell.get_or_init(|| {
            let result = read_model(&self.path, self.format);
            match &result {
                Ok(model) => info!(
                    "Successfully loaded {} from {:?}",
                    model.name(),
                    self.path
                ),
                Err(e) => error!("{}", e),
            }
            result
        })
    }
}

/// Reads and deserializes an artifact without caching.
pub fn read_model(path: &Path, format: ModelFormat) -> Result<SharedModel, ModelLoadError> {
    info!("Loading {:?} model from {:?}", format, path);

    let buffer = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ModelLoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ModelLoadError::Corrupt {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;

    let parsed: Result<SharedModel, String> = match format {
        ModelFormat::Linear => {
            LinearClassifier::from_slice(&buffer).map(|m| Arc::new(m) as SharedModel)
        }
        ModelFormat::SmartCore => {
            SmartCoreClassifier::from_slice(&buffer).map(|m| Arc::new(m) as SharedModel)
        }
    };

    parsed.map_err(|reason| ModelLoadError::Corrupt {
        path: path.to_path_buf(),
        reason,
    })
}
