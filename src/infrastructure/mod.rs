pub mod i18n;
pub mod model_store;

pub use model_store::{ModelStore, SharedModel};
