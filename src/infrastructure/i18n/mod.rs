pub mod service;

pub use service::I18nService;
