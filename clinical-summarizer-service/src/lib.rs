pub mod analyzer;
pub mod config;
pub mod error;
pub mod models;
pub mod reference;
pub mod service;
pub mod storage;

pub use analyzer::{Analyzer, AnalyzerConfig};
pub use config::{LogFormat, ServiceConfig};
pub use error::{AnalyzerError, ConfigError, StorageError};
pub use models::*;
pub use service::{AppState, build_router, create_app};
pub use storage::SummaryStore;
