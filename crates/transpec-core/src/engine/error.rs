use crate::core::cross_section::TableError;
use crate::core::params::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to load cross-section table '{path}': {source}", path = path.display())]
    DataLoad {
        path: PathBuf,
        #[source]
        source: TableError,
    },
}
