use locale_catalog_core::{LocalizationError, ResourceError};
use locale_catalog_toml::I18nConfigError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddedError {
    #[error("Resource file '{path}' is not valid UTF-8")]
    InvalidUtf8 {
        path: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
    #[error("Failed to read resource file: {0}")]
    Read(#[from] std::io::Error),
    #[error("Failed to walk assets directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Resource file '{}' is not under '{}' or has a non UTF-8 path", path.display(), root.display())]
    UnmappablePath { path: PathBuf, root: PathBuf },
    #[error("Assets directory '{}' does not exist", .0.display())]
    MissingAssetsDir(PathBuf),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    Config(#[from] I18nConfigError),
    #[error(transparent)]
    Localization(#[from] LocalizationError),
}
