use thiserror::Error;

/// Unified error type for cavy operations
#[derive(Error, Debug)]
pub enum CavyError {
    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("Package {package} already published with version {version}")]
    DuplicateVersion { package: String, version: String },

    #[error("Fetching published versions of {package} failed: {reason}")]
    RegistryFetch { package: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results in cavy
pub type Result<T> = std::result::Result<T, CavyError>;

impl CavyError {
    /// Create an invalid version error for the given input
    pub fn invalid_version(version: impl Into<String>, reason: impl Into<String>) -> Self {
        CavyError::InvalidVersion {
            version: version.into(),
            reason: reason.into(),
        }
    }

    /// Create a registry fetch error for a package
    pub fn registry(package: impl Into<String>, reason: impl Into<String>) -> Self {
        CavyError::RegistryFetch {
            package: package.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        CavyError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        CavyError::Tag(msg.into())
    }
}
