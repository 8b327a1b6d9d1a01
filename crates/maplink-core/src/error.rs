use thiserror::Error;

/// A provider key that is not one of the registered navigation apps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid provider: '{0}' is not a supported navigation app")]
pub struct InvalidProviderError(pub String);

/// Rejection of a caller-supplied location request.
///
/// Variants follow the order in which the checks run; the first failing
/// check wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("location request must be an object")]
    NotAnObject,

    #[error("location request must include '{0}'")]
    MissingCoordinate(&'static str),

    #[error("option '{0}' should be a string")]
    NotAString(&'static str),

    #[error("option 'app' should be one of [{supported}], got '{value}'")]
    UnknownApp { value: String, supported: String },

    #[error("option 'appsWhiteList' {0}")]
    InvalidWhiteList(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read installed apps file {path}: {source}")]
    AppsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse installed apps file: {0}")]
    AppsFileParse(#[from] serde_yaml::Error),

    #[error("installed apps validation failed: {0}")]
    Validation(String),
}
