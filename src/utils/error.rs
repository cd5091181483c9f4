use thiserror::Error;

/// Failures surfaced to callers of a postal code lookup.
///
/// Every failure inside the lookup pipeline is resolved to exactly one of
/// these before it leaves the orchestrator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("invalid postal code: {input:?}")]
    InvalidInput { input: String },

    #[error("postal code not found: {cep}")]
    NotFound { cep: String },

    #[error("upstream lookup failed: {message}")]
    UpstreamUnavailable { message: String },

    #[error("internal error: {message}")]
    Internal { message: String },
}

impl LookupError {
    /// Short message safe to show to an HTTP client.
    pub fn public_message(&self) -> &'static str {
        match self {
            LookupError::InvalidInput { .. } => "invalid postal code",
            LookupError::NotFound { .. } => "postal code not found",
            LookupError::UpstreamUnavailable { .. } => "upstream lookup failed",
            LookupError::Internal { .. } => "internal error",
        }
    }
}

/// Failure reported by an address resolver.
#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("directory returned status {0}")]
    Status(u16),

    #[error("malformed directory payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ResolverError {
    fn from(err: reqwest::Error) -> Self {
        ResolverError::Transport(err.to_string())
    }
}

impl From<ResolverError> for LookupError {
    fn from(err: ResolverError) -> Self {
        match err {
            ResolverError::Transport(_) | ResolverError::Status(_) => {
                LookupError::UpstreamUnavailable {
                    message: err.to_string(),
                }
            }
            ResolverError::Decode(message) => LookupError::Internal { message },
        }
    }
}

#[derive(Error, Debug)]
pub enum CepError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration parse error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CepError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CepError::IoError(e) => format!("Could not read a required file: {}", e),
            CepError::ConfigValidationError { field, .. } => {
                format!("The configuration could not be parsed ({})", field)
            }
            CepError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CepError::IoError(_) => "Check that the file exists and is readable",
            CepError::ConfigValidationError { .. } => {
                "Check the TOML syntax of the configuration file"
            }
            CepError::InvalidConfigValueError { .. } => {
                "Fix the value via the command line, the environment or the config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CepError>;
