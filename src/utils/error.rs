use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("{0}")]
    Usage(#[from] clap::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Storage error: {message}")]
    StorageError { message: String },
}

impl ScaffoldError {
    /// Process exit status reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ScaffoldError::Usage(e) => u8::try_from(e.exit_code()).unwrap_or(2),
            _ => 1,
        }
    }

    /// One-line description for log events. Usage errors render clap's whole usage
    /// block, which is printed separately, so only their first line is kept.
    pub fn summary(&self) -> String {
        match self {
            ScaffoldError::Usage(e) => {
                let rendered = e.to_string();
                let first = rendered.lines().next().unwrap_or_default();
                first.trim_start_matches("error: ").to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;
