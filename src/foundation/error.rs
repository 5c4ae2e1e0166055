use std::path::PathBuf;

/// Convenience result type used across trianim.
pub type TriAnimResult<T> = Result<T, TriAnimError>;

/// Top-level error taxonomy.
#[derive(thiserror::Error, Debug)]
pub enum TriAnimError {
    /// Configuration values that would produce a degenerate schedule.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The rendered template could not be written.
    #[error("failed to write '{}': {source}", path.display())]
    FileWrite {
        /// Destination that failed.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Errors when deserializing a configuration file.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TriAnimError {
    /// Build a [`TriAnimError::InvalidConfiguration`] value.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Build a [`TriAnimError::FileWrite`] value.
    pub fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Build a [`TriAnimError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
