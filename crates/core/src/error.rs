/// Failure of a single store operation.
///
/// Callers of the article service cannot tell a missing connection from a
/// rejected command; both surface as a `StoreError`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Short error class name, in the shape document stores report it.
    pub fn name(&self) -> &'static str {
        match self {
            StoreError::Mongo(_) => "MongoError",
            StoreError::Unavailable(_) => "StoreUnavailableError",
        }
    }

    /// Numeric code reported by the server, when there is one.
    pub fn code(&self) -> Option<i32> {
        use mongodb::error::{ErrorKind, WriteFailure};

        match self {
            StoreError::Mongo(err) => match &*err.kind {
                ErrorKind::Command(command) => Some(command.code),
                ErrorKind::Write(WriteFailure::WriteError(write)) => Some(write.code),
                ErrorKind::Write(WriteFailure::WriteConcernError(concern)) => Some(concern.code),
                _ => None,
            },
            StoreError::Unavailable(_) => None,
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised while resolving startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown store backend: {0} (expected `mongodb` or `memory`)")]
    UnknownBackend(String),
    #[error("failed to connect to store: {0}")]
    Connect(#[source] StoreError),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
