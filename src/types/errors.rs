use std::fmt;

// === StorageError ===

/// Errors raised by the key-value storage layer.
#[derive(Debug)]
pub enum StorageError {
    /// Database operation failed.
    Database(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Database(msg) => write!(f, "Storage database error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// === ConfigError ===

/// Errors related to the configuration store.
///
/// Read operations never produce these for absent or unparseable data;
/// only the backing store itself can fail a read.
#[derive(Debug)]
pub enum ConfigError {
    /// The backing key-value store failed.
    Storage(String),
    /// Failed to serialize a value for persistence.
    Serialization(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Storage(msg) => write!(f, "Config storage error: {}", msg),
            ConfigError::Serialization(msg) => {
                write!(f, "Config serialization error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<StorageError> for ConfigError {
    fn from(err: StorageError) -> Self {
        ConfigError::Storage(err.to_string())
    }
}

// === SheetsError ===

/// Errors related to remote spreadsheet operations.
#[derive(Debug)]
pub enum SheetsError {
    /// No remote endpoint has been configured.
    NotConfigured,
    /// The remote endpoint answered with a non-success HTTP status.
    RequestFailed { directive: String, status: u16 },
    /// A network-level failure (DNS, connection refused, timeout).
    Transport(String),
    /// The remote response body could not be parsed.
    InvalidResponse(String),
}

impl fmt::Display for SheetsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetsError::NotConfigured => write!(f, "Remote endpoint not configured"),
            SheetsError::RequestFailed { directive, status } => {
                write!(f, "Remote request failed: directive {}, status {}", directive, status)
            }
            SheetsError::Transport(msg) => write!(f, "Transport error: {}", msg),
            SheetsError::InvalidResponse(msg) => {
                write!(f, "Invalid remote response: {}", msg)
            }
        }
    }
}

impl std::error::Error for SheetsError {}
