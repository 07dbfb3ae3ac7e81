use std::fmt;

/// Central error type for the chainsite library
#[derive(Debug)]
pub enum SiteError {
    /// A value was read from a context that never provided it
    MissingProvider { name: &'static str },
    /// Persistent storage could not be reached
    StorageUnavailable(String),
    /// IO operation failed
    Io(std::io::Error),
    /// Serialized data could not be read or written
    Serialization(serde_json::Error),
    /// Download artifact could not be delivered
    Delivery { file_name: String, source: anyhow::Error },
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::MissingProvider { name } => {
                write!(
                    f,
                    "'{name}' was read outside of its provider. Provide it on the SiteContext at the application root first."
                )
            }
            SiteError::StorageUnavailable(e) => write!(f, "Storage unavailable: {e}"),
            SiteError::Io(e) => write!(f, "IO operation failed: {e}"),
            SiteError::Serialization(e) => write!(f, "Serialization failed: {e}"),
            SiteError::Delivery { file_name, source } => {
                write!(f, "Failed to deliver '{file_name}': {source}")
            }
        }
    }
}

impl std::error::Error for SiteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SiteError::Io(e) => Some(e),
            SiteError::Serialization(e) => Some(e),
            SiteError::Delivery { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SiteError {
    fn from(e: std::io::Error) -> Self {
        SiteError::Io(e)
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(e: serde_json::Error) -> Self {
        SiteError::Serialization(e)
    }
}

/// Result type alias for chainsite operations
pub type SiteResult<T> = Result<T, SiteError>;

/// Attaches delivery context to fallible results, keeping the cause
pub trait ErrorContext<T> {
    fn context_delivery(self, file_name: &str) -> SiteResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn context_delivery(self, file_name: &str) -> SiteResult<T> {
        self.map_err(|e| SiteError::Delivery {
            file_name: file_name.to_string(),
            source: e.into(),
        })
    }
}

/// Turns a missing context value into [`SiteError::MissingProvider`]
pub trait ProviderContext<T> {
    fn context_provider(self, name: &'static str) -> SiteResult<T>;
}

impl<T> ProviderContext<T> for Option<T> {
    fn context_provider(self, name: &'static str) -> SiteResult<T> {
        self.ok_or(SiteError::MissingProvider { name })
    }
}
