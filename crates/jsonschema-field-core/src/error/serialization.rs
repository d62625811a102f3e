use super::Error;

/// Error when a value cannot be encoded as JSON for storage.
#[derive(Debug)]
pub(super) struct SerializationError {
    inner: serde_json::Error,
}

impl std::error::Error for SerializationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.inner)
    }
}

impl core::fmt::Display for SerializationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "value is not JSON serializable: {}", self.inner)
    }
}

impl Error {
    /// Creates a serialization error.
    pub fn serialization(err: serde_json::Error) -> Error {
        Error::from(super::ErrorKind::Serialization(SerializationError {
            inner: err,
        }))
    }

    /// Returns `true` if this error, or any error in its context chain, is a
    /// serialization error.
    pub fn is_serialization(&self) -> bool {
        self.find(|kind| match kind {
            super::ErrorKind::Serialization(_) => Some(()),
            _ => None,
        })
        .is_some()
    }
}
