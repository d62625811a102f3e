use super::Error;

/// Error when a field is constructed with unusable arguments.
///
/// This occurs when:
/// - No schema document is provided
/// - The schema document is empty
/// - The `check_schema_in_db` flag is not a boolean
///
/// These errors are raised while models are being defined and are not
/// expected to be recovered from.
#[derive(Debug)]
pub(super) struct ImproperlyConfigured {
    message: Box<str>,
}

impl std::error::Error for ImproperlyConfigured {}

impl core::fmt::Display for ImproperlyConfigured {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "improperly configured: {}", self.message)
    }
}

impl Error {
    /// Creates a configuration error.
    pub fn improperly_configured(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ImproperlyConfigured(
            ImproperlyConfigured {
                message: message.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a configuration error.
    pub fn is_improperly_configured(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ImproperlyConfigured(_))
    }
}
