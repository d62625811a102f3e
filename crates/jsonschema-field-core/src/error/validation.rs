use super::{Error, ErrorKind};

/// Error when a value is rejected by field validation.
#[derive(Debug)]
pub(super) struct ValidationError {
    /// Short machine-readable code, e.g. `schema_mismatch` or `null`.
    code: &'static str,

    /// The offending value.
    value: serde_json::Value,

    /// Human-readable messages, one per violation.
    messages: Vec<String>,
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "validation failed [{}]", self.code)?;

        let mut sep = ": ";
        for message in &self.messages {
            write!(f, "{sep}{message}")?;
            sep = "; ";
        }

        Ok(())
    }
}

impl Error {
    /// Creates a validation error carrying the offending value.
    pub fn validation(
        code: &'static str,
        value: serde_json::Value,
        messages: Vec<String>,
    ) -> Error {
        Error::from(ErrorKind::Validation(ValidationError {
            code,
            value,
            messages,
        }))
    }

    /// Returns `true` if this error, or any error in its context chain, is a
    /// validation error.
    pub fn is_validation(&self) -> bool {
        self.validation_error().is_some()
    }

    /// The code of the validation error, if this is one.
    pub fn validation_code(&self) -> Option<&'static str> {
        self.validation_error().map(|err| err.code)
    }

    /// The value rejected by validation, if this is a validation error.
    pub fn validation_value(&self) -> Option<&serde_json::Value> {
        self.validation_error().map(|err| &err.value)
    }

    /// The messages of the validation error, if this is one.
    pub fn validation_messages(&self) -> &[String] {
        self.validation_error()
            .map(|err| &err.messages[..])
            .unwrap_or(&[])
    }

    fn validation_error(&self) -> Option<&ValidationError> {
        self.find(|kind| match kind {
            ErrorKind::Validation(err) => Some(err),
            _ => None,
        })
    }
}
