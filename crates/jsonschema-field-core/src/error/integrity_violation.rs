use super::Error;

/// Error when the database rejects a write because it breaks a constraint.
///
/// With `check_schema_in_db` enabled, a document that does not match the
/// field's schema is reported this way by the `pg_jsonschema` check
/// constraint.
#[derive(Debug)]
pub(super) struct IntegrityViolation {
    code: Box<str>,
    inner: Box<dyn std::error::Error + Send + Sync>,
}

impl std::error::Error for IntegrityViolation {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner.as_ref())
    }
}

impl core::fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "integrity violation (SQLSTATE {}): {}", self.code, self.inner)
    }
}

impl Error {
    /// Creates an integrity violation error from the driver error that
    /// reported it.
    pub fn integrity_violation(
        code: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Error {
        Error::from(super::ErrorKind::IntegrityViolation(IntegrityViolation {
            code: code.into().into(),
            inner: Box::new(err),
        }))
    }

    /// Returns `true` if this error is an integrity violation.
    pub fn is_integrity_violation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::IntegrityViolation(_))
    }
}
