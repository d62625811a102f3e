use super::Error;

/// Error when a database alias has no registered connection.
#[derive(Debug)]
pub(super) struct ConnectionDoesNotExist {
    alias: Box<str>,
}

impl std::error::Error for ConnectionDoesNotExist {}

impl core::fmt::Display for ConnectionDoesNotExist {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "the connection `{}` doesn't exist", self.alias)
    }
}

impl Error {
    /// Creates an error for an unknown database alias.
    pub fn connection_does_not_exist(alias: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ConnectionDoesNotExist(
            ConnectionDoesNotExist {
                alias: alias.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unknown database alias.
    pub fn is_connection_does_not_exist(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConnectionDoesNotExist(_))
    }
}
