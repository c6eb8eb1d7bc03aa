use std::fmt;

/// Errors raised while loading or parsing audit data.
///
/// Resolving audit actions never fails; errors only come from the
/// surrounding panel assembly and from parsing status keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    /// Creates a new error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Error for a commit that has no materialized record yet.
    pub fn unparsed_commit() -> Self {
        Self::new(ErrorKind::UnparsedCommit, "This commit has not parsed yet.")
    }

    /// Error for a status or action key that matched nothing.
    pub fn unknown_status(value: impl Into<String>) -> Self {
        let value = value.into();
        let message = format!("unrecognized key '{}'", value);
        Self::new(ErrorKind::UnknownStatus { value }, message)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Error {}

/// The kind of error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The commit exists in the repository but has not been imported yet
    UnparsedCommit,
    /// A status or action key did not match any known value
    UnknownStatus {
        /// The key that failed to parse
        value: String,
    },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnparsedCommit => write!(f, "Unparsed commit"),
            ErrorKind::UnknownStatus { value } => write!(f, "Unknown status '{}'", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unparsed_commit_message() {
        let err = Error::unparsed_commit();
        assert_eq!(err.kind(), &ErrorKind::UnparsedCommit);
        assert_eq!(
            err.to_string(),
            "Unparsed commit: This commit has not parsed yet."
        );
    }

    #[test]
    fn unknown_status_keeps_value() {
        let err = Error::unknown_status("bogus");
        assert_eq!(
            err.kind(),
            &ErrorKind::UnknownStatus {
                value: "bogus".to_string()
            }
        );
        assert!(err.to_string().contains("bogus"));
    }
}
