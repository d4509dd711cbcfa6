//! Error types for Observa.

use alloc::string::String;
use core::fmt;

/// Result type alias for Observa operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types surfaced by Observa helpers.
///
/// Collection and dispatcher operations are total and never return these;
/// they only come out of the lower-level helpers such as
/// [`canonical_form`](crate::canonical_form).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value could not be converted into its canonical form.
    Canonicalize { message: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Canonicalize { message } => {
                write!(f, "Cannot canonicalize value: {}", message)
            }
        }
    }
}

impl Error {
    /// Creates a canonicalization error.
    pub fn canonicalize(message: impl Into<String>) -> Self {
        Error::Canonicalize {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        use alloc::string::ToString;
        Error::canonicalize(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = Error::canonicalize("key must be a string");
        assert!(err.to_string().contains("Cannot canonicalize"));
        assert!(err.to_string().contains("key must be a string"));
    }

    #[test]
    fn test_error_constructor() {
        match Error::canonicalize("bad") {
            Error::Canonicalize { message } => assert_eq!(message, "bad"),
        }
    }
}
