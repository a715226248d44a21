//! Error types for persistence operations.

use std::io;
use std::path::PathBuf;

/// Errors surfaced by [`read`](crate::read) and [`try_write`](crate::try_write).
///
/// [`write`](crate::write) never returns these; it collapses them into its
/// boolean result and logs the cause instead.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An argument failed validation before any I/O happened.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The read target does not exist.
    #[error("{} not found", .path.display())]
    NotFound { path: PathBuf },

    /// The file's XML could not be deserialized into the requested type.
    #[error("failed to deserialize {}: {message}", .path.display())]
    Deserialize { path: PathBuf, message: String },

    /// The payload could not be serialized as XML.
    #[error("failed to serialize for {}: {message}", .path.display())]
    Serialize { path: PathBuf, message: String },

    /// Opening, creating, or writing the file (or its parent directories)
    /// failed at the filesystem level.
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Error {
        Error::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn invalid_argument_display() {
        let e = Error::invalid_argument("path cannot be empty");
        assert_eq!(format!("{}", e), "invalid argument: path cannot be empty");
    }

    #[test]
    fn not_found_display_carries_path() {
        let e = Error::NotFound {
            path: PathBuf::from("out/missing.xml"),
        };
        let display = format!("{}", e);
        assert!(display.contains("out/missing.xml"));
        assert!(display.contains("not found"));
    }

    #[test]
    fn deserialize_display() {
        let e = Error::Deserialize {
            path: PathBuf::from("user.xml"),
            message: "unexpected end of input".to_string(),
        };
        let display = format!("{}", e);
        assert!(display.contains("deserialize"));
        assert!(display.contains("user.xml"));
        assert!(display.contains("unexpected end of input"));
    }

    #[test]
    fn io_error_source() {
        let e = Error::Io {
            path: PathBuf::from("user.xml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(StdError::source(&e).is_some());
    }

    #[test]
    fn not_found_source_is_none() {
        let e = Error::NotFound {
            path: PathBuf::from("user.xml"),
        };
        assert!(StdError::source(&e).is_none());
    }
}
