use core::fmt;

/// Result alias for `lineage`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned at the record input boundary.
///
/// The hierarchy builder itself is total and never returns an error;
/// malformed relationships (dangling references, duplicate ids) are
/// tolerated and surfaced through [`crate::tree::check_records`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input JSON could not be parsed into person records.
    Parse(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse(msg) => write!(f, "failed to parse person records: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Parse(err.to_string())
    }
}
