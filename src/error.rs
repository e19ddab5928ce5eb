use std::{fmt, io};

/// Faults raised below the token protocol: the HTTP layer failed, the
/// account host answered with something that is not JSON, or the local
/// environment is incomplete.
///
/// A token endpoint that answers with a well-formed rejection (for example
/// `invalid_grant`) is not an error; see [`crate::types::TokenOutcome`].
#[derive(Debug)]
pub enum Error {
    Http(reqwest::Error),
    Decode {
        status: u16,
        source: serde_json::Error,
    },
    MissingVar(&'static str),
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "request to account service failed: {}", e),
            Error::Decode { status, source } => write!(
                f,
                "account service answered {} with an unreadable body: {}",
                status, source
            ),
            Error::MissingVar(name) => write!(f, "{} must be set", name),
            Error::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(e) => Some(e),
            Error::Decode { source, .. } => Some(source),
            Error::MissingVar(_) => None,
            Error::Io(e) => Some(e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}
