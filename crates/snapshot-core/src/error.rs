use crate::model::ResponseBody;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// Caller passed query options the action does not register.
    #[error("unrecognized parameter(s) for {action}: {}", .keys.join(", "))]
    UnrecognizedParameter {
        action: &'static str,
        keys: Vec<String>,
    },

    #[error("invalid value for `{key}`: {reason}")]
    InvalidArgument { key: String, reason: String },

    #[error("no parameters registered for action `{0}`")]
    UnknownAction(String),

    /// The server answered 404. The body is kept so callers can fold it into a result.
    #[error("resource not found (HTTP 404)")]
    NotFound { body: ResponseBody },

    #[error("request failed with status code `{status}`")]
    Status { status: u16, body: ResponseBody },

    #[error("transport layer failure: {0:#}")]
    Transport(anyhow::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::NotFound { .. } => Some(404),
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn invalid(key: &str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
