use crate::error::{Error, Result};
use crate::model::{HttpMethod, IgnoreStatuses, QueryParams, ResponseBody};
use tracing::debug;

#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: ResponseBody,
}

/// Sends one request and classifies the answer.
///
/// Implementations return `Error::NotFound` for 404, `Error::Status` for any
/// other non-success status and `Error::Transport` when nothing came back.
pub trait Transport {
    fn perform_request(
        &self,
        method: HttpMethod,
        path: &str,
        params: &QueryParams,
        body: Option<&ResponseBody>,
    ) -> Result<Response>;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum NotFoundPolicy {
    #[default]
    Raise,
    Ignore,
}

impl NotFoundPolicy {
    pub fn from_ignore(ignore: &IgnoreStatuses) -> Self {
        if ignore.contains(404) {
            NotFoundPolicy::Ignore
        } else {
            NotFoundPolicy::Raise
        }
    }
}

/// Folds a not-found failure into the body the server sent with it.
pub fn rescue_from_not_found(
    result: Result<ResponseBody>,
    policy: NotFoundPolicy,
) -> Result<ResponseBody> {
    match (result, policy) {
        (Err(Error::NotFound { body }), NotFoundPolicy::Ignore) => {
            debug!("ignoring not found response");
            Ok(body)
        }
        (result, _) => result,
    }
}
