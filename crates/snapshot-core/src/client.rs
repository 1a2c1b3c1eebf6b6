use crate::actions::snapshot::Snapshot;
use crate::error::Result;
use crate::model::{HttpMethod, QueryParams, ResponseBody};
use crate::transport::{NotFoundPolicy, Transport, rescue_from_not_found};
use tracing::debug;

/// Entry point for the API. Actions are grouped by namespace.
#[derive(Debug)]
pub struct Client<T> {
    transport: T,
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn snapshot(&self) -> Snapshot<'_, T> {
        Snapshot::new(self)
    }

    /// Sends the request and unwraps the body, applying the not-found policy.
    pub(crate) fn perform_request(
        &self,
        action: &'static str,
        method: HttpMethod,
        path: &str,
        params: &QueryParams,
        body: Option<&ResponseBody>,
        policy: NotFoundPolicy,
    ) -> Result<ResponseBody> {
        debug!(action, %method, path, params = params.len(), "performing request");
        let result = self
            .transport
            .perform_request(method, path, params, body)
            .map(|response| response.body);
        rescue_from_not_found(result, policy)
    }
}
