use crate::error::{Error, Result};
use crate::model::{HttpMethod, QueryParams, ResponseBody};
use crate::transport::{Response, Transport};
use serde_json::Value;
use std::sync::Mutex;

#[derive(Clone, Debug, PartialEq)]
pub(crate) struct RecordedCall {
    pub(crate) method: HttpMethod,
    pub(crate) path: String,
    pub(crate) params: QueryParams,
    pub(crate) body: Option<ResponseBody>,
}

/// In-memory transport that records calls and answers with a fixed outcome.
pub(crate) struct RecordingTransport {
    calls: Mutex<Vec<RecordedCall>>,
    reply: Box<dyn Fn() -> Result<Response> + Send + Sync>,
}

impl RecordingTransport {
    pub(crate) fn ok(body: Value) -> Self {
        Self::with_reply(move || {
            Ok(Response {
                status: 200,
                headers: Vec::new(),
                body: body.clone(),
            })
        })
    }

    pub(crate) fn not_found(body: Value) -> Self {
        Self::with_reply(move || Err(Error::NotFound { body: body.clone() }))
    }

    pub(crate) fn status(status: u16) -> Self {
        Self::with_reply(move || {
            Err(Error::Status {
                status,
                body: Value::Null,
            })
        })
    }

    pub(crate) fn with_reply(reply: impl Fn() -> Result<Response> + Send + Sync + 'static) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            reply: Box::new(reply),
        }
    }

    pub(crate) fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

impl Transport for RecordingTransport {
    fn perform_request(
        &self,
        method: HttpMethod,
        path: &str,
        params: &QueryParams,
        body: Option<&ResponseBody>,
    ) -> Result<Response> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(RecordedCall {
                method,
                path: path.to_string(),
                params: params.clone(),
                body: body.cloned(),
            });
        }
        (self.reply)()
    }
}
