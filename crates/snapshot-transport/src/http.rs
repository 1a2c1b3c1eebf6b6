use anyhow::Context;
use reqwest::Method;
use reqwest::blocking::Client;
use reqwest::header::HeaderMap;
use serde_json::Value;
use snapshot_core::config::ClientConfig;
use snapshot_core::{Error, HttpMethod, QueryParams, Response, ResponseBody, Transport};
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_USER_AGENT: &str = concat!("snapshot-client/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP transport. Sends each request once; there is no retry layer.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> anyhow::Result<Self> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context("build http client")?;
        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Transport for HttpTransport {
    fn perform_request(
        &self,
        method: HttpMethod,
        path: &str,
        params: &QueryParams,
        body: Option<&ResponseBody>,
    ) -> snapshot_core::Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = self.client.request(reqwest_method(method), url).query(params);
        if let Some(body) = body {
            builder = builder.json(body);
        }
        let response = builder.send().map_err(|err| {
            warn!(%method, path, error = %err, "request failed");
            Error::Transport(anyhow::Error::new(err).context("send request"))
        })?;

        let status = response.status().as_u16();
        let headers = header_pairs(response.headers());
        let text = response
            .text()
            .map_err(|err| Error::Transport(anyhow::Error::new(err).context("read response body")))?;
        debug!(%method, path, status, "request completed");
        classify(status, headers, decode_body(&text))
    }
}

fn reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
    }
}

fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect()
}

/// Empty bodies become `null`; bodies that are not JSON are kept as a string.
pub(crate) fn decode_body(text: &str) -> ResponseBody {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

pub(crate) fn classify(
    status: u16,
    headers: Vec<(String, String)>,
    body: ResponseBody,
) -> snapshot_core::Result<Response> {
    match status {
        200..=299 => Ok(Response {
            status,
            headers,
            body,
        }),
        404 => Err(Error::NotFound { body }),
        _ => Err(Error::Status { status, body }),
    }
}
