//! Blocking HTTP transport backed by ureq.

use petstore_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Transport};
use tracing::debug;
use ureq::{Agent, RequestBuilder};

/// Executes `HttpRequest`s with a shared ureq agent.
///
/// Status-as-error is disabled so 4xx/5xx responses come back as data; the
/// store's not-found marker arrives with a 404 and must reach the core.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn with_headers<B>(
    mut builder: RequestBuilder<B>,
    headers: &[(String, String)],
) -> RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %req.method, url = %req.url, "sending request");
        let body = req.body.unwrap_or_default();
        let result = match req.method {
            HttpMethod::Get => with_headers(self.agent.get(&req.url), &req.headers).call(),
            HttpMethod::Delete => with_headers(self.agent.delete(&req.url), &req.headers).call(),
            HttpMethod::Post => {
                with_headers(self.agent.post(&req.url), &req.headers).send(body.as_bytes())
            }
            HttpMethod::Put => {
                with_headers(self.agent.put(&req.url), &req.headers).send(body.as_bytes())
            }
        };
        let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                Some((name.as_str().to_string(), value.to_str().ok()?.to_string()))
            })
            .collect();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        debug!(status, "received response");

        Ok(HttpResponse { status, headers, body })
    }
}
