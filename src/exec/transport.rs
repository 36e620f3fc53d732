//! HTTP transport seam.
//!
//! # Responsibilities
//! - Describe an outbound request and its reply as plain data
//! - Perform the actual network round-trip behind the `Transport` trait
//! - Route through a proxy when one is configured
//!
//! # Design Decisions
//! - `TransportResponse.headers` keeps pairs in received order with
//!   repeats intact; headers like `Set-Cookie` legitimately occur more
//!   than once and must not be collapsed
//! - The reply body is fully buffered before the caller sees it; no
//!   streaming
//! - Errors cross the seam as boxed `std::error::Error` values so spies
//!   can fail with anything; the executor turns them into diagnostics

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::document::Method;

/// Boxed error type carried across the transport seam.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A normalized, ready-to-send request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// A fully buffered reply.
#[derive(Debug, Clone, Default)]
pub struct TransportResponse {
    pub status: u16,
    pub status_text: String,
    /// Header pairs in received order, repeats preserved.
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// The network collaborator. One call per execution; implementations
/// raise on network-level failure and never on HTTP error statuses.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, BoxError>;
}

/// Production transport backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a transport, routing through `proxy` when it is non-empty.
    pub fn new(proxy: &str) -> Result<Self, BoxError> {
        let mut builder = reqwest::Client::builder();
        if !proxy.is_empty() {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &TransportRequest) -> Result<TransportResponse, BoxError> {
        let url = url::Url::parse(&request.url)?;

        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            headers.append(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), url)
            .headers(headers);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        tracing::debug!(method = %request.method, url = %request.url, "dispatching request");
        let response = builder.send().await?;

        let status = response.status();
        let reply_headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await?;

        Ok(TransportResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            headers: reply_headers,
            body,
        })
    }
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Head => reqwest::Method::HEAD,
        Method::Options => reqwest::Method::OPTIONS,
        Method::Delete => reqwest::Method::DELETE,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Trace => reqwest::Method::TRACE,
        Method::Connect => reqwest::Method::CONNECT,
    }
}
