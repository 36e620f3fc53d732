//! Request normalization, dispatch and response shaping.
//!
//! # Responsibilities
//! - Refuse descriptors without a URL before any network activity
//! - Normalize the descriptor: default the scheme, materialize and
//!   encode the body per declared Content-Type
//! - Time the round-trip and shape the reply into a `ResponseRecord`
//!
//! # Design Decisions
//! - `prepare` and `dispatch` are separate so callers can render the
//!   request exactly as sent before awaiting the reply
//! - The `Content-Type` lookup is case-sensitive on the exact key, as
//!   the document format specifies
//! - Whether a body "is JSON" for the structured response view is decided
//!   by a best-effort parse, never by the reply's Content-Type

use std::time::{Duration, Instant};

use crate::document::{Method, RequestDescriptor};
use crate::exec::body::{self, BodyKind};
use crate::exec::error::{diagnostic, ExecError, ExecResult};
use crate::exec::transport::{Transport, TransportRequest};

/// The outcome of one executed request.
#[derive(Debug, Clone)]
pub struct ResponseRecord {
    pub status: u16,
    pub status_text: String,
    /// Reply headers in received order, repeated names preserved.
    pub headers: Vec<(String, String)>,
    pub body: String,
    /// Structured view of the body when it parses as JSON.
    pub json: Option<serde_json::Value>,
    pub elapsed: Duration,
}

/// Normalize a descriptor into a ready-to-send request.
///
/// Fails only with `MissingUrl`; every other oddity in the document is
/// resolved by the normalization rules.
pub fn prepare(descriptor: &RequestDescriptor) -> ExecResult<TransportRequest> {
    if !descriptor.is_executable() {
        return Err(ExecError::MissingUrl);
    }

    let content = descriptor.body_text();
    let body = if descriptor.method == Method::Get {
        None
    } else {
        Some(match body::classify(descriptor.header("Content-Type")) {
            BodyKind::Json => body::parse_lenient(&content)
                .and_then(|value| serde_json::to_string(&value).ok())
                .unwrap_or(content),
            BodyKind::Form => body::encode_form_body(&content),
            BodyKind::Other => content,
        })
    };

    Ok(TransportRequest {
        method: descriptor.method,
        url: default_scheme(&descriptor.url),
        headers: descriptor.headers.clone(),
        body,
    })
}

/// Send a prepared request and shape the reply, timing the round-trip
/// from dispatch to full body receipt.
pub async fn dispatch(
    transport: &dyn Transport,
    request: &TransportRequest,
) -> ExecResult<ResponseRecord> {
    let start = Instant::now();
    let reply = transport
        .send(request)
        .await
        .map_err(|e| ExecError::Transport(diagnostic(e.as_ref())))?;
    let elapsed = start.elapsed();

    tracing::debug!(
        status = reply.status,
        elapsed_ms = elapsed.as_millis() as u64,
        "response received"
    );

    let json = serde_json::from_str(&reply.body).ok();
    Ok(ResponseRecord {
        status: reply.status,
        status_text: reply.status_text,
        headers: reply.headers,
        body: reply.body,
        json,
        elapsed,
    })
}

/// Normalize then dispatch in one call.
pub async fn execute(
    transport: &dyn Transport,
    descriptor: &RequestDescriptor,
) -> ExecResult<ResponseRecord> {
    let request = prepare(descriptor)?;
    dispatch(transport, &request).await
}

/// Prepend `https://` when the URL carries no HTTP scheme.
fn default_scheme(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}
