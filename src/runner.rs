//! One-shot pipeline: buffer text → parse → execute → render.
//!
//! # Design Decisions
//! - The sink and the transport are both injected, so a host can run the
//!   pipeline against a capturing pane and a spy transport
//! - Overlapping invocations are not serialized; each call owns all of
//!   its state and only the sink is shared by the host
//! - Failures are rendered into the pane and also returned, so callers
//!   can distinguish outcomes without re-parsing the pane

use crate::document::parse;
use crate::exec::{dispatch, prepare, ExecResult, ResponseRecord, Transport};
use crate::render::{render_error, render_request, render_response, OutputSink};

/// Execute one request document and render the exchange.
///
/// The pane is cleared and shown first; then either the Request block
/// followed by the response blocks, or a single Error block. The
/// transport is invoked at most once.
pub async fn run_document(
    text: &str,
    transport: &dyn Transport,
    sink: &mut dyn OutputSink,
) -> ExecResult<ResponseRecord> {
    let descriptor = parse(text);

    sink.clear();
    sink.show();

    let request = match prepare(&descriptor) {
        Ok(request) => request,
        Err(error) => {
            render_error(sink, &error);
            return Err(error);
        }
    };

    tracing::info!(method = %request.method, url = %request.url, "executing request document");
    render_request(sink, &request);

    match dispatch(transport, &request).await {
        Ok(record) => {
            render_response(sink, &record);
            Ok(record)
        }
        Err(error) => {
            render_error(sink, &error);
            Err(error)
        }
    }
}
