//! Scrollback-pane rendering.
//!
//! # Responsibilities
//! - Define the `OutputSink` seam the host surface implements
//! - Lay out one executed exchange as labeled, fold-marker-delimited
//!   blocks: Request, Status, Time, Headers, Body — or a single Error
//!
//! # Design Decisions
//! - The sink is passed in explicitly; there is no module-level channel,
//!   so tests capture output with `BufferSink`
//! - Block delimiters are `<Label>: ` padded to 30 columns with `=` and
//!   closed with `<<`; the Headers block is additionally wrapped in
//!   `{{{` / `}}}` so hosts with marker folding can collapse it
//! - Repeated reply headers render as arrays, never collapsed

use serde_json::{json, Map, Value};

use crate::exec::{ExecError, ResponseRecord, TransportRequest};

/// Where rendered text goes. The host surface decides what clearing and
/// showing mean; a plain stdout sink treats them as no-ops.
pub trait OutputSink {
    fn clear(&mut self);
    fn append(&mut self, text: &str);
    fn show(&mut self);
}

/// Sink that writes straight to stdout.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn clear(&mut self) {}

    fn append(&mut self, text: &str) {
        print!("{text}");
    }

    fn show(&mut self) {}
}

/// Capturing sink for tests and embedding hosts.
#[derive(Debug, Default)]
pub struct BufferSink {
    pub contents: String,
}

impl OutputSink for BufferSink {
    fn clear(&mut self) {
        self.contents.clear();
    }

    fn append(&mut self, text: &str) {
        self.contents.push_str(text);
    }

    fn show(&mut self) {}
}

const DELIMITER_WIDTH: usize = 30;

fn delimiter(label: &str) -> String {
    let mut line = format!("{label}: ");
    while line.len() < DELIMITER_WIDTH {
        line.push('=');
    }
    line.push_str("<<");
    line
}

fn print_block(sink: &mut dyn OutputSink, label: &str, text: &str, leading_newline: bool, fold: bool) {
    let delim = delimiter(label);
    let lead = if leading_newline { "\n" } else { "" };
    sink.append(&format!("{lead}{delim}\n"));
    if fold {
        sink.append("{{{\n");
    }
    sink.append(&format!("\n{text}\n"));
    if fold {
        sink.append("\n}}}");
    }
    sink.append(&format!("\n{delim}\n"));
}

fn print_line(sink: &mut dyn OutputSink, text: &str) {
    sink.append(&format!("\n{text}\n"));
}

/// Render the request exactly as handed to the transport.
pub fn render_request(sink: &mut dyn OutputSink, request: &TransportRequest) {
    let mut view = Map::new();
    view.insert("url".to_string(), json!(request.url));
    view.insert("method".to_string(), json!(request.method.as_str()));
    let headers: Map<String, Value> = request
        .headers
        .iter()
        .map(|(name, value)| (name.clone(), json!(value)))
        .collect();
    view.insert("headers".to_string(), Value::Object(headers));
    if let Some(body) = &request.body {
        view.insert("body".to_string(), json!(body));
    }
    let text = serde_json::to_string_pretty(&Value::Object(view)).unwrap_or_default();
    print_block(sink, "Request", &text, false, false);
}

/// Render a successful exchange: status and timing lines, foldable
/// headers, then the body (pretty JSON when it parsed as such).
pub fn render_response(sink: &mut dyn OutputSink, record: &ResponseRecord) {
    print_line(
        sink,
        &format!("Status: {} - {}", record.status, record.status_text),
    );
    print_line(sink, &format!("Time: {:?}", record.elapsed));

    let text = serde_json::to_string_pretty(&group_headers(&record.headers)).unwrap_or_default();
    print_block(sink, "Headers", &text, true, true);

    let body = match &record.json {
        Some(value) => serde_json::to_string_pretty(value).unwrap_or_else(|_| record.body.clone()),
        None => record.body.clone(),
    };
    print_block(sink, "Body", &body, true, false);
}

/// Render a failed exchange as a single Error block.
pub fn render_error(sink: &mut dyn OutputSink, error: &ExecError) {
    print_block(sink, "Error", &error.to_string(), true, false);
}

/// Group reply headers into name → [values], keeping value order.
fn group_headers(headers: &[(String, String)]) -> Value {
    let mut grouped = Map::new();
    for (name, value) in headers {
        match grouped.entry(name.clone()).or_insert_with(|| json!([])) {
            Value::Array(values) => values.push(json!(value)),
            _ => unreachable!(),
        }
    }
    Value::Object(grouped)
}
