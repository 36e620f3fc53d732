//! Single-pass parser for the request-document format.
//!
//! # Responsibilities
//! - Split the buffer into a header section and a body section at the
//!   first whitespace-only line
//! - Recognize `Name: value` header lines, with `Method` and `URL` as
//!   reserved names
//! - Recognize the `METHOD url` single-line shorthand
//! - Collect body lines verbatim, blanks included
//!
//! # Design Decisions
//! - Unrecognized header-section lines are silently ignored, never an
//!   error; the document format is forgiving by contract
//! - The separator line itself is consumed, not appended to the body
//! - A document without a separator never enters body mode

use crate::document::descriptor::{Method, RequestDescriptor};

/// Parse a request document into a descriptor.
///
/// Pure function of the input text: never fails, never keeps state.
/// Empty or whitespace-only input yields the all-default descriptor,
/// whose empty URL downstream code treats as "do not execute".
pub fn parse(text: &str) -> RequestDescriptor {
    let mut doc = RequestDescriptor::default();
    let mut headers_done = false;

    for line in text.trim().lines() {
        if headers_done {
            doc.body.push(line.to_string());
            continue;
        }
        if line.trim().is_empty() {
            headers_done = true;
            continue;
        }
        if let Some((name, value)) = split_header_line(line) {
            match name {
                "Method" => {
                    if let Some(method) = Method::parse_token(value) {
                        doc.method = method;
                    }
                }
                "URL" => doc.url = value.to_string(),
                _ => doc.set_header(name, value),
            }
        } else if let Some((method, url)) = split_shorthand_line(line) {
            doc.method = method;
            doc.url = url.to_string();
        }
    }

    doc
}

/// Match `^[ \t]*([^ \t]+?):[ \t]+(.*)$`: optional indent, a
/// whitespace-free name up to the first colon that is followed by a
/// space or tab, then the value. The name itself may contain colons.
fn split_header_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim_start_matches([' ', '\t']);
    let mut search_from = 0;
    while let Some(offset) = line[search_from..].find(':') {
        let at = search_from + offset;
        let name = &line[..at];
        if name.contains([' ', '\t']) {
            return None;
        }
        let rest = &line[at + 1..];
        if !name.is_empty() && rest.starts_with([' ', '\t']) {
            return Some((name, rest.trim_start_matches([' ', '\t'])));
        }
        search_from = at + 1;
    }
    None
}

/// Match `^(METHOD)\s+(.+)$` with a case-insensitive method token: the
/// ergonomic one-line alternative to separate `Method:` / `URL:` lines.
fn split_shorthand_line(line: &str) -> Option<(Method, &str)> {
    let (token, rest) = line.split_once(char::is_whitespace)?;
    let method = Method::parse_token(token)?;
    let url = rest.trim_start();
    if url.is_empty() {
        return None;
    }
    Some((method, url))
}
