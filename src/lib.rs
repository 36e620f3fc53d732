//! reqdoc — run plain-text HTTP request documents.
//!
//! A request document is a header block, a blank line, and a body:
//!
//! ```text
//! Method: POST
//! URL: example.com/api
//! Content-Type: application/json
//!
//! {token: 'abc', retry: false}
//! ```
//!
//! # Architecture Overview
//!
//! ```text
//! buffer text
//!     ┌──────────┐    ┌──────────────┐    ┌───────────┐
//! ───▶│ document │───▶│     exec     │───▶│  render   │───▶ output pane
//!     │  parser  │    │ normalize +  │    │ fold-mark │
//!     └──────────┘    │  transport   │    │  blocks   │
//!                     └──────┬───────┘    └───────────┘
//!                            │
//!                  ┌─────────┴──────────┐
//!                  │ Cross-Cutting      │
//!                  │ config  headers    │
//!                  │ store   tracing    │
//!                  └────────────────────┘
//! ```
//!
//! The transport and the output sink are both trait seams: production
//! uses reqwest and stdout, tests use a spy and a capturing buffer.

// Core pipeline
pub mod document;
pub mod exec;
pub mod render;
pub mod runner;

// Cross-cutting concerns
pub mod config;
pub mod headers;
pub mod store;

pub use config::Config;
pub use document::{parse, Method, RequestDescriptor};
pub use exec::{ExecError, ReqwestTransport, ResponseRecord, Transport};
pub use render::{BufferSink, OutputSink, StdoutSink};
pub use runner::run_document;
