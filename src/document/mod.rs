//! Request-document parsing subsystem.
//!
//! # Data Flow
//! ```text
//! editor buffer / file text
//!     → parser.rs (single pass over lines)
//!     → RequestDescriptor (method, url, headers, body)
//!     → exec subsystem
//! ```
//!
//! # Design Decisions
//! - Parsing never fails; malformed input yields a descriptor with
//!   default/empty fields and the executor decides whether it is runnable
//! - The descriptor is rebuilt from the buffer on every execution,
//!   no caching between invocations
//! - No regex; header and shorthand lines are matched with plain
//!   string splitting to keep the pass O(n)

pub mod descriptor;
pub mod parser;

pub use descriptor::{Method, RequestDescriptor};
pub use parser::parse;
