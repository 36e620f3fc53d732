//! Request execution subsystem.
//!
//! # Data Flow
//! ```text
//! RequestDescriptor
//!     → executor.rs prepare() (scheme defaulting, body encoding)
//!     → TransportRequest
//!     → transport.rs (reqwest, optional proxy) ── the one await point
//!     → executor.rs dispatch() (timing, response shaping)
//!     → ResponseRecord | ExecError
//! ```
//!
//! # Design Decisions
//! - The transport sits behind a trait so tests can substitute a spy;
//!   the executor itself never touches the network
//! - A single attempt per invocation: no retries, no queueing, no
//!   crate-imposed timeout
//! - Every failure is converted at this boundary; callers always get a
//!   `ResponseRecord` or an `ExecError`, never a foreign error type

pub mod body;
pub mod error;
pub mod executor;
pub mod transport;

pub use error::{ExecError, ExecResult};
pub use executor::{dispatch, execute, prepare, ResponseRecord};
pub use transport::{ReqwestTransport, Transport, TransportRequest, TransportResponse};
