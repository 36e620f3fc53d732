//! Configuration management.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & deserialize, defaults when absent)
//!     → Config (immutable for the invocation)
//!     → transport (agent), store (root), host glue (enable/detect)
//! ```
//!
//! # Design Decisions
//! - Every key has a default so an empty or missing file is valid
//! - Config is read once per invocation; there is no reload

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::Config;
