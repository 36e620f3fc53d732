//! Execution error definitions.

use thiserror::Error;

/// Errors that can terminate a single execution.
///
/// Both variants are terminal to their invocation and rendered into the
/// output pane; nothing propagates past the executor's boundary.
#[derive(Debug, Error)]
pub enum ExecError {
    /// The parsed document has no URL; nothing was dispatched.
    #[error("Url is required")]
    MissingUrl,

    /// The transport failed (DNS, connect, TLS, protocol). Carries the
    /// best diagnostic the underlying error could provide.
    #[error("{0}")]
    Transport(String),
}

/// Result type for executor operations.
pub type ExecResult<T> = Result<T, ExecError>;

/// Flatten an error and its source chain into one diagnostic string,
/// outermost message first.
pub fn diagnostic(error: &(dyn std::error::Error + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        // some errors repeat their cause in their own Display
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Nested {
        message: &'static str,
        cause: Option<Box<Nested>>,
    }

    impl fmt::Display for Nested {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl std::error::Error for Nested {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            self.cause
                .as_deref()
                .map(|c| c as &(dyn std::error::Error + 'static))
        }
    }

    #[test]
    fn diagnostic_walks_the_source_chain() {
        let err = Nested {
            message: "request failed",
            cause: Some(Box::new(Nested {
                message: "connection refused",
                cause: None,
            })),
        };
        assert_eq!(diagnostic(&err), "request failed: connection refused");
    }

    #[test]
    fn diagnostic_skips_repeated_causes() {
        let err = Nested {
            message: "outer: inner detail",
            cause: Some(Box::new(Nested {
                message: "inner detail",
                cause: None,
            })),
        };
        assert_eq!(diagnostic(&err), "outer: inner detail");
    }

    #[test]
    fn missing_url_message() {
        assert_eq!(ExecError::MissingUrl.to_string(), "Url is required");
    }
}
