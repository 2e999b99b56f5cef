//! Unified error type.

/// The error type returned by arbor's fallible operations.
///
/// Everything here fails at startup, never per-request. A tree that cannot
/// be registered should stop the process before it accepts traffic, so
/// construction problems surface as `Err` from
/// [`Router::build`](crate::Router::build) or from method parsing, not as
/// 5xx responses.
///
/// Duplicate `(method, path)` registrations are deliberately *not* an error:
/// the last binding wins. See [`Mux::bind`](crate::Mux::bind).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A method string did not name one of the nine RFC 9110 verbs.
    #[error("unknown HTTP method `{0}`")]
    InvalidMethod(String),

    /// The multiplexer rejected a route pattern (malformed `{param}`
    /// syntax and the like).
    #[error("invalid route pattern `{path}`: {reason}")]
    InvalidRoute { path: String, reason: String },

    /// Binding the listen address or accepting a connection failed.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
