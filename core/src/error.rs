//! Error types for building and sending search requests.
//!
//! # Design
//! Request-construction failures and transport failures are separate enums
//! because they end up in different places: a `RequestError` aborts a search
//! before anything is submitted, while a `TransportError` only ever reaches
//! the completion and the log.

use thiserror::Error;

/// Failure to turn a query into a request.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The base URL plus encoded terms did not form a valid URL.
    #[error("invalid request url `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Failure reported by a `Transport` in place of a response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, TLS, read).
    #[error("network error: {0}")]
    Network(String),

    /// The transport dropped its completion without reporting an outcome.
    #[error("transport dropped the request without completing it")]
    Abandoned,
}
