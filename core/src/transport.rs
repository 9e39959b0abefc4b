//! The seam between search logic and the network.
//!
//! # Design
//! A `Transport` takes an `HttpRequest` plus a `Completion` and returns
//! immediately. Whatever thread finishes the I/O calls
//! `Completion::complete` with the `Outcome`. `complete` consumes the
//! completion, so it cannot fire twice. Dropping an unfired completion fires
//! it with `TransportError::Abandoned`, so it cannot fire zero times either.

use std::fmt;
use std::sync::Arc;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// What a transport reports for one request.
pub type Outcome = Result<HttpResponse, TransportError>;

type Callback = Box<dyn FnOnce(Outcome) + Send + 'static>;

/// One-shot callback for a submitted request.
pub struct Completion {
    callback: Option<Callback>,
}

impl Completion {
    pub fn new(callback: impl FnOnce(Outcome) + Send + 'static) -> Self {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    /// Deliver the outcome.
    pub fn complete(mut self, outcome: Outcome) {
        if let Some(callback) = self.callback.take() {
            callback(outcome);
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            callback(Err(TransportError::Abandoned));
        }
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("pending", &self.callback.is_some())
            .finish()
    }
}

/// Sends a request and reports exactly one outcome through `completion`.
///
/// Implementations must not block the caller on I/O and must not retry.
pub trait Transport: Send + Sync {
    fn send(&self, request: HttpRequest, completion: Completion);
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: HttpRequest, completion: Completion) {
        (**self).send(request, completion)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: HttpRequest, completion: Completion) {
        (**self).send(request, completion)
    }
}
