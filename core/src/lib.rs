//! Core of the book search screen.
//!
//! # Overview
//! A `SearchTrigger` builds one `GET` against the iTunes search API and hands
//! it to an injected `Transport`. The outcome comes back through a one-shot
//! `Completion`, is logged, and is applied to the trigger's own state (the
//! in-flight handle and the button) only on the context that owns it.
//!
//! # Design
//! - `SearchClient` is a stateless request builder; it never does I/O.
//! - `Transport` is the only seam to the network. `UreqTransport` is the
//!   production implementation; tests substitute their own.
//! - At most one request is in flight. Activating while busy is a no-op.
//! - Failures are logged, never returned: a failed request leaves the
//!   trigger idle with its button enabled.

pub mod client;
pub mod error;
pub mod http;
pub mod net;
pub mod query;
pub mod transport;
pub mod trigger;

pub use client::{SearchClient, ITUNES_BASE_URL};
pub use error::{RequestError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse, ResponseMetadata};
pub use net::UreqTransport;
pub use query::{SearchQuery, DEFAULT_TERMS};
pub use transport::{Completion, Outcome, Transport};
pub use trigger::{Activation, Button, Control, InFlight, Report, SearchTrigger};
