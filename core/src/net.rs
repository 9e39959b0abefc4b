//! Blocking `ureq` transport run on background threads.

use std::thread;

use tracing::debug;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Completion, Outcome, Transport};

/// The production `Transport`.
///
/// Each request gets its own named thread, so `send` returns right away and
/// the completion fires from that thread. Status codes are never treated as
/// errors: a 404 or 500 is still a response.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: HttpRequest, completion: Completion) {
        let agent = self.agent.clone();
        let spawned = thread::Builder::new()
            .name("search-transport".to_string())
            .spawn(move || completion.complete(execute(&agent, &request)));
        // On failure the closure, and with it the completion, is dropped,
        // which reports `Abandoned`.
        if let Err(e) = spawned {
            debug!(error = %e, "failed to spawn transport thread");
        }
    }
}

/// Execute `request` and read the whole body.
fn execute(agent: &ureq::Agent, request: &HttpRequest) -> Outcome {
    debug!(method = %request.method, url = %request.url, "sending request");
    let mut response = agent
        .get(&request.url)
        .call()
        .map_err(|e| TransportError::Network(e.to_string()))?;

    let status = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let body = response
        .body_mut()
        .read_to_vec()
        .map_err(|e| TransportError::Network(e.to_string()))?;

    Ok(HttpResponse {
        url: request.url.clone(),
        status,
        headers,
        body,
    })
}
