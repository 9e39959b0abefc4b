//! The book search screen: one button, tapped once.
//!
//! The process plays the owning context. It taps the button, waits for the
//! search to settle and exits non-zero if the request failed. Set
//! `SEARCH_BASE_URL` to point at another host (e.g. the mock server) and
//! `RUST_LOG` to control output.

use std::process::ExitCode;

use search_core::{Activation, Button, Control, SearchClient, SearchTrigger, ITUNES_BASE_URL};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let base_url =
        std::env::var("SEARCH_BASE_URL").unwrap_or_else(|_| ITUNES_BASE_URL.to_string());
    let mut screen = SearchTrigger::with_default_transport(Button::default())
        .with_client(SearchClient::new(&base_url));

    match screen.activate() {
        Activation::Submitted(id) => {
            info!(request = %id, enabled = screen.control().is_enabled(), "button tapped");
        }
        other => {
            error!(?other, "search was not submitted");
            return ExitCode::FAILURE;
        }
    }

    let Some(report) = screen.settle().await else {
        return ExitCode::FAILURE;
    };
    info!(enabled = screen.control().is_enabled(), "button re-enabled");

    if report.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
