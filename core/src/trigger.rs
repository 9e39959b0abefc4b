//! The search trigger: one button, one request at a time.
//!
//! # Design
//! `SearchTrigger` owns the `Control` it disables and the `InFlight` handle
//! for the outstanding request. Both change only through `&mut self`, that
//! is, on whatever context owns the trigger. The transport completion may
//! run on any thread. It logs the outcome and posts a `Report` to the
//! trigger's channel, and `run_pending` or `settle` later apply it on the
//! owning context.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::client::SearchClient;
use crate::http::{HttpRequest, ResponseMetadata};
use crate::net::UreqTransport;
use crate::query::SearchQuery;
use crate::transport::{Completion, Outcome, Transport};

/// Something the user activates that can be greyed out.
pub trait Control {
    fn set_enabled(&mut self, enabled: bool);
    fn is_enabled(&self) -> bool;
}

/// A plain enabled/disabled flag. Starts enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    enabled: bool,
}

impl Default for Button {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl Control for Button {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}

/// Marker for the single outstanding request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlight {
    id: Uuid,
    url: String,
}

impl InFlight {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// What `search` did with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Handed to the transport under this request id.
    Submitted(Uuid),
    /// A request was already outstanding; nothing was sent.
    Busy,
    /// The request could not be built; nothing was sent.
    Aborted,
}

/// The observed outcome of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub id: Uuid,
    pub response: Option<ResponseMetadata>,
    /// Payload decoded as UTF-8; `None` without a payload or if decoding failed.
    pub text: Option<String>,
    pub error: Option<String>,
}

impl Report {
    fn from_outcome(id: Uuid, outcome: Outcome) -> Self {
        match outcome {
            Ok(response) => Self {
                id,
                text: response.text(),
                response: Some(response.metadata()),
                error: None,
            },
            Err(e) => Self {
                id,
                response: None,
                text: None,
                error: Some(e.to_string()),
            },
        }
    }

    fn log(&self) {
        info!(
            request = %self.id,
            response = ?self.response,
            data = ?self.text,
            error = ?self.error,
            "search completed"
        );
    }
}

/// Builds and submits the search request and tracks it until it completes.
pub struct SearchTrigger<C: Control = Button> {
    client: SearchClient,
    transport: Arc<dyn Transport>,
    control: C,
    in_flight: Option<InFlight>,
    reports_tx: UnboundedSender<Report>,
    reports_rx: UnboundedReceiver<Report>,
}

impl<C: Control> SearchTrigger<C> {
    pub fn new(transport: Arc<dyn Transport>, control: C) -> Self {
        let (reports_tx, reports_rx) = mpsc::unbounded_channel();
        Self {
            client: SearchClient::default(),
            transport,
            control,
            in_flight: None,
            reports_tx,
            reports_rx,
        }
    }

    /// Use the real network through `UreqTransport`.
    pub fn with_default_transport(control: C) -> Self {
        Self::new(Arc::new(UreqTransport::new()), control)
    }

    /// Replace the request builder, e.g. to point at another host.
    pub fn with_client(mut self, client: SearchClient) -> Self {
        self.client = client;
        self
    }

    pub fn client(&self) -> &SearchClient {
        &self.client
    }

    pub fn control(&self) -> &C {
        &self.control
    }

    pub fn in_flight(&self) -> Option<&InFlight> {
        self.in_flight.as_ref()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The button was tapped: search for the default terms.
    pub fn activate(&mut self) -> Activation {
        self.search(&SearchQuery::default())
    }

    /// Submit a search for `query` unless one is already outstanding.
    pub fn search(&mut self, query: &SearchQuery) -> Activation {
        if let Some(in_flight) = &self.in_flight {
            warn!(request = %in_flight.id, "search already in flight, ignoring activation");
            return Activation::Busy;
        }

        let request = match self.client.build_search(query) {
            Ok(request) => request,
            Err(e) => {
                warn!(terms = %query, error = %e, "could not build search request");
                return Activation::Aborted;
            }
        };

        self.control.set_enabled(false);
        let id = Uuid::new_v4();
        self.submit(id, request);
        Activation::Submitted(id)
    }

    fn submit(&mut self, id: Uuid, request: HttpRequest) {
        debug!(request = %id, url = %request.url, "submitting search");
        self.in_flight = Some(InFlight {
            id,
            url: request.url.clone(),
        });

        let reports = self.reports_tx.clone();
        let completion = Completion::new(move |outcome| {
            let report = Report::from_outcome(id, outcome);
            report.log();
            // The receiver lives as long as the trigger; after that nobody
            // is left to finalize.
            let _ = reports.send(report);
        });
        self.transport.send(request, completion);
    }

    /// Apply every report that has arrived so far, without waiting.
    pub fn run_pending(&mut self) -> Vec<Report> {
        let mut applied = Vec::new();
        while let Ok(report) = self.reports_rx.try_recv() {
            self.finish(&report);
            applied.push(report);
        }
        applied
    }

    /// Wait for the outstanding request and apply its report.
    ///
    /// Returns `None` immediately when idle.
    pub async fn settle(&mut self) -> Option<Report> {
        while self.in_flight.is_some() {
            let report = self.reports_rx.recv().await?;
            if self.finish(&report) {
                return Some(report);
            }
        }
        None
    }

    /// Clear the handle and re-enable the control if `report` belongs to
    /// the outstanding request.
    fn finish(&mut self, report: &Report) -> bool {
        match &self.in_flight {
            Some(in_flight) if in_flight.id == report.id => {
                self.in_flight = None;
                self.control.set_enabled(true);
                true
            }
            _ => {
                warn!(request = %report.id, "dropping report for unknown request");
                false
            }
        }
    }
}
