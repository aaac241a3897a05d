//! Lookup sequencing.
//!
//! A view may fire a new search before the previous one answers. Each lookup
//! carries a ticket; only the newest ticket's response is applied, so a slow
//! early response cannot overwrite a later one.

use discover_geocode::{GeocodeQuery, GeocodeResult, Geocoder};

/// Ticket identifying one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SearchTicket(u64);

/// Issues tickets and tracks the newest one.
#[derive(Debug, Clone, Default)]
pub struct SearchSequence {
    latest: u64,
}

impl SearchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket, superseding all earlier ones.
    pub fn issue(&mut self) -> SearchTicket {
        self.latest += 1;
        SearchTicket(self.latest)
    }

    /// Whether `ticket` is the newest issued.
    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// A validated lookup waiting to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    pub ticket: SearchTicket,
    pub query: GeocodeQuery,
}

impl PendingLookup {
    /// Send the lookup. Holds no view state, so other interactions can
    /// proceed while it is in flight.
    pub async fn run<G: Geocoder>(self, geocoder: &G) -> CompletedLookup {
        let outcome = geocoder.geocode(&self.query).await;
        CompletedLookup {
            ticket: self.ticket,
            query: self.query,
            outcome,
        }
    }
}

/// A lookup whose response has arrived.
#[derive(Debug)]
pub struct CompletedLookup {
    pub ticket: SearchTicket,
    pub query: GeocodeQuery,
    pub outcome: discover_geocode::Result<Vec<GeocodeResult>>,
}
