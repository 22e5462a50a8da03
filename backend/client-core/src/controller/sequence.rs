//! Request sequencing for overlapping fetches.
//!
//! Requests are never cancelled. Each trigger takes a ticket, and a finished
//! request may only touch the UI if its ticket is still the newest one.

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl Display for RequestTicket {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "#{}", self.0)
    }
}

#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket. Tickets start at 1 and only increase.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Most recently issued ticket, if any.
    pub fn latest(&self) -> Option<RequestTicket> {
        match self.latest.load(Ordering::SeqCst) {
            0 => None,
            id => Some(RequestTicket(id)),
        }
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}
