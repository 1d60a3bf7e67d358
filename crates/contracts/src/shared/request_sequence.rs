//! Latest-request-wins guard for view state.
//!
//! Superseded fetches still run to completion on the wire; their results are
//! simply not committed. Each fetch takes a ticket, and only the most recent
//! ticket may write.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request; every earlier ticket becomes stale
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let seq = RequestSequence::new();
        let first = seq.begin();
        assert!(seq.is_current(first));
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_clones_share_the_counter() {
        let seq = RequestSequence::new();
        let other = seq.clone();
        let ticket = seq.begin();
        other.begin();
        assert!(!seq.is_current(ticket));
    }

    #[test]
    fn test_response_finishing_after_newer_request_is_stale() {
        let seq = RequestSequence::new();
        let slow = seq.begin();
        let fast = seq.begin();
        // fast answers first, then slow comes back
        assert!(seq.is_current(fast));
        assert!(!seq.is_current(slow));
    }
}
