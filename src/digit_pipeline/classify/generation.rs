//! Stale-result discarding.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request counter for discarding stale inference results.
///
/// The pipeline itself is stateless per invocation, so a result that
/// completes after the user has already cleared the canvas and started a new
/// request would otherwise be displayed as if it were current. A caller
/// takes a ticket with [`begin`](Self::begin) before each invocation and
/// checks [`is_current`](Self::is_current) when the result arrives; any
/// ticket older than the latest is stale and should be dropped.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: AtomicU64,
}

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new request, invalidating every earlier ticket.
    pub fn begin(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Whether `ticket` still belongs to the latest request.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::Relaxed) == ticket
    }
}
