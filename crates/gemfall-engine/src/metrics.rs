//! Per-pass metrics for detection passes.

use std::time::Duration;

/// Counters and timing collected during one detection pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PassMetrics {
    /// Wall-clock time for the whole pass, in microseconds.
    pub total_us: u64,
    /// Cells asked whether they are in a run.
    pub triggers: usize,
    /// Chains started this pass.
    pub chains_started: usize,
    /// Cells claimed across all chains.
    pub cells_claimed: usize,
    /// Claim requests the ledger refused.
    pub claims_refused: usize,
    /// Tiles removed from the board.
    pub tiles_cleared: usize,
}

impl PassMetrics {
    /// Record elapsed wall-clock time, saturating at `u64::MAX` µs.
    pub fn record_elapsed(&mut self, elapsed: Duration) {
        self.total_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
    }
}
