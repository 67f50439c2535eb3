//! Metric helpers for `sms_udh`.
//!
//! This module defines metric names and simple helper functions wrapping the
//! [`metrics`](https://docs.rs/metrics) crate. With the `metrics` feature
//! disabled the helpers compile to no-ops.

#[cfg(feature = "metrics")]
use metrics::counter;

/// Name of the counter tracking parts offered to a fragment store.
pub const PARTS_TOTAL: &str = "sms_udh_parts_total";
/// Name of the counter tracking sets that became complete.
pub const SETS_COMPLETED: &str = "sms_udh_sets_completed_total";

/// Outcome of offering a part to a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartOutcome {
    /// The part was parsed, decoded, and stored.
    Accepted,
    /// Parsing, decoding, or grouping failed.
    Rejected,
}

impl PartOutcome {
    #[cfg_attr(not(feature = "metrics"), allow(dead_code))]
    fn as_str(self) -> &'static str {
        match self {
            PartOutcome::Accepted => "accepted",
            PartOutcome::Rejected => "rejected",
        }
    }
}

/// Record a part offered to a store.
pub fn inc_parts(outcome: PartOutcome) {
    #[cfg(feature = "metrics")]
    counter!(PARTS_TOTAL, "outcome" => outcome.as_str()).increment(1);
    #[cfg(not(feature = "metrics"))]
    let _ = outcome;
}

/// Record a set reaching completion.
pub fn inc_completed_sets() {
    #[cfg(feature = "metrics")]
    counter!(SETS_COMPLETED).increment(1);
}
