use crate::{
    coerce::Conversion,
    error::CoercionReason,
    obs::{CoercionEvent, CoercionSink},
};
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    sync::atomic::{AtomicU64, Ordering},
};

const CONVERSIONS: usize = Conversion::ALL.len();
const REASONS: usize = CoercionReason::ALL.len();

///
/// CoercionMetrics
///
/// Lock-free counting sink. Share it behind an `Arc` to read counters
/// while engines keep recording.
///

#[derive(Debug, Default)]
pub struct CoercionMetrics {
    passthrough: AtomicU64,
    null_resolved: AtomicU64,
    converted: [AtomicU64; CONVERSIONS],
    empty_array_retyped: AtomicU64,
    rejected: [AtomicU64; REASONS],
    verification_failed: AtomicU64,
}

impl CoercionMetrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Point-in-time copy of every non-zero counter.
    #[must_use]
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            passthrough: self.passthrough.load(Ordering::Relaxed),
            null_resolved: self.null_resolved.load(Ordering::Relaxed),
            converted: labelled(Conversion::ALL.iter().map(|c| c.label()), &self.converted),
            empty_array_retyped: self.empty_array_retyped.load(Ordering::Relaxed),
            rejected: labelled(CoercionReason::ALL.iter().map(|r| r.label()), &self.rejected),
            verification_failed: self.verification_failed.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters (useful in tests).
    pub fn reset(&self) {
        let counters = [
            &self.passthrough,
            &self.null_resolved,
            &self.empty_array_retyped,
            &self.verification_failed,
        ];

        for counter in counters
            .into_iter()
            .chain(&self.converted)
            .chain(&self.rejected)
        {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

impl CoercionSink for CoercionMetrics {
    fn record(&self, event: CoercionEvent) {
        let counter = match event {
            CoercionEvent::Passthrough => &self.passthrough,
            CoercionEvent::NullResolved => &self.null_resolved,
            CoercionEvent::Converted { conversion } => &self.converted[conversion as usize],
            CoercionEvent::EmptyArrayRetyped => &self.empty_array_retyped,
            CoercionEvent::Rejected { reason } => &self.rejected[reason as usize],
            CoercionEvent::VerificationFailed => &self.verification_failed,
        };

        counter.fetch_add(1, Ordering::Relaxed);
    }
}

// Non-zero counters keyed by label.
fn labelled(
    labels: impl Iterator<Item = &'static str>,
    counters: &[AtomicU64],
) -> BTreeMap<String, u64> {
    labels
        .zip(counters)
        .map(|(label, counter)| (label.to_string(), counter.load(Ordering::Relaxed)))
        .filter(|(_, count)| *count > 0)
        .collect()
}

///
/// MetricsSnapshot
///
/// Serializable counters keyed by conversion and reason label.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    pub passthrough: u64,
    pub null_resolved: u64,
    pub converted: BTreeMap<String, u64>,
    pub empty_array_retyped: u64,
    pub rejected: BTreeMap<String, u64>,
    pub verification_failed: u64,
}

impl MetricsSnapshot {
    /// Calls that produced a value.
    #[must_use]
    pub fn accepted(&self) -> u64 {
        self.passthrough
            .saturating_add(self.null_resolved)
            .saturating_add(self.empty_array_retyped)
            .saturating_add(self.converted.values().sum())
    }

    #[must_use]
    pub fn rejected_total(&self) -> u64 {
        self.rejected.values().sum()
    }
}

///
/// TESTS
///
