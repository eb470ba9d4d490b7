//! Codec metrics for fixrow
//!
//! - Counters only
//! - Monotonic increase
//! - Thread-safe, relaxed ordering

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Record codec counters
#[derive(Debug, Default)]
pub struct CodecMetrics {
    /// Tuples accepted by verification
    records_verified: AtomicU64,
    /// Tuples rejected by verification
    records_rejected: AtomicU64,
    /// Records encoded
    records_encoded: AtomicU64,
    /// Total bytes produced by encoding
    bytes_encoded: AtomicU64,
    /// Records decoded
    records_decoded: AtomicU64,
    /// Decode attempts that failed
    decode_failures: AtomicU64,
}

impl CodecMetrics {
    /// Create a new registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_verified(&self) {
        self.records_verified.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_rejected(&self) {
        self.records_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Counts one encoded record of `bytes` bytes
    pub fn record_encoded(&self, bytes: usize) {
        self.records_encoded.fetch_add(1, Ordering::Relaxed);
        self.bytes_encoded.fetch_add(bytes as u64, Ordering::Relaxed);
    }

    pub fn increment_decoded(&self) {
        self.records_decoded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn increment_decode_failures(&self) {
        self.decode_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            records_verified: self.records_verified.load(Ordering::Relaxed),
            records_rejected: self.records_rejected.load(Ordering::Relaxed),
            records_encoded: self.records_encoded.load(Ordering::Relaxed),
            bytes_encoded: self.bytes_encoded.load(Ordering::Relaxed),
            records_decoded: self.records_decoded.load(Ordering::Relaxed),
            decode_failures: self.decode_failures.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`CodecMetrics`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub records_verified: u64,
    pub records_rejected: u64,
    pub records_encoded: u64,
    pub bytes_encoded: u64,
    pub records_decoded: u64,
    pub decode_failures: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(CodecMetrics::new().snapshot(), MetricsSnapshot::default());
    }

    #[test]
    fn test_counters() {
        let metrics = CodecMetrics::new();
        metrics.increment_verified();
        metrics.increment_verified();
        metrics.increment_rejected();
        metrics.record_encoded(8);
        metrics.record_encoded(8);
        metrics.increment_decoded();
        metrics.increment_decode_failures();

        let snap = metrics.snapshot();
        assert_eq!(snap.records_verified, 2);
        assert_eq!(snap.records_rejected, 1);
        assert_eq!(snap.records_encoded, 2);
        assert_eq!(snap.bytes_encoded, 16);
        assert_eq!(snap.records_decoded, 1);
        assert_eq!(snap.decode_failures, 1);
    }

    #[test]
    fn test_concurrent_increments() {
        let metrics = Arc::new(CodecMetrics::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let metrics = Arc::clone(&metrics);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        metrics.record_encoded(4);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snap = metrics.snapshot();
        assert_eq!(snap.records_encoded, 4000);
        assert_eq!(snap.bytes_encoded, 16000);
    }

    #[test]
    fn test_snapshot_serializes() {
        let metrics = CodecMetrics::new();
        metrics.increment_rejected();
        let json = serde_json::to_value(metrics.snapshot()).unwrap();
        assert_eq!(json["records_rejected"], 1);
    }
}
