//! Extraction latency statistics.
//!
//! Feature-gated and runtime-toggled to ensure zero overhead when disabled.
//!
//! # Usage
//!
//! ```ignore
//! use marching_cubes::metrics::{ExtractionMetrics, COLLECT_METRICS};
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! // Record each extraction:
//! metrics.record_extraction(timing_us, triangle_count);
//! ```

use std::collections::VecDeque;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;
use std::sync::atomic::AtomicBool;

/// Runtime toggle for metrics collection.
/// Set to false to disable metrics gathering at runtime.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
    #[cfg(feature = "metrics")]
    {
        COLLECT_METRICS.load(Ordering::Relaxed)
    }
    #[cfg(not(feature = "metrics"))]
    {
        false
    }
}

/// Fixed-capacity history, oldest value evicted first.
#[derive(Debug, Clone)]
pub struct RollingWindow<T> {
    buffer: VecDeque<T>,
    capacity: usize,
}

impl<T> RollingWindow<T> {
    /// A capacity of 0 is bumped to 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Push a new value, evicting the oldest if at capacity.
    pub fn push(&mut self, value: T) {
        if self.buffer.len() >= self.capacity {
            self.buffer.pop_front();
        }
        self.buffer.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Iterate over values (oldest to newest).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buffer.iter()
    }

    /// Get the most recent value.
    pub fn last(&self) -> Option<&T> {
        self.buffer.back()
    }
}

impl<T: Copy + Default + std::ops::Add<Output = T>> RollingWindow<T> {
    pub fn sum(&self) -> T {
        self.iter().copied().fold(T::default(), |acc, x| acc + x)
    }
}

impl RollingWindow<u64> {
    /// Mean of the window, 0.0 when empty.
    pub fn average(&self) -> f64 {
        if self.buffer.is_empty() {
            0.0
        } else {
            self.sum() as f64 / self.buffer.len() as f64
        }
    }

    pub fn min_max(&self) -> Option<(u64, u64)> {
        let min = self.iter().min()?;
        let max = self.iter().max()?;
        Some((*min, *max))
    }
}

impl Default for RollingWindow<u64> {
    fn default() -> Self {
        Self::new(DEFAULT_TIMING_WINDOW)
    }
}

/// Default latency history length (about two seconds of frames at 60fps).
pub const DEFAULT_TIMING_WINDOW: usize = 128;

/// Per-session extraction statistics.
#[derive(Debug, Clone)]
pub struct ExtractionMetrics {
    /// Rolling window of extraction times in microseconds.
    pub extraction_timings: RollingWindow<u64>,

    /// Last extraction time in microseconds.
    pub last_extraction_us: u64,
    /// Triangle count of the last extraction.
    pub last_triangle_count: u32,
    /// Total extractions this session.
    pub total_extractions: u64,
}

impl Default for ExtractionMetrics {
    fn default() -> Self {
        Self::with_window(DEFAULT_TIMING_WINDOW)
    }
}

impl ExtractionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metrics keeping the last `window` extraction timings.
    pub fn with_window(window: usize) -> Self {
        Self {
            extraction_timings: RollingWindow::new(window),
            last_extraction_us: 0,
            last_triangle_count: 0,
            total_extractions: 0,
        }
    }

    /// Reset the timing history and last-frame snapshot.
    pub fn reset(&mut self) {
        self.extraction_timings.clear();
        self.last_extraction_us = 0;
        self.last_triangle_count = 0;
        // Don't reset total_extractions - it's cumulative
    }

    /// Record one completed extraction.
    pub fn record_extraction(&mut self, timing_us: u64, triangle_count: u32) {
        if !is_enabled() {
            return;
        }

        self.extraction_timings.push(timing_us);
        self.last_extraction_us = timing_us;
        self.last_triangle_count = triangle_count;
        self.total_extractions += 1;
    }

    /// Average extraction time over the window, in microseconds.
    pub fn avg_extraction_us(&self) -> f64 {
        self.extraction_timings.average()
    }
}
