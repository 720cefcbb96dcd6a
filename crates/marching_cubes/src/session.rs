//! Extraction session: the per-frame control surface a render loop drives.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ IsosurfaceSession                                                    │
//! │                                                                      │
//! │  set_volume(dims, samples) ──► OwnedVolume (validated)  ──┐ stale    │
//! │  set_backend(kind)         ──► Box<dyn IsosurfaceBackend> │          │
//! │                                                           ▼          │
//! │  update(isovalue) ── unchanged & fresh? ──► Ok(None)                 │
//! │        │                                                             │
//! │        └─ changed or stale ──► timed extract_into ──► Ok(Some(..))   │
//! │                                      │                               │
//! │                                      ▼                               │
//! │                             triangles(): &TriangleBuffer             │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Switching backends does not by itself re-extract; the next isovalue change
//! or volume load picks up the new backend.

use std::fmt;
use std::time::Duration;

use tracing::{debug, info_span, trace};
use web_time::Instant;

use crate::backend::{BackendKind, IsosurfaceBackend};
use crate::error::ExtractError;
use crate::metrics::{ExtractionMetrics, DEFAULT_TIMING_WINDOW};
use crate::types::TriangleBuffer;
use crate::volume::OwnedVolume;

/// Session configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
  /// Drive the accelerated backend instead of the reference sweep.
  pub use_accelerated: bool,

  /// Number of extraction timings kept for averaging.
  pub timing_window: usize,
}

impl Default for SessionConfig {
  fn default() -> Self {
    Self {
      use_accelerated: true,
      timing_window: DEFAULT_TIMING_WINDOW,
    }
  }
}

impl SessionConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_use_accelerated(mut self, use_accelerated: bool) -> Self {
    self.use_accelerated = use_accelerated;
    self
  }

  pub fn with_timing_window(mut self, timing_window: usize) -> Self {
    self.timing_window = timing_window;
    self
  }

  /// Backend selected by `use_accelerated`.
  pub fn backend(&self) -> BackendKind {
    BackendKind::from_use_accelerated(self.use_accelerated)
  }
}

/// Outcome of one extraction, ready for a status line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtractionReport {
  pub backend: BackendKind,
  pub isovalue: f64,
  pub triangle_count: u32,
  pub elapsed: Duration,
}

impl ExtractionReport {
  /// Wall-clock extraction time in milliseconds.
  pub fn elapsed_ms(&self) -> f64 {
    self.elapsed.as_secs_f64() * 1000.0
  }
}

impl fmt::Display for ExtractionReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "Isosurface contains {} triangles, computed in {:.2} ms",
      self.triangle_count,
      self.elapsed_ms()
    )
  }
}

/// Owns a volume, a backend and the current triangle buffer, and re-extracts
/// only when the isovalue or the volume changes.
pub struct IsosurfaceSession {
  config: SessionConfig,
  kind: BackendKind,
  backend: Box<dyn IsosurfaceBackend>,
  volume: Option<OwnedVolume>,
  triangles: TriangleBuffer,
  /// Isovalue of the last extraction, compared bitwise.
  last_isovalue: Option<f64>,
  stale: bool,
  metrics: ExtractionMetrics,
}

impl Default for IsosurfaceSession {
  fn default() -> Self {
    Self::new(SessionConfig::default())
  }
}

impl IsosurfaceSession {
  pub fn new(config: SessionConfig) -> Self {
    let kind = config.backend();
    Self {
      config,
      kind,
      backend: kind.create(),
      volume: None,
      triangles: TriangleBuffer::new(),
      last_isovalue: None,
      stale: true,
      metrics: ExtractionMetrics::with_window(config.timing_window),
    }
  }

  pub fn config(&self) -> &SessionConfig {
    &self.config
  }

  /// Validate and take ownership of a new volume.
  ///
  /// On error the previous volume and triangles are kept.
  pub fn set_volume(&mut self, dims: [u32; 3], samples: Vec<u8>) -> Result<(), ExtractError> {
    let volume = OwnedVolume::new(dims, samples)?;
    debug!(?dims, samples = volume.view().samples().len(), "volume loaded");
    self.volume = Some(volume);
    self.stale = true;
    Ok(())
  }

  pub fn volume(&self) -> Option<&OwnedVolume> {
    self.volume.as_ref()
  }

  /// Drop the volume and the current surface.
  pub fn clear_volume(&mut self) -> Option<OwnedVolume> {
    self.triangles.clear();
    self.last_isovalue = None;
    self.stale = true;
    self.volume.take()
  }

  /// Select the backend used by the next extraction.
  pub fn set_backend(&mut self, kind: BackendKind) {
    if kind == self.kind {
      return;
    }
    debug!(from = %self.kind, to = %kind, "backend switched");
    self.kind = kind;
    self.config.use_accelerated = kind == BackendKind::Accelerated;
    self.backend = kind.create();
  }

  pub fn backend(&self) -> BackendKind {
    self.kind
  }

  /// Re-extract if `isovalue` differs from the last extraction or a new
  /// volume was loaded since.
  ///
  /// Returns `Ok(None)` when the current surface is still valid and
  /// [`ExtractError::NoVolume`] before any volume is loaded.
  pub fn update(&mut self, isovalue: f64) -> Result<Option<ExtractionReport>, ExtractError> {
    let unchanged = self.last_isovalue.map(f64::to_bits) == Some(isovalue.to_bits());
    if unchanged && !self.stale && self.volume.is_some() {
      trace!(isovalue, "surface up to date");
      return Ok(None);
    }
    self.extract(isovalue).map(Some)
  }

  /// Extract unconditionally.
  pub fn extract(&mut self, isovalue: f64) -> Result<ExtractionReport, ExtractError> {
    let volume = self.volume.as_ref().ok_or(ExtractError::NoVolume)?;

    let span = info_span!("extract", backend = %self.kind, isovalue);
    let _enter = span.enter();

    let start = Instant::now();
    self
      .backend
      .extract_into(&volume.view(), isovalue, &mut self.triangles);
    let elapsed = start.elapsed();

    let report = ExtractionReport {
      backend: self.kind,
      isovalue,
      triangle_count: self.triangles.triangle_count(),
      elapsed,
    };
    self.last_isovalue = Some(isovalue);
    self.stale = false;
    self
      .metrics
      .record_extraction(elapsed.as_micros() as u64, report.triangle_count);

    debug!(
      triangles = report.triangle_count,
      elapsed_us = elapsed.as_micros() as u64,
      "extraction complete"
    );
    Ok(report)
  }

  /// Current surface, replaced wholesale by every extraction.
  pub fn triangles(&self) -> &TriangleBuffer {
    &self.triangles
  }

  pub fn last_isovalue(&self) -> Option<f64> {
    self.last_isovalue
  }

  pub fn metrics(&self) -> &ExtractionMetrics {
    &self.metrics
  }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
