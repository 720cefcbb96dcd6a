//! Error types for volume validation and extraction.

use thiserror::Error;

/// Reason a volume's dimensions and sample buffer do not describe a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ShapeViolation {
  /// An axis needs at least two samples to contain a single cell.
  #[error("axis {axis} has extent {extent}, need at least 2")]
  AxisTooShort { axis: usize, extent: u32 },

  /// Sample buffer length differs from `nx * ny * nz`.
  #[error("expected {expected} samples")]
  SampleCountMismatch { expected: usize },

  /// `nx * ny * nz` does not fit in `usize`.
  #[error("sample count overflows usize")]
  SizeOverflow,
}

/// Errors reported by the extraction API.
///
/// Shape errors are always raised before any cell is visited, so a failed call
/// never leaves a partially written triangle buffer behind.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ExtractError {
  #[error("invalid volume shape {dims:?} with {sample_count} samples: {reason}")]
  InvalidVolumeShape {
    dims: [u32; 3],
    sample_count: usize,
    reason: ShapeViolation,
  },

  #[error("sample coordinate {coord:?} is outside volume {dims:?}")]
  OutOfBounds { coord: [usize; 3], dims: [usize; 3] },

  #[error("no volume loaded")]
  NoVolume,
}
