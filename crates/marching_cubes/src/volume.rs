//! Read-only views over byte density grids.
//!
//! # Memory Layout
//!
//! ```text
//! index = (k * ny + j) * nx + i
//!
//! Address:  0      1      2   ...  nx-1     nx     ...  nx*ny  ...
//! Content: [0,0,0][1,0,0][2,0,0]...[nx-1,0,0][0,1,0]...[0,0,1]...
//!          └──────────── X ────────────────┘
//!
//! X is the minor axis (stride 1), Y the middle (stride nx), Z the major
//! (stride nx*ny).
//! ```
//!
//! # Cell Corners
//!
//! ```text
//!       6──────7         Corners (binary ZYX):
//!      /│     /│           0=(0,0,0)  1=(1,0,0)  2=(0,1,0)  3=(1,1,0)
//!     4─┼────5 │           4=(0,0,1)  5=(1,0,1)  6=(0,1,1)  7=(1,1,1)
//!     │ 2────┼─3
//!     │/     │/          +Y
//!     0──────1            │  +Z
//!                         │ /
//!                         └───+X
//! ```

use crate::error::{ExtractError, ShapeViolation};

/// Normalize a raw density byte into `[0, 1]`.
///
/// Every interpolation in the crate goes through this function so that
/// alternate backends see bit-identical corner values.
#[inline(always)]
pub fn normalize(sample: u8) -> f32 {
  sample as f32 / 255.0
}

/// Whether a raw density byte lies strictly above `isovalue`.
///
/// Compared in `f64` so the isovalue is never rounded before the test; an
/// isovalue just below a sample value must still count that sample as above.
#[inline(always)]
pub fn is_above(sample: u8, isovalue: f64) -> bool {
  sample as f64 / 255.0 > isovalue
}

/// Immutable view over a 3-D grid of one-byte density samples.
///
/// Constructing a `Volume` validates its shape; every other method assumes a
/// well-formed grid.
#[derive(Clone, Copy, Debug)]
pub struct Volume<'a> {
  dims: [usize; 3],
  samples: &'a [u8],
}

impl<'a> Volume<'a> {
  /// Wrap `samples` as a grid of `dims = [nx, ny, nz]` samples.
  ///
  /// Fails with [`ExtractError::InvalidVolumeShape`] if any axis has fewer
  /// than 2 samples or `samples.len() != nx * ny * nz`.
  pub fn new(dims: [u32; 3], samples: &'a [u8]) -> Result<Self, ExtractError> {
    let shape_error = |reason| ExtractError::InvalidVolumeShape {
      dims,
      sample_count: samples.len(),
      reason,
    };

    for (axis, &extent) in dims.iter().enumerate() {
      if extent < 2 {
        return Err(shape_error(ShapeViolation::AxisTooShort { axis, extent }));
      }
    }

    let expected = dims
      .iter()
      .try_fold(1usize, |acc, &extent| acc.checked_mul(extent as usize))
      .ok_or_else(|| shape_error(ShapeViolation::SizeOverflow))?;

    if samples.len() != expected {
      return Err(shape_error(ShapeViolation::SampleCountMismatch { expected }));
    }

    Ok(Self {
      dims: dims.map(|extent| extent as usize),
      samples,
    })
  }

  /// Grid dimensions `[nx, ny, nz]`.
  #[inline]
  pub fn dims(&self) -> [usize; 3] {
    self.dims
  }

  /// Raw samples in `(k * ny + j) * nx + i` order.
  #[inline]
  pub fn samples(&self) -> &'a [u8] {
    self.samples
  }

  /// Number of cells along each axis (`dims - 1`).
  #[inline]
  pub fn cell_dims(&self) -> [usize; 3] {
    self.dims.map(|extent| extent - 1)
  }

  /// Total number of cells in the grid.
  pub fn cell_count(&self) -> usize {
    self.cell_dims().iter().product()
  }

  /// Linear sample index of grid coordinate `(i, j, k)`.
  #[inline(always)]
  pub fn linear_index(&self, i: usize, j: usize, k: usize) -> usize {
    let [nx, ny, _] = self.dims;
    (k * ny + j) * nx + i
  }

  /// Sample index offsets of the 8 cell corners relative to the cell origin.
  ///
  /// Corner `v = (dk * 2 + dj) * 2 + di` sits at
  /// `origin + dk * nx * ny + dj * nx + di`.
  pub fn corner_offsets(&self) -> [usize; 8] {
    let [nx, ny, _] = self.dims;
    let slice = nx * ny;
    [
      0,              // (0,0,0)
      1,              // (1,0,0)
      nx,             // (0,1,0)
      nx + 1,         // (1,1,0)
      slice,          // (0,0,1)
      slice + 1,      // (1,0,1)
      slice + nx,     // (0,1,1)
      slice + nx + 1, // (1,1,1)
    ]
  }

  /// Normalized density at grid coordinate `[i, j, k]`.
  ///
  /// Returns [`ExtractError::OutOfBounds`] outside
  /// `[0, nx) x [0, ny) x [0, nz)`. The sweep never relies on this check; it
  /// indexes through [`Volume::value_at`] with offsets that stay in range by
  /// construction.
  pub fn sample(&self, coord: [usize; 3]) -> Result<f32, ExtractError> {
    let [i, j, k] = coord;
    let [nx, ny, nz] = self.dims;
    if i >= nx || j >= ny || k >= nz {
      return Err(ExtractError::OutOfBounds {
        coord,
        dims: self.dims,
      });
    }
    Ok(self.value_at(self.linear_index(i, j, k)))
  }

  /// Normalized density at a linear sample index.
  #[inline(always)]
  pub(crate) fn value_at(&self, index: usize) -> f32 {
    normalize(self.samples[index])
  }

  /// Raw density byte at a linear sample index.
  #[inline(always)]
  pub(crate) fn byte_at(&self, index: usize) -> u8 {
    self.samples[index]
  }
}

/// Volume that owns its sample buffer.
///
/// Validated once on construction, then lent out as a [`Volume`] view for every
/// extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedVolume {
  dims: [usize; 3],
  samples: Vec<u8>,
}

impl OwnedVolume {
  pub fn new(dims: [u32; 3], samples: Vec<u8>) -> Result<Self, ExtractError> {
    let dims = Volume::new(dims, &samples)?.dims();
    Ok(Self { dims, samples })
  }

  /// Sample counts along X, Y and Z, in the same form as [`Volume::dims`].
  pub fn dims(&self) -> [usize; 3] {
    self.dims
  }

  /// Borrow as a read-only view.
  pub fn view(&self) -> Volume<'_> {
    Volume {
      dims: self.dims,
      samples: &self.samples,
    }
  }

  /// Give the sample buffer back to the caller.
  pub fn into_samples(self) -> Vec<u8> {
    self.samples
  }
}

#[cfg(test)]
#[path = "volume_test.rs"]
mod volume_test;
