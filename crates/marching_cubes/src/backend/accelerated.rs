//! Throughput-oriented backend.
//!
//! Differs from the reference sweep in three ways:
//!
//! 1. **Byte classification.** A 256-entry table maps every possible sample
//!    byte to its above/below bit for this call's isovalue, and the whole
//!    volume is classified in one linear pass into a reusable flag buffer.
//! 2. **Sliding configuration.** Walking a row along X, the four `x + 1`
//!    corners of one cell are the four `x` corners of the next, so each step
//!    shifts the previous configuration and loads only four flags:
//!
//!    ```text
//!    config = ((config >> 1) & 0b0101_0101) | flags(x + 1 column)
//!              └── odd bits (x + 1) become even bits (x)
//!    ```
//!
//! 3. **Lazy corner loads.** Normalized corner values are read only for mixed
//!    cells, through a precomputed byte-to-`f32` table.
//!
//! The flag table is built from the same `f64` [`is_above`] test as the
//! reference classifier and mixed cells go through the same emission
//! routine, so output matches the reference triangle for triangle.

use crate::extractor::classify::{is_uniform, CellCorners};
use crate::extractor::emit_cell;
use crate::types::TriangleBuffer;
use crate::volume::{is_above, normalize, Volume};

use super::{BackendKind, IsosurfaceBackend};

/// Marching Cubes with table classification and a sliding configuration
/// index. Keeps its scratch buffer between calls.
#[derive(Clone, Debug)]
pub struct AcceleratedBackend {
  normalized: [f32; 256],
  above: Vec<u8>,
}

impl Default for AcceleratedBackend {
  fn default() -> Self {
    Self::new()
  }
}

impl AcceleratedBackend {
  pub fn new() -> Self {
    Self {
      normalized: std::array::from_fn(|s| normalize(s as u8)),
      above: Vec::new(),
    }
  }

  /// Fill `self.above` with one 0/1 flag per sample.
  ///
  /// Returns the number of samples above the isovalue.
  fn classify_samples(&mut self, samples: &[u8], isovalue: f64) -> usize {
    let flags: [u8; 256] = std::array::from_fn(|s| is_above(s as u8, isovalue) as u8);

    self.above.clear();
    self
      .above
      .extend(samples.iter().map(|&sample| flags[sample as usize]));
    self.above.iter().map(|&flag| flag as usize).sum()
  }
}

impl IsosurfaceBackend for AcceleratedBackend {
  fn name(&self) -> &'static str {
    BackendKind::Accelerated.name()
  }

  fn extract_into(&mut self, volume: &Volume<'_>, isovalue: f64, output: &mut TriangleBuffer) {
    output.clear();

    let iso = isovalue as f32;
    let samples = volume.samples();
    let above_count = self.classify_samples(samples, isovalue);
    if above_count == 0 || above_count == samples.len() {
      return;
    }

    let [nx, ny, _] = volume.dims();
    let slice = nx * ny;
    let [cx, cy, cz] = volume.cell_dims();
    let offsets = volume.corner_offsets();
    let above = &self.above;
    let normalized = &self.normalized;

    for k in 0..cz {
      for j in 0..cy {
        // Sample rows holding corners (y, z) = (0,0), (1,0), (0,1), (1,1)
        let r0 = volume.linear_index(0, j, k);
        let r1 = r0 + nx;
        let r2 = r0 + slice;
        let r3 = r2 + nx;

        // Seed with the x = 0 column in the odd bits so the first shift
        // moves it into place.
        let mut config = (above[r0] << 1) | (above[r1] << 3) | (above[r2] << 5) | (above[r3] << 7);

        for i in 0..cx {
          let x = i + 1;
          config = ((config >> 1) & 0b0101_0101)
            | (above[r0 + x] << 1)
            | (above[r1 + x] << 3)
            | (above[r2 + x] << 5)
            | (above[r3 + x] << 7);

          if is_uniform(config) {
            continue;
          }

          let base = r0 + i;
          let cell = CellCorners {
            config,
            values: std::array::from_fn(|corner| {
              normalized[samples[base + offsets[corner]] as usize]
            }),
          };
          emit_cell(&cell, [i, j, k], iso, output);
        }
      }
    }
  }
}

#[cfg(test)]
#[path = "accelerated_test.rs"]
mod accelerated_test;
