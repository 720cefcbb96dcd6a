//! Cell classification against the isovalue.
//!
//! The configuration index is an 8-bit value where each bit indicates whether
//! a corner of the 2x2x2 cell lies strictly above the isovalue.

use crate::tables::{self, EDGE_TABLE, TRIANGLE_COUNT};
use crate::volume::{is_above, normalize, Volume};

/// A classified cell: configuration index plus the normalized corner values
/// needed for interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellCorners {
  pub config: u8,
  pub values: [f32; 8],
}

impl CellCorners {
  /// True for all-above or all-below cells, which emit no geometry.
  #[inline(always)]
  pub fn is_uniform(&self) -> bool {
    is_uniform(self.config)
  }

  /// Edges crossed by the isosurface in this cell.
  #[inline]
  pub fn edge_mask(&self) -> u16 {
    EDGE_TABLE[self.config as usize]
  }

  pub fn triangle_count(&self) -> usize {
    TRIANGLE_COUNT[self.config as usize] as usize
  }

  /// Edge triples of the triangles this cell emits, in table order.
  #[inline]
  pub fn triangles(&self) -> impl Iterator<Item = [usize; 3]> {
    tables::triangles(self.config)
  }
}

/// `config == 0x00 || config == 0xFF` as a single comparison.
#[inline(always)]
pub fn is_uniform(config: u8) -> bool {
  config.wrapping_add(1) <= 1
}

/// Build the configuration index from 8 raw corner samples.
///
/// Bit `v` is set iff `samples[v] / 255 > isovalue`, compared in `f64`.
/// Ties count as below.
/// - Bit 0: corner (0,0,0)
/// - Bit 1: corner (1,0,0)
/// - Bit 2: corner (0,1,0)
/// - Bit 3: corner (1,1,0)
/// - Bit 4: corner (0,0,1)
/// - Bit 5: corner (1,0,1)
/// - Bit 6: corner (0,1,1)
/// - Bit 7: corner (1,1,1)
#[inline]
pub fn build(samples: &[u8; 8], isovalue: f64) -> u8 {
  let mut config = 0u8;
  for (corner, &sample) in samples.iter().enumerate() {
    config |= (is_above(sample, isovalue) as u8) << corner;
  }
  config
}

/// Classify the cell whose minimum corner is `origin = [i, j, k]`.
///
/// `origin` must name a cell, i.e. each component is below the matching entry
/// of [`Volume::cell_dims`].
pub fn classify(volume: &Volume<'_>, origin: [usize; 3], isovalue: f64) -> CellCorners {
  let [i, j, k] = origin;
  let base = volume.linear_index(i, j, k);
  classify_at(volume, base, &volume.corner_offsets(), isovalue)
}

/// Classify the cell at linear sample index `base` using precomputed corner
/// offsets.
#[inline]
pub(crate) fn classify_at(
  volume: &Volume<'_>,
  base: usize,
  offsets: &[usize; 8],
  isovalue: f64,
) -> CellCorners {
  let samples: [u8; 8] = std::array::from_fn(|corner| volume.byte_at(base + offsets[corner]));
  CellCorners {
    config: build(&samples, isovalue),
    values: samples.map(normalize),
  }
}

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;
