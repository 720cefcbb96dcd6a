//! Edge crossing interpolation.
//!
//! Crossings are always interpolated from an edge's low corner to its high
//! corner with corner positions held as exact integer coordinates. Two cells
//! sharing an edge therefore feed identical operands to identical arithmetic
//! and land on the same bit pattern, so no stitching pass is needed.

pub use glam::Vec3A;

use crate::tables::EDGE_CORNERS;

/// Precomputed corner positions within unit cube.
/// Layout matches corner index bits: corner i = (x=bit0, y=bit1, z=bit2)
pub const CORNER_POSITIONS: [Vec3A; 8] = [
  Vec3A::new(0.0, 0.0, 0.0), // 0b000
  Vec3A::new(1.0, 0.0, 0.0), // 0b001
  Vec3A::new(0.0, 1.0, 0.0), // 0b010
  Vec3A::new(1.0, 1.0, 0.0), // 0b011
  Vec3A::new(0.0, 0.0, 1.0), // 0b100
  Vec3A::new(1.0, 0.0, 1.0), // 0b101
  Vec3A::new(0.0, 1.0, 1.0), // 0b110
  Vec3A::new(1.0, 1.0, 1.0), // 0b111
];

/// Grid-space position of a cell's minimum corner.
#[inline(always)]
pub fn cell_origin(cell: [usize; 3]) -> Vec3A {
  Vec3A::new(cell[0] as f32, cell[1] as f32, cell[2] as f32)
}

/// Fraction along an edge where the field crosses `isovalue`.
///
/// `t = (isovalue - v0) / (v1 - v0)` clamped to `[0, 1]`; equal end values
/// fall back to the midpoint.
#[inline(always)]
pub fn crossing_t(v0: f32, v1: f32, isovalue: f32) -> f32 {
  if v1 == v0 {
    return 0.5;
  }
  ((isovalue - v0) / (v1 - v0)).clamp(0.0, 1.0)
}

/// Linearly interpolate the isovalue crossing between two corners.
#[inline]
pub fn interpolate(p0: Vec3A, p1: Vec3A, v0: f32, v1: f32, isovalue: f32) -> Vec3A {
  let t = crossing_t(v0, v1, isovalue);
  p0 + t * (p1 - p0)
}

/// Crossing point on `edge` of the cell at `origin`.
///
/// `values` are the cell's normalized corner values in corner order.
#[inline]
pub fn edge_crossing(origin: Vec3A, edge: usize, values: &[f32; 8], isovalue: f32) -> Vec3A {
  let [c0, c1] = EDGE_CORNERS[edge];
  let (c0, c1) = (c0 as usize, c1 as usize);
  interpolate(
    origin + CORNER_POSITIONS[c0],
    origin + CORNER_POSITIONS[c1],
    values[c0],
    values[c1],
    isovalue,
  )
}

#[cfg(test)]
#[path = "interpolate_test.rs"]
mod interpolate_test;
