//! Test utilities shared by the extractor, backend and session tests.
//!
//! Provides volume fixtures and helpers for comparing triangle buffers
//! independent of emission order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::TriangleBuffer;

// =============================================================================
// Volume Fixtures
// =============================================================================

fn sample_count(dims: [u32; 3]) -> usize {
  dims.iter().map(|&extent| extent as usize).product()
}

/// Every sample set to `value`.
pub fn uniform_volume(dims: [u32; 3], value: u8) -> Vec<u8> {
  vec![value; sample_count(dims)]
}

/// Samples alternate 0 / 255 on `(i + j + k) % 2`.
///
/// Every cell of a checkerboard is mixed.
pub fn checkerboard_volume(dims: [u32; 3]) -> Vec<u8> {
  let [nx, ny, nz] = dims.map(|extent| extent as usize);
  let mut samples = Vec::with_capacity(nx * ny * nz);
  for k in 0..nz {
    for j in 0..ny {
      for i in 0..nx {
        samples.push(if (i + j + k) % 2 == 1 { 255 } else { 0 });
      }
    }
  }
  samples
}

/// Solid ball centered in the grid.
///
/// Density ramps from 255 inside to 0 outside over a few voxels, crossing
/// 128 at `radius`.
pub fn sphere_volume(dims: [u32; 3], radius: f32) -> Vec<u8> {
  let [nx, ny, nz] = dims.map(|extent| extent as usize);
  let center = dims.map(|extent| (extent - 1) as f32 * 0.5);
  let mut samples = Vec::with_capacity(nx * ny * nz);
  for k in 0..nz {
    for j in 0..ny {
      for i in 0..nx {
        let dx = i as f32 - center[0];
        let dy = j as f32 - center[1];
        let dz = k as f32 - center[2];
        let dist = (dx * dx + dy * dy + dz * dz).sqrt();
        let density = 128.0 + (radius - dist) * 48.0;
        samples.push(density.clamp(0.0, 255.0) as u8);
      }
    }
  }
  samples
}

/// Uniformly random samples from a fixed seed.
pub fn random_volume(dims: [u32; 3], seed: u64) -> Vec<u8> {
  let mut rng = StdRng::seed_from_u64(seed);
  (0..sample_count(dims)).map(|_| rng.random::<u8>()).collect()
}

/// `255 - s` for every sample.
pub fn inverted(samples: &[u8]) -> Vec<u8> {
  samples.iter().map(|&s| 255 - s).collect()
}

// =============================================================================
// Buffer Comparison
// =============================================================================

fn cmp_vertex(a: &[f32; 3], b: &[f32; 3]) -> std::cmp::Ordering {
  a[0]
    .total_cmp(&b[0])
    .then(a[1].total_cmp(&b[1]))
    .then(a[2].total_cmp(&b[2]))
}

/// Triangles with each rotated to start at its smallest vertex (winding kept),
/// then sorted.
pub fn canonical_triangles(buffer: &TriangleBuffer) -> Vec<[[f32; 3]; 3]> {
  let mut triangles: Vec<_> = buffer
    .triangles()
    .map(|t| {
      let first = (0..3)
        .min_by(|&a, &b| cmp_vertex(&t[a], &t[b]))
        .unwrap_or(0);
      [t[first], t[(first + 1) % 3], t[(first + 2) % 3]]
    })
    .collect();
  triangles.sort_by(|a, b| {
    cmp_vertex(&a[0], &b[0])
      .then(cmp_vertex(&a[1], &b[1]))
      .then(cmp_vertex(&a[2], &b[2]))
  });
  triangles
}

fn close(a: &[f32; 3], b: &[f32; 3], tolerance: f32) -> bool {
  (0..3).all(|axis| (a[axis] - b[axis]).abs() <= tolerance)
}

/// Assert both buffers hold the same triangle set, ignoring emission order.
pub fn assert_same_triangle_set(a: &TriangleBuffer, b: &TriangleBuffer, tolerance: f32) {
  assert_eq!(a.triangle_count(), b.triangle_count(), "triangle count differs");
  let a = canonical_triangles(a);
  let b = canonical_triangles(b);
  for (n, (ta, tb)) in a.iter().zip(&b).enumerate() {
    for v in 0..3 {
      assert!(
        close(&ta[v], &tb[v], tolerance),
        "triangle {} differs: {:?} vs {:?}",
        n,
        ta,
        tb
      );
    }
  }
}

/// Distinct vertex positions of a buffer, sorted.
pub fn distinct_vertices(buffer: &TriangleBuffer) -> Vec<[f32; 3]> {
  let mut vertices = buffer.vertices.clone();
  vertices.sort_by(cmp_vertex);
  vertices.dedup();
  vertices
}

/// Assert both buffers touch the same set of points within `tolerance`.
pub fn assert_same_vertex_set(a: &TriangleBuffer, b: &TriangleBuffer, tolerance: f32) {
  let a = distinct_vertices(a);
  let b = distinct_vertices(b);
  assert_eq!(a.len(), b.len(), "distinct vertex count differs");
  for vertex in &a {
    assert!(
      b.iter().any(|other| close(vertex, other, tolerance)),
      "vertex {:?} has no counterpart",
      vertex
    );
  }
}
