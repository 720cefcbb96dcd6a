//! Reference Marching Cubes sweep.
//!
//! # Processing Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        INPUT                                    │
//! │  volume: Volume          - nx*ny*nz bytes, X fastest            │
//! │  isovalue: f64           - threshold in normalized [0, 1]       │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 1: Corner Classification               │
//! │  For each cell in k, j, i order:                                │
//! │    Load 8 normalized samples at cube corners                    │
//! │    Build 8-bit configuration (bit set = strictly above)         │
//! │    Early-out if uniform (config == 0x00 or config == 0xFF)      │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 2: Edge Crossings                      │
//! │    Lookup edge mask from EDGE_TABLE[config]                     │
//! │    Interpolate every crossed edge into a cell-local cache       │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    PHASE 3: Triangulation                       │
//! │    Walk TRIANGLE_TABLE[config] until the sentinel               │
//! │    Append the 3 cached crossings of each triple, table order    │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//!                               ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        OUTPUT                                   │
//! │  vertices: Vec<[f32; 3]> - 3 per triangle, grid coordinates     │
//! │  bounds: AABB            - Mesh bounding box                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Crossings are not shared between cells. Each shared edge is interpolated
//! once per adjacent cell, with identical results (see [`interpolate`]).

pub mod classify;
pub mod interpolate;

use crate::error::ExtractError;
use crate::types::TriangleBuffer;
use crate::volume::Volume;

use classify::CellCorners;
use interpolate::{cell_origin, edge_crossing, Vec3A};

/// Extract the isosurface of `volume` at `isovalue` into a new buffer.
///
/// Isovalues outside `[0, 1]` (or NaN) are accepted and yield an empty
/// surface.
pub fn extract(volume: &Volume<'_>, isovalue: f64) -> TriangleBuffer {
  let mut output = TriangleBuffer::new();
  extract_into(volume, isovalue, &mut output);
  output
}

/// Extract into an existing buffer, replacing its contents.
///
/// The buffer's allocation is kept, so a caller re-extracting every frame
/// stops allocating once the surface size settles.
pub fn extract_into(volume: &Volume<'_>, isovalue: f64, output: &mut TriangleBuffer) {
  output.clear();

  // Classification keeps the caller's f64; only interpolation runs in f32
  let iso = isovalue as f32;
  let [cx, cy, cz] = volume.cell_dims();
  let offsets = volume.corner_offsets();

  for k in 0..cz {
    for j in 0..cy {
      let row = volume.linear_index(0, j, k);
      for i in 0..cx {
        let cell = classify::classify_at(volume, row + i, &offsets, isovalue);
        if cell.is_uniform() {
          continue;
        }

        emit_cell(&cell, [i, j, k], iso, output);
      }
    }
  }
}

/// Interpolate a mixed cell's crossed edges and append its triangles.
#[inline]
pub(crate) fn emit_cell(
  cell: &CellCorners,
  coord: [usize; 3],
  isovalue: f32,
  output: &mut TriangleBuffer,
) {
  let origin = cell_origin(coord);
  let mut crossings = [Vec3A::ZERO; 12];
  let mut mask = cell.edge_mask();
  while mask != 0 {
    let edge = mask.trailing_zeros() as usize;
    crossings[edge] = edge_crossing(origin, edge, &cell.values, isovalue);
    mask &= mask - 1;
  }

  for [a, b, c] in cell.triangles() {
    output.push_triangle([
      crossings[a].to_array(),
      crossings[b].to_array(),
      crossings[c].to_array(),
    ]);
  }
}

/// Validate raw dimensions and samples, then extract.
///
/// Shape errors are reported before any cell is visited.
pub fn extract_samples(
  dims: [u32; 3],
  samples: &[u8],
  isovalue: f64,
) -> Result<TriangleBuffer, ExtractError> {
  let volume = Volume::new(dims, samples)?;
  Ok(extract(&volume, isovalue))
}
