//! Output types shared by every extraction backend.

/// Axis-aligned bounding box.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinMaxAABB {
  pub min: [f32; 3],
  pub max: [f32; 3],
}

impl MinMaxAABB {
  /// Create AABB with inverted extents (ready for encapsulation).
  pub fn empty() -> Self {
    Self {
      min: [f32::INFINITY; 3],
      max: [f32::NEG_INFINITY; 3],
    }
  }

  /// Create AABB from min/max corners.
  pub fn new(min: [f32; 3], max: [f32; 3]) -> Self {
    Self { min, max }
  }

  /// Expand AABB to include a point.
  #[inline]
  pub fn encapsulate(&mut self, point: [f32; 3]) {
    for i in 0..3 {
      self.min[i] = self.min[i].min(point[i]);
      self.max[i] = self.max[i].max(point[i]);
    }
  }

  /// Check if AABB is valid (min <= max on all axes).
  pub fn is_valid(&self) -> bool {
    self.min[0] <= self.max[0] && self.min[1] <= self.max[1] && self.min[2] <= self.max[2]
  }
}

impl Default for MinMaxAABB {
  fn default() -> Self {
    Self::empty()
  }
}

/// Extraction result: a flat triangle list in grid coordinates.
///
/// Every 3 consecutive vertices form one triangle. Positions are in
/// grid-index space (`0..=nx-1` etc.); scaling into world or texture space is
/// left to the renderer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleBuffer {
  /// Vertex positions, 3 per triangle.
  pub vertices: Vec<[f32; 3]>,

  /// Bounding box encompassing all vertices.
  pub bounds: MinMaxAABB,
}

impl TriangleBuffer {
  pub fn new() -> Self {
    Self::default()
  }

  /// Pre-allocate room for `triangles` triangles.
  pub fn with_capacity(triangles: usize) -> Self {
    Self {
      vertices: Vec::with_capacity(triangles * 3),
      bounds: MinMaxAABB::empty(),
    }
  }

  /// Clear all buffers, preserving capacity.
  pub fn clear(&mut self) {
    self.vertices.clear();
    self.bounds = MinMaxAABB::empty();
  }

  /// Returns true if no geometry was generated.
  pub fn is_empty(&self) -> bool {
    self.vertices.is_empty()
  }

  /// Number of vertices (three per triangle).
  pub fn vertex_count(&self) -> usize {
    self.vertices.len()
  }

  /// Number of triangles in the buffer.
  pub fn triangle_count(&self) -> u32 {
    (self.vertices.len() / 3) as u32
  }

  /// Append one triangle.
  #[inline]
  pub fn push_triangle(&mut self, triangle: [[f32; 3]; 3]) {
    for vertex in triangle {
      self.bounds.encapsulate(vertex);
    }
    self.vertices.extend_from_slice(&triangle);
  }

  /// Iterate triangles as vertex triples.
  pub fn triangles(&self) -> impl Iterator<Item = [[f32; 3]; 3]> + '_ {
    self
      .vertices
      .chunks_exact(3)
      .map(|t| [t[0], t[1], t[2]])
  }

  /// Flat `x, y, z, x, y, z, ...` view for vertex buffer upload.
  ///
  /// Its length is `triangle_count() * 9`.
  pub fn as_flat(&self) -> &[f32] {
    self.vertices.as_flattened()
  }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
