use super::*;

#[test]
fn test_aabb_encapsulate() {
  let mut aabb = MinMaxAABB::empty();
  assert!(!aabb.is_valid());

  aabb.encapsulate([1.0, 2.0, 3.0]);
  aabb.encapsulate([-1.0, -2.0, -3.0]);

  assert_eq!(aabb.min, [-1.0, -2.0, -3.0]);
  assert_eq!(aabb.max, [1.0, 2.0, 3.0]);
  assert!(aabb.is_valid());
}

#[test]
fn test_push_triangle_tracks_bounds() {
  let mut buffer = TriangleBuffer::new();
  buffer.push_triangle([[0.5, 0.0, 0.0], [0.0, 0.5, 0.0], [0.0, 0.0, 0.5]]);

  assert_eq!(buffer.vertex_count(), 3);
  assert_eq!(buffer.triangle_count(), 1);
  assert_eq!(buffer.bounds, MinMaxAABB::new([0.0; 3], [0.5; 3]));
}

#[test]
fn test_flat_view_layout() {
  let mut buffer = TriangleBuffer::new();
  buffer.push_triangle([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
  buffer.push_triangle([[0.0; 3]; 3]);

  let flat = buffer.as_flat();
  assert_eq!(flat.len(), buffer.triangle_count() as usize * 9);
  assert_eq!(&flat[..9], &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
}

#[test]
fn test_triangles_iterator() {
  let mut buffer = TriangleBuffer::new();
  let first = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
  let second = [[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]];
  buffer.push_triangle(first);
  buffer.push_triangle(second);

  let triangles: Vec<_> = buffer.triangles().collect();
  assert_eq!(triangles, vec![first, second]);
}

#[test]
fn test_clear_preserves_capacity() {
  let mut buffer = TriangleBuffer::with_capacity(16);
  buffer.push_triangle([[1.0; 3]; 3]);
  let capacity = buffer.vertices.capacity();

  buffer.clear();

  assert!(buffer.is_empty());
  assert_eq!(buffer.triangle_count(), 0);
  assert_eq!(buffer.vertices.capacity(), capacity);
  assert_eq!(buffer.bounds, MinMaxAABB::empty());
}
