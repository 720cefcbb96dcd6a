use super::*;

fn crossed_edges_used(config: u8) -> u16 {
  triangles(config).flatten().fold(0u16, |mask, edge| mask | (1 << edge))
}

#[test]
fn test_edge_table_homogeneous() {
  // All corners on the same side = no crossings
  assert_eq!(EDGE_TABLE[0], 0, "All below should have no edges");
  assert_eq!(EDGE_TABLE[255], 0, "All above should have no edges");
  assert_eq!(TRIANGLE_COUNT[0], 0);
  assert_eq!(TRIANGLE_COUNT[255], 0);
}

#[test]
fn test_edge_table_single_corner() {
  // A single corner above should activate exactly 3 edges
  for corner in 0..8 {
    let mask = 1u8 << corner;
    let edge_count = EDGE_TABLE[mask as usize].count_ones();
    assert_eq!(
      edge_count, 3,
      "Corner {} should have 3 edges, got {}",
      corner, edge_count
    );
    assert_eq!(TRIANGLE_COUNT[mask as usize], 1);
  }
}

#[test]
fn test_edge_table_symmetry() {
  // Complementary configurations cross the same edges
  for i in 0..128 {
    assert_eq!(
      EDGE_TABLE[i],
      EDGE_TABLE[255 - i],
      "Edge masks should be symmetric for {} and {}",
      i,
      255 - i
    );
  }
}

#[test]
fn test_edge_corners_validity() {
  for (edge, &[c0, c1]) in EDGE_CORNERS.iter().enumerate() {
    assert!(c0 < 8 && c1 < 8);
    assert!(c0 < c1, "edge {} must run from low to high corner", edge);
    // Axis aligned: endpoints differ in exactly one coordinate bit
    assert_eq!((c0 ^ c1).count_ones(), 1, "edge {} is not axis aligned", edge);
  }
}

#[test]
fn test_edge_corners_cover_cube() {
  // Each corner touches exactly 3 edges and no edge is listed twice
  let mut degree = [0; 8];
  for (a, &edge_a) in EDGE_CORNERS.iter().enumerate() {
    degree[edge_a[0] as usize] += 1;
    degree[edge_a[1] as usize] += 1;
    for &edge_b in &EDGE_CORNERS[a + 1..] {
      assert_ne!(edge_a, edge_b);
    }
  }
  assert_eq!(degree, [3; 8]);
}

#[test]
fn test_triangles_use_exactly_crossed_edges() {
  // Every crossed edge carries a vertex, and no triangle references an edge
  // that the isosurface does not cross.
  for config in 0..=255u8 {
    assert_eq!(
      crossed_edges_used(config),
      EDGE_TABLE[config as usize],
      "config {:#010b}",
      config
    );
  }
}

#[test]
fn test_complement_uses_same_edges() {
  for config in 0..=255u8 {
    assert_eq!(crossed_edges_used(config), crossed_edges_used(!config));
  }
}

#[test]
fn test_rows_are_sentinel_terminated() {
  for (config, row) in TRIANGLE_TABLE.iter().enumerate() {
    let used = TRIANGLE_COUNT[config] as usize * 3;
    assert!(TRIANGLE_COUNT[config] as usize <= MAX_TRIANGLES);
    assert!(row[..used].iter().all(|&e| (0..12).contains(&e)));
    assert!(
      row[used..].iter().all(|&e| e == END),
      "row {} has entries after the sentinel",
      config
    );
  }
}

#[test]
fn test_single_corner_complement_reverses_winding() {
  for corner in 0..8 {
    let config = 1u8 << corner;
    let [a, b, c] = triangles(config).next().unwrap();
    let [x, y, z] = triangles(!config).next().unwrap();

    let mut lhs = [a, b, c];
    let mut rhs = [x, y, z];
    lhs.sort_unstable();
    rhs.sort_unstable();
    assert_eq!(lhs, rhs, "corner {} complement spans other edges", corner);

    // Same three edges, opposite cyclic order
    let reversed = [[a, c, b], [c, b, a], [b, a, c]];
    assert!(
      reversed.contains(&[x, y, z]),
      "corner {} complement does not flip winding",
      corner
    );
  }
}

#[test]
fn test_first_configuration_matches_published_row() {
  // Corner 0 alone maps to the first published row without translation
  assert_eq!(triangles(0b0000_0001).collect::<Vec<_>>(), vec![[0, 8, 3]]);
  // Corner 2 (0,1,0) is corner 3 in the published numbering
  assert_eq!(triangles(0b0000_0100).collect::<Vec<_>>(), vec![[3, 11, 2]]);
}
