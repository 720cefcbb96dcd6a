//! Benchmark comparing the reference sweep against the accelerated backend.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use marching_cubes::{BackendKind, TriangleBuffer, Volume};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZE: usize = 64;

/// Ball with density ramping from 255 inside to 0 outside, 128 at `radius`.
fn generate_sphere(radius: f32) -> Vec<u8> {
  let center = (SIZE - 1) as f32 * 0.5;
  let mut samples = Vec::with_capacity(SIZE * SIZE * SIZE);

  for z in 0..SIZE {
    for y in 0..SIZE {
      for x in 0..SIZE {
        let dx = x as f32 - center;
        let dy = y as f32 - center;
        let dz = z as f32 - center;
        let distance = (dx * dx + dy * dy + dz * dz).sqrt();
        samples.push((128.0 + (radius - distance) * 16.0).clamp(0.0, 255.0) as u8);
      }
    }
  }

  samples
}

/// Smoothed random field: white noise box-filtered along X so the surface is
/// busy but not pure checkerboard.
fn generate_noise(seed: u64) -> Vec<u8> {
  let mut rng = StdRng::seed_from_u64(seed);
  let raw: Vec<u8> = (0..SIZE * SIZE * SIZE).map(|_| rng.random()).collect();

  raw
    .chunks_exact(SIZE)
    .flat_map(|row| {
      (0..SIZE).map(move |x| {
        let lo = x.saturating_sub(2);
        let hi = (x + 3).min(SIZE);
        let sum: u32 = row[lo..hi].iter().map(|&s| s as u32).sum();
        (sum / (hi - lo) as u32) as u8
      })
    })
    .collect()
}

fn dims() -> [u32; 3] {
  [SIZE as u32; 3]
}

/// Both backends on a sphere at several isovalues.
fn bench_sphere(c: &mut Criterion) {
  let mut group = c.benchmark_group("sphere_64");
  let samples = generate_sphere(24.0);
  let volume = Volume::new(dims(), &samples).expect("valid volume");

  for isovalue in [0.25, 0.5, 0.75] {
    for kind in BackendKind::ALL {
      let mut backend = kind.create();
      let mut output = TriangleBuffer::new();
      group.bench_with_input(
        BenchmarkId::new(kind.name(), format!("iso={}", isovalue)),
        &isovalue,
        |b, &isovalue| {
          b.iter(|| {
            backend.extract_into(black_box(&volume), isovalue, &mut output);
            black_box(output.triangle_count())
          })
        },
      );
    }
  }

  group.finish();
}

/// Dense surface: most cells are mixed.
fn bench_noise(c: &mut Criterion) {
  let mut group = c.benchmark_group("noise_64");
  let samples = generate_noise(42);
  let volume = Volume::new(dims(), &samples).expect("valid volume");

  for kind in BackendKind::ALL {
    let mut backend = kind.create();
    let mut output = TriangleBuffer::new();
    group.bench_function(kind.name(), |b| {
      b.iter(|| {
        backend.extract_into(black_box(&volume), 0.5, &mut output);
        black_box(output.triangle_count())
      })
    });
  }

  group.finish();
}

/// Nothing to emit: measures the uniform-cell fast path.
fn bench_empty(c: &mut Criterion) {
  let mut group = c.benchmark_group("empty_64");
  let samples = vec![200u8; SIZE * SIZE * SIZE];
  let volume = Volume::new(dims(), &samples).expect("valid volume");

  for kind in BackendKind::ALL {
    let mut backend = kind.create();
    let mut output = TriangleBuffer::new();
    group.bench_function(kind.name(), |b| {
      b.iter(|| {
        backend.extract_into(black_box(&volume), 0.5, &mut output);
        black_box(output.is_empty())
      })
    });
  }

  group.finish();
}

criterion_group!(benches, bench_sphere, bench_noise, bench_empty);
criterion_main!(benches);
