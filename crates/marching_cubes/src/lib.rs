//! marching_cubes - Renderer independent isosurface extraction
//!
//! This crate extracts a triangulated isosurface from a regular grid of
//! one-byte density samples using table-driven Marching Cubes. Output is a flat
//! triangle list in grid coordinates, ready to upload for a triangle-list draw.
//!
//! # Features
//!
//! - **Reference sweep**: per-cell classification, edge interpolation and
//!   table triangulation in deterministic `k, j, i` order
//! - **Accelerated backend**: byte-table classification with a sliding
//!   configuration index, interchangeable with the reference sweep
//! - **Extraction session**: owns a volume and re-extracts only when the
//!   isovalue or volume changes, with wall-clock timing per extraction
//! - **Metrics** (`metrics` feature): rolling extraction latency statistics
//!
//! # Example
//!
//! ```ignore
//! use marching_cubes::{extract, Volume};
//!
//! let samples = vec![0u8; 32 * 32 * 32];
//! // Fill density...
//!
//! let volume = Volume::new([32, 32, 32], &samples)?;
//! let output = extract(&volume, 0.5);
//!
//! println!("Generated {} triangles", output.triangle_count());
//! ```

pub mod error;
pub mod tables;
pub mod types;
pub mod volume;

pub use error::{ExtractError, ShapeViolation};
pub use tables::{EDGE_CORNERS, EDGE_TABLE, TRIANGLE_TABLE};
pub use types::{MinMaxAABB, TriangleBuffer};
pub use volume::{is_above, normalize, OwnedVolume, Volume};

// Reference Marching Cubes sweep
pub mod extractor;
pub use extractor::{extract, extract_into, extract_samples};

// Interchangeable extraction backends
pub mod backend;
pub use backend::{AcceleratedBackend, BackendKind, IsosurfaceBackend, ReferenceBackend};

// Per-frame extraction control
pub mod session;
pub use session::{ExtractionReport, IsosurfaceSession, SessionConfig};

// Engine-agnostic metrics collection
pub mod metrics;

#[cfg(test)]
pub(crate) mod test_utils;
