//! Interchangeable extraction backends.
//!
//! Every backend honors the same contract: classify cells with the strict
//! `value > isovalue` test on normalized samples, interpolate from each edge's
//! low corner to its high corner, and fully replace the caller's buffer. Two
//! backends may order triangles differently but must agree on the triangle
//! set, which is what lets them be benchmarked side by side.
//!
//! ```text
//! ┌──────────────────┐   BackendKind::create()   ┌───────────────────────┐
//! │   BackendKind    │ ────────────────────────► │ Box<dyn Isosurface-   │
//! │ Reference        │                           │        Backend>       │
//! │ Accelerated (*)  │                           │ extract_into(v, iso,  │
//! └──────────────────┘                           │              &mut out)│
//!                                                └───────────────────────┘
//! ```

mod accelerated;

pub use accelerated::AcceleratedBackend;

use std::fmt;

use crate::extractor;
use crate::types::TriangleBuffer;
use crate::volume::Volume;

/// An isosurface extractor that can be swapped in behind one call site.
pub trait IsosurfaceBackend: Send {
  /// Short stable name used in logs and reports.
  fn name(&self) -> &'static str;

  /// Replace the contents of `output` with the isosurface of `volume`.
  fn extract_into(&mut self, volume: &Volume<'_>, isovalue: f64, output: &mut TriangleBuffer);

  /// Extract into a freshly allocated buffer.
  fn extract(&mut self, volume: &Volume<'_>, isovalue: f64) -> TriangleBuffer {
    let mut output = TriangleBuffer::new();
    self.extract_into(volume, isovalue, &mut output);
    output
  }
}

/// Straightforward per-cell sweep, see [`extractor::extract_into`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ReferenceBackend;

impl IsosurfaceBackend for ReferenceBackend {
  fn name(&self) -> &'static str {
    BackendKind::Reference.name()
  }

  fn extract_into(&mut self, volume: &Volume<'_>, isovalue: f64, output: &mut TriangleBuffer) {
    extractor::extract_into(volume, isovalue, output);
  }
}

/// Selects which backend an extraction session drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BackendKind {
  /// [`ReferenceBackend`].
  Reference,

  /// [`AcceleratedBackend`].
  Accelerated,
}

impl Default for BackendKind {
  fn default() -> Self {
    BackendKind::Accelerated
  }
}

impl BackendKind {
  pub const ALL: [BackendKind; 2] = [BackendKind::Reference, BackendKind::Accelerated];

  pub fn name(self) -> &'static str {
    match self {
      BackendKind::Reference => "reference",
      BackendKind::Accelerated => "accelerated",
    }
  }

  /// Instantiate the backend.
  pub fn create(self) -> Box<dyn IsosurfaceBackend> {
    match self {
      BackendKind::Reference => Box::new(ReferenceBackend),
      BackendKind::Accelerated => Box::new(AcceleratedBackend::new()),
    }
  }

  /// Map the `use_accelerated` flag onto a backend.
  pub fn from_use_accelerated(use_accelerated: bool) -> Self {
    if use_accelerated {
      BackendKind::Accelerated
    } else {
      BackendKind::Reference
    }
  }
}

impl fmt::Display for BackendKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
