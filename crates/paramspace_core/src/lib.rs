//! N-dimensional parameter space engine
//!
//! This crate combines named, independently sampled axes into a dense
//! orthogonal grid and provides the indexing machinery around it:
//! - Evaluating functions at every grid point (`operators::sample`)
//! - Reducing dimensionality by trapezoidal integration (`operators::integrate`)
//! - Planning 2-D cross-sections with the remaining axes pinned to the
//!   nearest grid values (`projection::plan`)
//! - Slicing dependent arrays that lost axes to reductions (`slicer`)
//! - Locating extreme grid points and refining axes around them
//!   (`locate`, `refine`)
//! - Interactive exploration driven by control events (`explorer`)
//!
//! ```ignore
//! use paramspace_core::{SpaceBuilder, ProjectionRequest, operators, projection, slicer};
//!
//! let space = SpaceBuilder::new()
//!     .linspace("x", -3.0, 3.0, 51)
//!     .linspace("y", -2.0, 2.0, 41)
//!     .linspace("y2", -1.0, 1.0, 31)
//!     .build()?;
//!
//! let z = operators::sample(&space, &["x", "y", "y2"], |v| v[0] * (v[1] + v[2]))?;
//! let integrals = operators::integrate(&space, &z, "x")?;
//!
//! let projection = projection::plan(&space, &ProjectionRequest::new("y2", "y"))?;
//! let slice = slicer::slice_for_plot(&space, &projection, &integrals)?;
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod dependent;
pub mod error;
pub mod explorer;
pub mod grid;
pub mod locate;
pub mod operators;
pub mod projection;
pub mod refine;
pub mod slicer;
pub mod space;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{SpaceBuilder, SpaceConfig};
pub use dependent::DependentArray;
pub use error::{LookupError, Result, SpaceError};
pub use grid::{AxisSelector, NdArray};
pub use model::{Axis, NamedValues};
pub use projection::{Projection, ProjectionRequest};
pub use space::ParameterSpace;
