//! Cross-module tests for the parameter space engine
//!
//! Tests are organized by topic:
//! - `scenario` - The three-axis sample/integrate/project walkthrough
//! - `shape_laws` - Randomized grid, projection and integration shape checks
//! - `refinement` - Coarse sweep, locate, refine, resample
