//! Core algorithms for isofield-rs.
//!
//! This crate provides the contouring pipeline without any rendering concerns:
//! - [`GridSpec`] and [`ScalarGrid`] for triangulated sampling lattices
//! - [`ScalarField`] for pluggable time-varying fields
//! - [`extract_isolines`] for single-level marching triangles extraction
//! - [`LevelRange`] and [`extract_level_set`] for inclusive iso-value sweeps
//! - [`Options`] for persistent configuration
//!
//! Every output is a flat, tightly packed buffer so a caller can hand the
//! data to an external upload and draw step unchanged.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Accessor-heavy API; must_use on every getter adds noise
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod field;
pub mod grid;
pub mod levels;
pub mod marching_triangles;
pub mod options;

pub use error::{ContourError, Result};
pub use field::{ScalarField, TravelingWaves};
pub use grid::{GridSpec, ScalarGrid};
pub use levels::{extract_level_set, LevelRange};
pub use marching_triangles::{classify, extract_isolines, IsolineMesh, TriangleCase};
pub use options::Options;

// Re-export glam types for convenience
pub use glam::{Vec2, Vec3};
