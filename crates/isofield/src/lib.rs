//! isofield-rs: animated 2D scalar field contouring.
//!
//! Samples a time-varying scalar field on a triangulated lattice and extracts
//! its iso-value line segments with a marching triangles pass, once per
//! frame. Rendering stays outside this crate: every [`Frame`] exposes flat
//! buffers an external upload and draw step can consume unchanged.
//!
//! # Quick Start
//!
//! ```
//! use isofield_rs::*;
//!
//! fn main() -> Result<()> {
//!     let mut options = Options::default();
//!     options.grid.step = 0.5;
//!
//!     let mut animation = Animation::new(options)?;
//!     let frame = animation.advance(0.0);
//!     assert!(!frame.isolines.is_empty());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! The pipeline runs in three stages, all exposed individually by
//! [`isofield_core`]:
//!
//! - A **lattice** ([`ScalarGrid`]) fixes positions and connectivity once
//! - A **field** ([`ScalarField`]) is resampled on the lattice each frame
//! - A **level set** ([`extract_level_set`]) contours every iso-value of a
//!   [`LevelRange`] into one [`IsolineMesh`]

mod animation;

pub use animation::{Animation, Frame, MIN_LEVEL_STEP, MIN_STEP};

// Re-export core types
pub use isofield_core::{
    classify, extract_isolines, extract_level_set, ContourError, GridSpec, IsolineMesh,
    LevelRange, Options, Result, ScalarField, ScalarGrid, TravelingWaves, TriangleCase, Vec2,
    Vec3,
};

/// Initializes logging from the `RUST_LOG` environment variable.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
