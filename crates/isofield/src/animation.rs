//! Per-frame driver for animated contour extraction.
//!
//! [`Animation`] owns the lattice, the scalar field, and the most recent
//! level set. Each call to [`Animation::advance`] resamples the field at the
//! new time and re-extracts every isoline, returning a [`Frame`] of flat
//! buffer views ready for upload.

use isofield_core::{
    extract_level_set, IsolineMesh, Options, Result, ScalarField, ScalarGrid, TravelingWaves,
};

/// Lower bound on the lattice spacing accepted by [`Animation::set_step`].
pub const MIN_STEP: f32 = 0.1;

/// Lower bound on the level spacing accepted by [`Animation::set_level_step`].
pub const MIN_LEVEL_STEP: f32 = 0.1;

/// Drives a time-varying scalar field through the contouring pipeline.
pub struct Animation {
    options: Options,
    grid: ScalarGrid,
    field: Box<dyn ScalarField>,
    isolines: IsolineMesh,
}

impl Animation {
    /// Creates an animation of the reference [`TravelingWaves`] field.
    ///
    /// # Errors
    /// Returns an error if `options` fails validation.
    pub fn new(options: Options) -> Result<Self> {
        Self::with_field(options, TravelingWaves)
    }

    /// Creates an animation of an arbitrary scalar field.
    ///
    /// The lattice is generated immediately; values stay zero until the
    /// first [`advance`](Self::advance).
    ///
    /// # Errors
    /// Returns an error if `options` fails validation.
    pub fn with_field(options: Options, field: impl ScalarField + 'static) -> Result<Self> {
        options.validate()?;
        let grid = ScalarGrid::generate(&options.grid)?;
        let (n, m) = grid.dims();
        log::info!(
            "animation ready: {n}x{m} lattice, {} levels",
            options.levels.levels().len()
        );
        Ok(Self {
            options,
            grid,
            field: Box::new(field),
            isolines: IsolineMesh::default(),
        })
    }

    /// Advances the animation to `time`.
    ///
    /// Resamples the field on every lattice node and re-extracts the full
    /// level set, then returns buffer views of the new frame.
    pub fn advance(&mut self, time: f32) -> Frame<'_> {
        self.grid.resample(self.field.as_ref(), time);
        self.isolines = extract_level_set(
            &self.grid,
            self.options.levels.levels(),
            self.options.epsilon,
        );
        log::debug!(
            "t = {time}: {} isoline points, {} segments",
            self.isolines.num_points(),
            self.isolines.num_segments()
        );
        Frame {
            grid: &self.grid,
            isolines: &self.isolines,
        }
    }

    /// Sets the lattice spacing, clamped to at least [`MIN_STEP`], and
    /// regenerates the lattice.
    ///
    /// The fresh lattice holds zero values until the next
    /// [`advance`](Self::advance).
    ///
    /// # Errors
    /// Returns an error if the clamped spacing still yields an invalid
    /// lattice for the configured bounds.
    pub fn set_step(&mut self, step: f32) -> Result<()> {
        self.options.grid.step = step.max(MIN_STEP);
        self.grid = ScalarGrid::generate(&self.options.grid)?;
        let (n, m) = self.grid.dims();
        log::info!(
            "lattice regenerated at step {}: {n}x{m}",
            self.options.grid.step
        );
        Ok(())
    }

    /// Sets the level spacing, clamped to at least [`MIN_LEVEL_STEP`].
    ///
    /// Takes effect on the next [`advance`](Self::advance).
    pub fn set_level_step(&mut self, z_step: f32) {
        self.options.levels.z_step = z_step.max(MIN_LEVEL_STEP);
    }

    /// Current configuration.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The lattice with its most recent samples.
    #[must_use]
    pub fn grid(&self) -> &ScalarGrid {
        &self.grid
    }

    /// The most recently extracted level set.
    #[must_use]
    pub fn isolines(&self) -> &IsolineMesh {
        &self.isolines
    }
}

/// Borrowed buffer views of one animation frame.
///
/// The byte views cast the underlying buffers directly, so an upload step can
/// copy them into GPU memory without repacking.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// The sampled lattice, for surface display.
    pub grid: &'a ScalarGrid,
    /// The extracted level set.
    pub isolines: &'a IsolineMesh,
}

impl Frame<'_> {
    /// Lattice node positions as raw bytes (two `f32` per node).
    #[must_use]
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.grid.positions())
    }

    /// Lattice node values as raw bytes (one `f32` per node).
    #[must_use]
    pub fn value_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.grid.values())
    }

    /// Lattice triangle indices as raw bytes (`u32` indices).
    #[must_use]
    pub fn surface_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.grid.indices())
    }

    /// Isoline crossing points as raw bytes (three `f32` per point).
    #[must_use]
    pub fn isoline_point_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.isolines.points)
    }

    /// Isoline segment indices as raw bytes (`u32` indices).
    #[must_use]
    pub fn isoline_index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.isolines.indices)
    }
}
