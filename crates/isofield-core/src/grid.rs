//! Triangulated sampling lattices over a rectangular region.

#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{ContourError, Result};
use crate::field::ScalarField;
use crate::marching_triangles::{extract_isolines, IsolineMesh};

/// Sampling region and spacing for a [`ScalarGrid`].
///
/// The lattice covers `[x_min, x_max) x [y_min, y_max)` with nodes spaced
/// `step` apart along both axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Lower x bound of the sampled region.
    pub x_min: f32,
    /// Upper x bound of the sampled region.
    pub x_max: f32,
    /// Lower y bound of the sampled region.
    pub y_min: f32,
    /// Upper y bound of the sampled region.
    pub y_max: f32,
    /// Node spacing along both axes.
    pub step: f32,
}

impl GridSpec {
    /// Checks that this spec describes a lattice with at least one cell.
    ///
    /// # Errors
    /// Returns [`ContourError::InvalidSpec`] if any field is non-finite, the
    /// step is not positive, either extent is empty, or the resulting lattice
    /// has fewer than 2 nodes along an axis.
    pub fn validate(&self) -> Result<()> {
        let fields = [self.x_min, self.x_max, self.y_min, self.y_max, self.step];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(ContourError::InvalidSpec(format!(
                "all fields must be finite, got {self:?}"
            )));
        }
        if self.step <= 0.0 {
            return Err(ContourError::InvalidSpec(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if self.x_max <= self.x_min || self.y_max <= self.y_min {
            return Err(ContourError::InvalidSpec(format!(
                "bounds must satisfy x_min < x_max and y_min < y_max, got {self:?}"
            )));
        }
        let (n, m) = self.dims();
        if n < 2 || m < 2 {
            return Err(ContourError::InvalidSpec(format!(
                "lattice must have at least 2 nodes per axis, got {n}x{m}"
            )));
        }
        Ok(())
    }

    /// Returns the node counts `(n, m)` along the x and y axes.
    #[must_use]
    pub fn dims(&self) -> (usize, usize) {
        let n = ((self.x_max - self.x_min) / self.step).floor().max(0.0) as usize;
        let m = ((self.y_max - self.y_min) / self.step).floor().max(0.0) as usize;
        (n, m)
    }
}

/// A scalar field sampled on a fixed triangulated lattice.
///
/// Node positions and triangle connectivity are computed once from a
/// [`GridSpec`]; only the per-node values change as the field animates. All
/// buffers are flat and tightly packed for direct upload.
#[derive(Debug, Clone, Default)]
pub struct ScalarGrid {
    positions: Vec<Vec2>,
    values: Vec<f32>,
    indices: Vec<u32>,
    n: usize,
    m: usize,
}

impl ScalarGrid {
    /// Builds the lattice described by `spec` with all values zero.
    ///
    /// Nodes are laid out row-major with the y index fastest: node `(i, j)`
    /// sits at `(x_min + i * step, y_min + j * step)` and index `i * m + j`.
    /// Each cell is split into two counter-clockwise triangles along the
    /// cell diagonal from `(i + 1, j)` to `(i, j + 1)`.
    ///
    /// # Errors
    /// Returns [`ContourError::InvalidSpec`] if `spec` fails validation.
    pub fn generate(spec: &GridSpec) -> Result<Self> {
        spec.validate()?;
        let (n, m) = spec.dims();

        let mut positions = Vec::with_capacity(n * m);
        for i in 0..n {
            let x = spec.x_min + i as f32 * spec.step;
            for j in 0..m {
                let y = spec.y_min + j as f32 * spec.step;
                positions.push(Vec2::new(x, y));
            }
        }

        let mut indices = Vec::with_capacity(6 * (n - 1) * (m - 1));
        for i in 0..n - 1 {
            for j in 0..m - 1 {
                let v00 = (i * m + j) as u32;
                let v10 = ((i + 1) * m + j) as u32;
                let v01 = (i * m + j + 1) as u32;
                let v11 = ((i + 1) * m + j + 1) as u32;
                indices.extend_from_slice(&[v00, v10, v01]);
                indices.extend_from_slice(&[v10, v11, v01]);
            }
        }

        log::debug!(
            "generated {n}x{m} lattice: {} nodes, {} triangles",
            n * m,
            indices.len() / 3
        );

        Ok(Self {
            values: vec![0.0; positions.len()],
            positions,
            indices,
            n,
            m,
        })
    }

    /// Overwrites every node value with a fresh sample of `field` at `time`.
    ///
    /// Positions and connectivity are untouched.
    pub fn resample<F: ScalarField + ?Sized>(&mut self, field: &F, time: f32) {
        for (value, position) in self.values.iter_mut().zip(&self.positions) {
            *value = field.sample(*position, time);
        }
    }

    /// Extracts the isoline segments where the current values cross `level`.
    #[must_use]
    pub fn isolines(&self, level: f32, epsilon: f32) -> IsolineMesh {
        extract_isolines(&self.positions, &self.values, &self.indices, level, epsilon)
    }

    /// Node positions, y index fastest.
    #[must_use]
    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Current node values, parallel to [`Self::positions`].
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Triangle indices (every 3 consecutive indices form a triangle).
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Node counts `(n, m)` along the x and y axes.
    #[must_use]
    pub fn dims(&self) -> (usize, usize) {
        (self.n, self.m)
    }

    /// Returns the number of lattice nodes.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[must_use]
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the lattice has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_spec() -> GridSpec {
        GridSpec {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
            step: 0.25,
        }
    }

    #[test]
    fn test_generate_counts() {
        let grid = ScalarGrid::generate(&unit_spec()).unwrap();
        assert_eq!(grid.dims(), (4, 4));
        assert_eq!(grid.num_vertices(), 16);
        assert_eq!(grid.values().len(), 16);
        assert_eq!(grid.num_triangles(), 18);
        assert_eq!(grid.indices().len(), 54);
    }

    #[test]
    fn test_generate_layout() {
        let grid = ScalarGrid::generate(&unit_spec()).unwrap();
        // y index fastest
        assert_eq!(grid.positions()[0], Vec2::new(0.0, 0.0));
        assert_eq!(grid.positions()[1], Vec2::new(0.0, 0.25));
        assert_eq!(grid.positions()[4], Vec2::new(0.25, 0.0));
        // first cell's two triangles share the diagonal (1, 0)-(0, 1)
        assert_eq!(&grid.indices()[0..6], &[0, 4, 1, 4, 5, 1]);
    }

    #[test]
    fn test_generate_rejects_bad_specs() {
        let mut spec = unit_spec();
        spec.step = 0.0;
        assert!(matches!(
            ScalarGrid::generate(&spec),
            Err(ContourError::InvalidSpec(_))
        ));

        let mut spec = unit_spec();
        spec.step = -0.5;
        assert!(spec.validate().is_err());

        let mut spec = unit_spec();
        spec.x_max = spec.x_min;
        assert!(spec.validate().is_err());

        let mut spec = unit_spec();
        spec.y_max = f32::NAN;
        assert!(spec.validate().is_err());

        // step too coarse for the extent: fewer than 2 nodes per axis
        let mut spec = unit_spec();
        spec.step = 0.8;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn test_finer_step_more_cells() {
        let coarse = ScalarGrid::generate(&unit_spec()).unwrap();
        let mut fine_spec = unit_spec();
        fine_spec.step = 0.125;
        let fine = ScalarGrid::generate(&fine_spec).unwrap();
        assert!(fine.num_vertices() > coarse.num_vertices());
        assert!(fine.num_triangles() > coarse.num_triangles());
    }

    #[test]
    fn test_resample_overwrites_in_place() {
        let mut grid = ScalarGrid::generate(&unit_spec()).unwrap();
        assert!(grid.values().iter().all(|&v| v == 0.0));

        grid.resample(&|p: Vec2, t: f32| p.x + p.y + t, 1.0);
        assert_eq!(grid.values()[0], 1.0);
        let last = *grid.positions().last().unwrap();
        assert_eq!(*grid.values().last().unwrap(), last.x + last.y + 1.0);

        // a second pass fully replaces the first
        grid.resample(&|_p: Vec2, _t: f32| -2.0, 0.0);
        assert!(grid.values().iter().all(|&v| v == -2.0));
    }

    proptest! {
        #[test]
        fn prop_generate_invariants(
            x_min in -20.0_f32..0.0,
            y_min in -20.0_f32..0.0,
            width in 1.0_f32..10.0,
            height in 1.0_f32..10.0,
            step in 0.1_f32..0.5,
        ) {
            let spec = GridSpec {
                x_min,
                x_max: x_min + width,
                y_min,
                y_max: y_min + height,
                step,
            };
            let grid = ScalarGrid::generate(&spec).unwrap();
            let (n, m) = grid.dims();

            prop_assert_eq!(grid.num_vertices(), n * m);
            prop_assert_eq!(grid.values().len(), n * m);
            prop_assert_eq!(grid.num_triangles(), 2 * (n - 1) * (m - 1));

            for tri in grid.indices().chunks_exact(3) {
                for &idx in tri {
                    prop_assert!((idx as usize) < grid.num_vertices());
                }
                prop_assert!(tri[0] != tri[1] && tri[1] != tri[2] && tri[0] != tri[2]);
            }
        }
    }
}
