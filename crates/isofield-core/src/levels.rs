//! Iso-value sweeps across a range of levels.

use serde::{Deserialize, Serialize};

use crate::error::{ContourError, Result};
use crate::grid::ScalarGrid;
use crate::marching_triangles::IsolineMesh;

/// An inclusive sweep of iso-values from `z_min` to `z_max` in steps of
/// `z_step`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelRange {
    /// First iso-value of the sweep.
    pub z_min: f32,
    /// Inclusive upper bound of the sweep.
    pub z_max: f32,
    /// Spacing between consecutive iso-values.
    pub z_step: f32,
}

impl LevelRange {
    /// Checks that this range describes a finite level sequence.
    ///
    /// # Errors
    /// Returns [`ContourError::InvalidLevels`] if a bound is non-finite or the
    /// step is not a positive number.
    pub fn validate(&self) -> Result<()> {
        if !self.z_min.is_finite() || !self.z_max.is_finite() {
            return Err(ContourError::InvalidLevels(format!(
                "bounds must be finite, got {self:?}"
            )));
        }
        if self.z_step.is_nan() || self.z_step <= 0.0 {
            return Err(ContourError::InvalidLevels(format!(
                "z_step must be positive, got {}",
                self.z_step
            )));
        }
        Ok(())
    }

    /// Returns every level of the sweep, in ascending order.
    ///
    /// `z_max` itself is included when the accumulated steps land on it. An
    /// invalid range yields an empty sequence. A range with `z_max < z_min`
    /// is empty as well.
    #[must_use]
    pub fn levels(&self) -> Vec<f32> {
        if self.validate().is_err() {
            return Vec::new();
        }
        let mut levels = Vec::new();
        let mut value = self.z_min;
        while value <= self.z_max {
            levels.push(value);
            value += self.z_step;
        }
        levels
    }
}

/// Extracts isolines at every given level and concatenates the results into
/// one mesh.
///
/// Each level runs an independent extraction pass, so crossing points are
/// shared within a level but never merged across levels, even where two
/// levels cross the same grid edge.
#[must_use]
pub fn extract_level_set(
    grid: &ScalarGrid,
    levels: impl IntoIterator<Item = f32>,
    epsilon: f32,
) -> IsolineMesh {
    let mut combined = IsolineMesh::default();
    for level in levels {
        combined.append(&grid.isolines(level, epsilon));
    }
    log::debug!(
        "level set: {} points, {} segments",
        combined.num_points(),
        combined.num_segments()
    );
    combined
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridSpec;
    use glam::Vec2;

    fn test_grid() -> ScalarGrid {
        let spec = GridSpec {
            x_min: -1.0,
            x_max: 1.0,
            y_min: -1.0,
            y_max: 1.0,
            step: 0.25,
        };
        let mut grid = ScalarGrid::generate(&spec).unwrap();
        grid.resample(&|p: Vec2, _t: f32| p.x, 0.0);
        grid
    }

    #[test]
    fn test_levels_inclusive_sweep() {
        let range = LevelRange {
            z_min: -1.0,
            z_max: 1.0,
            z_step: 0.5,
        };
        assert_eq!(range.levels(), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_levels_degenerate_range() {
        let single = LevelRange {
            z_min: 2.0,
            z_max: 2.0,
            z_step: 0.25,
        };
        assert_eq!(single.levels(), vec![2.0]);

        let inverted = LevelRange {
            z_min: 1.0,
            z_max: -1.0,
            z_step: 0.25,
        };
        assert!(inverted.validate().is_ok());
        assert!(inverted.levels().is_empty());
    }

    #[test]
    fn test_levels_invalid_step() {
        for z_step in [0.0, -0.5, f32::NAN] {
            let range = LevelRange {
                z_min: 0.0,
                z_max: 1.0,
                z_step,
            };
            assert!(matches!(
                range.validate(),
                Err(ContourError::InvalidLevels(_))
            ));
            assert!(range.levels().is_empty());
        }
    }

    #[test]
    fn test_level_set_concatenates_independent_extractions() {
        let grid = test_grid();
        let levels = [-0.5, 0.0, 0.5];

        let combined = extract_level_set(&grid, levels, 0.0);

        let mut expected_points = 0;
        let mut expected_segments = 0;
        for level in levels {
            let single = grid.isolines(level, 0.0);
            assert!(!single.is_empty());
            expected_points += single.num_points();
            expected_segments += single.num_segments();
        }
        assert_eq!(combined.num_points(), expected_points);
        assert_eq!(combined.num_segments(), expected_segments);

        for &idx in &combined.indices {
            assert!((idx as usize) < combined.num_points());
        }
    }

    #[test]
    fn test_level_set_single_level_matches_isolines() {
        let grid = test_grid();
        let combined = extract_level_set(&grid, [0.25], 0.0);
        assert_eq!(combined, grid.isolines(0.25, 0.0));
    }

    #[test]
    fn test_level_set_no_levels_is_empty() {
        let grid = test_grid();
        assert!(extract_level_set(&grid, [], 0.0).is_empty());
    }
}
