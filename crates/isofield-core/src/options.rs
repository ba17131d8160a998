//! Persistent configuration for a contouring session.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::GridSpec;
use crate::levels::LevelRange;

/// Configuration for lattice generation and the iso-value sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Sampling region and spacing of the lattice.
    pub grid: GridSpec,

    /// Inclusive iso-value sweep extracted every frame.
    pub levels: LevelRange,

    /// Classification shift: corner values within `epsilon` of a level count
    /// as above it.
    pub epsilon: f32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            grid: GridSpec {
                x_min: -10.0,
                x_max: 10.0,
                y_min: -10.0,
                y_max: 10.0,
                step: 0.1,
            },
            levels: LevelRange {
                z_min: -3.0,
                z_max: 3.0,
                z_step: 0.25,
            },
            epsilon: 0.01,
        }
    }
}

impl Options {
    /// Checks the grid spec and the level range.
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()?;
        self.levels.validate()?;
        Ok(())
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Saves options to a JSON file, pretty-printed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}
