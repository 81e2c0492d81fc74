//! Grid bounds of a screening run, loadable from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ScreeningError;
use crate::kernel::{GridOrigin, GridSpacing, IndexBox};

/// Thermodynamic range covered by a run and its resolution.
///
/// Density varies along the first grid axis, temperature along the second
/// and metallicity along the third, each with `n_cell` points. Density and
/// temperature are spaced logarithmically, metallicity linearly from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreeningConfig {
    /// Lowest density, g/cm³.
    pub dens_min: f64,
    /// Highest density, g/cm³.
    pub dens_max: f64,
    /// Lowest temperature, K.
    pub temp_min: f64,
    /// Highest temperature, K.
    pub temp_max: f64,
    /// Metal mass fraction at the last cell of the third axis.
    pub metalicity_max: f64,
    /// Points per axis.
    pub n_cell: usize,
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        ScreeningConfig {
            dens_min: 10.0,
            dens_max: 5.0e9,
            temp_min: 1.0e6,
            temp_max: 1.0e10,
            metalicity_max: 0.1,
            n_cell: 16,
        }
    }
}

impl ScreeningConfig {
    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> Result<Self, ScreeningError> {
        let cfg: ScreeningConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ScreeningError> {
        let path = path.as_ref();
        log::debug!("reading screening configuration from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String, ScreeningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ScreeningError> {
        let positive = [
            ("dens_min", self.dens_min),
            ("dens_max", self.dens_max),
            ("temp_min", self.temp_min),
            ("temp_max", self.temp_max),
        ];
        for (name, v) in positive {
            if !(v > 0.0 && v.is_finite()) {
                return Err(ScreeningError::Config(format!(
                    "{} must be positive and finite, got {}",
                    name, v
                )));
            }
        }
        if self.dens_max < self.dens_min {
            return Err(ScreeningError::Config(format!(
                "dens_max {} is below dens_min {}",
                self.dens_max, self.dens_min
            )));
        }
        if self.temp_max < self.temp_min {
            return Err(ScreeningError::Config(format!(
                "temp_max {} is below temp_min {}",
                self.temp_max, self.temp_min
            )));
        }
        if !(0.0..1.0).contains(&self.metalicity_max) {
            return Err(ScreeningError::Config(format!(
                "metalicity_max must lie in [0, 1), got {}",
                self.metalicity_max
            )));
        }
        if self.n_cell == 0 {
            return Err(ScreeningError::Config("n_cell must be > 0".to_string()));
        }
        if self.n_cell > i32::MAX as usize {
            return Err(ScreeningError::Config(format!(
                "n_cell {} exceeds the index range",
                self.n_cell
            )));
        }
        Ok(())
    }

    /// The box `[0, n_cell - 1]` along every axis.
    pub fn index_box(&self) -> IndexBox {
        let hi = self.n_cell as i32 - 1;
        IndexBox::new([0, 0, 0], [hi, hi, hi])
    }

    /// Increments between neighbouring cells; all zero for a single cell.
    pub fn spacing(&self) -> GridSpacing {
        if self.n_cell <= 1 {
            return GridSpacing::default();
        }
        let steps = (self.n_cell - 1) as f64;
        GridSpacing {
            dlogrho: (self.dens_max.log10() - self.dens_min.log10()) / steps,
            dlogt: (self.temp_max.log10() - self.temp_min.log10()) / steps,
            dmetal: self.metalicity_max / steps,
        }
    }

    pub fn origin(&self) -> GridOrigin {
        GridOrigin {
            dens_min: self.dens_min,
            temp_min: self.temp_min,
        }
    }
}
