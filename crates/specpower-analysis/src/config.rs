//! Configuration for rack density figures
//!
//! Per-U power and core figures are scaled to a whole rack and divided by the
//! floor area the rack occupies.

use serde::{Deserialize, Serialize};

/// Rack geometry used for the density columns of the year summary
///
/// # Examples
///
/// ```
/// use specpower_analysis::DensityConfig;
///
/// let config = DensityConfig::default();
/// assert_eq!(config.rack_units, 42.0);
/// assert_eq!(config.rack_fill_ratio, 0.47);
///
/// let full = DensityConfig::fully_populated();
/// assert_eq!(full.rack_fill_ratio, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DensityConfig {
    /// Usable height of one rack, in U
    /// Default: 42
    pub rack_units: f64,

    /// Floor area per rack including aisle share, in m²
    /// Default: 4.379
    pub rack_footprint_m2: f64,

    /// Fraction of rack units holding servers
    /// Default: 0.47
    pub rack_fill_ratio: f64,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            rack_units: 42.0,
            rack_footprint_m2: 4.379,
            rack_fill_ratio: 0.47,
        }
    }
}

impl DensityConfig {
    /// Every rack unit holds a server
    pub fn fully_populated() -> Self {
        Self {
            rack_fill_ratio: 1.0,
            ..Self::default()
        }
    }

    /// Power per m² of floor for a per-U power figure
    pub fn power_density(&self, watts_per_u: f64) -> f64 {
        watts_per_u * self.rack_units / self.rack_footprint_m2 * self.rack_fill_ratio
    }

    /// Cores per rack for a per-U core count
    pub fn cores_per_rack(&self, cores_per_u: f64) -> f64 {
        cores_per_u * self.rack_units * self.rack_fill_ratio
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let positive = |name: &str, value: f64| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(format!("{} must be a positive number, got {}", name, value))
            }
        };
        positive("rack_units", self.rack_units)?;
        positive("rack_footprint_m2", self.rack_footprint_m2)?;
        positive("rack_fill_ratio", self.rack_fill_ratio)?;

        if self.rack_fill_ratio > 1.0 {
            return Err(format!(
                "rack_fill_ratio must not exceed 1.0, got {}",
                self.rack_fill_ratio
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize TOML: {}", e))
    }
}
