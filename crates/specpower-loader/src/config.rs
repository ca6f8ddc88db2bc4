//! Loader configuration
//!
//! Controls which files count as reports and the order rows appear in.

use serde::{Deserialize, Serialize};

/// Order of rows in the loaded dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowOrder {
    /// Sorted by file name, byte-wise
    #[default]
    FileName,

    /// Whatever order the platform lists the directory in
    Enumeration,
}

/// Configuration for the corpus loader
///
/// # Examples
///
/// ```
/// use specpower_loader::{LoaderConfig, RowOrder};
///
/// let config = LoaderConfig::default();
/// assert_eq!(config.extension, "txt");
/// assert_eq!(config.row_order, RowOrder::FileName);
/// assert!(!config.parallel);
///
/// let config = LoaderConfig::parallel();
/// assert!(config.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// File name suffix a report must end with, without the dot
    /// Default: "txt"
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Row order of the resulting dataset
    /// Default: sorted by file name
    #[serde(default)]
    pub row_order: RowOrder,

    /// Read and extract files on the rayon thread pool
    /// Default: false
    #[serde(default)]
    pub parallel: bool,
}

fn default_extension() -> String {
    "txt".to_string()
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            row_order: RowOrder::FileName,
            parallel: false,
        }
    }
}

impl LoaderConfig {
    /// Default configuration with parallel extraction enabled
    pub fn parallel() -> Self {
        Self {
            parallel: true,
            ..Self::default()
        }
    }

    /// Same configuration with a different extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.extension.is_empty() {
            return Err("extension must not be empty".to_string());
        }
        if self.extension.contains('/') || self.extension.contains('\\') {
            return Err(format!(
                "extension must not contain a path separator, got '{}'",
                self.extension
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
