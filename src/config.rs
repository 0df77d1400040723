//! Sampling configuration for the image loader.
//!
//! Controls how an image file becomes a pixel sequence before extraction:
//! the raster it is resized to, the resampling filter, and whether the scan
//! runs on multiple threads. Classification thresholds are fixed and are not
//! part of this configuration.
//!
//! # Configuration Loading
//!
//! ```no_run
//! use dominant_blue::SamplingConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = SamplingConfig::from_json_file(Path::new("sampling.json"))?;
//!
//! // Or use defaults (150 x 150, bicubic)
//! let config = SamplingConfig::default();
//! # Ok::<(), dominant_blue::ExtractionError>(())
//! ```

use std::path::Path;

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

use crate::constants::sampling::{RESIZE_HEIGHT, RESIZE_WIDTH};
use crate::error::{ExtractionError, Result};

/// How an image is turned into a pixel sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingConfig {
    /// Resize before sampling; `None` samples every pixel of the original
    #[serde(default)]
    pub resize: Option<ResizeConfig>,

    /// Scan pixels on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,
}

/// Fixed raster the image is resized to. Aspect ratio is not preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResizeConfig {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub filter: ResizeFilter,
}

/// Resampling filter used when resizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeFilter {
    Nearest,
    Triangle,
    /// Bicubic
    #[default]
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl From<ResizeFilter> for FilterType {
    fn from(filter: ResizeFilter) -> Self {
        match filter {
            ResizeFilter::Nearest => FilterType::Nearest,
            ResizeFilter::Triangle => FilterType::Triangle,
            ResizeFilter::CatmullRom => FilterType::CatmullRom,
            ResizeFilter::Gaussian => FilterType::Gaussian,
            ResizeFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            width: RESIZE_WIDTH,
            height: RESIZE_HEIGHT,
            filter: ResizeFilter::default(),
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            resize: Some(ResizeConfig::default()),
            parallel: false,
        }
    }
}

impl SamplingConfig {
    /// Sample every pixel at the original resolution
    pub fn full_resolution() -> Self {
        Self {
            resize: None,
            parallel: false,
        }
    }

    /// Check parameters that the type system cannot
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if a resize dimension is zero
    pub fn validate(&self) -> Result<()> {
        if let Some(resize) = &self.resize {
            if resize.width == 0 {
                return Err(ExtractionError::InvalidParameter {
                    parameter: "resize.width".to_string(),
                    value: resize.width.to_string(),
                });
            }
            if resize.height == 0 {
                return Err(ExtractionError::InvalidParameter {
                    parameter: "resize.height".to_string(),
                    value: resize.height.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ExtractionError::config(format!("Failed to read {}", path.display()), e)
        })?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            ExtractionError::config(format!("Failed to parse {}", path.display()), e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ExtractionError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            ExtractionError::config(format!("Failed to write {}", path.display()), e)
        })?;
        Ok(())
    }
}
