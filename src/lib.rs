//! # Dominant Blue
//!
//! Extracts a single representative blue from an image.
//!
//! Every pixel is converted to HSV and kept if it falls in the blue window
//! (hue strictly between 0.55 and 0.75, saturation above 0.4, value above
//! 0.2). The kept pixels are floor-averaged per channel and reported as a
//! `#rrggbb` hex string. No matching pixels is a normal outcome (`None`),
//! distinct from a failure to load the image (`Err`).
//!
//! ## Example
//!
//! ```rust,no_run
//! use dominant_blue::analyze_image;
//! use std::path::Path;
//!
//! match analyze_image(Path::new("photo.jpg"))? {
//!     Some(blue) => println!("FOUND_COLOR:{}", blue.hex()),
//!     None => println!("NO_BLUE_FOUND"),
//! }
//! # Ok::<(), dominant_blue::ExtractionError>(())
//! ```
//!
//! The core also works on pixels supplied directly:
//!
//! ```
//! use dominant_blue::{extract_dominant_blue, Rgb};
//!
//! let blue = extract_dominant_blue([Rgb::new(0, 0, 200)]).unwrap();
//! assert_eq!(blue.hex(), "#0000c8");
//! ```

use std::path::Path;

pub mod error;
pub mod constants;
pub mod color;
pub mod config;
pub mod image_loader;

pub use error::{Channel, ExtractionError, Result};
pub use color::{
    classify, extract_dominant_blue, extract_dominant_blue_from_channels, is_blue,
    par_extract_dominant_blue, pixels_from_channels, rgb_to_hsv, to_hex, BlueAccumulator,
    DominantBlue, Hsv, Rgb,
};
pub use config::{ResizeConfig, ResizeFilter, SamplingConfig};

/// Extract the dominant blue from an image file using the default sampling
///
/// # Arguments
///
/// * `image_path` - Path to the image file
///
/// # Returns
///
/// The dominant blue, or `None` if the image has no blue pixels
///
/// # Errors
///
/// Returns `ExtractionError` if the image cannot be loaded. An image without
/// blue pixels is `Ok(None)`.
pub fn analyze_image(image_path: &Path) -> Result<Option<DominantBlue>> {
    analyze_image_with_config(image_path, &SamplingConfig::default())
}

/// Extract the dominant blue from an image file
///
/// # Arguments
///
/// * `image_path` - Path to the image file; format is detected from content
/// * `config` - Resize and threading options for sampling
///
/// # Returns
///
/// The dominant blue, or `None` if the sampled pixels contain no blue
///
/// # Errors
///
/// Returns `ExtractionError` if:
/// - The image format is not one the decoder supports
/// - The image cannot be opened or decoded
/// - `config` is invalid
pub fn analyze_image_with_config(
    image_path: &Path,
    config: &SamplingConfig,
) -> Result<Option<DominantBlue>> {
    config.validate()?;
    let img = image_loader::load_image(image_path)?;
    let pixels = image_loader::sample_pixels(&img, config)?;

    let result = if config.parallel {
        par_extract_dominant_blue(&pixels)
    } else {
        extract_dominant_blue(pixels)
    };

    match &result {
        Some(blue) => log::info!(
            "{}: dominant blue {} from {} of {} pixels",
            image_path.display(),
            blue.hex(),
            blue.matched_pixels,
            blue.scanned_pixels
        ),
        None => log::info!("{}: no blue pixels", image_path.display()),
    }

    Ok(result)
}
