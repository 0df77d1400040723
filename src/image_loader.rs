//! Image loading and pixel sampling
//!
//! Decodes image files with the `image` crate and turns them into the
//! raster-order pixel sequence that extraction consumes.
//!
//! ## Supported Formats
//!
//! - JPEG, PNG, GIF (first frame), WebP, TIFF, BMP, ICO, TGA, PNM, QOI
//!
//! ## Design
//!
//! Resizing happens here, not in the extraction core. The default samples a
//! fixed 150 x 150 raster; see [`SamplingConfig`].

use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader, RgbImage};

use crate::color::Rgb;
use crate::config::SamplingConfig;
use crate::error::{ExtractionError, Result};

/// Supported image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// JPEG image
    Jpeg,
    /// PNG image
    Png,
    /// GIF image (first frame only)
    Gif,
    /// WebP image
    WebP,
    /// TIFF image
    Tiff,
    /// BMP image
    Bmp,
    /// ICO image
    Ico,
    /// TGA image
    Tga,
    /// PNM image (PBM, PGM, PPM)
    Pnm,
    /// QOI image
    Qoi,
}

impl ImageFormat {
    /// Detect format from file extension
    ///
    /// Only used to list and check extensions; `load_image` sniffs the content.
    pub fn from_extension(path: &Path) -> Option<ImageFormat> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "png" => Some(ImageFormat::Png),
            "gif" => Some(ImageFormat::Gif),
            "webp" => Some(ImageFormat::WebP),
            "tiff" | "tif" => Some(ImageFormat::Tiff),
            "bmp" => Some(ImageFormat::Bmp),
            "ico" => Some(ImageFormat::Ico),
            "tga" => Some(ImageFormat::Tga),
            "pbm" | "pgm" | "ppm" | "pnm" => Some(ImageFormat::Pnm),
            "qoi" => Some(ImageFormat::Qoi),
            _ => None,
        }
    }
}

/// Load and decode an image file
///
/// The format is guessed from the file's leading bytes, falling back to the
/// extension, so a PNG saved as `photo` or `photo.dat` still loads.
///
/// # Arguments
///
/// * `path` - Path to the image file
///
/// # Returns
///
/// The decoded image at full resolution
///
/// # Errors
///
/// - `UnsupportedFormat` if neither the content nor the extension names a
///   format the decoder handles
/// - `ImageLoadError` if the file cannot be opened or decoded
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path).map_err(|e| {
        ExtractionError::image_load(format!("Failed to open image file: {}", path.display()), e)
    })?;

    let reader = reader.with_guessed_format().map_err(|e| {
        ExtractionError::image_load(format!("Failed to read image file: {}", path.display()), e)
    })?;

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => ExtractionError::UnsupportedFormat {
            path: path.display().to_string(),
        },
        e => ExtractionError::image_load(format!("Failed to decode image: {}", path.display()), e),
    })?;

    log::info!(
        "Loaded {} ({}x{})",
        path.display(),
        img.width(),
        img.height()
    );
    Ok(img)
}

/// Resize according to `config` and return the pixels in raster order
///
/// Alpha is dropped and higher bit depths are reduced to 8 bits per channel.
///
/// # Arguments
///
/// * `img` - Decoded image
/// * `config` - Resize options; `resize: None` keeps every pixel
///
/// # Errors
///
/// `InvalidParameter` if the configuration has a zero resize dimension
pub fn sample_pixels(img: &DynamicImage, config: &SamplingConfig) -> Result<Vec<Rgb>> {
    config.validate()?;

    let rgb = match &config.resize {
        Some(resize) => {
            log::debug!(
                "Resizing {}x{} to {}x{} ({:?})",
                img.width(),
                img.height(),
                resize.width,
                resize.height,
                resize.filter
            );
            img.resize_exact(resize.width, resize.height, resize.filter.into())
                .to_rgb8()
        }
        None => img.to_rgb8(),
    };

    Ok(pixels_from_rgb_image(&rgb))
}

/// Raster-order pixels of an 8-bit RGB buffer
pub fn pixels_from_rgb_image(img: &RgbImage) -> Vec<Rgb> {
    img.pixels().map(|&p| Rgb::from(p)).collect()
}

/// Get list of all supported file extensions
pub fn supported_extensions() -> &'static [&'static str] {
    &[
        "jpg", "jpeg", "png", "gif", "webp", "tiff", "tif", "bmp", "ico", "tga", "pbm", "pgm",
        "ppm", "pnm", "qoi",
    ]
}

/// Check if a file extension is supported
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    supported_extensions().contains(&ext_lower.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ResizeConfig, ResizeFilter};

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.jpg")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.JPEG")),
            Some(ImageFormat::Jpeg)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.png")),
            Some(ImageFormat::Png)
        );
        assert_eq!(
            ImageFormat::from_extension(Path::new("photo.webp")),
            Some(ImageFormat::WebP)
        );
        assert_eq!(ImageFormat::from_extension(Path::new("photo.xyz")), None);
        assert_eq!(ImageFormat::from_extension(Path::new("photo")), None);
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("jpg"));
        assert!(is_supported_extension("JPEG"));
        assert!(is_supported_extension("png"));
        assert!(!is_supported_extension("heic"));
        assert!(!is_supported_extension("doc"));

        for ext in supported_extensions() {
            let path = format!("image.{}", ext);
            assert!(ImageFormat::from_extension(Path::new(&path)).is_some());
        }
    }

    #[test]
    fn test_unsupported_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "shopping list: milk, eggs").unwrap();

        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_format_guessed_from_content() {
        let dir = tempfile::tempdir().unwrap();
        let img = RgbImage::from_pixel(3, 2, image::Rgb([0, 0, 200]));

        let bare = dir.path().join("photo");
        img.save_with_format(&bare, image::ImageFormat::Png).unwrap();
        let loaded = load_image(&bare).unwrap();
        assert_eq!((loaded.width(), loaded.height()), (3, 2));

        let mislabeled = dir.path().join("photo.dat");
        img.save_with_format(&mislabeled, image::ImageFormat::Png).unwrap();
        assert_eq!(load_image(&mislabeled).unwrap().to_rgb8(), img);
    }

    #[test]
    fn test_missing_file() {
        let err = load_image(Path::new("nonexistent_file.png")).unwrap_err();
        assert!(matches!(err, ExtractionError::ImageLoadError { .. }));
    }

    #[test]
    fn test_pixels_in_raster_order() {
        // 2x2 image: red, green, blue, white
        let img = RgbImage::from_raw(
            2,
            2,
            vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255],
        )
        .unwrap();

        let pixels = pixels_from_rgb_image(&img);
        assert_eq!(
            pixels,
            vec![
                Rgb::new(255, 0, 0),
                Rgb::new(0, 255, 0),
                Rgb::new(0, 0, 255),
                Rgb::new(255, 255, 255),
            ]
        );
    }

    #[test]
    fn test_sample_resizes() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(300, 200, image::Rgb([0, 0, 200])));

        let pixels = sample_pixels(&img, &SamplingConfig::default()).unwrap();
        assert_eq!(pixels.len(), 150 * 150);
        assert!(pixels.iter().all(|&p| p == Rgb::new(0, 0, 200)));

        let pixels = sample_pixels(&img, &SamplingConfig::full_resolution()).unwrap();
        assert_eq!(pixels.len(), 300 * 200);
    }

    #[test]
    fn test_sample_drops_alpha() {
        let img = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            4,
            4,
            image::Rgba([0, 0, 255, 0]),
        ));
        let pixels = sample_pixels(&img, &SamplingConfig::full_resolution()).unwrap();
        assert!(pixels.iter().all(|&p| p == Rgb::new(0, 0, 255)));
    }

    #[test]
    fn test_sample_rejects_zero_size() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        let config = SamplingConfig {
            resize: Some(ResizeConfig {
                width: 8,
                height: 0,
                filter: ResizeFilter::Nearest,
            }),
            parallel: false,
        };
        assert!(sample_pixels(&img, &config).is_err());
    }
}
