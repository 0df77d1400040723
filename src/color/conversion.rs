//! Color space conversion utilities
//!
//! Provides:
//! - Validated 8-bit RGB pixels
//! - RGB to HSV with hue normalized to [0, 1)
//! - Hex color representation

use std::fmt;
use std::str::FromStr;

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::constants::CHANNEL_MAX;
use crate::error::{Channel, ExtractionError, Result};

/// 8-bit RGB pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSV color with every component normalized to [0, 1]
///
/// Hue is a fraction of the full circle (degrees / 360) and lies in [0, 1).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Validate an untyped channel triple
    ///
    /// `index` is the pixel's position in its sequence and only feeds the
    /// error message.
    ///
    /// # Errors
    ///
    /// `MalformedPixel` if `channels` does not hold exactly three values,
    /// `ChannelOutOfRange` if any value is outside [0, 255]. Values are never
    /// clamped.
    pub fn try_from_channels(channels: &[i64], index: usize) -> Result<Self> {
        let [r, g, b] = channels else {
            return Err(ExtractionError::MalformedPixel {
                index,
                arity: channels.len(),
            });
        };

        let mut out = [0u8; 3];
        for (i, &value) in [*r, *g, *b].iter().enumerate() {
            out[i] = u8::try_from(value).map_err(|_| ExtractionError::ChannelOutOfRange {
                index,
                channel: Channel::from_index(i),
                value,
            })?;
        }

        Ok(Self::new(out[0], out[1], out[2]))
    }

    /// Convert to HSV
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }

    /// Hex color string (e.g. "#0000c8")
    pub fn to_hex(self) -> String {
        to_hex(self)
    }

    /// Parse a hex color string
    ///
    /// # Arguments
    ///
    /// * `hex` - Six hex digits, optionally prefixed with `#` (e.g. "#0000c8" or "0000C8")
    ///
    /// # Returns
    ///
    /// The parsed pixel
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the string is not six hex digits
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || ExtractionError::InvalidParameter {
            parameter: "hex color".to_string(),
            value: hex.to_string(),
        };

        // from_str_radix alone would accept a sign ("+f")
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ExtractionError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<image::Rgb<u8>> for Rgb {
    fn from(pixel: image::Rgb<u8>) -> Self {
        Self::from(pixel.0)
    }
}

impl From<Rgb> for Srgb<u8> {
    fn from(rgb: Rgb) -> Self {
        Srgb::new(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Srgb<u8>> for Rgb {
    fn from(srgb: Srgb<u8>) -> Self {
        Self::new(srgb.red, srgb.green, srgb.blue)
    }
}

impl Hsv {
    /// Whether this color falls inside the blue window
    pub fn is_blue(&self) -> bool {
        super::classify::is_blue(*self)
    }

    /// Hue in degrees [0, 360)
    pub fn hue_degrees(&self) -> f64 {
        self.hue * 360.0
    }
}

/// Convert an RGB pixel to HSV
///
/// Channels are normalized by 255. Value is the largest channel, saturation
/// is chroma over value, and hue is taken from whichever channel is largest,
/// checking red, then green, then blue. Gray pixels (zero chroma) get hue 0.
///
/// # Arguments
///
/// * `rgb` - Pixel with channels in [0, 255]
///
/// # Returns
///
/// HSV with hue in [0, 1) and saturation and value in [0, 1]
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let scale = CHANNEL_MAX as f64;
    let r = rgb.r as f64 / scale;
    let g = rgb.g as f64 / scale;
    let b = rgb.b as f64 / scale;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let value = max;

    if max == min {
        return Hsv {
            hue: 0.0,
            saturation: 0.0,
            value,
        };
    }

    let chroma = max - min;
    let saturation = chroma / max;

    // Distance of each channel below the maximum, in units of chroma
    let rc = (max - r) / chroma;
    let gc = (max - g) / chroma;
    let bc = (max - b) / chroma;

    let sector = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    Hsv {
        hue: (sector / 6.0).rem_euclid(1.0),
        saturation,
        value,
    }
}

/// Format a pixel as a hex color string
///
/// # Arguments
///
/// * `rgb` - Pixel to encode
///
/// # Returns
///
/// "#rrggbb", lowercase, each channel zero-padded to two digits
pub fn to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Validate a sequence of untyped channel triples
///
/// # Errors
///
/// Fails on the first pixel that is not a three-channel triple in [0, 255],
/// naming its index.
pub fn pixels_from_channels<P>(rows: &[P]) -> Result<Vec<Rgb>>
where
    P: AsRef<[i64]>,
{
    rows.iter()
        .enumerate()
        .map(|(index, channels)| Rgb::try_from_channels(channels.as_ref(), index))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::{FromColor, Hsv as PaletteHsv};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_pure_blue() {
        let hsv = rgb_to_hsv(Rgb::new(0, 0, 255));
        assert_close(hsv.hue, 2.0 / 3.0);
        assert_close(hsv.saturation, 1.0);
        assert_close(hsv.value, 1.0);
        assert!((hsv.hue_degrees() - 240.0).abs() < 1e-9);
    }

    #[test]
    fn test_primary_hues() {
        assert_close(rgb_to_hsv(Rgb::new(255, 0, 0)).hue, 0.0);
        assert_close(rgb_to_hsv(Rgb::new(0, 255, 0)).hue, 1.0 / 3.0);
        assert_close(rgb_to_hsv(Rgb::new(255, 255, 0)).hue, 1.0 / 6.0);
        assert_close(rgb_to_hsv(Rgb::new(0, 255, 255)).hue, 0.5);
    }

    #[test]
    fn test_negative_sector_wraps() {
        // Magenta-leaning red: max is red with g < b, hue just below 1.0
        let hsv = rgb_to_hsv(Rgb::new(255, 0, 10));
        assert!(hsv.hue > 0.99 && hsv.hue < 1.0);
    }

    #[test]
    fn test_gray_and_black() {
        let gray = rgb_to_hsv(Rgb::new(128, 128, 128));
        assert_eq!(gray.hue, 0.0);
        assert_eq!(gray.saturation, 0.0);
        assert_close(gray.value, 128.0 / 255.0);

        let black = rgb_to_hsv(Rgb::new(0, 0, 0));
        assert_eq!(black, Hsv::default());
    }

    #[test]
    fn test_ranges_over_full_cube() {
        for r in (0..=255u8).step_by(15) {
            for g in (0..=255u8).step_by(15) {
                for b in (0..=255u8).step_by(15) {
                    let hsv = Rgb::new(r, g, b).to_hsv();
                    assert!((0.0..1.0).contains(&hsv.hue), "hue {:?}", hsv);
                    assert!((0.0..=1.0).contains(&hsv.saturation));
                    assert!((0.0..=1.0).contains(&hsv.value));
                }
            }
        }
    }

    #[test]
    fn test_agrees_with_palette() {
        for &(r, g, b) in &[(12, 40, 200), (90, 30, 220), (10, 180, 240), (200, 120, 40)] {
            let ours = rgb_to_hsv(Rgb::new(r, g, b));
            let srgb: Srgb<f64> = Srgb::new(r, g, b).into_format();
            let theirs: PaletteHsv<palette::encoding::Srgb, f64> = PaletteHsv::from_color(srgb);

            assert!((ours.hue_degrees() - theirs.hue.into_positive_degrees()).abs() < 1e-6);
            assert!((ours.saturation - theirs.saturation).abs() < 1e-9);
            assert!((ours.value - theirs.value).abs() < 1e-9);
        }
    }

    #[test]
    fn test_to_hex_zero_padded_lowercase() {
        assert_eq!(to_hex(Rgb::new(0, 0, 200)), "#0000c8");
        assert_eq!(Rgb::new(5, 10, 255).to_hex(), "#050aff");
        assert_eq!(Rgb::new(0, 0, 0).to_hex().len(), 7);
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#0000c8").unwrap(), Rgb::new(0, 0, 200));
        assert_eq!("1A2B3C".parse::<Rgb>().unwrap(), Rgb::new(0x1a, 0x2b, 0x3c));
        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("#gggggg").is_err());
        assert!(Rgb::from_hex("#+f+f+f").is_err());
        assert!(Rgb::from_hex("+f+f+f").is_err());
        assert!(Rgb::from_hex("#-0-0-0").is_err());
    }

    #[test]
    fn test_palette_interop() {
        let srgb: Srgb<u8> = Rgb::new(1, 2, 3).into();
        assert_eq!((srgb.red, srgb.green, srgb.blue), (1, 2, 3));
        assert_eq!(Rgb::from(srgb), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_try_from_channels() {
        assert_eq!(
            Rgb::try_from_channels(&[0, 128, 255], 0).unwrap(),
            Rgb::new(0, 128, 255)
        );

        match Rgb::try_from_channels(&[0, 256, 0], 7) {
            Err(ExtractionError::ChannelOutOfRange {
                index,
                channel,
                value,
            }) => {
                assert_eq!(index, 7);
                assert_eq!(channel, Channel::Green);
                assert_eq!(value, 256);
            }
            other => panic!("expected ChannelOutOfRange, got {:?}", other),
        }

        assert!(matches!(
            Rgb::try_from_channels(&[-1, 0, 0], 0),
            Err(ExtractionError::ChannelOutOfRange {
                channel: Channel::Red,
                ..
            })
        ));
    }

    #[test]
    fn test_try_from_channels_wrong_arity() {
        assert!(matches!(
            Rgb::try_from_channels(&[1, 2], 3),
            Err(ExtractionError::MalformedPixel { index: 3, arity: 2 })
        ));
        assert!(matches!(
            Rgb::try_from_channels(&[1, 2, 3, 4], 0),
            Err(ExtractionError::MalformedPixel { arity: 4, .. })
        ));
    }

    #[test]
    fn test_pixels_from_channels_reports_first_bad_index() {
        let rows: Vec<Vec<i64>> = vec![vec![0, 0, 255], vec![0, 0, 200], vec![0, 0, 999], vec![1]];
        match pixels_from_channels(&rows) {
            Err(ExtractionError::ChannelOutOfRange { index, .. }) => assert_eq!(index, 2),
            other => panic!("expected ChannelOutOfRange, got {:?}", other),
        }

        let ok = pixels_from_channels(&[[0i64, 0, 255], [10, 20, 30]]).unwrap();
        assert_eq!(ok, vec![Rgb::new(0, 0, 255), Rgb::new(10, 20, 30)]);
    }
}
