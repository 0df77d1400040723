//! Dominant blue extraction
//!
//! Scans a pixel sequence, keeps the pixels classified as blue and reduces
//! them to one color:
//! - Per-channel sums and a match count, never the matched pixels themselves
//! - Floor integer average per channel
//! - Hex encoding of the average
//!
//! The reduction is commutative and associative, so partial accumulators from
//! any split of the input merge to the same result.

use rayon::prelude::*;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::constants::performance::{PARALLEL_CHUNK_SIZE, PARALLEL_THRESHOLD};
use crate::error::Result;

use super::classify::classify;
use super::conversion::{pixels_from_channels, Rgb};

/// Extraction result for an image with at least one blue pixel
///
/// Serializes with a derived `hex` field; deserialization reads `color` and
/// ignores any stored `hex`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DominantBlue {
    /// Floor average of the matched pixels
    pub color: Rgb,
    /// Number of pixels classified as blue
    pub matched_pixels: u64,
    /// Number of pixels scanned
    pub scanned_pixels: u64,
}

impl DominantBlue {
    /// `color` as "#rrggbb"
    pub fn hex(&self) -> String {
        self.color.to_hex()
    }

    /// Fraction of scanned pixels that were blue
    pub fn coverage(&self) -> f64 {
        if self.scanned_pixels == 0 {
            return 0.0;
        }
        self.matched_pixels as f64 / self.scanned_pixels as f64
    }
}

impl Serialize for DominantBlue {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("DominantBlue", 4)?;
        state.serialize_field("color", &self.color)?;
        state.serialize_field("hex", &self.hex())?;
        state.serialize_field("matched_pixels", &self.matched_pixels)?;
        state.serialize_field("scanned_pixels", &self.scanned_pixels)?;
        state.end()
    }
}

/// Running per-channel sums over matched pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlueAccumulator {
    sum_r: u64,
    sum_g: u64,
    sum_b: u64,
    matched: u64,
    scanned: u64,
}

impl BlueAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `pixel` and accumulate it if it is blue
    pub fn push(&mut self, pixel: Rgb) {
        self.scanned += 1;
        if classify(pixel) {
            self.sum_r += pixel.r as u64;
            self.sum_g += pixel.g as u64;
            self.sum_b += pixel.b as u64;
            self.matched += 1;
        }
    }

    /// Combine two partial accumulators
    pub fn merge(mut self, other: Self) -> Self {
        self.sum_r += other.sum_r;
        self.sum_g += other.sum_g;
        self.sum_b += other.sum_b;
        self.matched += other.matched;
        self.scanned += other.scanned;
        self
    }

    /// Number of blue pixels seen so far
    pub fn matched(&self) -> u64 {
        self.matched
    }

    /// Number of pixels seen so far
    pub fn scanned(&self) -> u64 {
        self.scanned
    }

    /// Floor average of the matched pixels, `None` if nothing matched
    pub fn average(&self) -> Option<Rgb> {
        if self.matched == 0 {
            return None;
        }

        // Each average is at most 255 because every summand is
        let channel = |sum: u64| (sum / self.matched) as u8;
        Some(Rgb::new(
            channel(self.sum_r),
            channel(self.sum_g),
            channel(self.sum_b),
        ))
    }

    /// Final result, `None` if nothing matched
    pub fn finish(self) -> Option<DominantBlue> {
        let color = self.average()?;
        Some(DominantBlue {
            color,
            matched_pixels: self.matched,
            scanned_pixels: self.scanned,
        })
    }
}

impl FromIterator<Rgb> for BlueAccumulator {
    fn from_iter<I: IntoIterator<Item = Rgb>>(iter: I) -> Self {
        let mut acc = Self::new();
        iter.into_iter().for_each(|pixel| acc.push(pixel));
        acc
    }
}

impl Extend<Rgb> for BlueAccumulator {
    fn extend<I: IntoIterator<Item = Rgb>>(&mut self, iter: I) {
        iter.into_iter().for_each(|pixel| self.push(pixel));
    }
}

/// Extract the dominant blue from a pixel sequence
///
/// # Arguments
///
/// * `pixels` - Pixels in any order; raster order for images
///
/// # Returns
///
/// The floor average of the blue pixels with match statistics, or `None`
/// when no pixel is classified as blue (including an empty sequence)
///
/// # Example
///
/// ```
/// use dominant_blue::{extract_dominant_blue, Rgb};
///
/// let pixels = [Rgb::new(0, 0, 255), Rgb::new(0, 0, 254), Rgb::new(255, 0, 0)];
/// let blue = extract_dominant_blue(pixels).unwrap();
/// assert_eq!(blue.hex(), "#0000fe");
/// assert_eq!(blue.matched_pixels, 2);
/// ```
pub fn extract_dominant_blue<I>(pixels: I) -> Option<DominantBlue>
where
    I: IntoIterator<Item = Rgb>,
{
    let acc: BlueAccumulator = pixels.into_iter().collect();
    log::debug!(
        "Scanned {} pixels, {} classified blue",
        acc.scanned(),
        acc.matched()
    );
    acc.finish()
}

/// Multi-threaded variant of [`extract_dominant_blue`]
///
/// Produces the same result. Inputs smaller than `PARALLEL_THRESHOLD` are
/// scanned on the calling thread.
///
/// # Arguments
///
/// * `pixels` - Pixel slice, split into chunks across the rayon pool
///
/// # Returns
///
/// Same as [`extract_dominant_blue`] for the same pixels
pub fn par_extract_dominant_blue(pixels: &[Rgb]) -> Option<DominantBlue> {
    if pixels.len() < PARALLEL_THRESHOLD {
        return extract_dominant_blue(pixels.iter().copied());
    }

    let acc = pixels
        .par_chunks(PARALLEL_CHUNK_SIZE)
        .fold(BlueAccumulator::new, |mut acc, chunk| {
            acc.extend(chunk.iter().copied());
            acc
        })
        .reduce(BlueAccumulator::new, BlueAccumulator::merge);

    log::debug!(
        "Scanned {} pixels across threads, {} classified blue",
        acc.scanned(),
        acc.matched()
    );
    acc.finish()
}

/// Validate untyped channel triples, then extract
///
/// # Arguments
///
/// * `rows` - One `[r, g, b]` row per pixel, each value expected in [0, 255]
///
/// # Returns
///
/// `Ok(Some(_))` with the dominant blue, `Ok(None)` if no pixel is blue
///
/// # Errors
///
/// `MalformedPixel` or `ChannelOutOfRange` for the first invalid pixel.
/// Finding no blue is `Ok(None)`.
pub fn extract_dominant_blue_from_channels<P>(rows: &[P]) -> Result<Option<DominantBlue>>
where
    P: AsRef<[i64]>,
{
    let pixels = pixels_from_channels(rows)?;
    Ok(extract_dominant_blue(pixels))
}
