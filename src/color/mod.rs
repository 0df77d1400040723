//! Color conversion, classification and aggregation
//!
//! This module handles RGB to HSV conversion, the blue-membership test,
//! and reduction of the matched pixels to one representative color.

pub mod conversion;
pub mod classify;
pub mod analysis;

pub use conversion::{pixels_from_channels, rgb_to_hsv, to_hex, Hsv, Rgb};
pub use classify::{classify, is_blue};
pub use analysis::{
    extract_dominant_blue, extract_dominant_blue_from_channels, par_extract_dominant_blue,
    BlueAccumulator, DominantBlue,
};
