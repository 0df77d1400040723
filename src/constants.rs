//! Classification thresholds and sampling defaults
//!
//! The HSV thresholds are fixed: results stay comparable with existing
//! extractions only as long as these values do not change.

/// Largest value an 8-bit RGB channel can hold
pub const CHANNEL_MAX: u8 = 255;

/// Blue-membership thresholds on normalized HSV
pub mod thresholds {
    /// Lower hue bound, exclusive (198 degrees, cyan-leaning blue)
    pub const HUE_MIN: f64 = 0.55;

    /// Upper hue bound, exclusive (270 degrees, violet-leaning blue)
    pub const HUE_MAX: f64 = 0.75;

    /// Pure blue (240 degrees) as a fraction of the hue circle
    pub const HUE_PURE_BLUE: f64 = 240.0 / 360.0;

    /// Saturation floor, exclusive. Excludes washed-out and near-gray pixels.
    pub const SATURATION_MIN: f64 = 0.4;

    /// Value floor, exclusive. Excludes near-black pixels.
    pub const VALUE_MIN: f64 = 0.2;
}

/// Default sampling applied by the image loader
pub mod sampling {
    /// Width images are resized to before sampling
    pub const RESIZE_WIDTH: u32 = 150;

    /// Height images are resized to before sampling
    pub const RESIZE_HEIGHT: u32 = 150;
}

/// Performance tuning
pub mod performance {
    /// Pixel count below which the parallel scan falls back to a single thread
    pub const PARALLEL_THRESHOLD: usize = 64 * 1024;

    /// Pixels per rayon work item
    pub const PARALLEL_CHUNK_SIZE: usize = 4096;
}
