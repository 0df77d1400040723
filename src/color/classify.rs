//! Blue-membership predicate

use crate::constants::thresholds::{HUE_MAX, HUE_MIN, SATURATION_MIN, VALUE_MIN};

use super::conversion::{Hsv, Rgb};

/// Whether an HSV color counts as blue
///
/// All bounds are exclusive: hue strictly inside (0.55, 0.75), saturation
/// above 0.4 and value above 0.2.
///
/// # Arguments
///
/// * `hsv` - Color with hue in [0, 1)
///
/// # Returns
///
/// `true` if every bound holds
pub fn is_blue(hsv: Hsv) -> bool {
    let hue_in_window = HUE_MIN < hsv.hue && hsv.hue < HUE_MAX;
    hue_in_window && hsv.saturation > SATURATION_MIN && hsv.value > VALUE_MIN
}

/// Convert and classify in one step
pub fn classify(rgb: Rgb) -> bool {
    is_blue(rgb.to_hsv())
}
