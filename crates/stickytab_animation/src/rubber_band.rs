//! Rubber-band overscroll and bounds clamping

/// Drag resistance constant used by native scroll views
pub const RUBBER_BAND_CONSTANT: f32 = 0.55;

/// Map an out-of-bounds overshoot to a damped visual displacement.
///
/// `(k * |offset| * dimension) / (dimension + k * |offset|)` with the sign of
/// `offset` preserved. Zero at zero, increasing in `|offset|`, and always
/// below `dimension`. Non-positive dimensions have no room to stretch into
/// and yield zero.
pub fn rubber_band_distance(offset: f32, dimension: f32) -> f32 {
    rubber_band_distance_with(offset, dimension, RUBBER_BAND_CONSTANT)
}

/// [`rubber_band_distance`] with an explicit resistance constant
pub fn rubber_band_distance_with(offset: f32, dimension: f32, constant: f32) -> f32 {
    if offset == 0.0 || dimension <= 0.0 || !offset.is_finite() {
        return 0.0;
    }

    let magnitude = offset.abs();
    let result = (constant * magnitude * dimension) / (dimension + constant * magnitude);

    if offset < 0.0 {
        -result
    } else {
        result
    }
}

/// Clamp `offset` into `[min, max]`.
///
/// Unlike [`f32::clamp`] this never panics: when content is shorter than
/// its viewport `max` can fall below `min`, and the result is `min`.
pub fn clamp_to_bounds(offset: f32, min: f32, max: f32) -> f32 {
    offset.min(max).max(min)
}
