use crate::constants::HOURS_PER_DAY;

/// Wrap an hour value into [0, HOURS_PER_DAY).
/// Uses Euclidean remainder so negative inputs wrap from the end of the day.
pub fn wrap_hours(hours: f32) -> f32 {
    if !hours.is_finite() {
        return 0.0;
    }
    let wrapped = hours.rem_euclid(HOURS_PER_DAY);
    // rem_euclid can round up to exactly HOURS_PER_DAY for tiny negatives
    if wrapped >= HOURS_PER_DAY {
        0.0
    } else {
        wrapped
    }
}

/// Convert hours to the normalized day fraction in [0, 1).
pub fn time_percent(hours: f32) -> f32 {
    wrap_hours(hours) / HOURS_PER_DAY
}

/// Hours advanced per real second for a day of the given length.
pub fn hours_per_second(day_length_seconds: f32) -> f32 {
    HOURS_PER_DAY / day_length_seconds
}

/// Clamp a sample position into [0, 1]. NaN maps to 0.
pub fn clamp_unit(t: f32) -> f32 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}
