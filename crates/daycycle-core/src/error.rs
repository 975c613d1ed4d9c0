use thiserror::Error;

/// Errors raised while constructing a color gradient.
#[derive(Debug, Error, PartialEq)]
pub enum GradientError {
    #[error("Gradient has no color keys")]
    Empty,

    #[error("Gradient key {index} has non-finite position {position}")]
    NonFinitePosition { index: usize, position: f32 },

    #[error("Gradient key {index} position {position} is outside [0, 1]")]
    PositionOutOfRange { index: usize, position: f32 },
}

/// Errors raised while constructing a scalar curve.
#[derive(Debug, Error, PartialEq)]
pub enum CurveError {
    #[error("Curve has no keys")]
    Empty,

    #[error("Curve key {index} is not finite (time {time}, value {value})")]
    NonFiniteKey { index: usize, time: f32, value: f32 },
}

/// Range violations in [`LightingSettings`](crate::settings::LightingSettings).
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("Fog tint intensity {0} is outside [0, 1]")]
    TintIntensityOutOfRange(f32),

    #[error("Sun azimuth {0} degrees is outside [0, {max}]", max = crate::constants::MAX_SUN_AZIMUTH_DEG)]
    AzimuthOutOfRange(f32),

    #[error("Day length must be a positive number of seconds, got {0}")]
    InvalidDayLength(f32),

    #[error("Start hour {0} is outside [0, 24)")]
    StartHourOutOfRange(f32),

    #[error("Fog density curve goes negative ({value}) at t={time}")]
    NegativeFogDensity { time: f32, value: f32 },
}
