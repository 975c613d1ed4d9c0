use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::constants::*;
use crate::curve::{Curve, CurveKey};
use crate::error::SettingsError;

/// Samples taken along the fog curve when checking for negative density.
const FOG_CURVE_SAMPLES: u32 = 64;

/// Fog density and tint configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FogSettings {
    /// Fog density over the normalized day.
    pub density_curve: Curve,
    /// Blend strength toward the time-of-day tint (0.0–1.0).
    pub tint_intensity: f32,
    pub sunrise_tint: Color,
    pub sunset_tint: Color,
    pub night_tint: Color,
}

impl FogSettings {
    /// Thick fog at midnight, thin at noon.
    pub fn default_density_curve() -> Curve {
        Curve::new(vec![
            CurveKey::new(0.0, DEFAULT_FOG_DENSITY_NIGHT),
            CurveKey::new(0.5, DEFAULT_FOG_DENSITY_NOON),
            CurveKey::new(1.0, DEFAULT_FOG_DENSITY_NIGHT),
        ])
        .unwrap_or_else(|_| Curve::constant(DEFAULT_FOG_DENSITY_NOON))
    }
}

impl Default for FogSettings {
    fn default() -> Self {
        Self {
            density_curve: Self::default_density_curve(),
            tint_intensity: DEFAULT_FOG_TINT_INTENSITY,
            sunrise_tint: Color::from_rgb_array(DEFAULT_SUNRISE_TINT),
            sunset_tint: Color::from_rgb_array(DEFAULT_SUNSET_TINT),
            night_tint: Color::from_rgb_array(DEFAULT_NIGHT_TINT),
        }
    }
}

/// Sun orientation configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunSettings {
    /// Horizontal rotation (yaw) of the sun path, 0–360 degrees.
    pub azimuth_degrees: f32,
}

impl Default for SunSettings {
    fn default() -> Self {
        Self {
            azimuth_degrees: DEFAULT_SUN_AZIMUTH_DEG,
        }
    }
}

/// Simulation clock configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockSettings {
    /// Real seconds for one full simulated day. Must be > 0.
    pub day_length_seconds: f32,
    /// Time of day (hours) the clock starts at.
    pub start_hour: f32,
}

impl ClockSettings {
    pub fn has_valid_day_length(&self) -> bool {
        self.day_length_seconds.is_finite() && self.day_length_seconds > 0.0
    }
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            day_length_seconds: DEFAULT_DAY_LENGTH_SECONDS,
            start_hour: 0.0,
        }
    }
}

/// Everything besides the preset that shapes the lighting output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingSettings {
    pub fog: FogSettings,
    pub sun: SunSettings,
    pub clock: ClockSettings,
}

impl LightingSettings {
    /// Check every range constraint, collecting all violations.
    pub fn validate(&self) -> Result<(), Vec<SettingsError>> {
        let mut errors = Vec::new();

        let intensity = self.fog.tint_intensity;
        if !(0.0..=1.0).contains(&intensity) {
            errors.push(SettingsError::TintIntensityOutOfRange(intensity));
        }

        let azimuth = self.sun.azimuth_degrees;
        if !(0.0..=MAX_SUN_AZIMUTH_DEG).contains(&azimuth) {
            errors.push(SettingsError::AzimuthOutOfRange(azimuth));
        }

        if !self.clock.has_valid_day_length() {
            errors.push(SettingsError::InvalidDayLength(self.clock.day_length_seconds));
        }

        let start = self.clock.start_hour;
        if !(0.0..HOURS_PER_DAY).contains(&start) {
            errors.push(SettingsError::StartHourOutOfRange(start));
        }

        // Hermite tangents can overshoot below zero between keys
        for i in 0..=FOG_CURVE_SAMPLES {
            let time = i as f32 / FOG_CURVE_SAMPLES as f32;
            let value = self.fog.density_curve.evaluate(time);
            if value < 0.0 {
                errors.push(SettingsError::NegativeFogDensity { time, value });
                break;
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
