use daycycle_core::color::Color;
use daycycle_core::constants::{NIGHT_END, NIGHT_START, SUNRISE_WINDOW, SUNSET_WINDOW};
use daycycle_core::math::clamp_unit;
use daycycle_core::preset::LightingPreset;
use daycycle_core::settings::FogSettings;
use serde::{Deserialize, Serialize};

/// Fog falloff model. The cycle always drives `ExponentialSquared`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u32)]
pub enum FogMode {
    Linear = 1,
    Exponential = 2,
    ExponentialSquared = 3,
}

impl FogMode {
    /// Convert to u32 for GPU uniform upload.
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

/// Which tint applies to the fog at a given time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FogTint {
    Sunrise,
    Sunset,
    Night,
    None,
}

impl FogTint {
    /// Classify a day fraction. Checked in order sunrise, sunset, night;
    /// the sunrise/sunset windows are open intervals while night is closed,
    /// so exactly 0.2 and 0.8 count as night.
    pub fn at(time_percent: f32) -> FogTint {
        let t = time_percent;
        if t > SUNRISE_WINDOW.0 && t < SUNRISE_WINDOW.1 {
            FogTint::Sunrise
        } else if t > SUNSET_WINDOW.0 && t < SUNSET_WINDOW.1 {
            FogTint::Sunset
        } else if t >= NIGHT_START || t <= NIGHT_END {
            FogTint::Night
        } else {
            FogTint::None
        }
    }

    pub fn color(self, fog: &FogSettings) -> Option<Color> {
        match self {
            FogTint::Sunrise => Some(fog.sunrise_tint),
            FogTint::Sunset => Some(fog.sunset_tint),
            FogTint::Night => Some(fog.night_tint),
            FogTint::None => None,
        }
    }
}

pub fn fog_density(fog: &FogSettings, time_percent: f32) -> f32 {
    fog.density_curve.evaluate(time_percent)
}

/// Base fog color from the preset, blended toward the active tint.
/// The blend never extrapolates past the tint.
pub fn fog_color(preset: &LightingPreset, fog: &FogSettings, time_percent: f32) -> Color {
    let base = preset.fog.evaluate(time_percent);
    match FogTint::at(time_percent).color(fog) {
        Some(tint) => base.lerp(tint, clamp_unit(fog.tint_intensity)),
        None => base,
    }
}
