//! Sky gradient sampling for a procedural sky material.
//! The three colors are always produced; hosts without a sky material
//! simply ignore them.

use daycycle_core::color::Color;
use daycycle_core::preset::LightingPreset;
use serde::{Deserialize, Serialize};

/// Material parameter receiving the zenith color.
pub const SKY_TOP_PARAM: &str = "_SkyGradientTop";

/// Material parameter receiving the color below the horizon.
pub const SKY_BOTTOM_PARAM: &str = "_SkyGradientBottom";

/// Material parameter receiving the horizon line color.
pub const HORIZON_PARAM: &str = "_HorizonLineColor";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SkyColors {
    pub top: Color,
    pub bottom: Color,
    pub horizon: Color,
}

impl SkyColors {
    /// `(material parameter, color)` pairs for a sky material.
    pub fn named(&self) -> [(&'static str, Color); 3] {
        [
            (SKY_TOP_PARAM, self.top),
            (SKY_BOTTOM_PARAM, self.bottom),
            (HORIZON_PARAM, self.horizon),
        ]
    }
}

pub fn sample_sky(preset: &LightingPreset, time_percent: f32) -> SkyColors {
    SkyColors {
        top: preset.sky_top.evaluate(time_percent),
        bottom: preset.sky_bottom.evaluate(time_percent),
        horizon: preset.horizon.evaluate(time_percent),
    }
}
