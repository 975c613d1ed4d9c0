use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::gradient::Gradient;

/// Bundle of the six color gradients that give a lighting scenario its look.
/// Loaded once from RON and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingPreset {
    /// Human-readable preset name ("temperate", "desert", ...).
    pub name: String,
    /// Scene ambient light over the day.
    pub ambient: Gradient,
    /// Color of the directional sun light.
    pub directional: Gradient,
    /// Base fog color before the time-of-day tint.
    pub fog: Gradient,
    /// Sky material: zenith color.
    pub sky_top: Gradient,
    /// Sky material: color below the horizon line.
    pub sky_bottom: Gradient,
    /// Sky material: horizon line color.
    pub horizon: Gradient,
}

impl LightingPreset {
    /// A preset whose every gradient is the same solid color.
    pub fn uniform(name: impl Into<String>, color: Color) -> Self {
        let g = Gradient::solid(color);
        Self {
            name: name.into(),
            ambient: g.clone(),
            directional: g.clone(),
            fog: g.clone(),
            sky_top: g.clone(),
            sky_bottom: g.clone(),
            horizon: g,
        }
    }

    /// Iterate `(field name, gradient)` pairs, in declaration order.
    pub fn gradients(&self) -> [(&'static str, &Gradient); 6] {
        [
            ("ambient", &self.ambient),
            ("directional", &self.directional),
            ("fog", &self.fog),
            ("sky_top", &self.sky_top),
            ("sky_bottom", &self.sky_bottom),
            ("horizon", &self.horizon),
        ]
    }
}
