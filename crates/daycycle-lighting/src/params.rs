use daycycle_core::color::Color;
use serde::{Deserialize, Serialize};

use crate::fog::FogMode;
use crate::sky::SkyColors;
use crate::sun::SunRotation;

/// Scene-wide settings: ambient light and fog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneLighting {
    pub ambient_color: Color,
    pub fog_enabled: bool,
    pub fog_mode: FogMode,
    pub fog_density: f32,
    pub fog_color: Color,
}

/// Color and orientation for the bound directional light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    pub color: Color,
    pub rotation: SunRotation,
}

/// Everything the cycle produces for one frame. Recomputed from scratch on
/// every evaluation and never fed back into the next one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderParameters {
    /// Day fraction these parameters were computed for, 0.0–1.0.
    pub time_percent: f32,
    pub scene: SceneLighting,
    pub sun: DirectionalLight,
    pub sky: SkyColors,
}
