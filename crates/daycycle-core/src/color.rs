use glam::{Vec3, Vec4};
use serde::{Deserialize, Serialize};

fn default_alpha() -> f32 {
    1.0
}

/// Linear RGBA color, 0.0–1.0 per channel.
///
/// Stored in RON as `(r: 1.0, g: 0.5, b: 0.2)`; alpha is optional and
/// defaults to opaque.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "default_alpha")]
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    /// Mid grey returned when a gradient has nothing to sample.
    pub const NEUTRAL: Color = Color::rgb(0.5, 0.5, 0.5);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb_array(rgb: [f32; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Component-wise linear interpolation, alpha included. `t` is not clamped.
    /// Written as a weighted sum so `t == 1.0` yields `other` exactly.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        (self.to_vec4() * (1.0 - t) + other.to_vec4() * t).into()
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r, self.g, self.b)
    }

    pub fn to_vec4(self) -> Vec4 {
        Vec4::new(self.r, self.g, self.b, self.a)
    }

    pub fn to_rgb_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// True when every channel differs by at most `epsilon`.
    pub fn approx_eq(self, other: Color, epsilon: f32) -> bool {
        self.to_vec4().abs_diff_eq(other.to_vec4(), epsilon)
    }
}

impl From<Vec3> for Color {
    fn from(v: Vec3) -> Self {
        Color::rgb(v.x, v.y, v.z)
    }
}

impl From<Vec4> for Color {
    fn from(v: Vec4) -> Self {
        Color::rgba(v.x, v.y, v.z, v.w)
    }
}

impl From<[f32; 3]> for Color {
    fn from(rgb: [f32; 3]) -> Self {
        Color::from_rgb_array(rgb)
    }
}
