pub mod color;
pub mod constants;
pub mod curve;
pub mod error;
pub mod gradient;
pub mod math;
pub mod preset;
pub mod settings;

pub use color::Color;
pub use curve::{Curve, CurveKey};
pub use error::{CurveError, GradientError, SettingsError};
pub use gradient::{Gradient, GradientKey};
pub use preset::LightingPreset;
pub use settings::{ClockSettings, FogSettings, LightingSettings, SunSettings};
