//! Single source of truth for shared lighting constants.
//! Defaults here back both the serde `#[serde(default)]` hooks and the
//! built-in presets.

/// Simulated hours in one full day.
pub const HOURS_PER_DAY: f32 = 24.0;

/// Default real-time length of one simulated day, in seconds.
/// At 24 s one simulated hour passes per real second.
pub const DEFAULT_DAY_LENGTH_SECONDS: f32 = 24.0;

/// Default sun azimuth (yaw) in degrees.
pub const DEFAULT_SUN_AZIMUTH_DEG: f32 = 170.0;

/// Upper bound for the sun azimuth slider, in degrees.
pub const MAX_SUN_AZIMUTH_DEG: f32 = 360.0;

/// Default blend strength of the time-of-day fog tint.
pub const DEFAULT_FOG_TINT_INTENSITY: f32 = 0.6;

/// Fog density at midnight (start and end of the default density curve).
pub const DEFAULT_FOG_DENSITY_NIGHT: f32 = 0.02;

/// Fog density at noon (midpoint of the default density curve).
pub const DEFAULT_FOG_DENSITY_NOON: f32 = 0.002;

/// Default sunrise fog tint (warm orange).
pub const DEFAULT_SUNRISE_TINT: [f32; 3] = [1.0, 0.6, 0.4];

/// Default sunset fog tint (deeper orange).
pub const DEFAULT_SUNSET_TINT: [f32; 3] = [1.0, 0.5, 0.3];

/// Default night fog tint (cool blue).
pub const DEFAULT_NIGHT_TINT: [f32; 3] = [0.4, 0.5, 0.8];

/// Sunrise window on the normalized day, exclusive at both ends.
pub const SUNRISE_WINDOW: (f32, f32) = (0.2, 0.3);

/// Sunset window on the normalized day, exclusive at both ends.
pub const SUNSET_WINDOW: (f32, f32) = (0.7, 0.8);

/// Night starts at or after this fraction...
pub const NIGHT_START: f32 = 0.8;

/// ...and lasts until (inclusive) this fraction.
pub const NIGHT_END: f32 = 0.2;

/// Pitch offset in degrees so the sun sits at the horizon at midnight.
pub const SUN_PITCH_OFFSET_DEG: f32 = -90.0;
