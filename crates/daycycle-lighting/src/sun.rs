use daycycle_core::constants::SUN_PITCH_OFFSET_DEG;
use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Euler orientation of the directional light, in degrees.
///
/// Applied roll first, then pitch about X, then yaw about Y. Pitch 90 points
/// the light straight down (sun overhead), pitch -90 straight up (sun below
/// the horizon).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunRotation {
    pub pitch_degrees: f32,
    pub yaw_degrees: f32,
    pub roll_degrees: f32,
}

impl SunRotation {
    pub fn to_quat(self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw_degrees.to_radians(),
            self.pitch_degrees.to_radians(),
            self.roll_degrees.to_radians(),
        )
    }

    /// Direction the light travels (its rotated +Z axis).
    pub fn direction(self) -> Vec3 {
        self.to_quat() * Vec3::Z
    }

    /// Angle of the sun above the horizon in degrees, -90..=90.
    pub fn elevation_degrees(self) -> f32 {
        let dir = self.direction();
        let horizontal = (dir.x * dir.x + dir.z * dir.z).sqrt();
        (-dir.y).atan2(horizontal).to_degrees()
    }

    pub fn is_above_horizon(self) -> bool {
        self.elevation_degrees() > 0.0
    }
}

/// Sun orientation for a normalized day fraction.
/// Pitch sweeps a full circle per day: -90 at midnight, 90 at noon.
pub fn sun_rotation(time_percent: f32, azimuth_degrees: f32) -> SunRotation {
    SunRotation {
        pitch_degrees: time_percent * 360.0 + SUN_PITCH_OFFSET_DEG,
        yaw_degrees: azimuth_degrees,
        roll_degrees: 0.0,
    }
}
