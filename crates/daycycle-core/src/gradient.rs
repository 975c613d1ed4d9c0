use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::GradientError;
use crate::math::clamp_unit;

/// A single color stop on a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientKey {
    /// Normalized position on the day, 0.0–1.0.
    pub position: f32,
    pub color: Color,
}

impl GradientKey {
    pub const fn new(position: f32, color: Color) -> Self {
        Self { position, color }
    }
}

/// Piecewise-linear color function over [0, 1].
///
/// Keys are validated and sorted by position at construction and never
/// change afterwards, so evaluation cannot fail. Deserialization goes
/// through [`Gradient::new`], so malformed data is rejected at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<GradientKey>", into = "Vec<GradientKey>")]
pub struct Gradient {
    keys: Vec<GradientKey>,
}

impl Gradient {
    /// Build a gradient from unsorted keys.
    pub fn new(mut keys: Vec<GradientKey>) -> Result<Self, GradientError> {
        if keys.is_empty() {
            return Err(GradientError::Empty);
        }
        for (index, key) in keys.iter().enumerate() {
            if !key.position.is_finite() {
                return Err(GradientError::NonFinitePosition {
                    index,
                    position: key.position,
                });
            }
            if !(0.0..=1.0).contains(&key.position) {
                return Err(GradientError::PositionOutOfRange {
                    index,
                    position: key.position,
                });
            }
        }
        // Stable: keys sharing a position keep their authoring order.
        keys.sort_by(|a, b| a.position.total_cmp(&b.position));
        Ok(Self { keys })
    }

    /// Convenience constructor from `(position, color)` pairs.
    pub fn from_stops(stops: &[(f32, Color)]) -> Result<Self, GradientError> {
        Self::new(
            stops
                .iter()
                .map(|&(position, color)| GradientKey::new(position, color))
                .collect(),
        )
    }

    /// A gradient that returns `color` everywhere.
    pub fn solid(color: Color) -> Self {
        Self {
            keys: vec![GradientKey::new(0.0, color)],
        }
    }

    pub fn keys(&self) -> &[GradientKey] {
        &self.keys
    }

    /// Sample the gradient at `t`, clamped to [0, 1].
    ///
    /// Before the first key the first color is returned, after the last key
    /// the last color; in between the two bracketing keys are blended
    /// linearly.
    pub fn evaluate(&self, t: f32) -> Color {
        let t = clamp_unit(t);
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return Color::NEUTRAL;
        };
        if t <= first.position {
            return first.color;
        }
        if t >= last.position {
            return last.color;
        }

        // first.position < t < last.position, so 1 <= upper < len
        let upper = self.keys.partition_point(|k| k.position <= t);
        let a = &self.keys[upper - 1];
        let b = &self.keys[upper];
        let frac = (t - a.position) / (b.position - a.position);
        a.color.lerp(b.color, frac)
    }
}

impl TryFrom<Vec<GradientKey>> for Gradient {
    type Error = GradientError;

    fn try_from(keys: Vec<GradientKey>) -> Result<Self, Self::Error> {
        Gradient::new(keys)
    }
}

impl From<Gradient> for Vec<GradientKey> {
    fn from(gradient: Gradient) -> Self {
        gradient.keys
    }
}
