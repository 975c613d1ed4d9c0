use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// One keyframe on a scalar curve. Tangents are slopes in value-per-time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    pub time: f32,
    pub value: f32,
    #[serde(default)]
    pub in_tangent: f32,
    #[serde(default)]
    pub out_tangent: f32,
}

impl CurveKey {
    /// A flat key (both tangents zero).
    pub const fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            in_tangent: 0.0,
            out_tangent: 0.0,
        }
    }

    pub const fn with_tangents(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }
}

/// Scalar keyframe curve with cubic Hermite segments, clamped outside its
/// key range. Used for the fog density over the day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CurveKey>", into = "Vec<CurveKey>")]
pub struct Curve {
    keys: Vec<CurveKey>,
}

impl Curve {
    pub fn new(mut keys: Vec<CurveKey>) -> Result<Self, CurveError> {
        if keys.is_empty() {
            return Err(CurveError::Empty);
        }
        for (index, key) in keys.iter().enumerate() {
            let finite = key.time.is_finite()
                && key.value.is_finite()
                && key.in_tangent.is_finite()
                && key.out_tangent.is_finite();
            if !finite {
                return Err(CurveError::NonFiniteKey {
                    index,
                    time: key.time,
                    value: key.value,
                });
            }
        }
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Ok(Self { keys })
    }

    /// Build a curve of flat keys from `(time, value)` points.
    pub fn from_points(points: &[(f32, f32)]) -> Result<Self, CurveError> {
        Self::new(points.iter().map(|&(t, v)| CurveKey::new(t, v)).collect())
    }

    pub fn constant(value: f32) -> Self {
        Self {
            keys: vec![CurveKey::new(0.0, value)],
        }
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    pub fn evaluate(&self, t: f32) -> f32 {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return 0.0;
        };
        if t.is_nan() || t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        let upper = self.keys.partition_point(|k| k.time <= t);
        let a = &self.keys[upper - 1];
        let b = &self.keys[upper];
        hermite(a, b, t)
    }
}

fn hermite(a: &CurveKey, b: &CurveKey, t: f32) -> f32 {
    let dt = b.time - a.time;
    let s = (t - a.time) / dt;
    let s2 = s * s;
    let s3 = s2 * s;

    let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
    let h10 = s3 - 2.0 * s2 + s;
    let h01 = -2.0 * s3 + 3.0 * s2;
    let h11 = s3 - s2;

    h00 * a.value + h10 * dt * a.out_tangent + h01 * b.value + h11 * dt * b.in_tangent
}

impl TryFrom<Vec<CurveKey>> for Curve {
    type Error = CurveError;

    fn try_from(keys: Vec<CurveKey>) -> Result<Self, Self::Error> {
        Curve::new(keys)
    }
}

impl From<Curve> for Vec<CurveKey> {
    fn from(curve: Curve) -> Self {
        curve.keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valley() -> Curve {
        Curve::from_points(&[(0.0, 0.02), (0.5, 0.002), (1.0, 0.02)]).expect("valid curve")
    }

    #[test]
    fn test_empty_curve_rejected() {
        assert_eq!(Curve::new(Vec::new()), Err(CurveError::Empty));
    }

    #[test]
    fn test_non_finite_key_rejected() {
        let result = Curve::from_points(&[(0.0, f32::INFINITY)]);
        assert!(matches!(result, Err(CurveError::NonFiniteKey { index: 0, .. })));
    }

    #[test]
    fn test_key_values_hit_exactly() {
        let c = valley();
        assert_eq!(c.evaluate(0.0), 0.02);
        assert_eq!(c.evaluate(0.5), 0.002);
        assert_eq!(c.evaluate(1.0), 0.02);
    }

    #[test]
    fn test_clamped_outside_range() {
        let c = valley();
        assert_eq!(c.evaluate(-1.0), 0.02);
        assert_eq!(c.evaluate(2.0), 0.02);
        assert_eq!(c.evaluate(f32::NAN), 0.02);
    }

    #[test]
    fn test_flat_tangents_midpoint() {
        let c = Curve::from_points(&[(0.0, 0.0), (1.0, 1.0)]).expect("valid curve");
        assert!((c.evaluate(0.5) - 0.5).abs() < 1e-6);
        // eased: slower than linear near the ends
        assert!(c.evaluate(0.1) < 0.1);
        assert!(c.evaluate(0.9) > 0.9);
    }

    #[test]
    fn test_flat_tangents_stay_within_keys() {
        let c = valley();
        for i in 0..=200 {
            let v = c.evaluate(i as f32 / 200.0);
            assert!((0.002 - 1e-7..=0.02 + 1e-7).contains(&v), "got {v}");
        }
    }

    #[test]
    fn test_symmetric_around_midpoint() {
        let c = valley();
        for i in 0..=50 {
            let d = i as f32 / 100.0;
            let left = c.evaluate(0.5 - d);
            let right = c.evaluate(0.5 + d);
            assert!((left - right).abs() < 1e-6, "d={d}: {left} vs {right}");
        }
    }

    #[test]
    fn test_linear_tangents_reproduce_line() {
        let c = Curve::new(vec![
            CurveKey::with_tangents(0.0, 0.0, 2.0, 2.0),
            CurveKey::with_tangents(1.0, 2.0, 2.0, 2.0),
        ])
        .expect("valid curve");
        assert!((c.evaluate(0.25) - 0.5).abs() < 1e-6);
        assert!((c.evaluate(0.75) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_deserialize_defaults_tangents() {
        let c: Curve = ron::from_str("[(time: 0.0, value: 1.0), (time: 1.0, value: 3.0)]")
            .expect("should parse");
        assert_eq!(c.keys()[0].in_tangent, 0.0);
        assert_eq!(c.keys()[1].out_tangent, 0.0);
    }
}
