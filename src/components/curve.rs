use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// A designer-authored scalar-to-scalar response curve.
///
/// The flight model only ever talks to curves through this trait, so any lookup
/// strategy (tables, splines, closed-form functions in tests) can be injected.
pub trait ResponseCurve: Send + Sync + Debug {
    fn evaluate(&self, x: f64) -> f64;
}

#[derive(Error, Debug, PartialEq)]
pub enum CurveError {
    #[error("Curve has no control points")]
    Empty,
    #[error("Control point {index} is not finite")]
    NonFinite { index: usize },
    #[error("Control point keys must be strictly increasing (index {index})")]
    Unsorted { index: usize },
}

/// Single key of a [`PiecewiseLinearCurve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Input value at which this key sits.
    pub time: f64,
    /// Output value at `time`.
    pub value: f64,
}

impl CurvePoint {
    pub fn new(time: f64, value: f64) -> Self {
        Self { time, value }
    }
}

impl From<(f64, f64)> for CurvePoint {
    fn from((time, value): (f64, f64)) -> Self {
        Self { time, value }
    }
}

/// How a curve fills the space between two keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveInterpolation {
    #[default]
    Linear,
    /// Hold the left key's value until the next key.
    Constant,
}

/// In-memory control-point curve.
///
/// Queries outside the authored key range clamp to the first or last key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CurveDefinition", into = "CurveDefinition")]
pub struct PiecewiseLinearCurve {
    points: Vec<CurvePoint>,
    interpolation: CurveInterpolation,
}

/// Serialized shape of a curve, validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveDefinition {
    #[serde(default)]
    pub interpolation: CurveInterpolation,
    /// `[time, value]` pairs.
    pub points: Vec<[f64; 2]>,
}

impl PiecewiseLinearCurve {
    pub fn new<P: Into<CurvePoint>>(
        points: impl IntoIterator<Item = P>,
        interpolation: CurveInterpolation,
    ) -> Result<Self, CurveError> {
        let points: Vec<CurvePoint> = points.into_iter().map(Into::into).collect();
        if points.is_empty() {
            return Err(CurveError::Empty);
        }
        for (index, point) in points.iter().enumerate() {
            if !point.time.is_finite() || !point.value.is_finite() {
                return Err(CurveError::NonFinite { index });
            }
            if index > 0 && point.time <= points[index - 1].time {
                return Err(CurveError::Unsorted { index });
            }
        }
        Ok(Self {
            points,
            interpolation,
        })
    }

    /// Linear curve through the given `(time, value)` pairs.
    pub fn linear<P: Into<CurvePoint>>(
        points: impl IntoIterator<Item = P>,
    ) -> Result<Self, CurveError> {
        Self::new(points, CurveInterpolation::Linear)
    }

    /// Curve returning `value` everywhere.
    pub fn constant(value: f64) -> Self {
        Self {
            points: vec![CurvePoint::new(0.0, value)],
            interpolation: CurveInterpolation::Linear,
        }
    }

    /// Linear curve from keys already known to be sorted and finite.
    pub(crate) fn from_sorted_keys(keys: &[(f64, f64)]) -> Self {
        debug_assert!(Self::linear(keys.iter().copied()).is_ok());
        Self {
            points: keys.iter().copied().map(CurvePoint::from).collect(),
            interpolation: CurveInterpolation::Linear,
        }
    }

    pub fn interpolation(&self) -> CurveInterpolation {
        self.interpolation
    }
}

impl ResponseCurve for PiecewiseLinearCurve {
    fn evaluate(&self, x: f64) -> f64 {
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];
        if x <= first.time || x.is_nan() {
            return first.value;
        }
        if x >= last.time {
            return last.value;
        }

        // First key strictly after x; the clamps above keep it in 1..len
        let upper = self.points.partition_point(|p| p.time <= x);
        let a = self.points[upper - 1];
        let b = self.points[upper];

        match self.interpolation {
            CurveInterpolation::Constant => a.value,
            CurveInterpolation::Linear => {
                let t = (x - a.time) / (b.time - a.time);
                a.value + (b.value - a.value) * t
            }
        }
    }
}

impl TryFrom<CurveDefinition> for PiecewiseLinearCurve {
    type Error = CurveError;

    fn try_from(def: CurveDefinition) -> Result<Self, Self::Error> {
        Self::new(
            def.points.into_iter().map(|[time, value]| (time, value)),
            def.interpolation,
        )
    }
}

impl From<PiecewiseLinearCurve> for CurveDefinition {
    fn from(curve: PiecewiseLinearCurve) -> Self {
        Self {
            interpolation: curve.interpolation,
            points: curve.points.iter().map(|p| [p.time, p.value]).collect(),
        }
    }
}
