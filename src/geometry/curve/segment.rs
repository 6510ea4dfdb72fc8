use std::fmt;

use crate::geometry::{Position, Transform};

use super::{CubicHermiteSpline, Curve, QuinticHermiteSpline};

/// The spline family used to build a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Cubic Hermite: positions and tangents at both ends.
    Cubic,
    /// Quintic Hermite: positions, tangents and accelerations at both ends.
    Quintic,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cubic => f.write_str("Cubic Hermite"),
            Self::Quintic => f.write_str("Quintic Hermite"),
        }
    }
}

/// One spline piece of a [`Path`](crate::path::Path).
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// A cubic Hermite segment.
    Cubic(CubicHermiteSpline),
    /// A quintic Hermite segment.
    Quintic(QuinticHermiteSpline),
}

impl Segment {
    /// Returns the spline family of this segment.
    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        match self {
            Self::Cubic(_) => SegmentKind::Cubic,
            Self::Quintic(_) => SegmentKind::Quintic,
        }
    }
}

impl Curve for Segment {
    fn position(&self, t: f64) -> Position {
        match self {
            Self::Cubic(s) => s.position(t),
            Self::Quintic(s) => s.position(t),
        }
    }

    fn first_derivative(&self, t: f64) -> Position {
        match self {
            Self::Cubic(s) => s.first_derivative(t),
            Self::Quintic(s) => s.first_derivative(t),
        }
    }

    fn second_derivative(&self, t: f64) -> Position {
        match self {
            Self::Cubic(s) => s.second_derivative(t),
            Self::Quintic(s) => s.second_derivative(t),
        }
    }

    fn transform(&self, t: f64) -> Transform {
        match self {
            Self::Cubic(s) => s.transform(t),
            Self::Quintic(s) => s.transform(t),
        }
    }

    fn curvature(&self, t: f64) -> f64 {
        match self {
            Self::Cubic(s) => s.curvature(t),
            Self::Quintic(s) => s.curvature(t),
        }
    }
}

impl From<CubicHermiteSpline> for Segment {
    fn from(s: CubicHermiteSpline) -> Self {
        Self::Cubic(s)
    }
}

impl From<QuinticHermiteSpline> for Segment {
    fn from(s: QuinticHermiteSpline) -> Self {
        Self::Quintic(s)
    }
}
