use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::math::UnitComplex;

/// A 2D heading, stored in degrees.
///
/// Radians, sine and cosine are computed once when the rotation is built, so
/// every trig query on an instance is a field read.
#[derive(Debug, Clone, Copy)]
pub struct Rotation {
    degrees: f64,
    radians: f64,
    sin: f64,
    cos: f64,
}

impl Rotation {
    /// Creates a rotation from a heading in degrees.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        let radians = degrees.to_radians();
        let (sin, cos) = radians.sin_cos();
        Self {
            degrees,
            radians,
            sin,
            cos,
        }
    }

    /// Creates a rotation from a heading in radians.
    #[must_use]
    pub fn from_radians(radians: f64) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            degrees: radians.to_degrees(),
            radians,
            sin,
            cos,
        }
    }

    /// Heading in degrees.
    #[must_use]
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Heading in radians.
    #[must_use]
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// Returns the cached sine of the heading.
    #[must_use]
    pub fn sin(&self) -> f64 {
        self.sin
    }

    /// Returns the cached cosine of the heading.
    #[must_use]
    pub fn cos(&self) -> f64 {
        self.cos
    }

    /// Returns the tangent of the heading.
    #[must_use]
    pub fn tan(&self) -> f64 {
        self.sin / self.cos
    }

    /// `sin(x) / x` of the heading in radians, with the limit value 1 at zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn sinc(&self) -> f64 {
        if self.radians == 0.0 {
            return 1.0;
        }
        self.sin / self.radians
    }

    /// The opposite heading (`-degrees`).
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            degrees: -self.degrees,
            radians: -self.radians,
            sin: -self.sin,
            cos: self.cos,
        }
    }

    /// Composes this rotation with `other`.
    ///
    /// The composition multiplies the two unit complex numbers, so the result
    /// is always in `(-180, 180]` and stays correct across the wraparound.
    #[must_use]
    pub fn rotate_by(&self, other: &Self) -> Self {
        let composed = self.to_unit_complex() * other.to_unit_complex();
        Self::from_radians(composed.angle())
    }

    /// Maps the heading into `[-180, 180]`.
    #[must_use]
    pub fn map_heading_180(&self) -> Self {
        let angle = self.degrees % 360.0;
        if angle > 180.0 {
            Self::from_degrees(angle - 360.0)
        } else if angle < -180.0 {
            Self::from_degrees(angle + 360.0)
        } else {
            Self::from_degrees(angle)
        }
    }

    /// Maps the heading into `[0, 360)`.
    #[must_use]
    pub fn map_heading_360(&self) -> Self {
        let angle = self.map_heading_180().degrees;
        if angle < 0.0 {
            Self::from_degrees(angle + 360.0)
        } else {
            Self::from_degrees(angle)
        }
    }

    /// Returns this rotation as a unit complex number.
    #[must_use]
    pub fn to_unit_complex(&self) -> UnitComplex {
        UnitComplex::from_cos_sin_unchecked(self.cos, self.sin)
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::from_degrees(0.0)
    }
}

impl PartialEq for Rotation {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.degrees == other.degrees
    }
}

impl Add for Rotation {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.rotate_by(&rhs)
    }
}

impl Sub for Rotation {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.rotate_by(&rhs.inverse())
    }
}

impl Mul<f64> for Rotation {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::from_degrees(self.degrees * scalar)
    }
}

impl Div<f64> for Rotation {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::from_degrees(self.degrees / scalar)
    }
}

impl Neg for Rotation {
    type Output = Self;

    fn neg(self) -> Self {
        self.inverse()
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rotation({})", self.degrees)
    }
}
