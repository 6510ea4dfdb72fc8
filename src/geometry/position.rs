use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::math::units::{IN_TO_M, M_TO_IN};
use crate::math::{Point2, Vector2};

use super::Rotation;

/// A 2D `(x, y)` position on a cartesian plane.
///
/// Unit-agnostic: callers decide whether coordinates are inches, meters or
/// pixels. Also used for derivative vectors of curves.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Creates a new position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        (other.to_vector() - self.to_vector()).norm()
    }

    /// Length of this position treated as a vector from the origin.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.to_vector().norm()
    }

    /// Heading from this position towards `other`, in degrees within `(0, 360]`.
    #[must_use]
    pub fn angle_to(&self, other: &Self) -> Rotation {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        Rotation::from_degrees(180.0 + dy.atan2(dx).to_degrees())
    }

    /// Rotates this position about the origin.
    #[must_use]
    pub fn rotate_by(&self, rotation: &Rotation) -> Self {
        Self::from(rotation.to_unit_complex() * self.to_vector())
    }

    /// Converts from inches to meters.
    #[must_use]
    pub fn in_to_m(&self) -> Self {
        *self * IN_TO_M
    }

    /// Converts from meters to inches.
    #[must_use]
    pub fn m_to_in(&self) -> Self {
        *self * M_TO_IN
    }

    /// Returns this position as an nalgebra vector.
    #[must_use]
    pub fn to_vector(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }
}

impl From<Vector2> for Position {
    fn from(v: Vector2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point2> for Position {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl From<Position> for Point2 {
    fn from(p: Position) -> Self {
        Point2::new(p.x, p.y)
    }
}

impl From<Position> for Vector2 {
    fn from(p: Position) -> Self {
        p.to_vector()
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Position {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f64> for Position {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Position {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.x, self.y)
    }
}
