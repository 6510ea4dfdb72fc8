use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use super::{Position, Rotation};

/// A 2D pose: a [`Position`] and a heading [`Rotation`].
///
/// Equality is exact: `x`, `y` and the heading in degrees must all match.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform {
    position: Position,
    rotation: Rotation,
}

impl Transform {
    /// Creates a new transform.
    #[must_use]
    pub fn new(position: Position, rotation: Rotation) -> Self {
        Self { position, rotation }
    }

    /// Creates a transform from coordinates and a heading in degrees.
    #[must_use]
    pub fn from_xy_heading(x: f64, y: f64, heading: f64) -> Self {
        Self::new(Position::new(x, y), Rotation::from_degrees(heading))
    }

    /// Creates a transform with a zero heading.
    #[must_use]
    pub fn from_position(position: Position) -> Self {
        Self::new(position, Rotation::default())
    }

    /// Returns the position of the pose.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns the heading of the pose.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Returns a copy with the position replaced.
    #[must_use]
    pub fn with_position(&self, position: Position) -> Self {
        Self::new(position, self.rotation)
    }

    /// Returns a copy with the heading replaced.
    #[must_use]
    pub fn with_rotation(&self, rotation: Rotation) -> Self {
        Self::new(self.position, rotation)
    }

    /// Rotates the heading only; the position is unchanged.
    #[must_use]
    pub fn rotate_by(&self, rotation: &Rotation) -> Self {
        Self::new(self.position, self.rotation + *rotation)
    }

    /// Expresses this transform in the frame of `origin`.
    ///
    /// `origin` becomes `(0, 0)` with heading 0.
    #[must_use]
    pub fn relative_to(&self, origin: &Self) -> Self {
        let position = (self.position - origin.position).rotate_by(&origin.rotation.inverse());
        Self::new(position, self.rotation - origin.rotation)
    }

    /// Rotates the whole pose around `pivot`.
    #[must_use]
    pub fn rotate_around(&self, pivot: &Position, rotation: &Rotation) -> Self {
        let position = (self.position - *pivot).rotate_by(rotation) + *pivot;
        Self::new(position, self.rotation + *rotation)
    }

    /// Applies `other` as a motion expressed in this transform's frame.
    #[must_use]
    pub fn transform_by(&self, other: &Self) -> Self {
        let position = self.position + other.position.rotate_by(&self.rotation);
        Self::new(position, self.rotation + other.rotation)
    }

    /// Converts the position from inches to meters.
    #[must_use]
    pub fn in_to_m(&self) -> Self {
        self.with_position(self.position.in_to_m())
    }

    /// Converts the position from meters to inches.
    #[must_use]
    pub fn m_to_in(&self) -> Self {
        self.with_position(self.position.m_to_in())
    }
}

impl Add for Transform {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.position + rhs.position, self.rotation + rhs.rotation)
    }
}

impl Sub for Transform {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.position - rhs.position, self.rotation - rhs.rotation)
    }
}

impl Mul<f64> for Transform {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.position * scalar, self.rotation * scalar)
    }
}

impl Div<f64> for Transform {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.position / scalar, self.rotation / scalar)
    }
}

impl From<Position> for Transform {
    fn from(position: Position) -> Self {
        Self::from_position(position)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Transform({}, {})", self.position, self.rotation)
    }
}
