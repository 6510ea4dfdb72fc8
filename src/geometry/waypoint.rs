use super::{Position, Rotation, Transform};

/// A waypoint with a signed tangent magnitude.
///
/// A velocity of exactly 0 means "use the distance to the neighbouring
/// waypoint".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransformWithVelocity {
    /// The pose of the waypoint.
    pub transform: Transform,
    /// Signed tangent magnitude; 0 selects the default.
    pub velocity: f64,
}

impl TransformWithVelocity {
    /// Creates a new `TransformWithVelocity`.
    #[must_use]
    pub fn new(transform: Transform, velocity: f64) -> Self {
        Self {
            transform,
            velocity,
        }
    }
}

/// A waypoint with a signed curvature to enforce at the endpoint.
///
/// A curvature of 0 means no curvature is enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransformWithCurvature {
    /// The pose of the waypoint.
    pub transform: Transform,
    /// Signed curvature; 0 enforces none.
    pub curvature: f64,
}

impl TransformWithCurvature {
    /// Creates a new `TransformWithCurvature`.
    #[must_use]
    pub fn new(transform: Transform, curvature: f64) -> Self {
        Self {
            transform,
            curvature,
        }
    }
}

/// A waypoint carrying both annotations.
///
/// Every other waypoint type converts into this one, with missing
/// annotations set to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransformWithVelocityAndCurvature {
    /// The pose of the waypoint.
    pub transform: Transform,
    /// Signed tangent magnitude; 0 selects the default.
    pub velocity: f64,
    /// Signed curvature; 0 enforces none.
    pub curvature: f64,
}

impl TransformWithVelocityAndCurvature {
    /// Creates a new `TransformWithVelocityAndCurvature`.
    #[must_use]
    pub fn new(transform: Transform, velocity: f64, curvature: f64) -> Self {
        Self {
            transform,
            velocity,
            curvature,
        }
    }

    /// Returns the position of the waypoint.
    #[must_use]
    pub fn position(&self) -> Position {
        self.transform.position()
    }

    /// Returns the heading of the waypoint.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.transform.rotation()
    }
}

impl From<Transform> for TransformWithVelocity {
    fn from(transform: Transform) -> Self {
        Self::new(transform, 0.0)
    }
}

impl From<Transform> for TransformWithCurvature {
    fn from(transform: Transform) -> Self {
        Self::new(transform, 0.0)
    }
}

impl From<Transform> for TransformWithVelocityAndCurvature {
    fn from(transform: Transform) -> Self {
        Self::new(transform, 0.0, 0.0)
    }
}

impl From<TransformWithVelocity> for TransformWithVelocityAndCurvature {
    fn from(w: TransformWithVelocity) -> Self {
        Self::new(w.transform, w.velocity, 0.0)
    }
}

impl From<TransformWithCurvature> for TransformWithVelocityAndCurvature {
    fn from(w: TransformWithCurvature) -> Self {
        Self::new(w.transform, 0.0, w.curvature)
    }
}

/// A transform on a curve together with the parameter `t` it was found at.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransformWithParameter {
    /// The pose on the curve.
    pub transform: Transform,
    /// The curve parameter the pose was found at.
    pub parameter: f64,
}

impl TransformWithParameter {
    /// Creates a new `TransformWithParameter`.
    #[must_use]
    pub fn new(transform: Transform, parameter: f64) -> Self {
        Self {
            transform,
            parameter,
        }
    }

    /// Returns the position of the waypoint.
    #[must_use]
    pub fn position(&self) -> Position {
        self.transform.position()
    }

    /// Returns the heading of the waypoint.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.transform.rotation()
    }
}
